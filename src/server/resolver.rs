// =====================================================
// FILE: src/server/resolver.rs - LOCALE RESOLUTION
// =====================================================

use crate::core::config::Config;
use crate::core::constants::DEFAULT_EXCLUDED_PREFIXES;
use crate::i18n::{locale_from_path, negotiate, Locale};
use crate::server::url::prefix_locale;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Asset or API path; never rewritten.
    Excluded,
    /// Path already carries a supported locale.
    Localized(Locale),
    Redirect { locale: Locale, location: String },
}

#[derive(Debug, Clone)]
pub struct LocaleResolver {
    default_locale: Locale,
    excluded_prefixes: Vec<String>,
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(
            Locale::default(),
            DEFAULT_EXCLUDED_PREFIXES.iter().map(|p| p.to_string()).collect(),
        )
    }
}

impl LocaleResolver {
    pub fn new(default_locale: Locale, excluded_prefixes: Vec<String>) -> Self {
        Self {
            default_locale,
            excluded_prefixes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.i18n.default_locale,
            config.routing.excluded_prefixes.clone(),
        )
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    pub fn resolve(&self, path: &str, accept_language: Option<&str>) -> Resolution {
        if self.is_excluded(path) {
            return Resolution::Excluded;
        }

        if let Some(locale) = locale_from_path(path) {
            return Resolution::Localized(locale);
        }

        let locale = self.negotiate(accept_language);
        Resolution::Redirect {
            locale,
            location: prefix_locale(locale, path),
        }
    }

    /// Paths with a dot (files) or under a reserved prefix. A prefix covers
    /// whole segments: `/api` excludes `/api/x` but not `/apiary`.
    pub fn is_excluded(&self, path: &str) -> bool {
        path.contains('.')
            || self.excluded_prefixes.iter().any(|prefix| {
                path.strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            })
    }

    /// Locale for an `Accept-Language` value; anything unusable gives the default.
    pub fn negotiate(&self, accept_language: Option<&str>) -> Locale {
        accept_language
            .and_then(negotiate)
            .unwrap_or(self.default_locale)
    }
}
