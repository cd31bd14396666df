// src/i18n/locale.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported site languages. The set is closed: anything else negotiates
/// to the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    De,
    En,
}

crate::impl_default!(Locale, Locale::De);

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::De, Locale::En];

    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }

    /// Exact, case-sensitive match on a two-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == code)
    }

    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.as_str()).collect()
    }

    /// The locale the language toggle switches to.
    pub const fn other(self) -> Self {
        match self {
            Locale::De => Locale::En,
            Locale::En => Locale::De,
        }
    }

    pub fn toggle_label(self) -> String {
        self.other().as_str().to_uppercase()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unsupported locale: {}", s))
    }
}

/// Locale named by the first path segment, if it is a supported one.
/// `/de` and `/de/...` match, `/dex` does not.
pub fn locale_from_path(path: &str) -> Option<Locale> {
    let first = path.strip_prefix('/')?.split('/').next()?;
    Locale::from_code(first)
}

/// Picks the first supported language from an `Accept-Language` value.
///
/// Entries are ordered by their `q` weight, ties keep header order. Entries
/// with `q=0` or an unreadable weight are dropped. Only the first two
/// characters of each tag are compared, case-insensitively.
pub fn negotiate(accept_language: &str) -> Option<Locale> {
    let mut ranked: Vec<(usize, f32, &str)> = accept_language
        .split(',')
        .enumerate()
        .filter_map(|(position, part)| {
            let mut components = part.split(';');
            let tag = components.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let weight = match components.find_map(|c| c.trim().strip_prefix("q=")) {
                Some(raw) => raw.trim().parse::<f32>().ok()?,
                None => 1.0,
            };
            if weight <= 0.0 || !weight.is_finite() {
                return None;
            }
            Some((position, weight, tag))
        })
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    ranked.into_iter().find_map(|(_, _, tag)| {
        let prefix = tag.get(..2)?.to_ascii_lowercase();
        Locale::from_code(&prefix)
    })
}
