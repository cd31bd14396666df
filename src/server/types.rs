// src/server/types.rs
use crate::content::ContentStore;
use crate::core::prelude::*;
use crate::server::resolver::LocaleResolver;
use std::sync::Arc;

/// Everything a request needs, built once at startup and shared read-only
/// across workers.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub translations: Arc<Translations>,
    pub content: Arc<ContentStore>,
    pub resolver: Arc<LocaleResolver>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl SiteContext {
    pub fn new(translations: Translations, content: ContentStore, resolver: LocaleResolver) -> Self {
        Self {
            translations: Arc::new(translations),
            content: Arc::new(content),
            resolver: Arc::new(resolver),
            started_at: chrono::Utc::now(),
        }
    }

    /// Loads the embedded translations and content for `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let translations = Translations::load(config.i18n.fallback_locale)?;
        let content = ContentStore::load()?;
        Ok(Self::new(
            translations,
            content,
            LocaleResolver::from_config(config),
        ))
    }

    pub fn default_locale(&self) -> Locale {
        self.resolver.default_locale()
    }
}
