// src/i18n/mod.rs - EMBEDDED TRANSLATION TABLES
pub mod locale;
pub mod message;

pub use locale::{locale_from_path, negotiate, Locale};
pub use message::{escape_html, format_params, interpolate, Fragment, Message, Segment};

use crate::core::error::Result;
use rust_embed::RustEmbed;
use serde_json::Value;
use std::collections::HashMap;

pub const FALLBACK_LANGUAGE: Locale = Locale::En;

#[derive(Debug)]
pub enum TranslationError {
    MissingTable(String),
    LoadError(String),
}

impl std::fmt::Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTable(lang) => write!(f, "No translation table for: {}", lang),
            Self::LoadError(msg) => write!(f, "Load error: {}", msg),
        }
    }
}

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
pub struct Langs;

type Table = HashMap<String, String>;

/// One flattened table per locale, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct Translations {
    tables: HashMap<Locale, Table>,
    fallback: Locale,
}

impl Translations {
    /// Loads every supported locale from the embedded `langs/` folder.
    pub fn load(fallback: Locale) -> Result<Self> {
        let mut tables = HashMap::new();
        for locale in Locale::ALL {
            tables.insert(locale, Self::load_table(locale)?);
        }

        let translations = Self { tables, fallback };
        translations.report_missing_keys();
        Ok(translations)
    }

    /// Builds tables from JSON documents already in memory.
    pub fn from_json(documents: &[(Locale, &str)], fallback: Locale) -> Result<Self> {
        let mut tables = HashMap::new();
        for (locale, json) in documents {
            tables.insert(*locale, Self::parse_table(locale.as_str(), json)?);
        }
        Ok(Self { tables, fallback })
    }

    fn load_table(locale: Locale) -> Result<Table> {
        let filename = format!("{}.json", locale.as_str());
        let content = Langs::get(&filename)
            .ok_or_else(|| TranslationError::MissingTable(filename.clone()))?;

        let content_str = std::str::from_utf8(content.data.as_ref())
            .map_err(|e| TranslationError::LoadError(format!("{}: {}", filename, e)))?;

        Self::parse_table(&filename, content_str)
    }

    fn parse_table(name: &str, json: &str) -> Result<Table> {
        let raw: Value = serde_json::from_str(json)
            .map_err(|e| TranslationError::LoadError(format!("{}: {}", name, e)))?;

        let mut table = HashMap::new();
        flatten_into(&mut table, "", &raw);
        log::debug!("Loaded {} translation keys from {}", table.len(), name);
        Ok(table)
    }

    fn report_missing_keys(&self) {
        for locale in Locale::ALL {
            let missing = self.missing_keys(locale);
            if !missing.is_empty() {
                log::warn!(
                    "{} keys missing in '{}' (served from '{}'): {}",
                    missing.len(),
                    locale,
                    self.fallback,
                    missing.join(", ")
                );
            }
        }
    }

    pub fn fallback(&self) -> Locale {
        self.fallback
    }

    /// Raw string for `key`: active locale first, then the fallback table.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.get_in(locale, key).or_else(|| {
            if locale == self.fallback {
                None
            } else {
                self.get_in(self.fallback, key)
            }
        })
    }

    fn get_in(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Renders `key` as text; a key missing from both tables renders empty.
    pub fn t(&self, locale: Locale, key: &str) -> String {
        match self.lookup(locale, key) {
            Some(text) => text.to_string(),
            None => {
                log::debug!("Missing translation: {} ({})", key, locale);
                String::new()
            }
        }
    }

    pub fn format(&self, locale: Locale, key: &str, params: &[&str]) -> String {
        format_params(&self.t(locale, key), params)
    }

    /// Resolves `key` and, when fragments are given, splits it on `<N>...</N>`.
    pub fn message<'f>(
        &self,
        locale: Locale,
        key: &str,
        fragments: &'f [Fragment],
    ) -> Option<Message<'f>> {
        let text = self.lookup(locale, key)?;
        if fragments.is_empty() {
            Some(Message::Text(text.to_string()))
        } else {
            Some(Message::Segments(interpolate(text, fragments)))
        }
    }

    pub fn has_key(&self, locale: Locale, key: &str) -> bool {
        self.get_in(locale, key).is_some()
    }

    /// Keys present in the fallback table but absent for `locale`, sorted.
    pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
        let (Some(reference), Some(table)) =
            (self.tables.get(&self.fallback), self.tables.get(&locale))
        else {
            return Vec::new();
        };
        let mut missing: Vec<String> = reference
            .keys()
            .filter(|key| !table.contains_key(*key))
            .cloned()
            .collect();
        missing.sort();
        missing
    }

    pub fn view(&self, locale: Locale) -> LocalizedView<'_> {
        LocalizedView {
            translations: self,
            locale,
        }
    }
}

fn flatten_into(table: &mut Table, prefix: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(table, &path, child);
            }
        }
        Value::String(text) if !prefix.is_empty() => {
            table.insert(prefix.to_string(), text.clone());
        }
        _ => {}
    }
}

/// Translations bound to one request's locale, handed to renderers.
#[derive(Clone, Copy)]
pub struct LocalizedView<'a> {
    translations: &'a Translations,
    locale: Locale,
}

impl<'a> LocalizedView<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> String {
        self.translations.t(self.locale, key)
    }

    /// HTML-escaped text for `key`.
    pub fn html(&self, key: &str) -> String {
        escape_html(&self.t(key))
    }

    /// HTML with `<N>...</N>` spans replaced by rendered fragments.
    pub fn rich(&self, key: &str, fragments: &[Fragment]) -> String {
        self.translations
            .message(self.locale, key, fragments)
            .map(|message| message.to_html())
            .unwrap_or_default()
    }

    pub fn format(&self, key: &str, params: &[&str]) -> String {
        self.translations.format(self.locale, key, params)
    }
}
