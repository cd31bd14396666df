// src/core/config.rs
use crate::core::constants::{
    DEFAULT_EXCLUDED_PREFIXES, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SHUTDOWN_TIMEOUT,
    DEFAULT_WORKERS, MAX_WORKERS,
};
use crate::core::prelude::*;
use crate::i18n::FALLBACK_LANGUAGE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Serialize, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    server: Option<ServerConfigToml>,
    #[serde(default)]
    i18n: Option<I18nConfigToml>,
    #[serde(default)]
    routing: Option<RoutingConfigToml>,
    #[serde(default)]
    logging: Option<LoggingConfigToml>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ServerConfigToml {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_workers")]
    workers: usize,
    #[serde(default = "default_shutdown_timeout")]
    shutdown_timeout: u64,
    #[serde(default)]
    assets_dir: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct I18nConfigToml {
    #[serde(default = "default_locale")]
    default_locale: String,
    #[serde(default = "default_fallback_locale")]
    fallback_locale: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct RoutingConfigToml {
    #[serde(default = "default_excluded_prefixes")]
    excluded_prefixes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct LoggingConfigToml {
    #[serde(default = "default_log_level")]
    level: String,
    #[serde(default = "default_log_requests")]
    log_requests: bool,
}

// Server Defaults
fn default_host() -> String {
    DEFAULT_HOST.into()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_workers() -> usize {
    DEFAULT_WORKERS
}
fn default_shutdown_timeout() -> u64 {
    DEFAULT_SHUTDOWN_TIMEOUT
}

// i18n Defaults
fn default_locale() -> String {
    Locale::default().as_str().into()
}
fn default_fallback_locale() -> String {
    FALLBACK_LANGUAGE.as_str().into()
}

// Routing Defaults
fn default_excluded_prefixes() -> Vec<String> {
    DEFAULT_EXCLUDED_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect()
}

// Logging Defaults
fn default_log_level() -> String {
    "info".into()
}
fn default_log_requests() -> bool {
    true
}

// Main Configuration Structures
#[derive(Debug, Clone, Default)]
pub struct Config {
    config_path: Option<String>,
    pub server: ServerConfig,
    pub i18n: I18nConfig,
    pub routing: RoutingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub shutdown_timeout: u64,
    pub assets_dir: Option<String>,
}

#[derive(Debug, Clone)]
pub struct I18nConfig {
    pub default_locale: Locale,
    pub fallback_locale: Locale,
}

#[derive(Debug, Clone)]
pub struct RoutingConfig {
    pub excluded_prefixes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub log_requests: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            workers: DEFAULT_WORKERS,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            assets_dir: None,
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            fallback_locale: FALLBACK_LANGUAGE,
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            excluded_prefixes: default_excluded_prefixes(),
        }
    }
}

impl LoggingConfig {
    /// `level` as a filter; unknown names fall back to `info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level
            .trim()
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_requests: true,
        }
    }
}

impl Config {
    pub async fn load() -> Result<Self> {
        Self::load_with_messages(true).await
    }

    pub async fn load_with_messages(show_messages: bool) -> Result<Self> {
        if let Some(config) =
            Self::load_from_paths(&crate::setup::setup_toml::get_config_paths()).await?
        {
            if show_messages {
                config.log_startup();
            }
            return Ok(config);
        }

        // Create new config
        let path = crate::setup::setup_toml::ensure_config_exists().await?;
        let config = Self::from_file(&path).await?;

        if show_messages {
            log::info!("New config: {}", path.display());
            config.log_startup();
        }
        Ok(config)
    }

    /// Loads the first candidate that exists. That file is authoritative:
    /// if it fails to parse or validate, the error is returned instead of
    /// trying later candidates. `Ok(None)` when no candidate exists.
    pub async fn load_from_paths(paths: &[PathBuf]) -> Result<Option<Self>> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Self::from_file(path).await.map(Some).map_err(|e| match e {
                AppError::Validation(msg) => {
                    AppError::Validation(format!("{}: {}", path.display(), msg))
                }
                AppError::Config(msg) => AppError::Config(format!("{}: {}", path.display(), msg)),
                other => other,
            }),
            None => Ok(None),
        }
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;

        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.as_ref().to_string_lossy().into_owned());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        let server = file
            .server
            .map_or_else(ServerConfig::default, |s| ServerConfig {
                host: s.host,
                port: s.port,
                workers: Self::clamp(s.workers, 1, MAX_WORKERS, DEFAULT_WORKERS),
                shutdown_timeout: s.shutdown_timeout,
                assets_dir: s.assets_dir.filter(|dir| !dir.trim().is_empty()),
            });

        if server.port == 0 {
            return Err(AppError::Validation("server.port must not be 0".into()));
        }

        let i18n = match file.i18n {
            Some(i) => I18nConfig {
                default_locale: Self::parse_locale("i18n.default_locale", &i.default_locale)?,
                fallback_locale: Self::parse_locale("i18n.fallback_locale", &i.fallback_locale)?,
            },
            None => I18nConfig::default(),
        };

        let routing = file
            .routing
            .map_or_else(RoutingConfig::default, |r| RoutingConfig {
                excluded_prefixes: r
                    .excluded_prefixes
                    .iter()
                    .filter_map(|p| Self::normalize_prefix(p))
                    .collect(),
            });

        let logging = file
            .logging
            .map_or_else(LoggingConfig::default, |l| LoggingConfig {
                level: l.level,
                log_requests: l.log_requests,
            });

        Ok(Self {
            config_path: None,
            server,
            i18n,
            routing,
            logging,
        })
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }

    // Helper methods
    fn clamp(value: usize, min: usize, max: usize, default: usize) -> usize {
        if value < min || value > max {
            default
        } else {
            value
        }
    }

    fn parse_locale(field: &str, value: &str) -> Result<Locale> {
        Locale::from_code(value.trim()).ok_or_else(|| {
            AppError::Validation(format!(
                "{} '{}' is not a supported locale ({})",
                field,
                value,
                Locale::codes().join(", ")
            ))
        })
    }

    fn normalize_prefix(prefix: &str) -> Option<String> {
        let trimmed = prefix.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.starts_with('/') {
            Some(trimmed.to_string())
        } else {
            Some(format!("/{}", trimmed))
        }
    }

    pub fn log_startup(&self) {
        log::info!(
            "{} v{}",
            crate::core::constants::APP_TITLE,
            crate::core::constants::VERSION
        );
        log::info!(
            "Server Config: {}:{}, Workers: {}, Locales: default={} fallback={}",
            self.server.host,
            self.server.port,
            self.server.workers,
            self.i18n.default_locale,
            self.i18n.fallback_locale
        );
    }
}
