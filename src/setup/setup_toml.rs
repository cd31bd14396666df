// =====================================================
// FILE: src/setup/setup_toml.rs - DEFAULT CONFIG & LOOKUP PATHS
// =====================================================

use crate::core::prelude::*;
use std::path::PathBuf;
use tokio::fs;

pub const CONFIG_DIR: &str = ".luvy";
pub const CONFIG_FILE: &str = "site.toml";

pub const DEFAULT_CONFIG: &str = r#"[server]
host = "127.0.0.1"
port = 8080
# Worker threads (1-64)
workers = 2
# Seconds to drain connections on shutdown
shutdown_timeout = 5
# Optional directory served under /assets (images, downloads)
# assets_dir = "public/assets"

[i18n]
# Locale used when Accept-Language names nothing supported
default_locale = "de"
# Table consulted when a key is missing in the active locale
fallback_locale = "en"

[routing]
# Requests under these prefixes (and any path containing a dot) are never
# redirected to a locale-prefixed URL
excluded_prefixes = ["/api", "/static", "/assets", "/_next", "/.well-known"]

[logging]
# Overridden by RUST_LOG when set
level = "info"
log_requests = true
"#;

pub async fn ensure_config_exists() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().map_err(AppError::Io)?;
    let base_dir = exe_path.parent().ok_or_else(|| {
        AppError::Validation("Cannot determine executable directory".to_string())
    })?;

    let config_dir = base_dir.join(CONFIG_DIR);
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .await
            .map_err(AppError::Io)?;
        log::debug!("Config directory created: {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)
            .await
            .map_err(AppError::Io)?;

        log::info!("Default config written: {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE));
            paths.push(base_dir.join(CONFIG_FILE));
            paths.push(base_dir.join("config").join(CONFIG_FILE));
        }
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE));
        paths.push(PathBuf::from("config").join(CONFIG_FILE));
    }
    paths
}
