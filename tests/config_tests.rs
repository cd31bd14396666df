// =====================================================
// FILE: tests/config_tests.rs - CONFIG LOADING
// =====================================================

use luvy_site::core::constants::{DEFAULT_PORT, DEFAULT_WORKERS};
use luvy_site::setup::setup_toml::DEFAULT_CONFIG;
use luvy_site::{AppError, Config, Locale};
use std::io::Write;

#[test]
fn test_empty_config_uses_defaults() {
    let config = Config::from_toml_str("").expect("empty config is valid");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.server.workers, DEFAULT_WORKERS);
    assert!(config.server.assets_dir.is_none());
    assert_eq!(config.i18n.default_locale, Locale::De);
    assert_eq!(config.i18n.fallback_locale, Locale::En);
    assert!(config.routing.excluded_prefixes.contains(&"/api".to_string()));
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.log_requests);
    assert!(config.config_path().is_none());
}

#[test]
fn test_default_config_file_parses() {
    let config = Config::from_toml_str(DEFAULT_CONFIG).expect("shipped default parses");
    assert_eq!(config.i18n.default_locale, Locale::De);
    assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), DEFAULT_PORT));
}

#[test]
fn test_partial_sections_fill_missing_keys() {
    let config = Config::from_toml_str(
        r#"
[server]
port = 9000
workers = 500

[i18n]
default_locale = "en"

[routing]
excluded_prefixes = ["api/", " /media ", ""]
"#,
    )
    .expect("partial config is valid");

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "127.0.0.1");
    // Out-of-range worker counts fall back to the default
    assert_eq!(config.server.workers, DEFAULT_WORKERS);
    assert_eq!(config.i18n.default_locale, Locale::En);
    assert_eq!(config.i18n.fallback_locale, Locale::En);
    assert_eq!(config.routing.excluded_prefixes, vec!["/api", "/media"]);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_locale_is_rejected() {
    let result = Config::from_toml_str("[i18n]\ndefault_locale = \"fr\"\n");
    match result {
        Err(AppError::Validation(msg)) => {
            assert!(msg.contains("fr"), "{}", msg);
            assert!(msg.contains("de, en"), "{}", msg);
        }
        other => panic!("expected validation error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(matches!(
        Config::from_toml_str("[server]\nport = 0\n"),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        Config::from_toml_str("[server\nport = 1"),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        Config::from_toml_str("[server]\nport = \"eighty\"\n"),
        Err(AppError::Config(_))
    ));
}

#[tokio::test]
async fn test_from_file_records_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "[server]\nport = 8181\nassets_dir = \"/srv/assets\"\n\n[logging]\nlevel = \"debug\"\nlog_requests = false"
    )
    .expect("write config");

    let config = Config::from_file(file.path()).await.expect("config loads");

    assert_eq!(config.server.port, 8181);
    assert_eq!(config.server.assets_dir.as_deref(), Some("/srv/assets"));
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.log_requests);
    assert_eq!(
        config.config_path(),
        Some(file.path().to_string_lossy().as_ref())
    );
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = Config::from_file(dir.path().join("missing.toml")).await;
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[tokio::test]
async fn test_invalid_existing_config_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let broken = dir.path().join("site.toml");
    let valid = dir.path().join("other.toml");
    std::fs::write(&broken, "[i18n]\ndefault_locale = \"fr\"\n").expect("write broken");
    std::fs::write(&valid, "[server]\nport = 9000\n").expect("write valid");

    // The first existing file decides; a later valid one is not used
    let result = Config::load_from_paths(&[broken.clone(), valid]).await;

    match result {
        Err(AppError::Validation(msg)) => {
            assert!(msg.contains("i18n.default_locale"));
            assert!(msg.contains(&broken.display().to_string()));
        }
        other => panic!("expected validation error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_load_from_paths_skips_missing_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.toml");
    let valid = dir.path().join("site.toml");

    let none = Config::load_from_paths(&[missing.clone()]).await;
    assert!(matches!(none, Ok(None)));

    std::fs::write(&valid, "[server]\nport = 9000\n").expect("write valid");
    let config = Config::load_from_paths(&[missing, valid])
        .await
        .expect("loads")
        .expect("found");
    assert_eq!(config.server.port, 9000);
}

#[test]
fn test_log_level_filter() {
    let level = |text: &str| {
        Config::from_toml_str(&format!("[logging]\nlevel = \"{}\"", text))
            .expect("valid")
            .logging
            .level_filter()
    };

    assert_eq!(level("debug"), log::LevelFilter::Debug);
    assert_eq!(level("WARN"), log::LevelFilter::Warn);
    assert_eq!(level("off"), log::LevelFilter::Off);
    assert_eq!(level("chatty"), log::LevelFilter::Info);
}
