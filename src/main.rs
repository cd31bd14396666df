// src/main.rs
use luvy_site::{Config, Result};

#[actix_web::main]
async fn main() -> Result<()> {
    // Logger before config, so config warnings are not lost. The filter
    // admits everything; `max_level` does the gating until config is known.
    let rust_log = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .format_timestamp_millis()
        .init();
    if !rust_log {
        log::set_max_level(log::LevelFilter::Info);
    }

    let config = Config::load_with_messages(false).await?;
    // RUST_LOG still wins over `logging.level`
    if !rust_log {
        log::set_max_level(config.logging.level_filter());
    }

    if let Some(path) = config.config_path() {
        log::info!("Config loaded: {}", path);
    }
    config.log_startup();
    luvy_site::run_with_config(config).await
}
