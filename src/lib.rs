#[macro_export]
macro_rules! impl_default {
    ($type:ty, $body:expr) => {
        impl Default for $type {
            fn default() -> Self {
                $body
            }
        }
    };
}

// Module definitions
pub mod content;
pub mod core;
pub mod i18n;
pub mod server;
pub mod setup;

// Essential re-exports
pub use core::config::Config;
pub use core::error::{AppError, Result};
pub use i18n::{Locale, Translations};
pub use server::{build_app, SiteContext};

// Main entry point
pub async fn run() -> Result<()> {
    let config = Config::load().await?;
    server::run(config).await
}

// Convenience functions
pub async fn run_with_config(config: Config) -> Result<()> {
    server::run(config).await
}

pub async fn load_config() -> Result<Config> {
    Config::load().await
}
