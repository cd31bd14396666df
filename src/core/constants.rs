pub const APP_TITLE: &str = "LUVY SITE";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WORKERS: usize = 2;
pub const MAX_WORKERS: usize = 64;
pub const DEFAULT_SHUTDOWN_TIMEOUT: u64 = 5;

/// Path prefixes the locale resolver never rewrites.
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] =
    &["/api", "/static", "/assets", "/_next", "/.well-known"];
