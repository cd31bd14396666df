// =====================================================
// FILE: src/server/mod.rs - ACTIX-WEB SERVER MODULE
// =====================================================

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod resolver;
pub mod routes;
pub mod types;
pub mod url;

pub use resolver::{LocaleResolver, Resolution};
pub use types::SiteContext;

use crate::core::prelude::*;
use actix_files::Files;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header,
    middleware::{Condition, DefaultHeaders, Logger},
    web, App, HttpServer,
};
use std::sync::Arc;

/// Builds the application with every route and middleware. Used by `run`
/// and by the integration tests.
pub fn build_app(
    ctx: web::Data<SiteContext>,
    config: &Config,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let resolver = Arc::clone(&ctx.resolver);
    let assets_dir = config.server.assets_dir.clone();

    App::new()
        .app_data(ctx)
        // Outermost last: requests are logged before the locale redirect runs
        .wrap(middleware::LocaleRedirect::new(resolver))
        .wrap(DefaultHeaders::new().add((header::X_CONTENT_TYPE_OPTIONS, "nosniff")))
        .wrap(Condition::new(
            config.logging.log_requests,
            Logger::new("%r %s %b %Dms"),
        ))
        .configure(routes::configure)
        .configure(|cfg| {
            if let Some(dir) = assets_dir {
                cfg.service(Files::new("/assets", dir).use_last_modified(true));
            }
        })
        .default_service(web::to(handlers::not_found))
}

pub async fn run(config: Config) -> Result<()> {
    let ctx = web::Data::new(SiteContext::from_config(&config)?);
    let (host, port) = config.bind_address();
    let workers = config.server.workers;
    let shutdown_timeout = config.server.shutdown_timeout;

    if let Some(dir) = &config.server.assets_dir {
        log::info!("Serving /assets from {}", dir);
    }
    log::info!(
        "Starting HTTP server on http://{}:{} ({} workers, default locale {})",
        host,
        port,
        workers,
        ctx.default_locale()
    );

    HttpServer::new(move || build_app(ctx.clone(), &config))
        .workers(workers)
        .shutdown_timeout(shutdown_timeout)
        .bind((host.as_str(), port))
        .map_err(|e| AppError::Config(format!("HTTP bind {}:{} failed: {}", host, port, e)))?
        .run()
        .await?;

    log::info!("Server stopped");
    Ok(())
}
