// ===== src/server/handlers/api.rs =====
use crate::core::constants::{SERVICE_NAME, VERSION};
use crate::i18n::Locale;
use crate::server::types::SiteContext;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde_json::json;

/// Health Check Endpoint
pub async fn health(ctx: web::Data<SiteContext>) -> ActixResult<HttpResponse> {
    let now = chrono::Utc::now();
    let uptime = (now - ctx.started_at).num_seconds().max(0);

    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": VERSION,
        "timestamp": now.to_rfc3339(),
        "uptime_seconds": uptime,
        "default_locale": ctx.default_locale(),
        "locales": Locale::codes(),
    })))
}

pub async fn projects(ctx: web::Data<SiteContext>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ctx.content.projects()))
}

pub async fn project(
    ctx: web::Data<SiteContext>,
    slug: web::Path<String>,
) -> ActixResult<HttpResponse> {
    Ok(match ctx.content.project(&slug) {
        Some(project) => HttpResponse::Ok().json(project),
        None => record_not_found("project", &slug),
    })
}

pub async fn games(ctx: web::Data<SiteContext>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ctx.content.games()))
}

pub async fn game(
    ctx: web::Data<SiteContext>,
    slug: web::Path<String>,
) -> ActixResult<HttpResponse> {
    Ok(match ctx.content.game(&slug) {
        Some(game) => HttpResponse::Ok().json(game),
        None => record_not_found("game", &slug),
    })
}

pub async fn faq(ctx: web::Data<SiteContext>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ctx.content.faq()))
}

pub async fn roadmap(ctx: web::Data<SiteContext>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ctx.content.roadmap()))
}

pub async fn team(ctx: web::Data<SiteContext>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ctx.content.team()))
}

fn record_not_found(kind: &str, slug: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "error": "not_found",
        "kind": kind,
        "slug": slug,
    }))
}
