// ===== src/server/handlers/assets.rs =====
use super::not_found_response;
use actix_web::{
    http::header::{CACHE_CONTROL, ETAG, IF_NONE_MATCH},
    web, HttpRequest, HttpResponse, Result as ActixResult,
};
use rust_embed::RustEmbed;
use sha2::{Digest, Sha256};

#[derive(RustEmbed)]
#[folder = "src/server/static/"]
pub struct StaticFiles;

pub async fn serve_static(
    req: HttpRequest,
    file: web::Path<String>,
) -> ActixResult<HttpResponse> {
    Ok(embedded_response(&req, &file))
}

pub async fn robots_txt(req: HttpRequest) -> ActixResult<HttpResponse> {
    Ok(embedded_response(&req, "robots.txt"))
}

/// Quoted SHA-256 of the content, used as a strong ETag.
pub fn etag_for(data: &[u8]) -> String {
    format!("\"{:x}\"", Sha256::digest(data))
}

fn embedded_response(req: &HttpRequest, name: &str) -> HttpResponse {
    let Some(file) = StaticFiles::get(name) else {
        return not_found_response(req);
    };
    let etag = etag_for(file.data.as_ref());

    if matches_etag(req, &etag) {
        return HttpResponse::NotModified()
            .insert_header((ETAG, etag))
            .finish();
    }

    HttpResponse::Ok()
        .content_type(content_type_for(name))
        .insert_header((ETAG, etag))
        .insert_header((CACHE_CONTROL, "public, max-age=3600"))
        .body(file.data.into_owned())
}

fn matches_etag(req: &HttpRequest, etag: &str) -> bool {
    req.headers()
        .get(IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|value| {
            value
                .split(',')
                .map(str::trim)
                .any(|candidate| candidate == "*" || candidate.trim_start_matches("W/") == etag)
        })
}

fn content_type_for(name: &str) -> &'static str {
    match name.rsplit('.').next().unwrap_or_default() {
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "svg" => "image/svg+xml",
        "txt" => "text/plain; charset=utf-8",
        "json" => "application/json",
        "png" => "image/png",
        "ico" => "image/x-icon",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    }
}
