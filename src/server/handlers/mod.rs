// =====================================================
// FILE: src/server/handlers/mod.rs - REQUEST HANDLERS
// =====================================================

pub mod api;
pub mod assets;
pub mod pages;
pub mod records;

use crate::server::render::{html_response, paragraph, render_page, Page};
use crate::server::types::SiteContext;
use crate::server::url::current_locale_from_path;
use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use serde_json::json;

/// Default service for every unmatched route.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    not_found_response(&req)
}

/// JSON under `/api`, otherwise the 404 page in the locale of the path
/// (or the default locale when the path carries none).
pub fn not_found_response(req: &HttpRequest) -> HttpResponse {
    let path = req.path();
    if is_api_path(path) {
        return HttpResponse::NotFound().json(json!({
            "error": "not_found",
            "path": path,
        }));
    }

    let Some(ctx) = req.app_data::<web::Data<SiteContext>>() else {
        log::warn!("No site context registered, plain 404 for {}", path);
        return HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("404 Not Found");
    };

    let locale = current_locale_from_path(path, ctx.default_locale());
    let view = ctx.translations.view(locale);
    let body = format!(
        "<section class=\"not-found\">\n<h1>{}</h1>\n{}\n<a class=\"button\" href=\"/{}\">{}</a>\n</section>",
        view.html("error.404.title"),
        paragraph(&view.html("error.404.description")),
        locale,
        view.html("error.404.button"),
    );
    let page = Page {
        title: page_title(&view.t("meta.notFoundTitle"), &view.t("site.brand")),
        description: view.t("error.404.description"),
        body,
    };

    html_response(StatusCode::NOT_FOUND, render_page(view, path, &page))
}

pub(crate) fn page_title(title: &str, brand: &str) -> String {
    if title.is_empty() {
        brand.to_string()
    } else {
        format!("{} | {}", title, brand)
    }
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}
