// =====================================================
// FILE: src/server/routes.rs - ACTIX-WEB ROUTES
// =====================================================

use crate::server::handlers::{api, assets, pages, records};
use actix_web::{guard, web, Route};

/// Route table shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(api::health))
            .route("/content/projects", web::get().to(api::projects))
            .route("/content/projects/{slug}", web::get().to(api::project))
            .route("/content/games", web::get().to(api::games))
            .route("/content/games/{slug}", web::get().to(api::game))
            .route("/content/faq", web::get().to(api::faq))
            .route("/content/roadmap", web::get().to(api::roadmap))
            .route("/content/team", web::get().to(api::team)),
    )
    .route("/robots.txt", page().to(assets::robots_txt))
    .route("/static/{file:.*}", page().to(assets::serve_static))
    .service(
        web::scope("/{lang:[a-z]{2}}")
            .route("", page().to(pages::home))
            .route("/", page().to(pages::home))
            .route("/projects", page().to(pages::projects))
            .route("/projects/{slug}", page().to(records::project_detail))
            .route("/games", page().to(pages::games))
            .route("/games/{slug}", page().to(records::game_detail))
            .route("/faq", page().to(pages::faq))
            .route("/roadmap", page().to(pages::roadmap))
            .route("/team", page().to(pages::team))
            .route("/impressum", page().to(pages::impressum))
            .route("/datenschutz", page().to(pages::datenschutz)),
    );
}

/// GET route that also answers HEAD. Actix strips the body from HEAD
/// responses and keeps the headers.
fn page() -> Route {
    web::route().guard(guard::Any(guard::Get()).or(guard::Head()))
}
