// ===== src/server/handlers/records.rs =====
use super::{not_found_response, page_title, pages::render};
use crate::content::Highlight;
use crate::i18n::{escape_html, Locale, LocalizedView};
use crate::server::extract::PageLocale;
use crate::server::render::{external_link, paragraph, section, tag_list, Page};
use crate::server::types::SiteContext;
use crate::server::url::localized_url;
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};

pub async fn project_detail(
    req: HttpRequest,
    ctx: web::Data<SiteContext>,
    path: web::Path<(String, String)>,
    PageLocale(locale): PageLocale,
) -> ActixResult<HttpResponse> {
    let (_, slug) = path.into_inner();
    let Some(project) = ctx.content.project(&slug) else {
        log::debug!("Unknown project slug: {}", slug);
        return Ok(not_found_response(&req));
    };
    let view = ctx.translations.view(locale);

    let links = [
        project
            .url
            .as_deref()
            .map(|href| external_link(href, &view.html("projects.website"))),
        project
            .github_url
            .as_deref()
            .map(|href| external_link(href, &view.html("projects.source"))),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");

    let body = format!(
        "<article class=\"detail\">\n<a class=\"back\" href=\"{}\">{}</a>\n<h1>{}</h1>\n{}\n{}\n{}\n{}\n<p class=\"links\">{}</p>\n</article>",
        localized_url("projects", locale),
        view.html("projects.back"),
        escape_html(&project.name),
        image(project.image_url.as_deref(), &project.name),
        paragraph(&escape_html(project.long_description.get(locale))),
        section(
            "technologies",
            &view.html("projects.technologies"),
            &tag_list(&project.technologies),
        ),
        highlights(view, "projects.highlights", &project.highlights),
        links,
    );

    let page = Page {
        title: page_title(
            &view.format("meta.projectTitle", &[project.name.as_str()]),
            &view.t("site.brand"),
        ),
        description: project.short_description.get(locale).to_string(),
        body,
    };
    Ok(render(&req, view, &page))
}

pub async fn game_detail(
    req: HttpRequest,
    ctx: web::Data<SiteContext>,
    path: web::Path<(String, String)>,
    PageLocale(locale): PageLocale,
) -> ActixResult<HttpResponse> {
    let (_, slug) = path.into_inner();
    let Some(game) = ctx.content.game(&slug) else {
        log::debug!("Unknown game slug: {}", slug);
        return Ok(not_found_response(&req));
    };
    let view = ctx.translations.view(locale);

    let mut facts = vec![
        fact(&view.html("games.genre"), &escape_html(game.genre.get(locale))),
        fact(
            &view.html("games.platform"),
            &escape_html(&game.platform.join(", ")),
        ),
    ];
    if let Some(difficulty) = &game.difficulty {
        facts.push(fact(
            &view.html("games.difficulty"),
            &escape_html(difficulty.get(locale)),
        ));
    }
    if let Some(date) = &game.release_date {
        facts.push(fact(&view.html("games.releaseDate"), &escape_html(date)));
    }

    let links = [
        game.play_url
            .as_deref()
            .map(|href| external_link(href, &view.html("games.play"))),
        game.trailer_url
            .as_deref()
            .map(|href| external_link(href, &view.html("games.trailer"))),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");

    let body = format!(
        "<article class=\"detail\">\n<a class=\"back\" href=\"{}\">{}</a>\n<h1>{}</h1>\n{}\n<dl class=\"facts\">{}</dl>\n{}\n{}\n{}\n<p class=\"links\">{}</p>\n</article>",
        localized_url("games", locale),
        view.html("games.back"),
        escape_html(&game.name),
        image(game.image_url.as_deref(), &game.name),
        facts.concat(),
        paragraph(&escape_html(game.long_description.get(locale))),
        section(
            "technologies",
            &view.html("games.technologies"),
            &tag_list(&game.technologies),
        ),
        highlights(view, "games.highlights", &game.highlights),
        links,
    );

    let page = Page {
        title: page_title(
            &view.format("meta.gameTitle", &[game.name.as_str()]),
            &view.t("site.brand"),
        ),
        description: game.short_description.get(locale).to_string(),
        body,
    };
    Ok(render(&req, view, &page))
}

fn fact(label_html: &str, value_html: &str) -> String {
    format!("<dt>{}</dt><dd>{}</dd>", label_html, value_html)
}

fn image(src: Option<&str>, alt: &str) -> String {
    src.map(|src| {
        format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            escape_html(src),
            escape_html(alt)
        )
    })
    .unwrap_or_default()
}

fn highlights(view: LocalizedView<'_>, heading_key: &str, items: &[Highlight]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let locale: Locale = view.locale();
    let list: String = items
        .iter()
        .map(|h| {
            format!(
                "<li><strong>{}</strong> {}</li>",
                escape_html(h.title.get(locale)),
                escape_html(h.body.get(locale))
            )
        })
        .collect();
    section("highlights", &view.html(heading_key), &format!("<ul>{}</ul>", list))
}
