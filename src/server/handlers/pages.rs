// ===== src/server/handlers/pages.rs =====
use super::page_title;
use crate::content::{Game, Project};
use crate::i18n::{escape_html, Fragment, LocalizedView};
use crate::server::extract::PageLocale;
use crate::server::render::{
    external_link, html_response, paragraph, render_page, section, tag_list, Page,
};
use crate::server::types::SiteContext;
use crate::server::url::{localized_hash_url, localized_url};
use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, Result as ActixResult};

const CONTACT_EMAIL: &str = "aurav.tech@gmail.com";

pub async fn home(
    req: HttpRequest,
    ctx: web::Data<SiteContext>,
    PageLocale(locale): PageLocale,
) -> ActixResult<HttpResponse> {
    let view = ctx.translations.view(locale);

    let cta = view.rich(
        "hero.cta",
        &[
            Fragment::link(localized_hash_url("projects", locale)),
            Fragment::link(localized_hash_url("contact", locale)),
        ],
    );
    let hero = format!(
        "<section class=\"hero\">\n<p class=\"greeting\">{}</p>\n<h1>{}</h1>\n{}\n{}\n</section>",
        view.html("hero.greeting"),
        view.html("hero.title"),
        paragraph(&view.html("hero.subtitle")),
        paragraph(&cta),
    );

    let about = section("about", &view.html("about.title"), &paragraph(&view.html("about.body")));

    let projects = section_with_id(
        "projects",
        &view.html("projects.title"),
        &cards(ctx.content.projects().iter().map(|p| project_card(view, p))),
    );
    let games = section_with_id(
        "games",
        &view.html("games.title"),
        &cards(ctx.content.games().iter().map(|g| game_card(view, g))),
    );

    let body = [hero, about, projects, games, contact(view)].join("\n");
    let page = Page {
        title: view.t("site.title"),
        description: view.t("site.description"),
        body,
    };
    Ok(render(&req, view, &page))
}

pub async fn projects(
    req: HttpRequest,
    ctx: web::Data<SiteContext>,
    PageLocale(locale): PageLocale,
) -> ActixResult<HttpResponse> {
    let view = ctx.translations.view(locale);
    let body = listing(
        &view.html("projects.title"),
        &view.html("projects.intro"),
        &cards(ctx.content.projects().iter().map(|p| project_card(view, p))),
    );
    let page = Page {
        title: page_title(&view.t("projects.title"), &view.t("site.brand")),
        description: view.t("projects.intro"),
        body,
    };
    Ok(render(&req, view, &page))
}

pub async fn games(
    req: HttpRequest,
    ctx: web::Data<SiteContext>,
    PageLocale(locale): PageLocale,
) -> ActixResult<HttpResponse> {
    let view = ctx.translations.view(locale);
    let body = listing(
        &view.html("games.title"),
        &view.html("games.intro"),
        &cards(ctx.content.games().iter().map(|g| game_card(view, g))),
    );
    let page = Page {
        title: page_title(&view.t("games.title"), &view.t("site.brand")),
        description: view.t("games.intro"),
        body,
    };
    Ok(render(&req, view, &page))
}

pub async fn faq(
    req: HttpRequest,
    ctx: web::Data<SiteContext>,
    PageLocale(locale): PageLocale,
) -> ActixResult<HttpResponse> {
    let view = ctx.translations.view(locale);
    let entries: String = ctx
        .content
        .faq()
        .iter()
        .map(|entry| {
            format!(
                "<details>\n<summary>{}</summary>\n<p>{}</p>\n</details>\n",
                escape_html(entry.question.get(locale)),
                escape_html(entry.answer.get(locale)),
            )
        })
        .collect();

    let page = Page {
        title: page_title(&view.t("faq.title"), &view.t("site.brand")),
        description: view.t("faq.intro"),
        body: listing(&view.html("faq.title"), &view.html("faq.intro"), &entries),
    };
    Ok(render(&req, view, &page))
}

pub async fn roadmap(
    req: HttpRequest,
    ctx: web::Data<SiteContext>,
    PageLocale(locale): PageLocale,
) -> ActixResult<HttpResponse> {
    let view = ctx.translations.view(locale);
    let items: String = ctx
        .content
        .roadmap()
        .iter()
        .map(|item| {
            format!(
                "<li class=\"roadmap-item {}\">\n<span class=\"status\">{}</span> <time>{}</time>\n<h3>{}</h3>\n<p>{}</p>\n</li>\n",
                item.status.css_class(),
                view.html(item.status.label_key()),
                escape_html(&item.date),
                escape_html(item.title.get(locale)),
                escape_html(item.description.get(locale)),
            )
        })
        .collect();

    let page = Page {
        title: page_title(&view.t("roadmap.title"), &view.t("site.brand")),
        description: view.t("roadmap.intro"),
        body: listing(
            &view.html("roadmap.title"),
            &view.html("roadmap.intro"),
            &format!("<ol class=\"roadmap\">\n{}</ol>", items),
        ),
    };
    Ok(render(&req, view, &page))
}

pub async fn team(
    req: HttpRequest,
    ctx: web::Data<SiteContext>,
    PageLocale(locale): PageLocale,
) -> ActixResult<HttpResponse> {
    let view = ctx.translations.view(locale);
    let members = cards(ctx.content.team().iter().map(|member| {
        let links: String = [
            ("GitHub", &member.github),
            ("LinkedIn", &member.linkedin),
            ("Twitter", &member.twitter),
        ]
        .iter()
        .filter_map(|(label, href)| {
            href.as_deref().map(|href| external_link(href, label))
        })
        .collect::<Vec<_>>()
        .join(" ");

        format!(
            "<article class=\"card member\" id=\"{}\">\n<h3>{}</h3>\n<p class=\"role\">{}</p>\n<p>{}</p>\n<p class=\"links\">{}</p>\n</article>",
            escape_html(&member.id),
            escape_html(&member.name),
            escape_html(member.role.get(locale)),
            escape_html(member.bio.get(locale)),
            links,
        )
    }));

    let page = Page {
        title: page_title(&view.t("team.title"), &view.t("site.brand")),
        description: view.t("team.intro"),
        body: listing(&view.html("team.title"), &view.html("team.intro"), &members),
    };
    Ok(render(&req, view, &page))
}

pub async fn impressum(
    req: HttpRequest,
    ctx: web::Data<SiteContext>,
    PageLocale(locale): PageLocale,
) -> ActixResult<HttpResponse> {
    let view = ctx.translations.view(locale);
    let mail = [Fragment::link(format!("mailto:{}", CONTACT_EMAIL))];

    let body = format!(
        "<article class=\"legal\">\n<h1>{}</h1>\n<h2>{}</h2>\n{}\n{}\n{}\n{}\n</article>",
        view.html("legal.impressum.title"),
        view.html("legal.impressum.provider"),
        paragraph(&view.html("legal.impressum.name")),
        paragraph(&view.rich("legal.impressum.contact", &mail)),
        paragraph(&view.html("legal.impressum.responsible")),
        section(
            "disclaimer",
            &view.html("legal.impressum.disclaimerTitle"),
            &paragraph(&view.html("legal.impressum.disclaimer")),
        ),
    );

    let page = Page {
        title: page_title(&view.t("legal.impressum.title"), &view.t("site.brand")),
        description: view.t("legal.impressum.provider"),
        body,
    };
    Ok(render(&req, view, &page))
}

pub async fn datenschutz(
    req: HttpRequest,
    ctx: web::Data<SiteContext>,
    PageLocale(locale): PageLocale,
) -> ActixResult<HttpResponse> {
    let view = ctx.translations.view(locale);
    let mail = [Fragment::link(format!("mailto:{}", CONTACT_EMAIL))];

    let body = format!(
        "<article class=\"legal\">\n<h1>{}</h1>\n{}\n{}\n{}\n{}\n</article>",
        view.html("legal.privacy.title"),
        paragraph(&view.html("legal.privacy.intro")),
        section(
            "logs",
            &view.html("legal.privacy.logsTitle"),
            &paragraph(&view.html("legal.privacy.logs")),
        ),
        section(
            "cookies",
            &view.html("legal.privacy.cookiesTitle"),
            &paragraph(&view.html("legal.privacy.cookies")),
        ),
        section(
            "rights",
            &view.html("legal.privacy.rightsTitle"),
            &paragraph(&view.rich("legal.privacy.rights", &mail)),
        ),
    );

    let page = Page {
        title: page_title(&view.t("legal.privacy.title"), &view.t("site.brand")),
        description: view.t("legal.privacy.intro"),
        body,
    };
    Ok(render(&req, view, &page))
}

// ===== Shared pieces =====

pub(super) fn render(req: &HttpRequest, view: LocalizedView<'_>, page: &Page) -> HttpResponse {
    html_response(StatusCode::OK, render_page(view, req.path(), page))
}

fn listing(heading_html: &str, intro_html: &str, inner_html: &str) -> String {
    format!(
        "<section class=\"listing\">\n<h1>{}</h1>\n{}\n{}\n</section>",
        heading_html,
        paragraph(intro_html),
        inner_html
    )
}

fn section_with_id(id: &str, heading_html: &str, inner_html: &str) -> String {
    format!(
        "<section id=\"{}\">\n<h2>{}</h2>\n{}\n</section>",
        id, heading_html, inner_html
    )
}

fn cards(items: impl Iterator<Item = String>) -> String {
    format!(
        "<div class=\"cards\">\n{}\n</div>",
        items.collect::<Vec<_>>().join("\n")
    )
}

fn project_card(view: LocalizedView<'_>, project: &Project) -> String {
    format!(
        "<article class=\"card\">\n<h3>{}</h3>\n<p>{}</p>\n{}\n<a href=\"{}\">{}</a>\n</article>",
        escape_html(&project.name),
        escape_html(project.short_description.get(view.locale())),
        tag_list(&project.technologies),
        localized_url(&format!("projects/{}", project.slug), view.locale()),
        view.html("projects.details"),
    )
}

fn game_card(view: LocalizedView<'_>, game: &Game) -> String {
    format!(
        "<article class=\"card\">\n<h3>{}</h3>\n<p class=\"genre\">{}</p>\n<p>{}</p>\n<a href=\"{}\">{}</a>\n</article>",
        escape_html(&game.name),
        escape_html(game.genre.get(view.locale())),
        escape_html(game.short_description.get(view.locale())),
        localized_url(&format!("games/{}", game.slug), view.locale()),
        view.html("games.details"),
    )
}

fn contact(view: LocalizedView<'_>) -> String {
    let mail = [Fragment::link(format!("mailto:{}", CONTACT_EMAIL))];
    let availability = [
        ("contact.freelance", "contact.available"),
        ("contact.fulltime", "contact.from2026"),
        ("contact.consulting", "contact.available"),
    ]
    .iter()
    .map(|(what, when)| format!("<dt>{}</dt><dd>{}</dd>", view.html(what), view.html(when)))
    .collect::<String>();

    format!(
        "<section id=\"contact\">\n<h2>{}</h2>\n{}\n<dl>\n<dt>{}</dt><dd><a href=\"mailto:{}\">{}</a></dd>\n<dt>{}</dt><dd>{}</dd>\n</dl>\n<h3>{}</h3>\n<dl class=\"availability\">{}</dl>\n</section>",
        view.html("contact.title"),
        paragraph(&view.rich("contact.body", &mail)),
        view.html("contact.email"),
        CONTACT_EMAIL,
        CONTACT_EMAIL,
        view.html("contact.location"),
        view.html("contact.locationValue"),
        view.html("contact.availability"),
        availability,
    )
}
