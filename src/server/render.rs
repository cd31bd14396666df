// =====================================================
// FILE: src/server/render.rs - PAGE LAYOUT
// =====================================================

use crate::i18n::{escape_html, Locale, LocalizedView};
use crate::server::url::{localized_url, switch_locale};
use actix_web::{http::StatusCode, HttpResponse};
use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const LAYOUT: &str = include_str!("templates/layout.html");

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Z_]+)\}\}").expect("valid placeholder pattern"));

/// Navigation entries as (path below the locale, translation key).
const NAV_ITEMS: &[(&str, &str)] = &[
    ("", "nav.home"),
    ("projects", "nav.projects"),
    ("games", "nav.games"),
    ("faq", "nav.faq"),
    ("roadmap", "nav.roadmap"),
    ("team", "nav.team"),
];

/// A rendered page body plus its head metadata. Title and description are
/// plain text; `body` is HTML.
pub struct Page {
    pub title: String,
    pub description: String,
    pub body: String,
}

pub fn render_page(view: LocalizedView<'_>, path: &str, page: &Page) -> String {
    let locale = view.locale();
    let other = locale.other();

    // One pass over the layout: substituted values are never rescanned.
    PLACEHOLDER
        .replace_all(LAYOUT, |caps: &Captures| match &caps[1] {
            "LANG" => locale.as_str().to_string(),
            "TITLE" => escape_html(&page.title),
            "DESCRIPTION" => escape_html(&page.description),
            "ALTERNATES" => alternates(path),
            "HOME_HREF" => format!("/{}", locale),
            "BRAND" => view.html("site.brand"),
            "NAV_LABEL" => view.html("nav.label"),
            "NAV" => nav(view, path),
            "TOGGLE_HREF" => escape_html(&switch_locale(path, other)),
            "TOGGLE_LANG" => other.as_str().to_string(),
            "TOGGLE_TITLE" => view.html("language.switch"),
            "TOGGLE_LABEL" => locale.toggle_label(),
            "FOOTER" => footer(view),
            "CONTENT" => page.body.clone(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

pub fn html_response(status: StatusCode, html: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(html)
}

fn alternates(path: &str) -> String {
    Locale::ALL
        .iter()
        .map(|l| {
            format!(
                r#"    <link rel="alternate" hreflang="{}" href="{}">"#,
                l,
                escape_html(&switch_locale(path, *l))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn nav(view: LocalizedView<'_>, current_path: &str) -> String {
    NAV_ITEMS
        .iter()
        .map(|(target, key)| {
            let href = if target.is_empty() {
                format!("/{}", view.locale())
            } else {
                localized_url(target, view.locale())
            };
            let current = if href == current_path.trim_end_matches('/') {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(r#"<a href="{}"{}>{}</a>"#, href, current, view.html(key))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn footer(view: LocalizedView<'_>) -> String {
    let year = chrono::Utc::now().year().to_string();
    format!(
        "        <p>{}</p>\n        <p><a href=\"{}\">{}</a> · <a href=\"{}\">{}</a></p>",
        escape_html(&view.format("footer.copyright", &[year.as_str()])),
        localized_url("impressum", view.locale()),
        view.html("footer.imprint"),
        localized_url("datenschutz", view.locale()),
        view.html("footer.privacy"),
    )
}

// ===== Markup helpers shared by the page handlers =====

pub fn section(class: &str, heading_html: &str, inner_html: &str) -> String {
    format!(
        "<section class=\"{}\">\n<h2>{}</h2>\n{}\n</section>",
        class, heading_html, inner_html
    )
}

pub fn paragraph(html: &str) -> String {
    format!("<p>{}</p>", html)
}

pub fn tag_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<ul class=\"tags\">{}</ul>", items)
}

pub fn external_link(href: &str, label_html: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape_html(href),
        label_html
    )
}
