// =====================================================
// FILE: tests/locale_tests.rs - LOCALE RESOLUTION
// =====================================================

use luvy_site::i18n::{locale_from_path, negotiate, Locale};
use luvy_site::server::url::{
    current_locale_from_path, localized_hash_url, localized_url, prefix_locale,
    strip_locale_segment, switch_locale,
};
use luvy_site::server::{LocaleResolver, Resolution};

#[test]
fn test_locale_codes_and_toggle() {
    assert_eq!(Locale::default(), Locale::De);
    assert_eq!(Locale::codes(), vec!["de", "en"]);
    assert_eq!(Locale::from_code("en"), Some(Locale::En));
    assert_eq!(Locale::from_code("EN"), None);
    assert_eq!("de".parse::<Locale>(), Ok(Locale::De));
    assert!("fr".parse::<Locale>().is_err());

    assert_eq!(Locale::De.other(), Locale::En);
    assert_eq!(Locale::De.toggle_label(), "EN");
    assert_eq!(Locale::En.toggle_label(), "DE");
}

#[test]
fn test_locale_from_path_matches_whole_segment() {
    assert_eq!(locale_from_path("/de"), Some(Locale::De));
    assert_eq!(locale_from_path("/en/projects/bubblez"), Some(Locale::En));
    assert_eq!(locale_from_path("/dex"), None);
    assert_eq!(locale_from_path("/fr/faq"), None);
    assert_eq!(locale_from_path("/"), None);
    assert_eq!(locale_from_path(""), None);
}

#[test]
fn test_negotiate_accept_language() {
    assert_eq!(negotiate("en-US,en;q=0.9"), Some(Locale::En));
    assert_eq!(negotiate("de-DE"), Some(Locale::De));
    assert_eq!(negotiate("EN-gb"), Some(Locale::En));

    // Weight decides, not position
    assert_eq!(negotiate("de;q=0.5, en;q=0.8"), Some(Locale::En));
    // Ties keep header order
    assert_eq!(negotiate("en;q=0.7, de;q=0.7"), Some(Locale::En));
    // Unsupported entries are skipped
    assert_eq!(negotiate("fr-FR, es;q=0.9, en;q=0.1"), Some(Locale::En));

    assert_eq!(negotiate("en;q=0"), None);
    assert_eq!(negotiate("en;q=abc"), None);
    assert_eq!(negotiate("fr, it"), None);
    assert_eq!(negotiate(""), None);
    assert_eq!(negotiate("*"), None);
}

#[test]
fn test_resolver_never_rewrites_localized_paths() {
    let resolver = LocaleResolver::default();

    for locale in Locale::ALL {
        let root = format!("/{}", locale);
        let nested = format!("/{}/games/block-world", locale);
        assert_eq!(resolver.resolve(&root, Some("fr")), Resolution::Localized(locale));
        assert_eq!(resolver.resolve(&nested, None), Resolution::Localized(locale));
    }
}

#[test]
fn test_resolver_redirects_by_accept_language() {
    let resolver = LocaleResolver::default();

    assert_eq!(
        resolver.resolve("/projects", Some("en-US,en;q=0.9")),
        Resolution::Redirect {
            locale: Locale::En,
            location: "/en/projects".into()
        }
    );
    assert_eq!(
        resolver.resolve("/", Some("en")),
        Resolution::Redirect {
            locale: Locale::En,
            location: "/en".into()
        }
    );
}

#[test]
fn test_resolver_defaults_to_german() {
    let resolver = LocaleResolver::default();

    for header in [None, Some(""), Some("fr-FR"), Some("en;q=0"), Some("garbage;;")] {
        match resolver.resolve("/faq", header) {
            Resolution::Redirect { locale, location } => {
                assert_eq!(locale, Locale::De, "header {:?}", header);
                assert_eq!(location, "/de/faq");
            }
            other => panic!("expected redirect for {:?}, got {:?}", header, other),
        }
    }
}

#[test]
fn test_resolver_replaces_unsupported_locale_segment() {
    let resolver = LocaleResolver::default();

    assert_eq!(
        resolver.resolve("/fr/faq", None),
        Resolution::Redirect {
            locale: Locale::De,
            location: "/de/faq".into()
        }
    );
    // Longer first segments are page paths, not locales
    assert_eq!(
        resolver.resolve("/about", None),
        Resolution::Redirect {
            locale: Locale::De,
            location: "/de/about".into()
        }
    );
}

#[test]
fn test_resolver_excluded_paths() {
    let resolver = LocaleResolver::default();

    for path in [
        "/api",
        "/api/health",
        "/static/style.css",
        "/assets/logo",
        "/_next/data",
        "/.well-known/security.txt",
        "/robots.txt",
        "/favicon.ico",
        "/projects/image.png",
    ] {
        assert_eq!(resolver.resolve(path, Some("en")), Resolution::Excluded, "{}", path);
    }

    // Prefixes cover whole segments only
    assert!(!resolver.is_excluded("/apiary"));
    assert!(!resolver.is_excluded("/staticpage"));
}

#[test]
fn test_resolver_custom_config() {
    let resolver = LocaleResolver::new(Locale::En, vec!["/internal".into()]);

    assert_eq!(resolver.default_locale(), Locale::En);
    assert_eq!(resolver.negotiate(None), Locale::En);
    assert_eq!(resolver.resolve("/internal/x", None), Resolution::Excluded);
    // Not in the custom list anymore
    assert!(matches!(
        resolver.resolve("/api/health", None),
        Resolution::Redirect { .. }
    ));
}

#[test]
fn test_url_helpers() {
    assert_eq!(localized_url("/projects", Locale::En), "/en/projects");
    assert_eq!(localized_url("faq", Locale::De), "/de/faq");
    assert_eq!(localized_hash_url("#contact", Locale::En), "/en#contact");
    assert_eq!(localized_hash_url("projects", Locale::De), "/de#projects");

    assert_eq!(current_locale_from_path("/en/team", Locale::De), Locale::En);
    assert_eq!(current_locale_from_path("/team", Locale::De), Locale::De);

    assert_eq!(strip_locale_segment("/de/faq"), "/faq");
    assert_eq!(strip_locale_segment("/de"), "");
    assert_eq!(strip_locale_segment("/about"), "/about");
    assert_eq!(strip_locale_segment("/a1/x"), "/a1/x");

    assert_eq!(prefix_locale(Locale::En, "/"), "/en");
    assert_eq!(prefix_locale(Locale::En, ""), "/en");
    assert_eq!(prefix_locale(Locale::De, "/games"), "/de/games");

    assert_eq!(switch_locale("/de/projects/bubblez", Locale::En), "/en/projects/bubblez");
    assert_eq!(switch_locale("/en", Locale::De), "/de");
}
