// =====================================================
// FILE: src/server/url.rs - LOCALIZED URL HELPERS
// =====================================================

use crate::i18n::{locale_from_path, Locale};

/// `/{locale}/{path}` with any leading slash of `path` dropped.
pub fn localized_url(path: &str, locale: Locale) -> String {
    let clean = path.strip_prefix('/').unwrap_or(path);
    format!("/{}/{}", locale, clean)
}

/// `/{locale}#{hash}` with any leading `#` of `hash` dropped.
pub fn localized_hash_url(hash: &str, locale: Locale) -> String {
    let clean = hash.strip_prefix('#').unwrap_or(hash);
    format!("/{}#{}", locale, clean)
}

pub fn current_locale_from_path(path: &str, default: Locale) -> Locale {
    locale_from_path(path).unwrap_or(default)
}

/// Removes a leading segment of exactly two ASCII letters, e.g. `/fr/faq` -> `/faq`.
/// The result always starts with `/` unless it is empty.
pub fn strip_locale_segment(path: &str) -> &str {
    let Some(rest) = path.strip_prefix('/') else {
        return path;
    };
    let segment_end = rest.find('/').unwrap_or(rest.len());
    let segment = &rest[..segment_end];
    if segment.len() == 2 && segment.bytes().all(|b| b.is_ascii_alphabetic()) {
        &rest[segment_end..]
    } else {
        path
    }
}

/// `/{locale}` followed by `path` without its locale segment. The root maps
/// to `/{locale}`.
pub fn prefix_locale(locale: Locale, path: &str) -> String {
    let rest = strip_locale_segment(path);
    if rest.is_empty() || rest == "/" {
        format!("/{}", locale)
    } else if rest.starts_with('/') {
        format!("/{}{}", locale, rest)
    } else {
        format!("/{}/{}", locale, rest)
    }
}

/// Same page in `target`; used by the language toggle and hreflang links.
pub fn switch_locale(path: &str, target: Locale) -> String {
    prefix_locale(target, path)
}
