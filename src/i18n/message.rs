// src/i18n/message.rs
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// No backreferences in `regex`, so the closing index is captured and compared.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<(\d+)>(.*?)</(\d+)>").expect("valid tag pattern"));

static PARAM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("valid param pattern"));

/// Markup element substituted for a `<N>...</N>` span. The span's inner
/// text becomes the element's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    tag: String,
    attrs: Vec<(String, String)>,
}

impl Fragment {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
        }
    }

    pub fn link(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn to_html(&self, content: &str) -> String {
        let attrs: String = self
            .attrs
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, escape_html(value)))
            .collect();
        format!(
            "<{tag}{attrs}>{content}</{tag}>",
            tag = self.tag,
            attrs = attrs,
            content = escape_html(content)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'f> {
    Text(String),
    Fragment {
        fragment: &'f Fragment,
        content: String,
    },
}

/// A resolved message: the raw string when no fragments were supplied,
/// otherwise the interleaved text/fragment sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<'f> {
    Text(String),
    Segments(Vec<Segment<'f>>),
}

impl Message<'_> {
    pub fn to_html(&self) -> String {
        match self {
            Message::Text(text) => escape_html(text),
            Message::Segments(segments) => segments
                .iter()
                .map(|segment| match segment {
                    Segment::Text(text) => escape_html(text),
                    Segment::Fragment { fragment, content } => fragment.to_html(content),
                })
                .collect(),
        }
    }

    pub fn to_plain(&self) -> String {
        match self {
            Message::Text(text) => text.clone(),
            Message::Segments(segments) => segments
                .iter()
                .map(|segment| match segment {
                    Segment::Text(text) => text.as_str(),
                    Segment::Fragment { content, .. } => content.as_str(),
                })
                .collect(),
        }
    }
}

/// Splits `template` on `<N>...</N>` spans and substitutes the N-th fragment.
///
/// Only mismatched tags stay literal: scanning resumes right after an
/// unmatched `<N>`, so a well-formed span inside it is still substituted.
/// An index without a fragment keeps its inner text as plain text. Tags do
/// not nest.
pub fn interpolate<'f>(template: &str, fragments: &'f [Fragment]) -> Vec<Segment<'f>> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut cursor = 0;
    let mut pos = 0;

    while let Some(caps) = TAG_PATTERN.captures_at(template, pos) {
        let (Some(whole), Some(open)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        if open.as_str() != &caps[3] {
            // Skip past `<N>`; it stays in `text` via `cursor`
            pos = open.end() + 1;
            continue;
        }

        text.push_str(&template[cursor..whole.start()]);
        cursor = whole.end();
        pos = cursor;

        match open.as_str().parse::<usize>().ok().and_then(|i| fragments.get(i)) {
            Some(fragment) => {
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Fragment {
                    fragment,
                    content: caps[2].to_string(),
                });
            }
            None => text.push_str(&caps[2]),
        }
    }

    text.push_str(&template[cursor..]);
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    segments
}

/// Replaces `{0}`, `{1}`, ... with the matching parameter in a single pass.
/// Parameter values are never rescanned; unknown indices stay as written.
pub fn format_params(text: &str, params: &[&str]) -> String {
    if params.is_empty() {
        return text.to_string();
    }
    PARAM_PATTERN
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| params.get(i))
                .map_or_else(|| caps[0].to_string(), |param| param.to_string())
        })
        .into_owned()
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
