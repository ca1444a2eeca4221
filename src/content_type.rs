//! Content-type resolution - maps a content-type string to a body
//! construction strategy and a syntax-highlighting language id.

use crate::constants::HIGHLIGHT_MAX_LINE_LEN;

/// How a request body is built from the spec's body sources.
///
/// Decided once per submit by [`body_kind`] and matched exhaustively wherever
/// a body decision is made, so an unrecognized content type can never fall
/// through a string-keyed dispatch table silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// `body_text` is sent verbatim.
    Raw,
    /// The multipart form table is sent as `multipart/form-data`.
    Multipart,
    /// The urlencoded form table is sent as `application/x-www-form-urlencoded`.
    UrlEncoded,
    /// No body.
    None,
}

/// Content types whose body is the raw text editor, sent verbatim.
const RAW_CONTENT_TYPES: &[&str] = &[
    "application/json",
    "application/xml",
    "text/xml",
    "text/html",
    "text/plain",
    "application/javascript",
];

const MULTIPART: &str = "multipart/form-data";
const URLENCODED: &str = "application/x-www-form-urlencoded";

/// Strip parameters and normalize case: `"Text/HTML; charset=x"` → `"text/html"`.
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}

/// Resolve which body source a content type selects.
///
/// Empty or unrecognized content types yield [`BodyKind::None`]: the request
/// goes out with no body rather than guessing an encoding.
pub fn body_kind(content_type: &str) -> BodyKind {
    let ct = essence(content_type);
    if ct.is_empty() {
        return BodyKind::None;
    }
    if RAW_CONTENT_TYPES.contains(&ct.as_str()) {
        return BodyKind::Raw;
    }
    match ct.as_str() {
        MULTIPART => BodyKind::Multipart,
        URLENCODED => BodyKind::UrlEncoded,
        _ => BodyKind::None,
    }
}

/// Language id for the syntax-highlighter collaborator.
///
/// HTML is deliberately downgraded to the XML-family highlighter: full HTML
/// grammars are too slow for interactive use on large documents.
pub fn highlight_language(content_type: &str) -> &'static str {
    match essence(content_type).as_str() {
        "application/json" => "json",
        "application/xml" | "text/xml" | "text/html" => "xml",
        "application/javascript" => "js",
        _ => "text",
    }
}

/// Downgrade to plain text when any line is long enough to stall the
/// highlighter (minified JSON/JS bodies routinely arrive as one line).
pub fn highlight_language_for(content_type: &str, text: &str) -> &'static str {
    if text.lines().any(|line| line.len() > HIGHLIGHT_MAX_LINE_LEN) {
        return "text";
    }
    highlight_language(content_type)
}
