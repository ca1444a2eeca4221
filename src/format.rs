//! Response formatting - pretty and raw views of a response body, plus the
//! small display helpers for the status strip.
//!
//! Every entry point here is total: parse and serialize failures degrade to a
//! sentinel string, never an error or a panic.

use anyhow::Result;

use crate::constants::{DEFAULT_CONTENT_TYPE, EMPTY_RESPONSE, PARSE_FAILED};
use crate::models::{HttpMethod, ResponseModel};
use crate::xml;

/// The response body decoded as text and markup-escaped for safe display.
/// Absent body yields an empty string.
pub fn raw(response: &ResponseModel) -> String {
    let text = response.body_text();
    if text.is_empty() {
        return String::new();
    }
    xml::escape_text(&text)
}

fn try_pretty_json(text: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

fn try_pretty_xml(text: &str) -> Result<String> {
    let package = xml::parse(text)?;
    Ok(xml::pretty_print(&package))
}

/// Content-type-aware pretty rendering of the body.
///
/// JSON re-serializes with 2-space indentation, XML/HTML re-serializes with
/// normalized indentation, anything else falls back to the escaped raw text.
/// An empty body renders the empty-response sentinel regardless of content
/// type, and a body that fails to parse renders the parse-failure sentinel.
pub fn pretty(response: &ResponseModel) -> String {
    let text = response.body_text();
    if text.is_empty() {
        return String::from(EMPTY_RESPONSE);
    }

    let content_type = response
        .content_type()
        .unwrap_or_else(|| String::from(DEFAULT_CONTENT_TYPE));

    let formatted = match content_type.as_str() {
        "application/json" => try_pretty_json(&text),
        "text/xml" | "application/xml" | "text/html" => try_pretty_xml(&text),
        _ => return xml::escape_text(&text),
    };

    formatted.unwrap_or_else(|e| {
        tracing::warn!(content_type = %content_type, "Failed to parse response: {}", e);
        String::from(PARSE_FAILED)
    })
}

/// Body for the document-preview collaborator.
///
/// Only a successful GET with an HTML content type gets a preview; everything
/// else receives an empty document.
pub fn preview_document(response: &ResponseModel) -> String {
    if response.is_success()
        && response.method == HttpMethod::GET
        && response.content_type().as_deref() == Some("text/html")
    {
        response.body_text()
    } else {
        String::new()
    }
}

/// Response headers as escaped `Key → value` lines, in wire order.
pub fn format_headers(response: &ResponseModel) -> String {
    response
        .headers
        .iter()
        .map(|(k, v)| format!("{} → {}", xml::escape_text(k), xml::escape_text(v)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Elapsed time in a human form: milliseconds under a second, seconds above.
pub fn format_elapsed(response: &ResponseModel) -> String {
    let millis = response.elapsed.as_millis();
    if millis < 1000 {
        format!("{} ms", millis)
    } else {
        format!("{:.2} s", response.elapsed.as_secs_f64())
    }
}

/// Body size in a human form.
pub fn format_size(response: &ResponseModel) -> String {
    let bytes = response.body.len();
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} kB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn response(content_type: &str, body: &str) -> ResponseModel {
        let headers = if content_type.is_empty() {
            Vec::new()
        } else {
            vec![(String::from("Content-Type"), String::from(content_type))]
        };
        ResponseModel {
            status: Some(200),
            reason: String::from("OK"),
            headers,
            body: body.as_bytes().to_vec(),
            elapsed: Duration::from_millis(42),
            method: HttpMethod::GET,
            url: String::from("http://example.com"),
            error: None,
        }
    }

    #[test]
    fn test_empty_body_renders_sentinel() {
        assert_eq!(pretty(&response("", "")), "Empty Response");
        assert_eq!(pretty(&response("application/json", "")), "Empty Response");
    }

    #[test]
    fn test_json_pretty_uses_two_space_indent() {
        let model = response("application/json", r#"{"a":1}"#);
        assert_eq!(pretty(&model), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_json_parse_failure_renders_sentinel() {
        let model = response("application/json", "{not json");
        assert_eq!(pretty(&model), "Failed to parse response.");
    }

    #[test]
    fn test_xml_is_reindented() {
        let model = response("application/xml", "<a><b>1</b></a>");
        assert_eq!(pretty(&model), "<a>\n  <b>1</b>\n</a>\n");
    }

    #[test]
    fn test_unknown_content_type_falls_back_to_escaped_raw() {
        let model = response("application/octet-stream", "a < b");
        assert_eq!(pretty(&model), "a &lt; b");
    }

    #[test]
    fn test_missing_content_type_is_treated_as_plain_text() {
        let model = response("", "hello");
        assert_eq!(pretty(&model), "hello");
    }

    #[test]
    fn test_raw_is_escaped_and_empty_for_absent_body() {
        assert_eq!(raw(&response("text/plain", "<b>hi</b>")), "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(raw(&response("text/plain", "")), "");
    }

    #[test]
    fn test_preview_only_for_successful_html_get() {
        let html = response("text/html", "<html></html>");
        assert_eq!(preview_document(&html), "<html></html>");

        let mut post = response("text/html", "<html></html>");
        post.method = HttpMethod::POST;
        assert_eq!(preview_document(&post), "");

        let mut failed = response("text/html", "<html></html>");
        failed.status = Some(500);
        assert_eq!(preview_document(&failed), "");

        let json = response("application/json", "{}");
        assert_eq!(preview_document(&json), "");
    }

    #[test]
    fn test_status_strip_helpers() {
        let mut model = response("text/plain", "hello");
        model.headers.push((String::from("X-Id"), String::from("7")));
        assert_eq!(
            format_headers(&model),
            "Content-Type → text/plain\nX-Id → 7"
        );
        assert_eq!(format_elapsed(&model), "42 ms");
        model.elapsed = Duration::from_millis(1500);
        assert_eq!(format_elapsed(&model), "1.50 s");
        assert_eq!(format_size(&model), "5 B");
    }
}
