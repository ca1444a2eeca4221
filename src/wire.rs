//! Wire-request construction - turns a mutable [`RequestSpec`] into the
//! immutable description of what actually goes on the wire.
//!
//! Everything here is pure so request construction can be tested without a
//! network or a runtime.

use crate::content_type::{body_kind, BodyKind};
use crate::models::{Field, HttpMethod, RequestSpec};

/// Body of a wire request, resolved from the spec's three body sources.
#[derive(Clone, Debug, PartialEq)]
pub enum WireBody {
    Raw(String),
    Multipart(Vec<(String, String)>),
    UrlEncoded(Vec<(String, String)>),
    Empty,
}

/// Everything the transport needs to perform one exchange.
#[derive(Clone, Debug)]
pub struct WireRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub content_type: String,
    pub body: WireBody,
}

/// Prepend `http://` when the user typed a scheme-less URL.
pub fn normalize_url(raw: &str) -> String {
    if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    }
}

/// Drop placeholder rows (empty key), keep order.
fn enabled_pairs(fields: &[Field]) -> Vec<(String, String)> {
    fields
        .iter()
        .filter(|f| f.is_enabled())
        .map(|f| (f.key.clone(), f.value.clone()))
        .collect()
}

/// Like [`enabled_pairs`] but last-wins for repeated keys, since HTTP header
/// names are case-insensitive and the table editor does not enforce
/// uniqueness.
fn enabled_headers(fields: &[Field]) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = Vec::new();
    for field in fields.iter().filter(|f| f.is_enabled()) {
        if let Some(existing) = headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&field.key))
        {
            existing.1 = field.value.clone();
        } else {
            headers.push((field.key.clone(), field.value.clone()));
        }
    }
    headers
}

/// Build a wire request from a spec. Pure; the spec is only read.
pub fn build_wire_request(spec: &RequestSpec) -> WireRequest {
    let body = match body_kind(&spec.content_type) {
        BodyKind::Raw => WireBody::Raw(spec.body_text.clone()),
        BodyKind::Multipart => WireBody::Multipart(enabled_pairs(&spec.body_form_multipart)),
        BodyKind::UrlEncoded => WireBody::UrlEncoded(enabled_pairs(&spec.body_form_urlencoded)),
        BodyKind::None => WireBody::Empty,
    };

    WireRequest {
        method: spec.method,
        url: normalize_url(&spec.url),
        query: enabled_pairs(&spec.params),
        headers: enabled_headers(&spec.headers),
        content_type: spec.content_type.clone(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_scheme() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_params_drop_empty_keys_preserving_order() {
        let mut spec = RequestSpec::default();
        spec.params = vec![
            Field::new("a", "1"),
            Field::new("", "skip"),
            Field::new("b", "2"),
        ];
        let wire = build_wire_request(&spec);
        assert_eq!(
            wire.query,
            vec![
                (String::from("a"), String::from("1")),
                (String::from("b"), String::from("2")),
            ]
        );
    }

    #[test]
    fn test_repeated_headers_last_wins() {
        let mut spec = RequestSpec::default();
        spec.headers = vec![
            Field::new("Accept", "text/plain"),
            Field::new("X-Trace", "1"),
            Field::new("accept", "application/json"),
        ];
        let wire = build_wire_request(&spec);
        assert_eq!(
            wire.headers,
            vec![
                (String::from("Accept"), String::from("application/json")),
                (String::from("X-Trace"), String::from("1")),
            ]
        );
    }

    #[test]
    fn test_raw_body_is_sent_verbatim() {
        let mut spec = RequestSpec::default();
        spec.content_type = String::from("application/json");
        spec.body_text = String::from(r#"{"a":1}"#);
        let wire = build_wire_request(&spec);
        assert_eq!(wire.body, WireBody::Raw(String::from(r#"{"a":1}"#)));
    }

    #[test]
    fn test_multipart_body_comes_from_the_form_table() {
        let mut spec = RequestSpec::default();
        spec.content_type = String::from("multipart/form-data");
        spec.body_text = String::from("ignored");
        spec.body_form_multipart = vec![Field::new("file", "data"), Field::new("", "")];
        let wire = build_wire_request(&spec);
        assert_eq!(
            wire.body,
            WireBody::Multipart(vec![(String::from("file"), String::from("data"))])
        );
    }

    #[test]
    fn test_no_content_type_means_empty_body() {
        let mut spec = RequestSpec::default();
        spec.body_text = String::from("ignored");
        let wire = build_wire_request(&spec);
        assert_eq!(wire.body, WireBody::Empty);
    }

    #[test]
    fn test_url_is_normalized_at_build_time() {
        let mut spec = RequestSpec::default();
        spec.url = String::from("httpbin.org/get");
        let wire = build_wire_request(&spec);
        assert_eq!(wire.url, "http://httpbin.org/get");
    }
}
