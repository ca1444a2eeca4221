use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
    HEAD,
    OPTIONS,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
        }
    }

    pub fn parse(s: &str) -> Option<HttpMethod> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "PATCH" => Some(HttpMethod::PATCH),
            "DELETE" => Some(HttpMethod::DELETE),
            "HEAD" => Some(HttpMethod::HEAD),
            "OPTIONS" => Some(HttpMethod::OPTIONS),
            _ => None,
        }
    }

    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT | HttpMethod::PATCH)
    }
}

/// One row of a key/value editing table (params, headers, form bodies).
///
/// An empty key marks a disabled/placeholder row; those rows are kept in the
/// spec so the editing surface can show them, and dropped at wire-build time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub key: String,
    pub value: String,
    pub note: String,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Field {
            key: key.into(),
            value: value.into(),
            note: String::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.key.is_empty()
    }
}

/// Identity of a request spec, used to route completions back to their owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecId(pub u64);

static NEXT_SPEC_ID: AtomicU64 = AtomicU64::new(1);

impl SpecId {
    /// Allocate the next unique id.
    pub fn next() -> SpecId {
        SpecId(NEXT_SPEC_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Editable description of one HTTP request.
///
/// All three body sources are retained at once; `content_type` selects the
/// active one (see [`crate::content_type::body_kind`]) so the user can switch
/// encodings without losing edits. Mutated only by the editing surface on the
/// interactive thread; the dispatcher reads it at submit time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RequestSpec {
    pub id: SpecId,
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    pub params: Vec<Field>,
    pub headers: Vec<Field>,
    /// Empty string means "no explicit body encoding".
    pub content_type: String,
    pub body_text: String,
    pub body_form_multipart: Vec<Field>,
    pub body_form_urlencoded: Vec<Field>,
}

impl Default for RequestSpec {
    fn default() -> Self {
        RequestSpec {
            id: SpecId::next(),
            name: String::from("New Request"),
            method: HttpMethod::GET,
            url: String::new(),
            params: vec![Field::default()],
            headers: vec![Field::default()],
            content_type: String::new(),
            body_text: String::new(),
            body_form_multipart: vec![Field::default()],
            body_form_urlencoded: vec![Field::default()],
        }
    }
}

impl RequestSpec {
    pub fn new(name: impl Into<String>) -> Self {
        RequestSpec {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Immutable snapshot of one completed (or failed) exchange.
///
/// Built by exactly one worker and handed over the completion channel by
/// value; after delivery the interactive thread is its sole owner.
#[derive(Clone, Debug)]
pub struct ResponseModel {
    /// Absent when the exchange failed before a status line was received.
    pub status: Option<u16>,
    /// Status reason phrase, or a human-readable failure message.
    pub reason: String,
    /// Response headers in wire order; lookup is case-insensitive.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    pub elapsed: Duration,
    /// Echo of the originating request, for display rules.
    pub method: HttpMethod,
    pub url: String,
    /// Populated when the exchange failed rather than completed.
    pub error: Option<String>,
}

impl ResponseModel {
    /// Build the failure shape: no status, reason and error carry the message.
    pub fn failure(method: HttpMethod, url: String, message: String, elapsed: Duration) -> Self {
        ResponseModel {
            status: None,
            reason: message.clone(),
            headers: Vec::new(),
            body: Vec::new(),
            elapsed,
            method,
            url,
            error: Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(code) if (200..300).contains(&code))
    }

    /// Body decoded as text, lossily.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// First matching header value, case-insensitive per HTTP semantics.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Content type with parameters stripped and lowercased
    /// (`"application/json; charset=utf-8"` → `"application/json"`).
    pub fn content_type(&self) -> Option<String> {
        self.header("content-type")
            .map(|v| v.split(';').next().unwrap_or("").trim().to_lowercase())
            .filter(|ct| !ct.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_headers(headers: Vec<(String, String)>) -> ResponseModel {
        ResponseModel {
            status: Some(200),
            reason: String::from("OK"),
            headers,
            body: Vec::new(),
            elapsed: Duration::from_millis(10),
            method: HttpMethod::GET,
            url: String::from("http://example.com"),
            error: None,
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let model = model_with_headers(vec![(
            String::from("Content-Type"),
            String::from("application/json; charset=utf-8"),
        )]);
        assert_eq!(
            model.header("content-type"),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(model.content_type().as_deref(), Some("application/json"));
    }

    #[test]
    fn test_content_type_absent() {
        let model = model_with_headers(Vec::new());
        assert_eq!(model.content_type(), None);
    }

    #[test]
    fn test_failure_shape() {
        let model = ResponseModel::failure(
            HttpMethod::GET,
            String::from("http://example.com"),
            String::from("Connection failed"),
            Duration::from_millis(5),
        );
        assert_eq!(model.status, None);
        assert_eq!(model.error.as_deref(), Some("Connection failed"));
        assert!(!model.is_success());
    }

    #[test]
    fn test_spec_ids_are_unique() {
        let a = RequestSpec::default();
        let b = RequestSpec::default();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(HttpMethod::parse("get"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::parse("BREW"), None);
    }
}
