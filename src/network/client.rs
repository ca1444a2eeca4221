//! HTTP client wrapper - executes wire requests and captures the outcome.

use std::time::Instant;

use crate::models::ResponseModel;
use crate::wire::{WireBody, WireRequest};

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

fn to_reqwest_method(method: crate::models::HttpMethod) -> reqwest::Method {
    use crate::models::HttpMethod;
    match method {
        HttpMethod::GET => reqwest::Method::GET,
        HttpMethod::POST => reqwest::Method::POST,
        HttpMethod::PUT => reqwest::Method::PUT,
        HttpMethod::PATCH => reqwest::Method::PATCH,
        HttpMethod::DELETE => reqwest::Method::DELETE,
        HttpMethod::HEAD => reqwest::Method::HEAD,
        HttpMethod::OPTIONS => reqwest::Method::OPTIONS,
    }
}

/// Assemble the reqwest builder for one wire request.
fn build_request(client: &reqwest::Client, wire: &WireRequest) -> reqwest::RequestBuilder {
    let mut req_builder = client
        .request(to_reqwest_method(wire.method), &wire.url)
        .query(&wire.query);

    for (key, value) in &wire.headers {
        req_builder = req_builder.header(key, value);
    }

    match &wire.body {
        WireBody::Raw(text) => {
            // The selected content type decides the body source; it is also
            // sent as a header unless the user already set one explicitly.
            let has_ct = wire
                .headers
                .iter()
                .any(|(k, _)| k.eq_ignore_ascii_case("content-type"));
            if !has_ct && !wire.content_type.is_empty() {
                req_builder = req_builder.header("Content-Type", &wire.content_type);
            }
            req_builder.body(text.clone())
        }
        WireBody::Multipart(fields) => {
            let mut form = reqwest::multipart::Form::new();
            for (key, value) in fields {
                form = form.text(key.clone(), value.clone());
            }
            req_builder.multipart(form)
        }
        WireBody::UrlEncoded(fields) => req_builder.form(fields),
        WireBody::Empty => req_builder,
    }
}

/// Perform one exchange and return a complete [`ResponseModel`].
///
/// Transport failures (DNS, connect, timeout, TLS) are captured into the
/// failure shape; this function never returns an error and never panics.
pub async fn execute(client: &reqwest::Client, wire: WireRequest) -> ResponseModel {
    let start = Instant::now();
    let method = wire.method;
    let url = wire.url.clone();

    let result = build_request(client, &wire).send().await;

    match result {
        Ok(resp) => {
            let status = resp.status();
            let reason = status.canonical_reason().unwrap_or("").to_string();
            let headers: Vec<(String, String)> = resp
                .headers()
                .iter()
                .map(|(k, v)| {
                    (
                        k.as_str().to_string(),
                        String::from_utf8_lossy(v.as_bytes()).into_owned(),
                    )
                })
                .collect();

            match resp.bytes().await {
                Ok(body) => ResponseModel {
                    status: Some(status.as_u16()),
                    reason,
                    headers,
                    body: body.to_vec(),
                    elapsed: start.elapsed(),
                    method,
                    url,
                    error: None,
                },
                Err(e) => ResponseModel::failure(
                    method,
                    url,
                    format!("Error reading body: {}", e),
                    start.elapsed(),
                ),
            }
        }
        Err(e) => {
            let msg = if e.is_timeout() {
                "Request timed out (30s)".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Request failed: {}", e)
            };
            ResponseModel::failure(method, url, msg, start.elapsed())
        }
    }
}
