//! Response filtering - ad-hoc JSONPath/XPath queries against a parsed
//! response body.

use anyhow::{anyhow, Result};
use serde_json_path::JsonPath;
use sxd_xpath::nodeset::Node;
use sxd_xpath::{Context, Factory, Value};

use crate::constants::{DEFAULT_CONTENT_TYPE, NO_MATCHES};
use crate::models::ResponseModel;
use crate::xml;

/// What the caller should do with the rendered view after a filter call.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterOutcome {
    /// Replace the view with this text.
    Rendered(String),
    /// Empty expression: fall back to the pretty rendering.
    Cleared,
    /// Unsupported content type or a failed query: leave the view as it is.
    Unchanged,
}

/// Apply a filter expression to the response body.
///
/// JSON bodies take a JSONPath, XML/HTML bodies take an XPath. Malformed
/// expressions and unparseable bodies never surface as errors; the previous
/// rendering stays untouched.
pub fn filter(response: &ResponseModel, expression: &str) -> FilterOutcome {
    if expression.is_empty() {
        return FilterOutcome::Cleared;
    }

    let content_type = response
        .content_type()
        .unwrap_or_else(|| String::from(DEFAULT_CONTENT_TYPE));

    let result = match content_type.as_str() {
        "application/json" => filter_json(&response.body_text(), expression),
        "text/xml" | "application/xml" | "text/html" => {
            filter_xml(&response.body_text(), expression)
        }
        other => {
            tracing::warn!(
                content_type = %other,
                "Got unexpected content type when filtering response"
            );
            return FilterOutcome::Unchanged;
        }
    };

    match result {
        Ok(rendered) => FilterOutcome::Rendered(rendered),
        Err(e) => {
            tracing::debug!("Failed to filter response: {}", e);
            FilterOutcome::Unchanged
        }
    }
}

/// Matched values collected into one array, 2-space indented.
fn filter_json(body: &str, expression: &str) -> Result<String> {
    let document: serde_json::Value = serde_json::from_str(body)?;
    let path = JsonPath::parse(expression)?;
    let matches: Vec<&serde_json::Value> = path.query(&document).all();
    if matches.is_empty() {
        return Ok(String::from(NO_MATCHES));
    }
    Ok(serde_json::to_string_pretty(&matches)?)
}

/// Matched nodes collected under one synthetic `<matches>` root.
fn filter_xml(body: &str, expression: &str) -> Result<String> {
    let package = xml::parse(body)?;
    let document = package.as_document();

    let xpath = Factory::new()
        .build(expression)
        .map_err(|e| anyhow!("invalid XPath: {:?}", e))?
        .ok_or_else(|| anyhow!("empty XPath expression"))?;
    let value = xpath
        .evaluate(&Context::new(), document.root())
        .map_err(|e| anyhow!("XPath evaluation failed: {:?}", e))?;

    Ok(render_matches(&value))
}

fn render_matches(value: &Value<'_>) -> String {
    let inner: Vec<String> = match value {
        Value::Nodeset(nodes) => nodes
            .document_order()
            .into_iter()
            .map(|node| match node {
                Node::Element(element) => {
                    let mut out = String::new();
                    xml::write_element(&mut out, element, 1);
                    out
                }
                other => format!("  {}\n", xml::escape_text(&other.string_value())),
            })
            .collect(),
        // Scalar XPath results (count(), name(), boolean tests) render as the
        // text content of the root.
        Value::Boolean(b) => vec![format!("  {}\n", b)],
        Value::Number(n) => {
            if n.fract() == 0.0 && n.is_finite() {
                vec![format!("  {}\n", *n as i64)]
            } else {
                vec![format!("  {}\n", n)]
            }
        }
        Value::String(s) => vec![format!("  {}\n", xml::escape_text(s))],
    };

    if inner.is_empty() {
        return String::from("<matches/>\n");
    }
    let mut out = String::from("<matches>\n");
    for chunk in inner {
        out.push_str(&chunk);
    }
    out.push_str("</matches>\n");
    out
}
