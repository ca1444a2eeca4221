//! Shared XML plumbing - parsing and pretty-printing on top of
//! `sxd-document`, used by both the formatter and the query engine.
//!
//! HTML responses go through this parser too, consistent with the
//! highlighting downgrade: there is no separate tag-soup parser, so HTML that
//! is not well-formed XML degrades along the normal parse-failure path.

use anyhow::{anyhow, Result};
use sxd_document::dom::{ChildOfElement, ChildOfRoot, Element};
use sxd_document::{parser, Package};

/// Parse a document, folding the parser's positional error into one message.
pub fn parse(text: &str) -> Result<Package> {
    parser::parse(text).map_err(|e| anyhow!("malformed XML: {:?}", e))
}

/// Serialize the document with normalized 2-space indentation.
pub fn pretty_print(package: &Package) -> String {
    let mut out = String::new();
    for child in package.as_document().root().children() {
        if let ChildOfRoot::Element(element) = child {
            write_element(&mut out, element, 0);
        }
    }
    out
}

pub(crate) fn escape_text(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn escape_attribute(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

fn is_blank_text(child: &ChildOfElement<'_>) -> bool {
    matches!(child, ChildOfElement::Text(t) if t.text().trim().is_empty())
}

/// Write one element at the given indent depth, recursing into children.
/// Elements whose only children are text render inline; mixed content is
/// broken onto separate lines.
pub(crate) fn write_element(out: &mut String, element: Element<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(element.name().local_part());
    for attribute in element.attributes() {
        out.push(' ');
        out.push_str(attribute.name().local_part());
        out.push_str("=\"");
        out.push_str(&escape_attribute(attribute.value()));
        out.push('"');
    }

    let children: Vec<ChildOfElement<'_>> = element
        .children()
        .into_iter()
        .filter(|c| !is_blank_text(c))
        .collect();

    if children.is_empty() {
        out.push_str("/>\n");
        return;
    }

    let text_only = children
        .iter()
        .all(|c| matches!(c, ChildOfElement::Text(_)));
    if text_only {
        out.push('>');
        for child in &children {
            if let ChildOfElement::Text(t) = child {
                out.push_str(&escape_text(t.text().trim()));
            }
        }
        out.push_str("</");
        out.push_str(element.name().local_part());
        out.push_str(">\n");
        return;
    }

    out.push_str(">\n");
    for child in children {
        match child {
            ChildOfElement::Element(e) => write_element(out, e, depth + 1),
            ChildOfElement::Text(t) => {
                out.push_str(&"  ".repeat(depth + 1));
                out.push_str(&escape_text(t.text().trim()));
                out.push('\n');
            }
            ChildOfElement::Comment(c) => {
                out.push_str(&"  ".repeat(depth + 1));
                out.push_str("<!--");
                out.push_str(c.text());
                out.push_str("-->\n");
            }
            ChildOfElement::ProcessingInstruction(_) => {}
        }
    }
    out.push_str(&indent);
    out.push_str("</");
    out.push_str(element.name().local_part());
    out.push_str(">\n");
}
