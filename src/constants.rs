//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Shown by the pretty formatter when the response body is empty.
pub const EMPTY_RESPONSE: &str = "Empty Response";

/// Shown by the pretty formatter when a structured body fails to parse.
pub const PARSE_FAILED: &str = "Failed to parse response.";

/// Shown by the query engine when a JSONPath matches nothing.
pub const NO_MATCHES: &str = "No matches found";

/// Content type assumed when a response carries no Content-Type header.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Lines longer than this disable syntax highlighting for the whole view.
pub const HIGHLIGHT_MAX_LINE_LEN: usize = 5000;
