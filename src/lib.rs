//! # Getman Core
//!
//! The request/response engine behind a Postman-style HTTP client.
//!
//! ## Features
//! - Mutable request specs: method, URL, params, headers, three body encodings
//! - Pure wire-request construction (URL normalization, row filtering)
//! - Off-thread dispatch with per-spec generation tracking
//! - Content-type-aware pretty/raw rendering
//! - JSONPath and XPath response filtering
//! - Syntax-highlighter language resolution
//!
//! ## Architecture
//! Channel-based hand-off around a single interactive thread:
//! - Editing surface (external) mutates a [`RequestSpec`]
//! - [`Dispatcher`] builds the wire request and runs the exchange on a worker
//! - The completion channel carries an owned [`ResponseModel`] back
//! - [`format`] and [`query`] compute derived views on the interactive thread
//!
//! The UI, collection tree, and persistence are external collaborators; this
//! crate only defines the data they exchange.

pub mod constants;
pub mod content_type;
pub mod format;
pub mod messages;
pub mod models;
pub mod network;
pub mod query;
pub mod wire;
pub(crate) mod xml;

// Re-export commonly used types
pub use content_type::{body_kind, highlight_language, highlight_language_for, BodyKind};
pub use messages::{completion_channel, Completion, CompletionReceiver, CompletionSender};
pub use models::{Field, HttpMethod, RequestSpec, ResponseModel, SpecId};
pub use network::Dispatcher;
pub use query::FilterOutcome;
pub use wire::{build_wire_request, normalize_url, WireBody, WireRequest};
