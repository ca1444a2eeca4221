//! Network layer - wire exchange execution off the interactive thread.

pub mod client;
pub mod dispatcher;

pub use dispatcher::Dispatcher;
