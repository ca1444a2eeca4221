//! Completion hand-off between the dispatch workers and the interactive
//! thread.
//!
//! A worker produces exactly one [`Completion`] per accepted submission and
//! sends it over the channel; ownership of the contained [`ResponseModel`]
//! transfers with it, so the worker retains no reference after the send.

use tokio::sync::mpsc;

use crate::models::{ResponseModel, SpecId};

/// Outcome of one submission, addressed to the spec that issued it.
#[derive(Debug)]
pub struct Completion {
    pub spec_id: SpecId,
    /// Submission generation for this spec; completions carrying a stale
    /// generation are discarded by [`crate::network::Dispatcher::accept`].
    pub generation: u64,
    pub response: ResponseModel,
}

pub type CompletionSender = mpsc::UnboundedSender<Completion>;
pub type CompletionReceiver = mpsc::UnboundedReceiver<Completion>;

/// Create the channel the interactive loop receives completions on.
pub fn completion_channel() -> (CompletionSender, CompletionReceiver) {
    mpsc::unbounded_channel()
}
