//! Dispatcher - executes one request per submit off the interactive thread
//! and routes the outcome back over the completion channel.

use std::collections::HashMap;

use crate::messages::{Completion, CompletionSender};
use crate::models::{RequestSpec, ResponseModel, SpecId};
use crate::network::client::{create_client, execute};
use crate::wire::build_wire_request;

/// Executes submissions on the Tokio runtime and tags each with a per-spec
/// generation number.
///
/// Submissions on the same spec can complete out of order; the generation
/// check in [`Dispatcher::accept`] makes sure only the latest-issued
/// submission becomes visible. A superseded exchange still runs to completion
/// in the background - there is no cancellation - its completion is simply
/// dropped on arrival.
pub struct Dispatcher {
    client: reqwest::Client,
    completion_tx: CompletionSender,
    generations: HashMap<SpecId, u64>,
}

impl Dispatcher {
    pub fn new(completion_tx: CompletionSender) -> Self {
        Dispatcher {
            client: create_client(),
            completion_tx,
            generations: HashMap::new(),
        }
    }

    /// Submit one exchange for the given spec. Returns the generation
    /// assigned to this submission.
    ///
    /// The spec is only read; the wire request is built here, on the calling
    /// thread, so the worker never touches the mutable spec.
    pub fn submit(&mut self, spec: &RequestSpec) -> u64 {
        let generation = self
            .generations
            .entry(spec.id)
            .and_modify(|g| *g += 1)
            .or_insert(1);
        let generation = *generation;

        let wire = build_wire_request(spec);
        tracing::info!(
            spec = spec.id.0,
            generation,
            method = wire.method.as_str(),
            url = %wire.url,
            "Submitting request"
        );

        let client = self.client.clone();
        let completion_tx = self.completion_tx.clone();
        let spec_id = spec.id;

        tokio::spawn(async move {
            let response = execute(&client, wire).await;
            tracing::info!(
                spec = spec_id.0,
                generation,
                status = ?response.status,
                "Request completed"
            );
            // Receiver side may be gone during shutdown; nothing to do then.
            let _ = completion_tx.send(Completion {
                spec_id,
                generation,
                response,
            });
        });

        generation
    }

    /// True when the completion carries the latest generation issued for its
    /// spec.
    pub fn is_current(&self, completion: &Completion) -> bool {
        self.generations.get(&completion.spec_id) == Some(&completion.generation)
    }

    /// Accept a completion from the channel, discarding stale ones.
    ///
    /// Returns the response only if this completion belongs to the latest
    /// submission for its spec; a completion superseded by a newer submit is
    /// dropped so the interactive thread never displays an outdated exchange.
    pub fn accept(&self, completion: Completion) -> Option<ResponseModel> {
        if self.is_current(&completion) {
            Some(completion.response)
        } else {
            tracing::debug!(
                spec = completion.spec_id.0,
                generation = completion.generation,
                "Discarding stale completion"
            );
            None
        }
    }
}
