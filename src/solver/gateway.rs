use std::collections::{BTreeMap, VecDeque};

use crate::foundation::error::{FlagError, FlagResult};
use crate::solver::wire::{SolverRequest, SolverResponse};

/// Outbound half of the solver round trip.
///
/// `dispatch` only sends; the answer is delivered later by the host through
/// [`crate::EditingSession::on_solver_response`]. An `Err` means the request never left, and the
/// session will not wait for an answer.
pub trait SolverGateway {
    /// Send one request.
    fn dispatch(&mut self, request: &SolverRequest) -> FlagResult<()>;
}

/// In-memory gateway for tests, replays and debugging.
///
/// Records every dispatched request and hands out queued responses in FIFO order.
#[derive(Debug, Default)]
pub struct QueuedSolver {
    requests: Vec<SolverRequest>,
    responses: VecDeque<SolverResponse>,
    fail_next: Option<String>,
}

impl QueuedSolver {
    /// Create an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway pre-loaded with responses.
    pub fn with_responses(responses: impl IntoIterator<Item = SolverResponse>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queue a response for a later request.
    pub fn push_response(&mut self, response: SolverResponse) {
        self.responses.push_back(response);
    }

    /// Make the next `dispatch` fail with `reason`.
    pub fn fail_next_dispatch(&mut self, reason: impl Into<String>) {
        self.fail_next = Some(reason.into());
    }

    /// Requests dispatched so far.
    pub fn requests(&self) -> &[SolverRequest] {
        &self.requests
    }

    /// Pop the next queued response.
    pub fn next_response(&mut self) -> Option<SolverResponse> {
        self.responses.pop_front()
    }

    /// Number of responses still queued.
    pub fn pending_responses(&self) -> usize {
        self.responses.len()
    }
}

impl SolverGateway for QueuedSolver {
    fn dispatch(&mut self, request: &SolverRequest) -> FlagResult<()> {
        if let Some(reason) = self.fail_next.take() {
            return Err(FlagError::Other(anyhow::anyhow!(reason)));
        }
        self.requests.push(request.clone());
        Ok(())
    }
}

/// Caller-owned table mapping solver error codes to user-facing text.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ErrorMessages {
    messages: BTreeMap<u32, String>,
}

impl ErrorMessages {
    /// Empty table; every code maps to the generic fallback.
    pub fn empty() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }

    /// Add or replace the message of `code`.
    pub fn with(mut self, code: u32, message: impl Into<String>) -> Self {
        self.messages.insert(code, message.into());
        self
    }

    /// Message for `code`, or a generic text naming the code.
    pub fn message_for(&self, code: u32) -> String {
        self.messages
            .get(&code)
            .cloned()
            .unwrap_or_else(|| format!("solver reported error code {code}"))
    }
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self::empty()
            .with(0, "No error.")
            .with(1, "The tuple of flags is not positive.")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/solver/gateway.rs"]
mod tests;
