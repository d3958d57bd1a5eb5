//! Completion transport
//!
//! The boundary between the single-threaded dialog engine and the remote
//! completion endpoint. `send` is fire-and-forget; the result comes back later
//! as a [`Completion`] tagged with the [`RequestTicket`] it was sent with, and
//! the lifecycle discards it if the ticket is no longer current.

mod http;

pub use http::{extract_reply_text, HttpTransport};

/// Identifies one submitted request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    /// Lifecycle generation at submit time
    pub generation: u64,
}

/// What the engine sends: the user's trimmed prompt plus the fixed system prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub system_prompt: String,
}

/// Terminal result of one remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The endpoint answered; the text may still be empty
    Text(String),
    /// Transport or server failure, with a free-text description
    Failed(String),
}

/// A tagged result delivered back to the control thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub ticket: RequestTicket,
    pub outcome: CompletionOutcome,
}

impl Completion {
    pub fn text(ticket: RequestTicket, text: impl Into<String>) -> Self {
        Self {
            ticket,
            outcome: CompletionOutcome::Text(text.into()),
        }
    }

    pub fn failed(ticket: RequestTicket, description: impl Into<String>) -> Self {
        Self {
            ticket,
            outcome: CompletionOutcome::Failed(description.into()),
        }
    }
}

/// Issues remote completion calls without blocking the caller
pub trait CompletionTransport {
    /// Start a call. The result must eventually be delivered (by whatever
    /// channel the implementation uses) as a `Completion` carrying `ticket`.
    fn send(&mut self, ticket: RequestTicket, request: CompletionRequest);
}
