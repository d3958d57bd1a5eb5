use tracing::{debug, info, warn};

use super::{ErrorClassifier, ErrorKind, RequestPhase, RequestState};
use crate::transport::{
    Completion, CompletionOutcome, CompletionRequest, CompletionTransport, RequestTicket,
};

/// Result of a `submit` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The call was issued; its completion must carry this ticket
    Started(RequestTicket),
    /// Text was empty after trimming; nothing was sent
    RejectedEmpty,
    /// A request is already pending
    RejectedBusy,
}

/// What happened to a delivered completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionDisposition {
    /// Applied; the request is now in this terminal phase
    Applied(RequestPhase),
    /// Belonged to a superseded request and was dropped
    Stale,
}

/// Owns `RequestState` and the generation counter used to reject stale results
#[derive(Debug, Default)]
pub struct RequestLifecycle {
    state: RequestState,
    generation: u64,
    classifier: ErrorClassifier,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(classifier: ErrorClassifier) -> Self {
        Self {
            classifier,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn phase(&self) -> RequestPhase {
        self.state.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.state.phase == RequestPhase::Pending
    }

    /// Validate and issue a request.
    ///
    /// Allowed from `Idle`, `Success` and `Failed`; refused while `Pending`.
    pub fn submit(
        &mut self,
        text: &str,
        system_prompt: &str,
        transport: &mut dyn CompletionTransport,
    ) -> SubmitOutcome {
        if self.is_pending() {
            debug!(
                generation = self.generation,
                "Submit refused: request already pending"
            );
            return SubmitOutcome::RejectedBusy;
        }

        let prompt = text.trim();
        if prompt.is_empty() {
            debug!("Submit refused: empty prompt");
            return SubmitOutcome::RejectedEmpty;
        }

        self.generation += 1;
        let ticket = RequestTicket {
            generation: self.generation,
        };
        self.state = RequestState {
            phase: RequestPhase::Pending,
            result_text: String::new(),
            error_kind: ErrorKind::None,
        };

        info!(
            generation = ticket.generation,
            chars = prompt.chars().count(),
            "Submitting completion request"
        );
        transport.send(
            ticket,
            CompletionRequest {
                prompt: prompt.to_string(),
                system_prompt: system_prompt.to_string(),
            },
        );
        SubmitOutcome::Started(ticket)
    }

    /// Apply a delivered completion if it belongs to the current request
    pub fn complete(&mut self, completion: Completion) -> CompletionDisposition {
        if completion.ticket.generation != self.generation || !self.is_pending() {
            debug!(
                ticket = completion.ticket.generation,
                current = self.generation,
                "Dropping stale completion"
            );
            return CompletionDisposition::Stale;
        }

        match completion.outcome {
            CompletionOutcome::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    warn!(generation = self.generation, "Completion returned no text");
                    self.fail(ErrorKind::Empty);
                } else {
                    self.state.phase = RequestPhase::Success;
                    self.state.result_text = text.to_string();
                    self.state.error_kind = ErrorKind::None;
                }
            }
            CompletionOutcome::Failed(description) => {
                let kind = self.classifier.classify(&description);
                warn!(
                    generation = self.generation,
                    kind = ?kind,
                    "Completion failed: {}",
                    description
                );
                self.fail(kind);
            }
        }

        CompletionDisposition::Applied(self.state.phase)
    }

    /// Start a fresh session: back to `Idle`, any in-flight result becomes stale
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = RequestState::default();
    }

    fn fail(&mut self, kind: ErrorKind) {
        self.state.phase = RequestPhase::Failed;
        self.state.result_text.clear();
        self.state.error_kind = kind;
    }
}
