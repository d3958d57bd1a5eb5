//! Request lifecycle
//!
//! State machine for the one outstanding completion call of a dialog session.

mod classify;
mod lifecycle;

use serde::{Deserialize, Serialize};

pub use classify::{ClassifierRule, ErrorClassifier};
pub use lifecycle::{CompletionDisposition, RequestLifecycle, SubmitOutcome};

/// Phase of the outstanding request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Pending,
    Success,
    Failed,
}

/// Why a request ended in `Failed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[default]
    None,
    /// The endpoint answered with no usable text
    Empty,
    Network,
    Timeout,
    ServerError,
    Unknown,
}

impl ErrorKind {
    /// Human-readable caption shown in place of the reply
    pub fn caption(&self) -> &'static str {
        match self {
            ErrorKind::None => "",
            ErrorKind::Empty => "No answer came back, please try again",
            ErrorKind::Network => "Network unavailable, check your connection",
            ErrorKind::Timeout => "The request timed out, please try again",
            ErrorKind::ServerError => "The server had a problem, please try later",
            ErrorKind::Unknown => "Something went wrong, please try again",
        }
    }
}

/// Observable request state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    pub phase: RequestPhase,
    pub result_text: String,
    pub error_kind: ErrorKind,
}
