//! Failure classification
//!
//! Best-effort mapping from a transport's free-text failure description to an
//! [`ErrorKind`]. Transports describe failures in free text, so this is a
//! substring table: first matching rule wins, anything else is `Unknown`.

use serde::{Deserialize, Serialize};

use super::ErrorKind;

/// One substring rule (matched case-insensitively)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierRule {
    pub needle: String,
    pub kind: ErrorKind,
}

/// Ordered rule table
#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    rules: Vec<ClassifierRule>,
}

/// Default rules. Timeout comes before network because reqwest descriptions of
/// timed-out connects mention both.
const DEFAULT_RULES: &[(&str, ErrorKind)] = &[
    ("timeout", ErrorKind::Timeout),
    ("timed out", ErrorKind::Timeout),
    ("network", ErrorKind::Network),
    ("connect", ErrorKind::Network),
    ("dns", ErrorKind::Network),
    ("unreachable", ErrorKind::Network),
    ("offline", ErrorKind::Network),
    ("server error", ErrorKind::ServerError),
    ("internal error", ErrorKind::ServerError),
    ("bad gateway", ErrorKind::ServerError),
    ("service unavailable", ErrorKind::ServerError),
    ("status 5", ErrorKind::ServerError),
];

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|(needle, kind)| ClassifierRule {
                    needle: (*needle).to_string(),
                    kind: *kind,
                })
                .collect(),
        }
    }
}

impl ErrorClassifier {
    /// Classifier with no rules; everything is `Unknown`
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule (checked after the existing ones)
    pub fn with_rule(mut self, needle: impl Into<String>, kind: ErrorKind) -> Self {
        self.rules.push(ClassifierRule {
            needle: needle.into().to_lowercase(),
            kind,
        });
        self
    }

    /// Default table with `custom` rules checked ahead of it
    pub fn with_overrides(custom: &[ClassifierRule]) -> Self {
        let mut classifier = custom
            .iter()
            .fold(Self::empty(), |c, rule| c.with_rule(rule.needle.as_str(), rule.kind));
        classifier.rules.extend(Self::default().rules);
        classifier
    }

    pub fn classify(&self, description: &str) -> ErrorKind {
        let haystack = description.to_lowercase();
        self.rules
            .iter()
            .find(|rule| haystack.contains(&rule.needle))
            .map(|rule| rule.kind)
            .unwrap_or(ErrorKind::Unknown)
    }
}
