//! Findings reported by rules and rendered by formatters.

use serde::{Deserialize, Serialize};

/// Line/column position inside a source file (both 1-based).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A single finding produced by a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    /// The rule that produced this failure.
    pub rule_name: String,

    /// Human-readable message.
    pub message: String,

    /// File the failure was found in.
    pub path: String,

    /// Where the failure starts.
    pub position: Position,

    /// How sure the rule is about the finding, in `0.0..=1.0`.
    pub confidence: f64,
}

impl Failure {
    /// Creates a failure with full confidence.
    pub fn new(
        rule_name: impl Into<String>,
        message: impl Into<String>,
        path: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            rule_name: rule_name.into(),
            message: message.into(),
            path: path.into(),
            position,
            confidence: 1.0,
        }
    }

    /// Sets the confidence.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}
