//! Submission model.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Review state of a visitor submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
        }
    }
}

/// A visitor-provided candidate gripe awaiting review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    /// ISO-8601 creation time
    pub timestamp: String,
    pub status: SubmissionStatus,
}

impl Submission {
    /// Create a pending submission stamped with the current time.
    pub fn pending(text: String) -> Self {
        Self {
            text,
            timestamp: Utc::now().to_rfc3339(),
            status: SubmissionStatus::Pending,
        }
    }
}

/// Submissions in arrival order; identified externally by position.
pub type Submissions = Vec<Submission>;
