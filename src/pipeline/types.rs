//! Shared types for the attachment enrichment pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What came back for one attachment: a description, or the failure text.
///
/// Failures are data here, not errors: they render inline alongside
/// successes and never abort the fold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// The service produced a description.
    Analysis { text: String },
    /// The service call failed; `message` is the failure's display text.
    Error { message: String },
}

/// One qualifying attachment's result. Produced in input order,
/// discarded after being folded into the outgoing context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    /// Resolved source identifier (URL or local path).
    pub source: String,
    /// Description or error.
    pub outcome: AnalysisOutcome,
    /// When the service call finished.
    pub analyzed_at: DateTime<Utc>,
}

impl ImageAnalysis {
    /// Render as the numbered block injected into the context.
    /// `index` is zero-based; the label is one-based.
    pub fn render(&self, index: usize) -> String {
        match &self.outcome {
            AnalysisOutcome::Analysis { text } => {
                format!("\n**Image {}** ({}):\n{}", index + 1, self.source, text)
            }
            AnalysisOutcome::Error { message } => {
                format!("\n**Image {}** ({}):\nError: {}", index + 1, self.source, message)
            }
        }
    }
}
