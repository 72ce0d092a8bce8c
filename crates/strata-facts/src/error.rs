//! Error types for fact-graph operations.

use thiserror::Error;

/// Result type for fact-graph operations.
pub type Result<T> = std::result::Result<T, FactsError>;

/// Errors that can occur while reading a fact graph.
#[derive(Debug, Error)]
pub enum FactsError {
    /// JSON parsing error
    #[error("Fact graph is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The graph does not have the expected shape
    #[error("Invalid fact graph: {0}")]
    InvalidGraph(String),

    /// A single concept record is malformed
    #[error("Malformed concept {concept}: {reason}")]
    MalformedConcept {
        /// Concept name
        concept: String,
        /// What was wrong with it
        reason: String,
    },
}
