//! Extraction error taxonomy.

use std::path::{Path, PathBuf};
use strata_output::ExportError;
use thiserror::Error;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur during extraction.
///
/// Finding nothing to extract is not an error; see
/// [`Extraction::NoQualifyingData`](crate::Extraction::NoQualifyingData).
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source is missing, not a file, empty, unreadable or unparseable
    #[error("Invalid source {}: {reason}", path.display())]
    SourceInvalid {
        /// Source path
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// An output file or directory could not be written
    #[error("Write failure: {0}")]
    WriteFailure(#[from] ExportError),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractError {
    pub(crate) fn source_invalid(path: &Path, reason: impl ToString) -> Self {
        Self::SourceInvalid {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        Self::WriteFailure(ExportError::Io(err))
    }
}
