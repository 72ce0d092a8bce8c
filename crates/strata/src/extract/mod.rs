//! Extractors: read a source document, write structured artifacts.

mod sections;
mod statements;
mod tables;

pub use sections::{SectionExtraction, SectionExtractor};
pub use statements::{StatementExtraction, StatementExtractor};
pub use tables::{TableExtraction, TableExtractor};

use crate::error::{ExtractError, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Outcome of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum Extraction<T> {
    /// Artifacts were written.
    Extracted(T),
    /// The source was valid but held nothing to extract. Nothing was written.
    NoQualifyingData,
}

impl<T> Extraction<T> {
    /// Returns the result record, if anything was extracted.
    pub fn extracted(self) -> Option<T> {
        match self {
            Self::Extracted(result) => Some(result),
            Self::NoQualifyingData => None,
        }
    }

    /// True if nothing was extracted.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoQualifyingData)
    }
}

/// A converter from one source file to files under a target path.
pub trait Extractor {
    /// Result record describing what was written.
    type Output;

    /// Runs the extraction.
    ///
    /// # Errors
    ///
    /// [`ExtractError::SourceInvalid`] before any parsing if the source
    /// cannot be used; [`ExtractError::WriteFailure`] if output cannot be
    /// written.
    fn extract(&self, source: &Path, target: &Path) -> Result<Extraction<Self::Output>>;
}

/// Reads a source document after checking it exists, is a file and is not
/// empty. Invalid UTF-8 is replaced rather than rejected.
pub fn read_source(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|err| {
        let reason = if err.kind() == std::io::ErrorKind::NotFound {
            "file not found".to_string()
        } else {
            err.to_string()
        };
        ExtractError::source_invalid(path, reason)
    })?;

    if !metadata.is_file() {
        return Err(ExtractError::source_invalid(path, "not a file"));
    }
    if metadata.len() == 0 {
        return Err(ExtractError::source_invalid(path, "file is empty"));
    }

    let bytes = fs::read(path).map_err(|err| ExtractError::source_invalid(path, err))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}
