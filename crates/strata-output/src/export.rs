//! Export plumbing shared by every artifact.
//!
//! Artifacts render themselves to a string in an [`ExportFormat`]; writing
//! to disk is a thin layer on top that creates missing directories.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact cannot be rendered in the requested format.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,

    /// Markdown text.
    Markdown,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
            Self::Markdown => "md",
        }
    }
}

/// Trait for exporting artifacts in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the artifact has no
    /// rendering in `format`.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format, creating parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, directory creation or file writing
    /// fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), format = format.extension(), "file_written");
        Ok(())
    }
}

/// Writes records to CSV. Records may differ in length.
pub(crate) fn csv_string<I, R>(records: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(vec![]);
    for record in records {
        wtr.write_record(record)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ExportError::InvalidFormat(e.to_string()))
}

pub(crate) fn unsupported(artifact: &str, format: ExportFormat) -> ExportError {
    ExportError::InvalidFormat(format!("{artifact} cannot be exported as {format:?}"))
}
