use super::{Extraction, Extractor, ensure_dir, read_source};
use crate::config::ExtractConfig;
use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use strata_markup::{TableParser, normalize_tables};
use strata_output::write_tables;
use tracing::{info, warn};

/// Files written for one document's tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableExtraction {
    /// Source document
    pub source: PathBuf,
    /// One CSV per table
    pub csv_files: Vec<PathBuf>,
    /// All tables in one JSON document
    pub json_file: PathBuf,
    /// Number of tables written
    pub table_count: usize,
}

/// Extracts data tables from an HTML filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableExtractor {
    min_columns: usize,
    max_tables: usize,
}

impl TableExtractor {
    /// Creates an extractor keeping tables at least `min_columns` wide, at
    /// most `max_tables` of them.
    pub const fn new(min_columns: usize, max_tables: usize) -> Self {
        Self {
            min_columns,
            max_tables,
        }
    }

    /// Creates an extractor with the configured limits.
    pub const fn from_config(config: &ExtractConfig) -> Self {
        Self::new(config.min_table_columns, config.max_tables_per_file)
    }
}

impl Default for TableExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractConfig::default())
    }
}

impl Extractor for TableExtractor {
    type Output = TableExtraction;

    fn extract(&self, source: &Path, target: &Path) -> Result<Extraction<TableExtraction>> {
        let markup = read_source(source)?;
        ensure_dir(target)?;
        info!(source = %source.display(), "extracting_tables");

        let tables = normalize_tables(TableParser::parse(&markup), self.min_columns, self.max_tables);
        if tables.is_empty() {
            warn!(source = %source.display(), min_columns = self.min_columns, "no_qualifying_tables");
            return Ok(Extraction::NoQualifyingData);
        }

        let files = write_tables(source, &tables, target)?;
        info!(tables = tables.len(), "tables_extracted");

        Ok(Extraction::Extracted(TableExtraction {
            source: source.to_path_buf(),
            csv_files: files.csv_files,
            json_file: files.json_file,
            table_count: tables.len(),
        }))
    }
}
