//! Table artifacts: one CSV per table plus an aggregate JSON document.

use crate::export::{ExportError, ExportFormat, Exporter, csv_string, unsupported};
use serde::Serialize;
use std::path::{Path, PathBuf};
use strata_markup::Table;

impl Exporter for Table {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_string(self.rows().iter().map(|row| row.cells())),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
            ExportFormat::Markdown => Err(unsupported("table", format)),
        }
    }
}

/// Aggregate record of every retained table from one source document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablesDocument<'a> {
    /// Source document path as given.
    pub source: String,
    /// Number of tables.
    pub table_count: usize,
    /// Tables as nested arrays.
    pub tables: &'a [Table],
}

impl<'a> TablesDocument<'a> {
    /// Creates the aggregate record.
    pub fn new(source: &Path, tables: &'a [Table]) -> Self {
        Self {
            source: source.display().to_string(),
            table_count: tables.len(),
            tables,
        }
    }
}

impl Exporter for TablesDocument<'_> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
            ExportFormat::Csv | ExportFormat::Markdown => Err(unsupported("tables document", format)),
        }
    }
}

/// Paths written by [`write_tables`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFiles {
    /// One CSV per table, in table order.
    pub csv_files: Vec<PathBuf>,
    /// Aggregate JSON document.
    pub json_file: PathBuf,
}

/// Writes `<stem>_table_<n>.csv` for each table (numbered from 1) and
/// `<stem>_tables.json` into `dir`.
pub fn write_tables(
    source: &Path,
    tables: &[Table],
    dir: &Path,
) -> Result<TableFiles, ExportError> {
    let stem = source
        .file_stem()
        .map_or_else(|| "document".into(), |stem| stem.to_string_lossy());

    let csv_files = tables
        .iter()
        .enumerate()
        .map(|(i, table)| -> Result<PathBuf, ExportError> {
            let path = dir.join(format!("{stem}_table_{}.csv", i + 1));
            table.export_to_file(&path, ExportFormat::Csv)?;
            Ok(path)
        })
        .collect::<Result<Vec<_>, ExportError>>()?;

    let json_file = dir.join(format!("{stem}_tables.json"));
    TablesDocument::new(source, tables).export_to_file(&json_file, ExportFormat::PrettyJson)?;

    Ok(TableFiles {
        csv_files,
        json_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_markup::Row;

    fn table() -> Table {
        Table::new(vec![
            Row::from_iter(["Segment", "Revenue"]),
            Row::from_iter(["North America"]),
            Row::from_iter(["Europe", "800", "restated"]),
        ])
    }

    #[test]
    fn test_table_csv_keeps_ragged_rows() {
        let csv = table().export_to_string(ExportFormat::Csv).unwrap();
        assert_eq!(csv, "Segment,Revenue\nNorth America\nEurope,800,restated\n");
    }

    #[test]
    fn test_table_json_is_nested_arrays() {
        let json = table().export_to_string(ExportFormat::Json).unwrap();
        assert_eq!(
            json,
            r#"[["Segment","Revenue"],["North America"],["Europe","800","restated"]]"#
        );
    }

    #[test]
    fn test_table_has_no_markdown() {
        assert!(matches!(
            table().export_to_string(ExportFormat::Markdown),
            Err(ExportError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_document_shape() {
        let tables = vec![table()];
        let json = TablesDocument::new(Path::new("filings/10k.htm"), &tables)
            .export_to_string(ExportFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "filings/10k.htm");
        assert_eq!(value["table_count"], 1);
        assert_eq!(value["tables"][0][2][2], "restated");
    }
}
