//! Statement CSVs and the raw company-facts archive.

use crate::export::{ExportError, ExportFormat, Exporter, csv_string, unsupported};
use serde_json::Value;
use std::path::{Path, PathBuf};
use strata_facts::{FactGraph, Statement};

/// File name of the raw fact-graph archive.
pub const RAW_FACTS_FILE: &str = "company_facts.json";

impl Exporter for Statement {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_string(
                std::iter::once(self.header()).chain(self.rows().iter().map(|row| row.record())),
            ),
            _ => Err(unsupported("statement", format)),
        }
    }
}

impl Exporter for FactGraph {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        export_json(self.raw(), format)
    }
}

fn export_json(value: &Value, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string(value)?),
        ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(value)?),
        ExportFormat::Csv | ExportFormat::Markdown => Err(unsupported("fact graph", format)),
    }
}

/// Writes a statement CSV to `path`.
pub fn write_statement(statement: &Statement, path: &Path) -> Result<(), ExportError> {
    statement.export_to_file(path, ExportFormat::Csv)
}

/// Writes the unmodified graph, pretty-printed, to `dir/company_facts.json`.
pub fn write_raw_facts(graph: &FactGraph, dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(RAW_FACTS_FILE);
    graph.export_to_file(&path, ExportFormat::PrettyJson)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strata_facts::build_statement;

    fn graph() -> FactGraph {
        FactGraph::from_value(json!({"facts": {"us-gaap": {
            "Assets": {"units": {"USD": [
                {"end": "2023-12-31", "val": 500, "filed": "2024-02-01"},
                {"end": "2023-12-31", "val": 510, "filed": "2024-02-20"}
            ]}},
            "Revenues": {"units": {"USD": [
                {"start": "2023-01-01", "end": "2023-12-31", "val": 1234.5, "filed": "2024-02-01"},
                {"start": "2022-01-01", "end": "2022-12-31", "val": "n/a", "filed": "2023-02-01"}
            ]}}
        }}}))
        .unwrap()
    }

    #[test]
    fn test_statement_csv() {
        let graph = graph();
        let namespace = graph.namespace("us-gaap").unwrap();
        let concepts = vec!["Assets".to_string(), "Goodwill".to_string(), "Revenues".to_string()];
        let statement = build_statement(&namespace, &concepts, &["USD"]).unwrap();

        let csv = statement.export_to_string(ExportFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "Date,Assets,Goodwill,Revenues\n2022-12-31,,,n/a\n2023-12-31,510,,1234.5\n"
        );
    }

    #[test]
    fn test_statement_is_csv_only() {
        let graph = graph();
        let namespace = graph.namespace("us-gaap").unwrap();
        let statement = build_statement(&namespace, &["Assets".to_string()], &["USD"]).unwrap();
        assert!(statement.export_to_string(ExportFormat::Json).is_err());
    }

    #[test]
    fn test_raw_graph_round_trips() {
        let graph = graph();
        let pretty = graph.export_to_string(ExportFormat::PrettyJson).unwrap();
        assert!(pretty.starts_with("{\n  \"facts\""));
        assert_eq!(&FactGraph::from_json(&pretty).unwrap(), &graph);
    }
}
