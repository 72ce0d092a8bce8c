//! Runs every applicable extractor over one filing.
//!
//! Each extractor writes into its own subdirectory. A failing extractor is
//! logged and recorded; the others still run.

use serde::Serialize;
use std::path::Path;
use strata::{
    ExtractConfig, Extraction, Extractor, SectionExtraction, SectionExtractor,
    StatementExtraction, StatementExtractor, TableExtraction, TableExtractor,
};

/// Result of one pipeline step.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum StepOutcome<T> {
    Done(Extraction<T>),
    Failed { status: &'static str, error: String },
}

impl<T> StepOutcome<T> {
    fn from_result(step: &str, result: strata::Result<Extraction<T>>) -> Self {
        match result {
            Ok(extraction) => Self::Done(extraction),
            Err(err) => {
                tracing::error!(step, error = %err, "extractor_failed");
                Self::Failed {
                    status: "failed",
                    error: err.to_string(),
                }
            }
        }
    }

    pub(crate) const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Outcomes of a full pipeline run.
#[derive(Debug, Serialize)]
pub(crate) struct PipelineReport {
    pub(crate) tables: StepOutcome<TableExtraction>,
    pub(crate) sections: StepOutcome<SectionExtraction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) statements: Option<StepOutcome<StatementExtraction>>,
}

/// Extracts tables and sections from `filing`, and statements from `facts`
/// when given, under `out/tables`, `out/sections` and `out/financials`.
pub(crate) fn run_all(
    config: &ExtractConfig,
    filing: &Path,
    facts: Option<&Path>,
    out: &Path,
) -> PipelineReport {
    tracing::info!(filing = %filing.display(), out = %out.display(), "pipeline_started");

    let tables = StepOutcome::from_result(
        "tables",
        TableExtractor::from_config(config).extract(filing, &out.join("tables")),
    );
    let sections = StepOutcome::from_result(
        "sections",
        SectionExtractor::new().extract(filing, &out.join("sections")),
    );
    let statements = facts.map(|facts| {
        StepOutcome::from_result(
            "statements",
            StatementExtractor::from_config(config).extract(facts, &out.join("financials")),
        )
    });

    tracing::info!(
        tables_failed = tables.is_failed(),
        sections_failed = sections.is_failed(),
        statements_failed = statements.as_ref().is_some_and(StepOutcome::is_failed),
        "pipeline_finished"
    );

    PipelineReport {
        tables,
        sections,
        statements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_failures_are_isolated() {
        let dir = TempDir::new().unwrap();
        let filing = dir.path().join("f.htm");
        fs::write(
            &filing,
            "<p>Item 1. Business</p><p>Widgets.</p><table><tr><td>a</td><td>b</td></tr></table>",
        )
        .unwrap();
        let facts = dir.path().join("missing.json");

        let report = run_all(&ExtractConfig::default(), &filing, Some(&facts), &dir.path().join("out"));

        assert!(matches!(report.tables, StepOutcome::Done(Extraction::Extracted(_))));
        assert!(matches!(report.sections, StepOutcome::Done(Extraction::Extracted(_))));
        assert!(report.statements.as_ref().is_some_and(StepOutcome::is_failed));
        assert!(dir.path().join("out/sections/Item_1.md").exists());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tables"]["status"], "extracted");
        assert_eq!(json["statements"]["status"], "failed");
    }

    #[test]
    fn test_statements_skipped_without_facts() {
        let dir = TempDir::new().unwrap();
        let filing = dir.path().join("f.htm");
        fs::write(&filing, "<p>nothing</p>").unwrap();

        let report = run_all(&ExtractConfig::default(), &filing, None, dir.path());
        assert!(report.statements.is_none());
        assert!(matches!(report.tables, StepOutcome::Done(Extraction::NoQualifyingData)));

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("statements").is_none());
    }
}
