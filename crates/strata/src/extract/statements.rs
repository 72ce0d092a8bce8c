use super::{Extraction, Extractor, ensure_dir, read_source};
use crate::config::ExtractConfig;
use crate::error::{ExtractError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use strata_facts::{FactGraph, Namespace, StatementKind, build_statement};
use strata_output::{write_raw_facts, write_statement};
use tracing::{debug, info, warn};

/// Files written for one company-facts document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementExtraction {
    /// Statement CSV per statement that had data
    pub files: BTreeMap<StatementKind, PathBuf>,
    /// Archived fact graph, if requested and written
    pub raw_json: Option<PathBuf>,
    /// Number of statements written
    pub statement_count: usize,
}

/// Builds income statement, balance sheet and cash flow CSVs from an XBRL
/// company-facts document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementExtractor {
    config: ExtractConfig,
}

impl StatementExtractor {
    /// Creates an extractor with the configured units, namespace and
    /// concept lists.
    pub fn from_config(config: &ExtractConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Skips or enables the raw `company_facts.json` archive.
    pub fn with_raw_facts(mut self, save: bool) -> Self {
        self.config.save_raw_facts = save;
        self
    }

    /// Reads and parses a company-facts document.
    pub fn load_graph(source: &Path) -> Result<FactGraph> {
        let json = read_source(source)?;
        FactGraph::from_json(&json).map_err(|err| ExtractError::source_invalid(source, err))
    }

    fn namespace<'a>(&self, source: &Path, graph: &'a FactGraph) -> Result<Namespace<'a>> {
        graph
            .namespace(&self.config.facts_namespace)
            .map_err(|err| ExtractError::source_invalid(source, err))
    }

    /// Builds one statement over an arbitrary concept list and writes it to
    /// `output`.
    pub fn extract_custom(
        &self,
        source: &Path,
        concepts: &[String],
        output: &Path,
    ) -> Result<Extraction<PathBuf>> {
        let graph = Self::load_graph(source)?;
        let namespace = self.namespace(source, &graph)?;
        info!(source = %source.display(), concepts = concepts.len(), "extracting_custom_statement");

        let Some(statement) = build_statement(&namespace, concepts, &self.config.preferred_units)
        else {
            warn!(output = %output.display(), "statement_without_data");
            return Ok(Extraction::NoQualifyingData);
        };

        write_statement(&statement, output)?;
        info!(rows = statement.rows().len(), output = %output.display(), "custom_statement_extracted");
        Ok(Extraction::Extracted(output.to_path_buf()))
    }
}

impl Default for StatementExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractConfig::default())
    }
}

impl Extractor for StatementExtractor {
    type Output = StatementExtraction;

    fn extract(&self, source: &Path, target: &Path) -> Result<Extraction<StatementExtraction>> {
        let graph = Self::load_graph(source)?;
        let namespace = self.namespace(source, &graph)?;
        ensure_dir(target)?;
        info!(
            source = %source.display(),
            entity = graph.entity_name().unwrap_or("unknown"),
            concepts = namespace.len(),
            "extracting_statements"
        );

        let raw_json = if self.config.save_raw_facts {
            match write_raw_facts(&graph, target) {
                Ok(path) => Some(path),
                Err(err) => {
                    warn!(error = %err, "raw_facts_write_failed");
                    None
                }
            }
        } else {
            None
        };

        let mut files = BTreeMap::new();
        for kind in StatementKind::ALL {
            let concepts = self.config.concepts(kind);
            let Some(statement) = build_statement(&namespace, concepts, &self.config.preferred_units)
            else {
                warn!(statement = %kind, "statement_without_data");
                continue;
            };

            let path = target.join(kind.file_name());
            write_statement(&statement, &path)?;
            debug!(statement = %kind, rows = statement.rows().len(), "statement_written");
            files.insert(kind, path);
        }

        if files.is_empty() {
            return Ok(Extraction::NoQualifyingData);
        }

        info!(statements = files.len(), "statements_extracted");
        Ok(Extraction::Extracted(StatementExtraction {
            statement_count: files.len(),
            files,
            raw_json,
        }))
    }
}
