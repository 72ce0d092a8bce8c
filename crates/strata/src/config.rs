//! Extraction configuration.

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strata_facts::{StatementKind, concepts};

/// Settings shared by the extractors.
///
/// Missing fields in a configuration file take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Tables narrower than this are skipped
    pub min_table_columns: usize,

    /// At most this many tables are kept per document
    pub max_tables_per_file: usize,

    /// Units tried in order when resolving a concept
    pub preferred_units: Vec<String>,

    /// Taxonomy namespace holding the statement concepts
    pub facts_namespace: String,

    /// Income statement columns
    pub income_statement_concepts: Vec<String>,

    /// Balance sheet columns
    pub balance_sheet_concepts: Vec<String>,

    /// Cash flow statement columns
    pub cash_flow_concepts: Vec<String>,

    /// Archive the unmodified fact graph next to the statements
    pub save_raw_facts: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_table_columns: 2,
            max_tables_per_file: 200,
            preferred_units: vec!["USD".to_string(), "shares".to_string()],
            facts_namespace: "us-gaap".to_string(),
            income_statement_concepts: concepts::defaults(StatementKind::IncomeStatement),
            balance_sheet_concepts: concepts::defaults(StatementKind::BalanceSheet),
            cash_flow_concepts: concepts::defaults(StatementKind::CashFlow),
            save_raw_facts: true,
        }
    }
}

impl ExtractConfig {
    /// Loads and validates a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| ExtractError::Config(format!("{}: {err}", path.display())))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|err| ExtractError::Config(format!("{}: {err}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no extraction can run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_tables_per_file == 0 {
            return Err(ExtractError::Config(
                "max_tables_per_file must be at least 1".to_string(),
            ));
        }
        if self.preferred_units.is_empty() {
            return Err(ExtractError::Config("preferred_units must not be empty".to_string()));
        }
        Ok(())
    }

    /// Concept columns for a statement.
    pub fn concepts(&self, kind: StatementKind) -> &[String] {
        match kind {
            StatementKind::IncomeStatement => &self.income_statement_concepts,
            StatementKind::BalanceSheet => &self.balance_sheet_concepts,
            StatementKind::CashFlow => &self.cash_flow_concepts,
        }
    }
}
