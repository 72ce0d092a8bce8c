//! Date-indexed financial statements.

use crate::graph::Namespace;
use crate::series::resolve;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// The three standard statements.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    /// Income statement
    #[display("IS")]
    #[serde(rename = "IS")]
    IncomeStatement,
    /// Balance sheet
    #[display("BS")]
    #[serde(rename = "BS")]
    BalanceSheet,
    /// Cash flow statement
    #[display("CF")]
    #[serde(rename = "CF")]
    CashFlow,
}

impl StatementKind {
    /// All statements in output order.
    pub const ALL: [Self; 3] = [Self::IncomeStatement, Self::BalanceSheet, Self::CashFlow];

    /// Output file name, e.g. `BS.csv`.
    pub fn file_name(self) -> String {
        format!("{self}.csv")
    }
}

/// One statement row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRow {
    date: String,
    values: Vec<Option<Value>>,
}

impl StatementRow {
    /// Reporting date.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// One value per concept column, `None` where the concept has no value
    /// for this date.
    pub fn values(&self) -> &[Option<Value>] {
        &self.values
    }

    /// The row as CSV fields: the date followed by rendered values.
    pub fn record(&self) -> Vec<String> {
        std::iter::once(self.date.clone())
            .chain(self.values.iter().map(|value| value.as_ref().map_or_else(String::new, cell_text)))
            .collect()
    }
}

/// A statement over a fixed concept list.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    concepts: Vec<String>,
    rows: Vec<StatementRow>,
}

impl Statement {
    /// Concept columns in list order.
    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    /// Rows in ascending date order.
    pub fn rows(&self) -> &[StatementRow] {
        &self.rows
    }

    /// Header record: `Date` followed by the concept names.
    pub fn header(&self) -> Vec<String> {
        std::iter::once("Date".to_string())
            .chain(self.concepts.iter().cloned())
            .collect()
    }

    /// Looks up a single value.
    pub fn value(&self, date: &str, concept: &str) -> Option<&Value> {
        let column = self.concepts.iter().position(|name| name == concept)?;
        let row = self.rows.iter().find(|row| row.date == date)?;
        row.values.get(column)?.as_ref()
    }
}

/// Builds a statement over `concepts`.
///
/// Concepts missing from the namespace keep their column with every cell
/// empty. Returns `None` when no concept resolves to any dated value.
pub fn build_statement<S: AsRef<str>>(
    namespace: &Namespace<'_>,
    concepts: &[String],
    preferred_units: &[S],
) -> Option<Statement> {
    let series: Vec<_> = concepts
        .iter()
        .map(|concept| {
            namespace
                .fact(concept)
                .map(|fact| resolve(&fact, preferred_units))
                .unwrap_or_default()
        })
        .collect();

    let dates: BTreeSet<&str> = series.iter().flat_map(|resolved| resolved.dates()).collect();
    if dates.is_empty() {
        return None;
    }

    let rows = dates
        .into_iter()
        .map(|date| StatementRow {
            date: date.to_string(),
            values: series
                .iter()
                .map(|resolved| resolved.get(date).map(|point| point.value.clone()))
                .collect(),
        })
        .collect();

    Some(Statement {
        concepts: concepts.to_vec(),
        rows,
    })
}

/// Renders a value for CSV: numbers as written in the source, strings
/// verbatim, null empty.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::FactGraph;
    use serde_json::json;

    const UNITS: [&str; 2] = ["USD", "shares"];

    fn graph() -> FactGraph {
        FactGraph::from_value(json!({"facts": {"us-gaap": {
            "Assets": {"units": {"USD": [
                {"end": "2023-12-31", "val": 500, "filed": "2024-02-01"},
                {"end": "2023-12-31", "val": 510, "filed": "2024-02-20"},
                {"end": "2022-12-31", "val": 450.5, "filed": "2023-02-01"}
            ]}},
            "Liabilities": {"units": {"USD": [
                {"end": "2023-12-31", "val": null, "filed": "2024-02-01"}
            ]}},
            "CommonStockSharesOutstanding": {"units": {"shares": [
                {"instant": "2024-01-31", "val": "1,000", "filed": "2024-02-01"}
            ]}},
            "Broken": "oops"
        }}}))
        .unwrap()
    }

    fn concepts(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn test_latest_filing_in_statement() {
        let graph = graph();
        let namespace = graph.namespace("us-gaap").unwrap();
        let statement = build_statement(&namespace, &concepts(&["Assets"]), &UNITS).unwrap();

        assert_eq!(statement.rows().len(), 2);
        assert_eq!(statement.value("2023-12-31", "Assets"), Some(&json!(510)));
        assert_eq!(statement.rows()[0].record(), ["2022-12-31", "450.5"]);
        assert_eq!(statement.rows()[1].record(), ["2023-12-31", "510"]);
    }

    #[test]
    fn test_missing_concepts_keep_column() {
        let graph = graph();
        let namespace = graph.namespace("us-gaap").unwrap();
        let statement = build_statement(
            &namespace,
            &concepts(&["Assets", "Goodwill", "Broken", "CommonStockSharesOutstanding"]),
            &UNITS,
        )
        .unwrap();

        assert_eq!(
            statement.header(),
            ["Date", "Assets", "Goodwill", "Broken", "CommonStockSharesOutstanding"]
        );
        let dates: Vec<&str> = statement.rows().iter().map(StatementRow::date).collect();
        assert_eq!(dates, ["2022-12-31", "2023-12-31", "2024-01-31"]);
        assert_eq!(statement.rows()[2].record(), ["2024-01-31", "", "", "", "1,000"]);
    }

    #[test]
    fn test_null_renders_empty() {
        let graph = graph();
        let namespace = graph.namespace("us-gaap").unwrap();
        let statement = build_statement(&namespace, &concepts(&["Liabilities"]), &UNITS).unwrap();
        assert_eq!(statement.rows()[0].record(), ["2023-12-31", ""]);
    }

    #[test]
    fn test_no_data_is_none() {
        let graph = graph();
        let namespace = graph.namespace("us-gaap").unwrap();
        assert!(build_statement(&namespace, &concepts(&["Goodwill", "Broken"]), &UNITS).is_none());
        assert!(build_statement(&namespace, &[], &UNITS).is_none());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(StatementKind::BalanceSheet.to_string(), "BS");
        assert_eq!(StatementKind::CashFlow.file_name(), "CF.csv");
        assert_eq!(serde_json::to_string(&StatementKind::IncomeStatement).unwrap(), "\"IS\"");
    }
}
