//! Width and count limits for parsed tables.

use crate::table::Table;

/// Keeps tables at least `min_columns` wide, stopping after `max_tables`.
///
/// Tables past the limit are dropped silently. Order is preserved.
pub fn normalize_tables(tables: Vec<Table>, min_columns: usize, max_tables: usize) -> Vec<Table> {
    let parsed = tables.len();
    let kept: Vec<Table> = tables
        .into_iter()
        .filter(|table| table.width() >= min_columns)
        .take(max_tables)
        .collect();

    tracing::debug!(parsed, kept = kept.len(), min_columns, max_tables, "tables_normalized");
    kept
}
