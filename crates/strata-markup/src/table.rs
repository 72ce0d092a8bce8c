//! Streaming table reconstruction from filing markup.
//!
//! [`TableParser`] is a small state machine driven by [`Token`]s. Only the
//! outermost `<table>` of a nesting produces a [`Table`]; tables nested in a
//! cell raise the depth counter but contribute no rows or cells of their
//! own. Their text still lands in the enclosing cell.

use crate::token::{Token, Tokenizer};
use serde::{Deserialize, Serialize};

/// One table row: cell strings in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Vec<String>);

impl Row {
    /// Creates a row from cell strings.
    pub const fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Returns the cells of this row.
    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// Number of cells in this row.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A reconstructed table. Rows may be ragged; they are never padded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table(Vec<Row>);

impl Table {
    /// Creates a table from rows.
    pub const fn new(rows: Vec<Row>) -> Self {
        Self(rows)
    }

    /// Returns the rows of this table.
    pub fn rows(&self) -> &[Row] {
        &self.0
    }

    /// Width of the table: the length of its longest row, 0 when empty.
    pub fn width(&self) -> usize {
        self.0.iter().map(Row::len).max().unwrap_or(0)
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Position inside the outermost table.
#[derive(Debug)]
enum State {
    Outside,
    InTable,
    InRow(Vec<String>),
    InCell { row: Vec<String>, text: String },
}

/// Event-driven table parser.
///
/// Feed it tokens with [`TableParser::handle`] and collect the result with
/// [`TableParser::finish`], or use [`TableParser::parse`] for a whole
/// document. The parser never fails: stray or unbalanced tags are ignored.
#[derive(Debug)]
pub struct TableParser {
    state: State,
    depth: usize,
    rows: Vec<Row>,
    tables: Vec<Table>,
    raw_text: Option<String>,
}

impl Default for TableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TableParser {
    /// Creates an empty parser.
    pub const fn new() -> Self {
        Self {
            state: State::Outside,
            depth: 0,
            rows: Vec::new(),
            tables: Vec::new(),
            raw_text: None,
        }
    }

    /// Parses every table of `markup`, in document order.
    pub fn parse(markup: &str) -> Vec<Table> {
        let mut parser = Self::new();
        for token in Tokenizer::new(markup) {
            parser.handle(token);
        }
        parser.finish()
    }

    /// Advances the state machine by one token.
    pub fn handle(&mut self, token: Token<'_>) {
        match token {
            Token::Open(name) => self.open(&name),
            Token::Close(name) => self.close(&name),
            Token::SelfClosing(name) => {
                self.open(&name);
                self.close(&name);
            }
            Token::Text(text) => {
                if self.raw_text.is_none()
                    && let State::InCell { text: buffer, .. } = &mut self.state
                {
                    buffer.push_str(&text);
                }
            }
        }
    }

    /// Returns the completed tables. A table still open at end of input is
    /// discarded.
    pub fn finish(self) -> Vec<Table> {
        if self.depth > 0 {
            tracing::debug!(depth = self.depth, "unterminated_table_dropped");
        }
        self.tables
    }

    fn open(&mut self, name: &str) {
        match name {
            "script" | "style" => self.raw_text = Some(name.to_string()),
            "table" => {
                self.depth += 1;
                if self.depth == 1 {
                    self.rows.clear();
                    self.state = State::InTable;
                }
            }
            "tr" if self.depth == 1 => self.state = State::InRow(Vec::new()),
            "td" | "th" if self.depth == 1 => {
                self.state = match std::mem::replace(&mut self.state, State::Outside) {
                    State::InRow(row) => State::InCell {
                        row,
                        text: String::new(),
                    },
                    // An unclosed cell is closed by the next one.
                    State::InCell { mut row, text } => {
                        row.push(normalize_cell(&text));
                        State::InCell {
                            row,
                            text: String::new(),
                        }
                    }
                    other => other,
                };
            }
            _ => {}
        }
    }

    fn close(&mut self, name: &str) {
        match name {
            "script" | "style" => {
                if self.raw_text.as_deref() == Some(name) {
                    self.raw_text = None;
                }
            }
            "table" if self.depth > 0 => {
                self.depth -= 1;
                if self.depth == 0 {
                    self.tables.push(Table(std::mem::take(&mut self.rows)));
                    self.state = State::Outside;
                }
            }
            "tr" if self.depth == 1 => {
                match std::mem::replace(&mut self.state, State::InTable) {
                    State::InRow(row) => self.rows.push(Row(row)),
                    State::InCell { mut row, text } => {
                        row.push(normalize_cell(&text));
                        self.rows.push(Row(row));
                    }
                    other => self.state = other,
                }
            }
            "td" | "th" if self.depth == 1 => {
                self.state = match std::mem::replace(&mut self.state, State::Outside) {
                    State::InCell { mut row, text } => {
                        row.push(normalize_cell(&text));
                        State::InRow(row)
                    }
                    other => other,
                };
            }
            _ => {}
        }
    }
}

/// Collapses whitespace runs to a single space and trims the ends.
pub fn normalize_cell(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
