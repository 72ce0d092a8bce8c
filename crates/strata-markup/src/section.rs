//! "Item" section segmentation.
//!
//! Filing narratives are divided by header lines such as `ITEM 1A. RISK
//! FACTORS`. A section runs from the end of its header line to the start of
//! the next header, or to the end of the document.

use crate::text::markup_to_text;
use derive_more::Display;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static ITEM_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*item\s+(\d+[a-z]?)\.?\s*(.*)$").expect("valid regex")
});
static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));
static ITEM_PARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([A-Z]?)").expect("valid regex"));

/// Upper-cased item label such as `1`, `1A` or `7A`.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an item id, upper-casing the label.
    pub fn new(label: &str) -> Self {
        Self(label.to_uppercase())
    }

    /// Returns the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Index ordering key: item number, then trailing letter (`""` first).
    ///
    /// Labels that do not start with a number sort first, by label.
    pub fn sort_key(&self) -> (u64, String) {
        ITEM_PARTS.captures(&self.0).map_or_else(
            || (0, self.0.clone()),
            |caps| {
                let number = caps[1].parse().unwrap_or(0);
                (number, caps[2].to_string())
            },
        )
    }
}

/// A labeled narrative section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Item identifier.
    pub item: ItemId,
    /// Header text following the item label, possibly empty.
    pub title: String,
    /// Normalized text between this header and the next.
    pub content: String,
}

/// Segments a markup document into sections, in document order.
///
/// Returns an empty vector when no header line is found.
pub fn segment(markup: &str) -> Vec<Section> {
    segment_text(&markup_to_text(markup))
}

/// Segments already-normalized text into sections, in document order.
pub fn segment_text(text: &str) -> Vec<Section> {
    let headers: Vec<Header<'_>> = ITEM_HEADER
        .captures_iter(text)
        .filter_map(|caps| {
            let span = caps.get(0)?;
            Some(Header {
                start: span.start(),
                end: span.end(),
                item: caps.get(1)?.as_str(),
                title: caps.get(2).map_or("", |m| m.as_str()),
            })
        })
        .collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let end = headers.get(i + 1).map_or(text.len(), |next| next.start);
            let content = text[header.end..end].trim();
            Section {
                item: ItemId::new(header.item),
                title: header.title.trim().to_string(),
                content: EXCESS_BLANK_LINES.replace_all(content, "\n\n").into_owned(),
            }
        })
        .collect()
}

struct Header<'a> {
    start: usize,
    end: usize,
    item: &'a str,
    title: &'a str,
}

/// Returns the sections in index order. The sort is stable, so duplicate
/// identifiers keep their document order.
pub fn index_order(sections: &[Section]) -> Vec<&Section> {
    let mut ordered: Vec<&Section> = sections.iter().collect();
    ordered.sort_by_cached_key(|section| section.item.sort_key());
    ordered
}
