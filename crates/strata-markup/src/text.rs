//! Markup to plain text.
//!
//! Block-level boundaries become newlines so that headers such as
//! "ITEM 1A. RISK FACTORS" end up on their own line.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").expect("valid regex"));
static STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b.*?</style\s*>").expect("valid regex"));
static BLOCK_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\b[^>]*>|</(?:p|div|tr|h[1-6])\s*>").expect("valid regex")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static LINE_ENDING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r").expect("valid regex"));
static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t ]+").expect("valid regex"));
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

/// Converts a markup document to normalized plain text.
///
/// Script and style blocks are removed with their content, `<br>` and the
/// end of paragraphs, divs, table rows and headings become newlines, every
/// other tag becomes a space, entities are decoded, line endings become
/// `\n`, horizontal whitespace runs collapse to one space, and runs of
/// newlines collapse to a single blank line.
pub fn markup_to_text(markup: &str) -> String {
    let text = SCRIPT.replace_all(markup, " ");
    let text = STYLE.replace_all(&text, " ");
    let text = BLOCK_BREAK.replace_all(&text, "\n");
    let text = TAG.replace_all(&text, " ");
    let text = html_escape::decode_html_entities(&text);
    let text = LINE_ENDING.replace_all(&text, "\n");
    let text = text.replace('\u{a0}', " ");
    let text = HORIZONTAL_SPACE.replace_all(&text, " ");
    BLANK_LINES.replace_all(&text, "\n\n").into_owned()
}
