//! Lenient markup tokenizer.
//!
//! Wraps `quick-xml`'s pull reader with an HTML-friendly configuration and
//! turns its events into a flat stream of [`Token`]s. End-tag names are not
//! checked against open tags and unmatched end tags are allowed. A `<` that
//! cannot start a tag (`a < b`, `< 1%`) is kept as text. Any other syntax
//! error resynchronizes after the next `>` instead of ending the stream.

use quick_xml::Reader;
use quick_xml::events::Event;
use std::borrow::Cow;

/// A single markup event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// An opening tag, e.g. `<td class="x">`. Tag names are ASCII-lowercased.
    Open(String),
    /// A closing tag, e.g. `</td>`.
    Close(String),
    /// A self-closing tag, e.g. `<br/>` or `<td/>`.
    SelfClosing(String),
    /// Character data between tags with entities decoded.
    Text(Cow<'a, str>),
}

impl Token<'_> {
    /// Returns the tag name, or `None` for text.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Open(tag) | Self::Close(tag) | Self::SelfClosing(tag) => Some(tag),
            Self::Text(_) => None,
        }
    }
}

/// Iterator over the [`Token`]s of a markup document.
///
/// Comments, declarations, processing instructions and doctypes are
/// skipped. CDATA sections are reported as text.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    offset: usize,
    reader: Reader<&'a [u8]>,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            reader: lenient_reader(input),
            done: false,
        }
    }

    /// Restarts the reader after the next `>` following a syntax error.
    ///
    /// Returns false when there is nothing left to read.
    fn resync(&mut self) -> bool {
        let error_at = self.offset + self.reader.error_position() as usize;
        let Some(rest) = self.input.get(error_at..) else {
            return false;
        };
        match rest.find('>') {
            Some(idx) => {
                self.offset = error_at + idx + 1;
                self.reader = lenient_reader(&self.input[self.offset..]);
                true
            }
            None => false,
        }
    }

    /// Emits a stray `<` and the text after it, up to the next real tag, as
    /// text and restarts the reader there.
    fn stray_text(&mut self) -> Option<Token<'a>> {
        let pos = self.offset + self.reader.buffer_position() as usize;
        let rest = self.input.get(pos..)?;
        if !rest.starts_with('<') || opens_markup(rest) {
            return None;
        }

        let input = self.input;
        let end = input[pos + 1..]
            .match_indices('<')
            .map(|(idx, _)| pos + 1 + idx)
            .find(|&idx| opens_markup(&input[idx..]))
            .unwrap_or(input.len());
        self.offset = end;
        self.reader = lenient_reader(&input[end..]);
        Some(Token::Text(decode_entities(Cow::Borrowed(&input[pos..end]))))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if let Some(text) = self.stray_text() {
                return Some(text);
            }
            match self.reader.read_event() {
                Ok(Event::Start(tag)) => return Some(Token::Open(tag_name(tag.name().as_ref()))),
                Ok(Event::End(tag)) => return Some(Token::Close(tag_name(tag.name().as_ref()))),
                Ok(Event::Empty(tag)) => {
                    return Some(Token::SelfClosing(tag_name(tag.name().as_ref())));
                }
                Ok(Event::Text(text)) => {
                    let raw = utf8(text.into_inner());
                    return Some(Token::Text(decode_entities(raw)));
                }
                Ok(Event::CData(data)) => return Some(Token::Text(utf8(data.into_inner()))),
                Ok(Event::Eof) => self.done = true,
                Ok(_) => {}
                Err(err) => {
                    tracing::debug!(error = %err, offset = self.offset, "markup_resync");
                    if !self.resync() {
                        self.done = true;
                    }
                }
            }
        }
        None
    }
}

fn lenient_reader(input: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(input);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.check_comments = false;
    config.expand_empty_elements = false;
    config.trim_text(false);
    reader
}

/// Whether `rest`, which starts with `<`, opens a tag, end tag, comment,
/// declaration or processing instruction.
fn opens_markup(rest: &str) -> bool {
    rest.as_bytes()
        .get(1)
        .is_some_and(|b| b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?'))
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}

fn utf8(bytes: Cow<'_, [u8]>) -> Cow<'_, str> {
    match bytes {
        Cow::Borrowed(b) => String::from_utf8_lossy(b),
        Cow::Owned(b) => Cow::Owned(String::from_utf8_lossy(&b).into_owned()),
    }
}

fn decode_entities(raw: Cow<'_, str>) -> Cow<'_, str> {
    if !raw.contains('&') {
        return raw;
    }
    Cow::Owned(html_escape::decode_html_entities(&raw).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<Token<'_>> {
        Tokenizer::new(input).collect()
    }

    #[test]
    fn test_basic_events() {
        let tokens = collect("<p class=x>Hi<br/></p>");
        assert_eq!(
            tokens,
            vec![
                Token::Open("p".to_string()),
                Token::Text("Hi".into()),
                Token::SelfClosing("br".to_string()),
                Token::Close("p".to_string()),
            ]
        );
    }

    #[test]
    fn test_entities_decoded() {
        let tokens = collect("<td>AT&amp;T&nbsp;Inc</td>");
        assert_eq!(tokens[1], Token::Text("AT&T\u{a0}Inc".into()));
    }

    #[test]
    fn test_mismatched_and_unmatched_end_tags() {
        let tokens = collect("</tr><b><i>x</b></i>");
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0], Token::Close("tr".to_string()));
        assert_eq!(tokens[3], Token::Text("x".into()));
    }

    #[test]
    fn test_comments_and_doctype_skipped() {
        let tokens = collect("<!DOCTYPE html><!-- note --><TD>1</TD>");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].tag_name(), Some("td"));
        assert_eq!(tokens[2].tag_name(), Some("td"));
    }

    #[test]
    fn test_stray_less_than_kept_as_text() {
        let tokens = collect("<td>a < b &lt; c</td><td>< 1%</td>x <");
        assert_eq!(
            tokens,
            vec![
                Token::Open("td".to_string()),
                Token::Text("a ".into()),
                Token::Text("< b < c".into()),
                Token::Close("td".to_string()),
                Token::Open("td".to_string()),
                Token::Text("< 1%".into()),
                Token::Close("td".to_string()),
                Token::Text("x ".into()),
                Token::Text("<".into()),
            ]
        );
    }

    #[test]
    fn test_unterminated_tag_at_eof() {
        let tokens = collect("<td>1</td><tr");
        assert_eq!(tokens.len(), 3);
    }
}
