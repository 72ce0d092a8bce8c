//! Section artifacts: `Item_<id>.md` files and `sections_index.md`.

use crate::export::{ExportError, ExportFormat, Exporter, unsupported};
use std::fmt;
use std::path::{Path, PathBuf};
use strata_markup::{ItemId, Section, index_order};

/// Index file name.
pub const INDEX_FILE: &str = "sections_index.md";

/// File name for a section, e.g. `Item_1A.md`.
pub fn section_file_name(item: &ItemId) -> String {
    format!("Item_{item}.md")
}

impl Exporter for Section {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Markdown => {
                let mut header = format!("## Item {}", self.item);
                if !self.title.is_empty() {
                    header.push(' ');
                    header.push_str(&self.title);
                }
                Ok(format!("{header}\n\n{}\n", self.content))
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
            ExportFormat::Csv => Err(unsupported("section", format)),
        }
    }
}

/// Markdown index over a list of sections, in item order.
#[derive(Debug, Clone, Copy)]
pub struct SectionIndex<'a> {
    sections: &'a [Section],
}

impl<'a> SectionIndex<'a> {
    /// Creates an index over sections given in document order.
    pub const fn new(sections: &'a [Section]) -> Self {
        Self { sections }
    }
}

impl Exporter for SectionIndex<'_> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        if format != ExportFormat::Markdown {
            return Err(unsupported("section index", format));
        }

        Ok(self.to_string())
    }
}

impl fmt::Display for SectionIndex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Extracted Items")?;
        writeln!(f)?;
        for section in index_order(self.sections) {
            write!(f, "- Item {}", section.item)?;
            if !section.title.is_empty() {
                write!(f, ": {}", section.title)?;
            }
            writeln!(f, " \u{2192} `{}`", section_file_name(&section.item))?;
        }
        Ok(())
    }
}

/// Paths written by [`write_sections`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFiles {
    /// Section file per distinct item, in order of first appearance.
    pub section_files: Vec<(ItemId, PathBuf)>,
    /// Index file.
    pub index_file: PathBuf,
}

/// Writes one Markdown file per section and the index into `dir`.
///
/// Sections sharing an item id share a file; the later one wins. The index
/// still lists every section.
pub fn write_sections(sections: &[Section], dir: &Path) -> Result<SectionFiles, ExportError> {
    let mut section_files: Vec<(ItemId, PathBuf)> = Vec::new();
    for section in sections {
        let path = dir.join(section_file_name(&section.item));
        section.export_to_file(&path, ExportFormat::Markdown)?;
        if !section_files.iter().any(|(item, _)| *item == section.item) {
            section_files.push((section.item.clone(), path));
        }
    }

    let index_file = dir.join(INDEX_FILE);
    SectionIndex::new(sections).export_to_file(&index_file, ExportFormat::Markdown)?;

    Ok(SectionFiles {
        section_files,
        index_file,
    })
}
