use super::{Extraction, Extractor, ensure_dir, read_source};
use crate::error::Result;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use strata_markup::{ItemId, segment};
use strata_output::write_sections;
use tracing::{info, warn};

/// Files written for one document's sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionExtraction {
    /// Source document
    pub source: PathBuf,
    /// Item id to section file, in document order
    #[serde(serialize_with = "ordered_map")]
    pub section_files: Vec<(ItemId, PathBuf)>,
    /// Markdown index of all sections
    pub index_file: PathBuf,
    /// Number of sections found, duplicates included
    pub section_count: usize,
}

fn ordered_map<S: Serializer>(
    entries: &[(ItemId, PathBuf)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(item, path)| (item, path)))
}

/// Splits an HTML filing into its "Item" sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionExtractor;

impl SectionExtractor {
    /// Creates a section extractor.
    pub const fn new() -> Self {
        Self
    }
}

impl Extractor for SectionExtractor {
    type Output = SectionExtraction;

    fn extract(&self, source: &Path, target: &Path) -> Result<Extraction<SectionExtraction>> {
        let markup = read_source(source)?;
        ensure_dir(target)?;
        info!(source = %source.display(), "extracting_sections");

        let sections = segment(&markup);
        if sections.is_empty() {
            warn!(source = %source.display(), "no_sections_found");
            return Ok(Extraction::NoQualifyingData);
        }

        let files = write_sections(&sections, target)?;
        info!(sections = sections.len(), "sections_extracted");

        Ok(Extraction::Extracted(SectionExtraction {
            source: source.to_path_buf(),
            section_files: files.section_files,
            index_file: files.index_file,
            section_count: sections.len(),
        }))
    }
}
