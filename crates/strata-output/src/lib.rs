#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/strata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod sections;
pub mod statements;
pub mod tables;

pub use export::{ExportError, ExportFormat, Exporter};
pub use sections::{INDEX_FILE, SectionFiles, SectionIndex, section_file_name, write_sections};
pub use statements::{RAW_FACTS_FILE, write_raw_facts, write_statement};
pub use tables::{TableFiles, TablesDocument, write_tables};
