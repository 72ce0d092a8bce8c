#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/strata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod extract;

// Re-export building blocks
pub use strata_facts as facts;
pub use strata_markup as markup;
pub use strata_output as output;

pub use config::ExtractConfig;
pub use error::{ExtractError, Result};
pub use extract::{
    Extraction, Extractor, SectionExtraction, SectionExtractor, StatementExtraction,
    StatementExtractor, TableExtraction, TableExtractor, read_source,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
