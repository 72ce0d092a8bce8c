#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/strata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod normalize;
pub mod section;
pub mod table;
pub mod text;
pub mod token;

pub use normalize::normalize_tables;
pub use section::{ItemId, Section, index_order, segment, segment_text};
pub use table::{Row, Table, TableParser};
pub use text::markup_to_text;
pub use token::{Token, Tokenizer};
