#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/strata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod concepts;
pub mod error;
pub mod fact;
pub mod graph;
pub mod series;
pub mod statement;

pub use error::{FactsError, Result};
pub use fact::{Fact, FactObservation, UnitSeries};
pub use graph::{FactGraph, Namespace};
pub use series::{ResolvedPoint, ResolvedSeries, resolve};
pub use statement::{Statement, StatementKind, StatementRow, build_statement, cell_text};
