//! # bc2score
//!
//! Approximate-match scoring for gene normalization output.
//!
//! A system under test reports `(document, entity, excerpt)` triples; a gold
//! standard lists the same subjects with one or more accepted excerpts each.
//! Subjects are matched by key, and each matched excerpt is compared to the
//! gold excerpts by normalized edit distance so that near-miss text still
//! counts. Two sets of precision/recall/F-measure are reported:
//!
//! - **Raw**: presence alone decides true/false positives and negatives.
//! - **Thresholded**: a match only counts when its best excerpt similarity
//!   exceeds the threshold (0.55 by default).
//!
//! ## Quick Start
//!
//! ```rust
//! use bc2score::eval::{evaluate, loader, Classifier};
//!
//! let gold = loader::parse_gold("10064899\t7157\tp53\tp53 protein\n");
//! let test = loader::parse_test("10064899\t7157\tp53 proteins\n");
//!
//! let evaluation = evaluate(&gold, &test, &Classifier::default());
//! let summary = evaluation.summary();
//! assert_eq!(summary.raw.true_positives, 1);
//! assert_eq!(summary.thresholded.true_positives, 1);
//! ```
//!
//! ## Layout
//!
//! - [`distance`]: character Levenshtein distance
//! - [`similarity`]: excerpt similarity against one or more references
//! - [`eval`]: loading, alignment, classification, metrics and reports
//! - [`config`]: layered TOML configuration

#![warn(missing_docs)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod distance;
mod error;
pub mod eval;
pub mod similarity;

pub use bc2score_core::{GoldRecord, Key, Keyed, RecordSet, TestRecord};
pub use config::ScoringConfig;
pub use error::{Error, Result};
pub use eval::{evaluate, Classifier, Evaluation, ReportMode};
