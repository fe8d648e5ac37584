//! Scoring engine: align gold and test records, classify each pair, and
//! aggregate precision/recall/F-measure.
//!
//! ```text
//! GoldFile ─┐
//!           ├─ align ─► AlignedPair ─ classify ─► ScoredPair ─┬─ fold ─► AggregateMetrics ─► Summary
//! TestFile ─┘                                                 └─ filter ─► DetailRow
//! ```
//!
//! # Example
//!
//! ```
//! use bc2score::eval::{evaluate, loader, Classifier, ReportMode};
//!
//! let gold = loader::parse_gold("1\t1\tBRCA1 gene\n2\t5\tp53\n");
//! let test = loader::parse_test("1\t1\tBRCA1 gene\n3\t3\tIL-2\n");
//!
//! let evaluation = evaluate(&gold, &test, &Classifier::default());
//! let metrics = evaluation.metrics();
//! assert_eq!(metrics.raw.true_positives, 1);
//! assert_eq!(metrics.raw.false_negatives, 1);
//! assert_eq!(metrics.raw.false_positives, 1);
//! assert_eq!(evaluation.detail_rows(ReportMode::Recall).len(), 1);
//! ```
//!
//! The run is a pure function of its inputs and the threshold.

pub mod align;
pub mod classify;
pub mod loader;
pub mod metrics;
pub mod report;

pub use align::{align, AlignedPair};
pub use classify::{Classifier, MatchClass, ScoredPair, DEFAULT_THRESHOLD};
pub use loader::{GoldFile, TestFile};
pub use metrics::{f_measure, precision, recall, AggregateMetrics, Counts, Scores};
pub use report::{DetailRow, OutputFormat, ReportMode, Summary};

/// Outcome of scoring one test file against one gold file.
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    pairs: Vec<ScoredPair<'a>>,
    metrics: AggregateMetrics,
    threshold: f64,
}

impl<'a> Evaluation<'a> {
    /// Every scored pair, in key order.
    #[must_use]
    pub fn pairs(&self) -> &[ScoredPair<'a>] {
        &self.pairs
    }

    /// Aggregated counts and input error counters.
    #[must_use]
    pub fn metrics(&self) -> &AggregateMetrics {
        &self.metrics
    }

    /// Headline numbers for the report.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::new(&self.metrics, self.threshold)
    }

    /// Detail rows selected by `mode`, in key order.
    #[must_use]
    pub fn detail_rows(&self, mode: ReportMode) -> Vec<DetailRow<'a>> {
        report::detail_rows(&self.pairs, mode)
    }
}

/// Score `test` against `gold`.
#[must_use]
pub fn evaluate<'a>(gold: &'a GoldFile, test: &'a TestFile, classifier: &Classifier) -> Evaluation<'a> {
    let pairs: Vec<ScoredPair<'a>> = align(&gold.records, &test.records)
        .into_iter()
        .filter_map(|pair| classifier.classify(pair))
        .collect();

    let metrics = pairs.iter().fold(
        AggregateMetrics::with_input_errors(gold.errors, test.errors, test.missing_excerpts),
        AggregateMetrics::record,
    );

    log::info!(
        "Scored {} keys: raw TP={} FP={} FN={}, thresholded TP={} FP={} FN={}",
        pairs.len(),
        metrics.raw.true_positives,
        metrics.raw.false_positives,
        metrics.raw.false_negatives,
        metrics.thresholded.true_positives,
        metrics.thresholded.false_positives,
        metrics.thresholded.false_negatives
    );

    Evaluation {
        pairs,
        metrics,
        threshold: classifier.threshold(),
    }
}
