//! Precision, recall and F-measure over classified pairs.
//!
//! Zero denominators follow the BioCreative convention: with nothing
//! predicted, precision is 1; with nothing to find, recall is 1.

use serde::Serialize;

use super::classify::{MatchClass, ScoredPair};

/// `TP / (TP + FP)`, or 1.0 when nothing was predicted.
#[must_use]
pub fn precision(tp: usize, fp: usize, _fn_count: usize) -> f64 {
    let denom = tp + fp;
    if denom == 0 {
        1.0
    } else {
        tp as f64 / denom as f64
    }
}

/// `TP / (TP + FN)`, or 1.0 when there was nothing to find.
#[must_use]
pub fn recall(tp: usize, _fp: usize, fn_count: usize) -> f64 {
    let denom = tp + fn_count;
    if denom == 0 {
        1.0
    } else {
        tp as f64 / denom as f64
    }
}

/// Harmonic mean of precision and recall.
///
/// Returns 0.0 when both are zero (no true positives with errors on both
/// sides) instead of dividing by zero.
#[must_use]
pub fn f_measure(precision: f64, recall: f64) -> f64 {
    let sum = precision + recall;
    if sum == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / sum
    }
}

/// True/false positive/negative counts for one policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    /// True positives.
    pub true_positives: usize,
    /// False positives.
    pub false_positives: usize,
    /// False negatives.
    pub false_negatives: usize,
}

impl Counts {
    /// Create counts from raw numbers.
    #[must_use]
    pub const fn new(true_positives: usize, false_positives: usize, false_negatives: usize) -> Self {
        Self {
            true_positives,
            false_positives,
            false_negatives,
        }
    }

    /// Precision over these counts.
    #[must_use]
    pub fn precision(&self) -> f64 {
        precision(self.true_positives, self.false_positives, self.false_negatives)
    }

    /// Recall over these counts.
    #[must_use]
    pub fn recall(&self) -> f64 {
        recall(self.true_positives, self.false_positives, self.false_negatives)
    }

    /// F-measure over these counts.
    #[must_use]
    pub fn f_measure(&self) -> f64 {
        f_measure(self.precision(), self.recall())
    }

    /// All three derived scores.
    #[must_use]
    pub fn scores(&self) -> Scores {
        Scores {
            precision: self.precision(),
            recall: self.recall(),
            f_measure: self.f_measure(),
        }
    }
}

/// Derived precision/recall/F-measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    /// Precision in `[0, 1]`.
    pub precision: f64,
    /// Recall in `[0, 1]`.
    pub recall: f64,
    /// F-measure in `[0, 1]`.
    pub f_measure: f64,
}

/// Everything the summary reports: raw and thresholded counts plus the
/// input problems the loader tolerated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateMetrics {
    /// Counts from presence alone.
    pub raw: Counts,
    /// Counts after the similarity threshold.
    pub thresholded: Counts,
    /// Gold lines dropped as malformed.
    pub gold_file_errors: usize,
    /// Test lines dropped for a bad identifier.
    pub test_file_errors: usize,
    /// Test lines with no excerpt column.
    pub missing_excerpts: usize,
}

impl AggregateMetrics {
    /// Start from the loader's error counters with all counts at zero.
    #[must_use]
    pub fn with_input_errors(
        gold_file_errors: usize,
        test_file_errors: usize,
        missing_excerpts: usize,
    ) -> Self {
        Self {
            gold_file_errors,
            test_file_errors,
            missing_excerpts,
            ..Self::default()
        }
    }

    /// Fold one scored pair into the counts.
    #[must_use]
    pub fn record(mut self, scored: &ScoredPair<'_>) -> Self {
        match scored.class {
            MatchClass::Match => {
                self.raw.true_positives += 1;
                if scored.accepted {
                    self.thresholded.true_positives += 1;
                } else {
                    self.thresholded.false_positives += 1;
                    self.thresholded.false_negatives += 1;
                }
            }
            MatchClass::Miss => {
                self.raw.false_negatives += 1;
                self.thresholded.false_negatives += 1;
            }
            MatchClass::Spurious => {
                self.raw.false_positives += 1;
                self.thresholded.false_positives += 1;
            }
        }
        self
    }
}
