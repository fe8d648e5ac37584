//! Per-pair classification under the raw and thresholded policies.
//!
//! ```text
//! in gold | in test | class    | raw   | thresholded
//! --------+---------+----------+-------+----------------------------------
//!   yes   |   yes   | Match    | TP    | TP if sim > threshold, else FP+FN
//!   yes   |   no    | Miss     | FN    | FN
//!   no    |   yes   | Spurious | FP    | FP
//! ```
//!
//! A match whose excerpt falls at or below the threshold counts as *both* a
//! thresholded false positive and a thresholded false negative: the system
//! found the subject, but its evidence is wrong enough to count as a spurious
//! hit and a miss at once.

use serde::{Deserialize, Serialize};

use super::align::AlignedPair;
use crate::similarity::excerpt_similarity;
use crate::{Error, Result};

/// Similarity a matched pair must exceed to count as a thresholded true positive.
pub const DEFAULT_THRESHOLD: f64 = 0.55;

/// Raw classification of an aligned pair, from presence alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchClass {
    /// Present in both gold and test.
    Match,
    /// Gold only: a recall error.
    Miss,
    /// Test only: a precision error.
    Spurious,
}

impl MatchClass {
    /// Classify by presence. `None` when neither side is present.
    #[must_use]
    pub fn from_presence(in_gold: bool, in_test: bool) -> Option<Self> {
        match (in_gold, in_test) {
            (true, true) => Some(Self::Match),
            (true, false) => Some(Self::Miss),
            (false, true) => Some(Self::Spurious),
            (false, false) => None,
        }
    }

    /// Short label used in logs and JSON output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Miss => "miss",
            Self::Spurious => "spurious",
        }
    }
}

/// An aligned pair after scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPair<'a> {
    /// The aligned records.
    pub pair: AlignedPair<'a>,
    /// Raw classification.
    pub class: MatchClass,
    /// Best excerpt similarity; 0.0 unless both sides are present.
    pub similarity: f64,
    /// Whether a match cleared the threshold. Always false for misses and
    /// spurious pairs.
    pub accepted: bool,
}

/// Applies the match and threshold policy to aligned pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classifier {
    threshold: f64,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Classifier {
    /// Create a classifier with a custom threshold in `[0, 1]`.
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::invalid_input(format!(
                "threshold must be in [0.0, 1.0], got {}",
                threshold
            )));
        }
        Ok(Self { threshold })
    }

    /// The similarity a match must strictly exceed.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score and classify one pair.
    ///
    /// Returns `None` only for a pair with neither side present, which
    /// [`align`](super::align::align) never produces.
    #[must_use]
    pub fn classify<'a>(&self, pair: AlignedPair<'a>) -> Option<ScoredPair<'a>> {
        let class = MatchClass::from_presence(pair.in_gold(), pair.in_test())?;

        let similarity = match (pair.gold, pair.test) {
            (Some(gold), Some(test)) => excerpt_similarity(gold.excerpts(), test.excerpt()),
            _ => 0.0,
        };
        let accepted = class == MatchClass::Match && similarity > self.threshold;

        log::debug!(
            "{} {} similarity={:.3} accepted={}",
            pair.key,
            class.name(),
            similarity,
            accepted
        );

        Some(ScoredPair {
            pair,
            class,
            similarity,
            accepted,
        })
    }
}
