//! Summary and per-pair detail output.
//!
//! The text layout reproduces the BioCreative II gene normalization scorer so
//! existing tooling that scrapes its output keeps working.

use std::fmt;
use std::str::FromStr;

use bc2score_core::{GoldRecord, TestRecord};
use serde::{Deserialize, Serialize};

use super::classify::{MatchClass, ScoredPair};
use super::metrics::{AggregateMetrics, Counts, Scores};
use crate::{Error, Result};

/// Which aligned pairs get a detail row after the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Misses: gold keys the system did not report.
    Recall,
    /// Spurious keys the gold standard does not contain.
    Precision,
    /// Every aligned pair, including matches.
    All,
}

impl ReportMode {
    /// All modes, in command-line order.
    pub const MODES: [ReportMode; 3] = [ReportMode::Recall, ReportMode::Precision, ReportMode::All];

    /// Lowercase name as accepted on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recall => "recall",
            Self::Precision => "precision",
            Self::All => "all",
        }
    }

    /// Whether a pair of this class is listed under this mode.
    #[must_use]
    pub fn selects(self, class: MatchClass) -> bool {
        match self {
            Self::All => true,
            Self::Recall => class == MatchClass::Miss,
            Self::Precision => class == MatchClass::Spurious,
        }
    }
}

impl FromStr for ReportMode {
    type Err = Error;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Self::MODES
            .into_iter()
            .find(|mode| mode.name() == lower)
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "unknown report mode '{}', expected one of recall, precision, all",
                    s
                ))
            })
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output encoding for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The fixed BioCreative text template (default)
    #[default]
    Text,
    /// A single JSON object with the summary and detail rows
    Json,
}

/// Headline numbers for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Similarity threshold the run used.
    pub threshold: f64,
    /// Raw counts.
    pub raw: Counts,
    /// Raw precision/recall/F-measure.
    pub raw_scores: Scores,
    /// Thresholded counts.
    pub thresholded: Counts,
    /// Thresholded precision/recall/F-measure.
    pub thresholded_scores: Scores,
    /// Gold lines dropped as malformed.
    pub gold_file_errors: usize,
    /// Test lines dropped for a bad identifier.
    pub test_file_errors: usize,
    /// Test lines with no excerpt column.
    pub missing_excerpts: usize,
}

impl Summary {
    /// Derive the summary from aggregated counts.
    #[must_use]
    pub fn new(metrics: &AggregateMetrics, threshold: f64) -> Self {
        Self {
            threshold,
            raw: metrics.raw,
            raw_scores: metrics.raw.scores(),
            thresholded: metrics.thresholded,
            thresholded_scores: metrics.thresholded.scores(),
            gold_file_errors: metrics.gold_file_errors,
            test_file_errors: metrics.test_file_errors,
            missing_excerpts: metrics.missing_excerpts,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "F-Measure:   {:5.6}", self.raw_scores.f_measure)?;
        writeln!(f, "True Positive:   {:5}", self.raw.true_positives)?;
        writeln!(f, "False Positive:  {:5}", self.raw.false_positives)?;
        writeln!(f, "False Negative:  {:5}", self.raw.false_negatives)?;
        writeln!(f, "Precision:       {:5.3}", self.raw_scores.precision)?;
        writeln!(f, "Recall:          {:5.3}", self.raw_scores.recall)?;
        writeln!(f, "Thresholded F:   {:5.6}", self.thresholded_scores.f_measure)?;
        writeln!(f, "Thresholded TP:  {:5}", self.thresholded.true_positives)?;
        writeln!(f, "Thresholded FP:  {:5}", self.thresholded.false_positives)?;
        writeln!(f, "Thresholded FN:  {:5}", self.thresholded.false_negatives)?;
        writeln!(f, "Thresholded P:   {:5.3}", self.thresholded_scores.precision)?;
        writeln!(f, "Thresholded R:   {:5.3}", self.thresholded_scores.recall)?;
        writeln!(f, "Gold File Errors:{:5}", self.gold_file_errors)?;
        writeln!(f, "Test File Errors:{:5}", self.test_file_errors)?;
        write!(f, "Missing Excerpts:{:5}", self.missing_excerpts)
    }
}

/// One line of the per-pair report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow<'a> {
    /// Document identifier.
    pub document_id: u64,
    /// Entity identifier.
    pub entity_id: u64,
    /// Raw classification.
    pub class: MatchClass,
    /// Candidate excerpt, empty when the system did not report the key.
    pub candidate: &'a str,
    /// Best similarity, 0 unless both sides are present.
    pub similarity: f64,
    /// Gold excerpts in input order, empty for spurious keys.
    pub gold_excerpts: &'a [String],
}

impl<'a> DetailRow<'a> {
    /// Build the row for a scored pair.
    #[must_use]
    pub fn new(scored: &ScoredPair<'a>) -> Self {
        let pair = scored.pair;
        Self {
            document_id: pair.key.document_id,
            entity_id: pair.key.entity_id,
            class: scored.class,
            candidate: pair.test.map(TestRecord::excerpt).unwrap_or(""),
            similarity: scored.similarity,
            gold_excerpts: pair.gold.map(GoldRecord::excerpts).unwrap_or(&[]),
        }
    }
}

impl fmt::Display for DetailRow<'_> {
    /// `doc \t entity \t candidate \t similarity \t gold1 \t gold2 ...`
    ///
    /// The tab before the gold excerpts is written even when there are none.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{:.3}\t{}",
            self.document_id,
            self.entity_id,
            self.candidate,
            self.similarity,
            self.gold_excerpts.join("\t")
        )
    }
}

/// Select the detail rows for `mode`, keeping the input (key) order.
#[must_use]
pub fn detail_rows<'a>(pairs: &[ScoredPair<'a>], mode: ReportMode) -> Vec<DetailRow<'a>> {
    pairs
        .iter()
        .filter(|scored| mode.selects(scored.class))
        .map(DetailRow::new)
        .collect()
}

#[derive(Serialize)]
struct JsonReport<'r, 'a> {
    summary: &'r Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    report_mode: Option<ReportMode>,
    details: &'r [DetailRow<'a>],
}

/// Render the summary and detail rows in `format`.
///
/// The text form ends with a newline; the JSON form is pretty-printed.
pub fn render(
    summary: &Summary,
    mode: Option<ReportMode>,
    rows: &[DetailRow<'_>],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = format!("{}\n", summary);
            for row in rows {
                out.push_str(&row.to_string());
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let report = JsonReport {
                summary,
                report_mode: mode,
                details: rows,
            };
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            Ok(out)
        }
    }
}
