//! Excerpt similarity for approximate gold/test matching.
//!
//! A candidate excerpt is compared against every reference excerpt of a gold
//! record and the best score wins:
//!
//! ```text
//! s(r) = 1 - 2 * levenshtein(r, c) / (len(r) + len(c))
//! similarity = max(0, max over r of s(r))
//! ```
//!
//! The denominator is the *sum* of both lengths, not the longer length, so
//! this is not a plain normalized edit distance. Scores must stay comparable
//! with published BioCreative II results, so the formula is fixed.

use crate::distance::levenshtein;

/// Similarity of `candidate` to a single `reference`, before clamping.
///
/// Can be negative when the strings differ in most positions. Returns 0.0 when
/// both strings are empty.
#[must_use]
pub fn pair_similarity(reference: &str, candidate: &str) -> f64 {
    let total = reference.chars().count() + candidate.chars().count();
    if total == 0 {
        return 0.0;
    }
    1.0 - 2.0 * levenshtein(reference, candidate) as f64 / total as f64
}

/// Best similarity of `candidate` against any of `references`, in `[0, 1]`.
///
/// Returns 0.0 when there is nothing to compare: no references, or an empty
/// candidate.
///
/// # Examples
///
/// ```
/// use bc2score::similarity::excerpt_similarity;
///
/// assert_eq!(excerpt_similarity(&["BRCA1 gene"], "BRCA1 gene"), 1.0);
/// let sim = excerpt_similarity(&["abcdef"], "abczef");
/// assert!((sim - (1.0 - 2.0 / 12.0)).abs() < 1e-12);
/// assert_eq!(excerpt_similarity::<&str>(&[], "BRCA1"), 0.0);
/// ```
#[must_use]
pub fn excerpt_similarity<S: AsRef<str>>(references: &[S], candidate: &str) -> f64 {
    if references.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    references
        .iter()
        .map(|reference| pair_similarity(reference.as_ref(), candidate))
        .fold(0.0, f64::max)
}
