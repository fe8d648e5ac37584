//! Property-based tests for edit distance and excerpt similarity.
//!
//! These tests verify mathematical properties:
//! - Identity and symmetry of the distance
//! - Triangle inequality
//! - Length bounds
//! - Boundedness of the similarity score

use bc2score::distance::levenshtein;
use bc2score::similarity::{excerpt_similarity, pair_similarity};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// distance(a, a) == 0
    #[test]
    fn distance_identity(a in ".{0,60}") {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    /// distance(a, b) == distance(b, a)
    #[test]
    fn distance_symmetric(a in ".{0,40}", b in ".{0,40}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    /// Zero only for equal strings
    #[test]
    fn distance_zero_iff_equal(a in "[ab]{0,8}", b in "[ab]{0,8}") {
        prop_assert_eq!(levenshtein(&a, &b) == 0, a == b);
    }

    /// d(a, c) <= d(a, b) + d(b, c)
    #[test]
    fn distance_triangle_inequality(
        a in "[a-d]{0,15}",
        b in "[a-d]{0,15}",
        c in "[a-d]{0,15}",
    ) {
        let ac = levenshtein(&a, &c);
        let ab = levenshtein(&a, &b);
        let bc = levenshtein(&b, &c);
        prop_assert!(ac <= ab + bc, "d(a,c)={} > d(a,b)+d(b,c)={}+{}", ac, ab, bc);
    }

    /// |len(a) - len(b)| <= d(a, b) <= max(len(a), len(b))
    #[test]
    fn distance_length_bounds(a in ".{0,40}", b in ".{0,40}") {
        let la = a.chars().count();
        let lb = b.chars().count();
        let d = levenshtein(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    /// Similarity always lands in [0, 1]
    #[test]
    fn similarity_bounded(
        refs in prop::collection::vec(".{0,30}", 0..4),
        candidate in ".{0,30}",
    ) {
        let sim = excerpt_similarity(&refs, &candidate);
        prop_assert!((0.0..=1.0).contains(&sim), "similarity {} out of bounds", sim);
    }

    /// Identical non-empty excerpts score exactly 1
    #[test]
    fn similarity_identical_is_one(text in ".{1,40}") {
        prop_assert_eq!(excerpt_similarity(&[text.as_str()], &text), 1.0);
    }

    /// Nothing to compare scores 0
    #[test]
    fn similarity_empty_inputs(text in ".{0,40}") {
        prop_assert_eq!(excerpt_similarity::<&str>(&[], &text), 0.0);
        prop_assert_eq!(excerpt_similarity(&[text.as_str()], ""), 0.0);
    }

    /// The best reference wins: adding references never lowers the score
    #[test]
    fn similarity_monotone_in_references(
        refs in prop::collection::vec("[a-c]{1,10}", 1..4),
        extra in "[a-c]{1,10}",
        candidate in "[a-c]{1,10}",
    ) {
        let base = excerpt_similarity(&refs, &candidate);
        let mut more = refs.clone();
        more.push(extra);
        prop_assert!(excerpt_similarity(&more, &candidate) >= base);
    }

    /// Pair similarity is symmetric in its arguments
    #[test]
    fn pair_similarity_symmetric(a in ".{0,30}", b in ".{0,30}") {
        prop_assert!((pair_similarity(&a, &b) - pair_similarity(&b, &a)).abs() < 1e-12);
    }
}
