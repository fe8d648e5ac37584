//! Key alignment between the gold and test record sets.

use std::collections::BTreeSet;

use bc2score_core::{GoldRecord, Key, RecordSet, TestRecord};

/// One key from the union of gold and test keys, with whichever records
/// exist for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedPair<'a> {
    /// The shared key.
    pub key: Key,
    /// Gold record for the key, if the gold standard has one.
    pub gold: Option<&'a GoldRecord>,
    /// Test record for the key, if the system output has one.
    pub test: Option<&'a TestRecord>,
}

impl AlignedPair<'_> {
    /// Whether the gold standard annotates this key.
    #[must_use]
    pub fn in_gold(&self) -> bool {
        self.gold.is_some()
    }

    /// Whether the system output annotates this key.
    #[must_use]
    pub fn in_test(&self) -> bool {
        self.test.is_some()
    }
}

/// Align two record sets by key.
///
/// Returns one pair per key in the union, sorted by `(document_id, entity_id)`.
/// Every returned pair has at least one side present.
#[must_use]
pub fn align<'a>(
    gold: &'a RecordSet<GoldRecord>,
    test: &'a RecordSet<TestRecord>,
) -> Vec<AlignedPair<'a>> {
    let keys: BTreeSet<Key> = gold.keys().chain(test.keys()).copied().collect();

    keys.into_iter()
        .map(|key| AlignedPair {
            key,
            gold: gold.get(&key),
            test: test.get(&key),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold(doc: u64, ent: u64, excerpt: &str) -> GoldRecord {
        GoldRecord::new(Key::new(doc, ent), vec![excerpt.to_string()]).unwrap()
    }

    #[test]
    fn test_union_sorted_numerically() {
        let gold_set: RecordSet<_> = vec![gold(10, 1, "a"), gold(2, 10, "b")].into_iter().collect();
        let test_set: RecordSet<_> = vec![
            TestRecord::new(Key::new(2, 9), "c"),
            TestRecord::new(Key::new(2, 10), "b"),
        ]
        .into_iter()
        .collect();

        let pairs = align(&gold_set, &test_set);
        let keys: Vec<Key> = pairs.iter().map(|p| p.key).collect();
        assert_eq!(keys, vec![Key::new(2, 9), Key::new(2, 10), Key::new(10, 1)]);

        assert!(!pairs[0].in_gold() && pairs[0].in_test());
        assert!(pairs[1].in_gold() && pairs[1].in_test());
        assert!(pairs[2].in_gold() && !pairs[2].in_test());
    }

    #[test]
    fn test_empty_sets() {
        let gold_set = RecordSet::<GoldRecord>::new();
        let test_set = RecordSet::<TestRecord>::new();
        assert!(align(&gold_set, &test_set).is_empty());
    }

    #[test]
    fn test_pairs_reference_records() {
        let gold_set: RecordSet<_> = std::iter::once(gold(1, 1, "BRCA1 gene")).collect();
        let test_set: RecordSet<_> =
            std::iter::once(TestRecord::new(Key::new(1, 1), "BRCA1")).collect();

        let pairs = align(&gold_set, &test_set);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].gold.map(|g| g.excerpts().len()), Some(1));
        assert_eq!(pairs[0].test.map(TestRecord::excerpt), Some("BRCA1"));
    }
}
