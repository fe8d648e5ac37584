//! Gold and test records, and the keyed set that holds them.

use std::collections::hash_map::{self, HashMap};

use serde::Serialize;

use crate::{Error, Key, Result};

/// Anything stored in a [`RecordSet`].
pub trait Keyed {
    /// The key this record is filed under.
    fn key(&self) -> Key;
}

/// A gold-standard annotation: one subject and every accepted excerpt for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoldRecord {
    key: Key,
    excerpts: Vec<String>,
}

impl GoldRecord {
    /// Create a gold record. At least one reference excerpt is required.
    pub fn new(key: Key, excerpts: Vec<String>) -> Result<Self> {
        if excerpts.is_empty() {
            return Err(Error::invalid_input(format!(
                "gold record {} has no reference excerpts",
                key
            )));
        }
        Ok(Self { key, excerpts })
    }

    /// The reference excerpts, in input order.
    #[must_use]
    pub fn excerpts(&self) -> &[String] {
        &self.excerpts
    }
}

impl Keyed for GoldRecord {
    fn key(&self) -> Key {
        self.key
    }
}

/// A system annotation under test: one subject and the excerpt it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRecord {
    key: Key,
    excerpt: String,
}

impl TestRecord {
    /// Create a test record. The excerpt may be empty.
    #[must_use]
    pub fn new(key: Key, excerpt: impl Into<String>) -> Self {
        Self {
            key,
            excerpt: excerpt.into(),
        }
    }

    /// The candidate excerpt.
    #[must_use]
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }
}

impl Keyed for TestRecord {
    fn key(&self) -> Key {
        self.key
    }
}

/// Records indexed by key, at most one per key.
///
/// Inserting a record whose key is already present replaces the earlier one
/// (last write wins); the replaced record is handed back so callers can
/// report the duplicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet<R> {
    records: HashMap<Key, R>,
}

impl<R> Default for RecordSet<R> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<R: Keyed> RecordSet<R> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced, if any.
    pub fn insert(&mut self, record: R) -> Option<R> {
        self.records.insert(record.key(), record)
    }

    /// Look up the record for `key`.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&R> {
        self.records.get(key)
    }

    /// Whether a record exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &Key) -> bool {
        self.records.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keys in arbitrary order.
    pub fn keys(&self) -> hash_map::Keys<'_, Key, R> {
        self.records.keys()
    }

    /// Records in arbitrary order.
    pub fn iter(&self) -> hash_map::Values<'_, Key, R> {
        self.records.values()
    }
}

impl<R: Keyed> FromIterator<R> for RecordSet<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}
