//! The canonical record key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identifies one annotated subject: an entity within a document.
///
/// Ordering is numeric, first by `document_id` and then by `entity_id`,
/// so `2:10` sorts after `2:9` (unlike the string forms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Key {
    /// Document identifier (a PubMed id in BioCreative data).
    pub document_id: u64,
    /// Entity identifier (an Entrez Gene id in BioCreative data).
    pub entity_id: u64,
}

impl Key {
    /// Create a key from its two identifiers.
    #[must_use]
    pub const fn new(document_id: u64, entity_id: u64) -> Self {
        Self {
            document_id,
            entity_id,
        }
    }

    /// Parse a key from the two identifier columns of an input line.
    ///
    /// Surrounding whitespace is ignored and a leading `+` is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bc2score_core::Key;
    ///
    /// let key = Key::from_fields("10064899", " 7157").unwrap();
    /// assert_eq!(key, Key::new(10064899, 7157));
    /// assert!(Key::from_fields("PMID1", "7157").is_err());
    /// ```
    pub fn from_fields(document: &str, entity: &str) -> Result<Self> {
        Ok(Self::new(
            parse_identifier(document)?,
            parse_identifier(entity)?,
        ))
    }
}

// Signed values such as "-5" are rejected here, unlike a permissive atoi.
fn parse_identifier(field: &str) -> Result<u64> {
    let trimmed = field.trim();
    trimmed
        .parse::<u64>()
        .map_err(|e| Error::parse(format!("incorrect identifier {:?}: {}", trimmed, e)))
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.document_id, self.entity_id)
    }
}

impl From<(u64, u64)> for Key {
    fn from((document_id, entity_id): (u64, u64)) -> Self {
        Self::new(document_id, entity_id)
    }
}
