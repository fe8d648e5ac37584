//! Reading gold-standard and test files.
//!
//! Both formats are tab-separated with one record per line and no header:
//!
//! ```text
//! gold:  documentId \t entityId \t excerpt1 [\t excerpt2 ...]
//! test:  documentId \t entityId \t excerpt
//! ```
//!
//! Malformed lines never abort a run. They are logged, dropped (or degraded,
//! for a test line missing its excerpt) and counted, and the counts end up in
//! the summary. Lines are trimmed before splitting, so trailing tabs and
//! carriage returns are ignored. A key seen twice keeps its last record.

use std::fs;
use std::path::Path;

use bc2score_core::{GoldRecord, Key, Keyed, RecordSet, TestRecord};

use crate::{Error, Result};

/// Parsed gold standard plus the number of lines it rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoldFile {
    /// One record per key.
    pub records: RecordSet<GoldRecord>,
    /// Lines with too few fields or a bad identifier.
    pub errors: usize,
}

/// Parsed system output plus the problems found while reading it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestFile {
    /// One record per key.
    pub records: RecordSet<TestRecord>,
    /// Lines dropped for a bad identifier.
    pub errors: usize,
    /// Lines with fewer than three fields. Counted even when the line is
    /// then dropped for lacking an entity id.
    pub missing_excerpts: usize,
}

/// Parse gold-standard content.
#[must_use]
pub fn parse_gold(content: &str) -> GoldFile {
    let mut file = GoldFile::default();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        match parse_gold_line(line) {
            Ok(record) => {
                if let Some(previous) = file.records.insert(record) {
                    log::debug!(
                        "Gold file line {}: duplicate key {}, replacing earlier record",
                        idx + 1,
                        previous.key()
                    );
                }
            }
            Err(e) => {
                log::warn!("Error parsing gold file, ignoring line {} {:?}: {}", idx + 1, line, e);
                file.errors += 1;
            }
        }
    }

    file
}

fn parse_gold_line(line: &str) -> bc2score_core::Result<GoldRecord> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 3 {
        return Err(bc2score_core::Error::parse(format!(
            "expected at least 3 tab-separated fields, found {}",
            fields.len()
        )));
    }
    let key = Key::from_fields(fields[0], fields[1])?;
    let excerpts = fields[2..].iter().map(|s| (*s).to_string()).collect();
    GoldRecord::new(key, excerpts)
}

/// Parse test (system output) content.
///
/// Only the first excerpt column is read; anything after it is ignored.
#[must_use]
pub fn parse_test(content: &str) -> TestFile {
    let mut file = TestFile::default();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() < 3 {
            log::warn!(
                "Error parsing test file, perhaps missing excerpt, line {} {:?}",
                idx + 1,
                line
            );
            file.missing_excerpts += 1;
            if fields.len() < 2 {
                continue;
            }
        }

        let key = match Key::from_fields(fields[0], fields[1]) {
            Ok(key) => key,
            Err(e) => {
                log::warn!("Error parsing test file, ignoring line {} {:?}: {}", idx + 1, line, e);
                file.errors += 1;
                continue;
            }
        };

        let excerpt = fields.get(2).copied().unwrap_or_default();
        if let Some(previous) = file.records.insert(TestRecord::new(key, excerpt)) {
            log::debug!(
                "Test file line {}: duplicate key {}, replacing excerpt {:?}",
                idx + 1,
                key,
                previous.excerpt()
            );
        }
    }

    file
}

/// Read and parse a gold-standard file.
pub fn load_gold(path: impl AsRef<Path>) -> Result<GoldFile> {
    let path = path.as_ref();
    let content = read_input(path)?;
    let file = parse_gold(&content);
    log::info!(
        "Loaded {} gold records from {} ({} errors)",
        file.records.len(),
        path.display(),
        file.errors
    );
    Ok(file)
}

/// Read and parse a test file.
pub fn load_test(path: impl AsRef<Path>) -> Result<TestFile> {
    let path = path.as_ref();
    let content = read_input(path)?;
    let file = parse_test(&content);
    log::info!(
        "Loaded {} test records from {} ({} errors, {} missing excerpts)",
        file.records.len(),
        path.display(),
        file.errors,
        file.missing_excerpts
    );
    Ok(file)
}

fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::read(path, e))?;
    Ok(String::from_utf8(bytes).unwrap_or_else(|e| {
        log::warn!("{} is not valid UTF-8, replacing invalid bytes", path.display());
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    }))
}
