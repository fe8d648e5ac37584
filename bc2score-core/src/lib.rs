//! # bc2score-core
//!
//! Core types for the bc2score toolbox: the record model shared by the
//! loader, the scoring engine and the report emitter.
//!
//! This crate provides:
//! - **Keys**: `Key`, the canonical `(document, entity)` identifier
//! - **Records**: `GoldRecord`, `TestRecord` and the keyed `RecordSet`
//!
//! Records are built once while reading input and are read-only afterwards.

pub mod error;
pub mod key;
pub mod record;

pub use error::{Error, Result};
pub use key::Key;
pub use record::{GoldRecord, Keyed, RecordSet, TestRecord};
