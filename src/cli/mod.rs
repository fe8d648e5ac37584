//! CLI library modules for the bc2score binary.
//!
//! Kept in the library so argument handling can be tested without spawning
//! the binary.

pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use parser::Cli;
