//! Command implementations for the bc2score CLI

pub mod score;

// Re-export argument types for parser
pub use score::ScoreArgs;
