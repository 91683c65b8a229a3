//! Commit analysis for version bumping

pub mod increment_analyzer;

pub use increment_analyzer::{bump, Decision, IncrementAnalyzer};
