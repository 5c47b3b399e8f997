//! callsight-core - shared types for the call analyzer
//!
//! Domain types for transcript analysis results and the built-in
//! sample transcripts.

pub mod samples;
pub mod types;

pub use types::{AnalysisRecord, Sentiment, Source};
