//! callsight-pipeline - transcript analysis orchestration
//!
//! Validates input, dispatches to the hosted provider or the offline
//! analyzer, and shapes the timestamped result record.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::AnalysisPipeline;
