//! Pipeline error types

use thiserror::Error;

/// Errors surfaced by the analysis pipeline.
///
/// Provider failures are not represented here; they are recovered internally
/// by the offline fallback and never reach the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PipelineError {
    /// Rejected before any provider or offline call
    #[error("transcript is empty after trimming whitespace")]
    EmptyTranscript,
}
