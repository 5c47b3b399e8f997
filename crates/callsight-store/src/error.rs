//! Persistence error types

use thiserror::Error;

/// Persistence errors.
///
/// Surfaced to the caller, never swallowed: a failed append means the result
/// was not saved and the user must be told.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}
