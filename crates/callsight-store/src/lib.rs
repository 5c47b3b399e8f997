//! callsight-store - CSV persistence for analysis records
//!
//! Append-only: the header is written once at file creation, every analysis
//! appends exactly one row, rows are never rewritten or deleted.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::CsvStore;
