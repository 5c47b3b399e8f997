//! Provider layer for callsight
//!
//! This module provides the hosted Groq summarization client and the
//! deterministic offline fallback analyzer.

pub mod error;
pub mod groq;
pub mod offline;
pub mod prompts;
pub mod provider;

pub use error::LlmError;
pub use groq::GroqClient;
pub use offline::OfflineAnalyzer;
pub use provider::{Analysis, Analyzer, LabelPolicy};
