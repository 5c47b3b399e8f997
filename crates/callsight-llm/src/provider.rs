//! Analyzer trait and common types

use callsight_core::Sentiment;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Shaped result for one transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// 2-3 sentence summary
    pub summary: String,
    /// Sentiment label, always one of the fixed domain
    pub sentiment: Sentiment,
}

/// Policy for provider sentiment labels outside {Positive, Neutral, Negative}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPolicy {
    /// Map an out-of-domain label to `Neutral`
    CoerceNeutral,
    /// Treat an out-of-domain label as a response error
    Reject,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        LabelPolicy::CoerceNeutral
    }
}

/// Summarization provider trait
#[trait_variant::make(Analyzer: Send)]
pub trait LocalAnalyzer {
    /// Summarize one transcript and score its sentiment
    async fn summarize(&self, transcript: &str) -> Result<Analysis, LlmError>;

    /// Get provider name
    fn name(&self) -> &'static str;
}
