//! Shared type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentiment label for a call transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Canonical label text
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Parse a label returned by a provider.
    ///
    /// Matching is trim + ASCII-case-insensitive against the three canonical
    /// labels; anything else is out of domain and returns `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("positive") {
            Some(Sentiment::Positive)
        } else if label.eq_ignore_ascii_case("neutral") {
            Some(Sentiment::Neutral)
        } else if label.eq_ignore_ascii_case("negative") {
            Some(Sentiment::Negative)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which path produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Hosted provider
    Api,
    /// Deterministic offline analyzer
    Offline,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Api => write!(f, "api"),
            Source::Offline => write!(f, "offline"),
        }
    }
}

/// One completed analysis, immutable after creation.
///
/// Field order matches the CSV column order of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Transcript as entered
    pub transcript: String,
    /// 2-3 sentence summary
    pub summary: String,
    /// Sentiment label
    pub sentiment: Sentiment,
    /// Creation time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Path that produced the record
    pub source: Source,
}
