//! Deterministic offline analyzer
//!
//! Exists so the application runs with no credential at all; also used as
//! the fallback when the hosted provider fails.

use tracing::debug;

use callsight_core::Sentiment;

use crate::error::LlmError;
use crate::provider::{Analysis, Analyzer};

/// Keyword cues counted as substring occurrences over the lowercased text.
const NEGATIVE_CUES: &[&str] = &[
    "not", "failed", "frustrat", "angry", "charged", "refund", "problem", "issue", "complain",
    "delay",
];
const POSITIVE_CUES: &[&str] = &["thank", "thanks", "great", "happy", "good", "satisfied"];

/// Word prefix used when the transcript has no sentence break
const SUMMARY_PREFIX_WORDS: usize = 12;

/// Offline analyzer with a fixed summary/sentiment heuristic.
///
/// Deterministic: the same transcript always yields the same analysis.
#[derive(Debug, Clone, Default)]
pub struct OfflineAnalyzer;

impl OfflineAnalyzer {
    /// Create new offline analyzer
    pub fn new() -> Self {
        Self
    }

    /// Analyze one transcript; never fails
    pub fn analyze(&self, transcript: &str) -> Analysis {
        let text = transcript.trim();
        debug!("Analyzing transcript offline ({} bytes)", text.len());
        Analysis {
            summary: summarize(text),
            sentiment: score(text),
        }
    }
}

impl Analyzer for OfflineAnalyzer {
    async fn summarize(&self, transcript: &str) -> Result<Analysis, LlmError> {
        Ok(self.analyze(transcript))
    }

    fn name(&self) -> &'static str {
        "Offline"
    }
}

/// First sentence of the text, or a short word prefix when the text has no
/// sentence break.
fn summarize(text: &str) -> String {
    if let Some(sentence) = first_sentence(text) {
        return sentence.to_string();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= SUMMARY_PREFIX_WORDS {
        text.to_string()
    } else {
        format!("{}...", words[..SUMMARY_PREFIX_WORDS].join(" "))
    }
}

/// Text up to the first `.`, `?` or `!` that is followed by whitespace,
/// punctuation excluded.
fn first_sentence(text: &str) -> Option<&str> {
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '?' | '!') {
            if let Some(&(_, next)) = chars.peek() {
                if next.is_whitespace() {
                    return Some(text[..i].trim_end());
                }
            }
        }
    }
    None
}

/// Keyword-count sentiment: negative cues vs positive cues, ties are Neutral.
fn score(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let neg: usize = NEGATIVE_CUES.iter().map(|w| lower.matches(w).count()).sum();
    let pos: usize = POSITIVE_CUES.iter().map(|w| lower.matches(w).count()).sum();

    if neg > pos {
        Sentiment::Negative
    } else if pos > neg {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}
