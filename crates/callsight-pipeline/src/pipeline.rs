//! Transcript analysis orchestration

use chrono::Utc;
use tracing::{debug, warn};

use callsight_core::{AnalysisRecord, Source};
use callsight_llm::{Analyzer, GroqClient, OfflineAnalyzer};

use crate::config::PipelineConfig;
use crate::error::PipelineError;

/// Orchestrates one analysis: input validation, provider dispatch, result
/// shaping, timestamping.
///
/// A single provider attempt, no retries: on any provider failure the
/// offline analyzer result is substituted so the caller never hard-fails.
pub struct AnalysisPipeline {
    groq: Option<GroqClient>,
    offline: OfflineAnalyzer,
}

impl AnalysisPipeline {
    /// Build a pipeline from explicit configuration.
    pub fn new(config: PipelineConfig) -> Self {
        let groq = config.api_key.map(|api_key| {
            let mut client = match config.model.as_deref() {
                Some(model) => GroqClient::with_model(api_key, model),
                None => GroqClient::new(api_key),
            };
            if let Some(base_url) = config.base_url.as_deref() {
                client.set_base_url(base_url);
            }
            client.set_label_policy(config.label_policy);
            client
        });

        Self {
            groq,
            offline: OfflineAnalyzer::new(),
        }
    }

    /// True when no credential is configured and every call runs offline
    pub fn is_offline(&self) -> bool {
        self.groq.is_none()
    }

    /// Analyze one transcript.
    ///
    /// Empty or whitespace-only input is rejected before any provider or
    /// offline call.
    pub async fn analyze(&self, transcript: &str) -> Result<AnalysisRecord, PipelineError> {
        let trimmed = transcript.trim();
        if trimmed.is_empty() {
            return Err(PipelineError::EmptyTranscript);
        }

        let (analysis, source) = match &self.groq {
            Some(client) => match client.summarize(trimmed).await {
                Ok(analysis) => (analysis, Source::Api),
                Err(err) => {
                    warn!(
                        "Provider call failed ({}), falling back to offline analyzer",
                        err
                    );
                    (self.offline.analyze(trimmed), Source::Offline)
                }
            },
            None => {
                debug!("No API credential configured, using offline analyzer");
                (self.offline.analyze(trimmed), Source::Offline)
            }
        };

        Ok(AnalysisRecord {
            transcript: transcript.to_string(),
            summary: analysis.summary,
            sentiment: analysis.sentiment,
            timestamp: Utc::now(),
            source,
        })
    }
}
