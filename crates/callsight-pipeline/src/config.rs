//! Pipeline configuration

use callsight_llm::LabelPolicy;
use secrecy::SecretString;

/// Environment variable carrying the provider credential
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Configuration for one pipeline instance.
///
/// Passed explicitly at construction; one instance per process run, no
/// hidden mutation. An absent `api_key` selects offline mode and is an
/// expected state, not an error.
#[derive(Debug, Default)]
pub struct PipelineConfig {
    /// Provider credential; `None` selects offline mode
    pub api_key: Option<SecretString>,
    /// Model override; the provider default is used when `None`
    pub model: Option<String>,
    /// API base URL override (used by tests)
    pub base_url: Option<String>,
    /// Policy for out-of-domain sentiment labels
    pub label_policy: LabelPolicy,
}

impl PipelineConfig {
    /// Offline-only configuration
    pub fn offline() -> Self {
        Self::default()
    }

    /// Read the credential from the environment.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::new);

        Self {
            api_key,
            ..Self::default()
        }
    }
}
