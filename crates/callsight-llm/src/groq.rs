//! Groq API provider

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use callsight_core::Sentiment;

use crate::error::LlmError;
use crate::provider::{Analysis, Analyzer, LabelPolicy};
use crate::prompts;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Groq API provider (OpenAI-compatible chat completions)
pub struct GroqClient {
    client: Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    label_policy: LabelPolicy,
}

impl GroqClient {
    /// Create new Groq client with default settings
    pub fn new(api_key: SecretString) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GROQ_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            label_policy: LabelPolicy::default(),
        }
    }

    /// Create with custom model
    pub fn with_model(api_key: SecretString, model: &str) -> Self {
        let mut client = Self::new(api_key);
        client.model = model.to_string();
        client
    }

    /// Override the API base URL (used by tests)
    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.trim_end_matches('/').to_string();
    }

    /// Set the out-of-domain label policy
    pub fn set_label_policy(&mut self, policy: LabelPolicy) {
        self.label_policy = policy;
    }

    /// Get model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the chat completion request, returning the raw message content
    async fn send_chat(&self, user_prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: &self.model,
            temperature: 0.0,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompts::SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };

        debug!("Sending request to Groq API at {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(LlmError::RateLimited(retry_after));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Groq API error: {} - {}", status, error_text);
            return Err(LlmError::RequestFailed(format!("{}: {}", status, error_text)));
        }

        let response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Empty response".to_string()))
    }

    /// Shape the raw message content into a typed analysis
    fn parse_analysis(&self, response: &str) -> Result<Analysis, LlmError> {
        // Try to extract the JSON object from response; a closing brace
        // before the first opening brace means there is no object to cut out
        let json_str = match (response.find('{'), response.rfind('}')) {
            (Some(start), Some(end)) if start < end => &response[start..=end],
            _ => response,
        };

        let raw: RawAnalysis = serde_json::from_str(json_str)
            .map_err(|e| LlmError::ParseError(format!("Failed to parse analysis: {}", e)))?;

        let summary = raw.summary.trim().to_string();
        if summary.is_empty() {
            return Err(LlmError::InvalidResponse("Missing summary".to_string()));
        }

        let sentiment = match Sentiment::from_label(&raw.sentiment) {
            Some(sentiment) => sentiment,
            None => match self.label_policy {
                LabelPolicy::CoerceNeutral => {
                    warn!(
                        "Unrecognized sentiment label {:?}, coercing to Neutral",
                        raw.sentiment
                    );
                    Sentiment::Neutral
                }
                LabelPolicy::Reject => return Err(LlmError::UnknownLabel(raw.sentiment)),
            },
        };

        Ok(Analysis { summary, sentiment })
    }
}

impl Analyzer for GroqClient {
    async fn summarize(&self, transcript: &str) -> Result<Analysis, LlmError> {
        info!("Summarizing transcript with Groq (model: {})", self.model);

        let prompt = prompts::build_user_prompt(transcript);
        let content = self.send_chat(&prompt).await?;
        self.parse_analysis(&content)
    }

    fn name(&self) -> &'static str {
        "Groq"
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct RawAnalysis {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    sentiment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn test_client() -> GroqClient {
        GroqClient::new(SecretString::new("test-key".to_string()))
    }

    #[test]
    fn test_parse_plain_json() {
        let analysis = test_client()
            .parse_analysis(r#"{"summary": "Caller wants a refund.", "sentiment": "Negative"}"#)
            .unwrap();
        assert_eq!(analysis.summary, "Caller wants a refund.");
        assert_eq!(analysis.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_parse_json_embedded_in_prose() {
        let response = "Here is the analysis:\n{\"summary\": \"All good.\", \"sentiment\": \"Positive\"}\nHope this helps!";
        let analysis = test_client().parse_analysis(response).unwrap();
        assert_eq!(analysis.summary, "All good.");
        assert_eq!(analysis.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_out_of_domain_label_coerced_to_neutral() {
        let analysis = test_client()
            .parse_analysis(r#"{"summary": "Mixed feelings.", "sentiment": "ambivalent"}"#)
            .unwrap();
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_out_of_domain_label_rejected_under_reject_policy() {
        let mut client = test_client();
        client.set_label_policy(LabelPolicy::Reject);
        let err = client
            .parse_analysis(r#"{"summary": "Mixed feelings.", "sentiment": "ambivalent"}"#)
            .unwrap_err();
        assert!(matches!(err, LlmError::UnknownLabel(_)));
    }

    #[test]
    fn test_missing_summary_is_response_error() {
        let err = test_client()
            .parse_analysis(r#"{"sentiment": "Positive"}"#)
            .unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }

    #[test]
    fn test_non_json_response_is_parse_error() {
        let err = test_client()
            .parse_analysis("The customer sounded unhappy.")
            .unwrap_err();
        assert!(matches!(err, LlmError::ParseError(_)));
    }

    #[test]
    fn test_brace_reversed_response_is_parse_error() {
        // Closing brace before the first opening brace must not panic
        let err = test_client().parse_analysis("} oops {").unwrap_err();
        assert!(matches!(err, LlmError::ParseError(_)));
    }

    #[test]
    fn test_unclosed_brace_is_parse_error() {
        let err = test_client()
            .parse_analysis("{\"summary\": \"truncated")
            .unwrap_err();
        assert!(matches!(err, LlmError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_summarize_against_mock_server() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer test-key");
                then.status(200).json_body(json!({
                    "choices": [{
                        "message": {
                            "role": "assistant",
                            "content": "{\"summary\": \"Customer reports a double charge and asks for a refund.\", \"sentiment\": \"Negative\"}"
                        }
                    }]
                }));
            })
            .await;

        let mut client = test_client();
        client.set_base_url(&server.base_url());

        let analysis = client.summarize("I was double charged.").await.unwrap();
        mock.assert_async().await;
        assert_eq!(analysis.sentiment, Sentiment::Negative);
        assert!(analysis.summary.contains("double charge"));
    }

    #[tokio::test]
    async fn test_server_error_is_request_failed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(500).body("internal error");
            })
            .await;

        let mut client = test_client();
        client.set_base_url(&server.base_url());

        let err = client.summarize("Hello.").await.unwrap_err();
        assert!(matches!(err, LlmError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_rate_limit_maps_retry_after() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(429).header("retry-after", "12");
            })
            .await;

        let mut client = test_client();
        client.set_base_url(&server.base_url());

        let err = client.summarize("Hello.").await.unwrap_err();
        assert!(matches!(err, LlmError::RateLimited(12)));
    }
}
