//! Prompt templates for summary and sentiment extraction

/// System instruction: strict JSON with `summary` and `sentiment` keys.
pub const SYSTEM_PROMPT: &str = "You are an assistant that MUST return strictly valid JSON only. \
Given a customer call transcript, return a JSON object with keys: \
'summary' (a concise 2-3 sentence summary) and 'sentiment' (one of: Positive, Neutral, Negative). \
Return *only* the JSON object and nothing else.";

/// Build the user prompt carrying the transcript
pub fn build_user_prompt(transcript: &str) -> String {
    format!(
        "Transcript:\n\"\"\"\n{transcript}\n\"\"\"\n\nRespond with the JSON object described."
    )
}
