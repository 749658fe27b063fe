//! Gemini provider implementation using the `generateContent` endpoint.
//!
//! Questions are requested as structured JSON output: the request carries a
//! JSON schema for the question array (derived from [`QuestionPayload`] via
//! schemars), and the model's reply text is parsed back into the payload.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::level::Level;
use crate::questions::types::{QuestionPayload, generation_prompt, validate_round};
use crate::questions::{ProviderError, Question, QuestionProvider};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

// ============================================================================
// Gemini API Types
// ============================================================================

#[derive(Serialize, Debug)]
struct Part {
    text: String,
}

#[derive(Serialize, Debug)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_json_schema: serde_json::Value,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

// ============================================================================
// Translation Layer
// ============================================================================

/// JSON schema for the expected response: an array of question objects.
///
/// The item schema is derived from [`QuestionPayload`]; all its fields are
/// primitives, so the derived schema is self-contained (no `$ref`s).
fn round_schema() -> serde_json::Value {
    let item = serde_json::to_value(schemars::schema_for!(QuestionPayload))
        .unwrap_or_else(|_| serde_json::json!({"type": "object"}));
    serde_json::json!({ "type": "array", "items": item })
}

/// Extracts the model's reply text from the first candidate.
fn response_text(response: GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate
        .content
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini question generator (remote, API-key authenticated).
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
        }
    }
}

#[async_trait::async_trait]
impl QuestionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn fetch_questions(&self, level: Level) -> Result<Vec<Question>, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::Config("Gemini API key is not set".to_string()));
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: generation_prompt(level) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_json_schema: round_schema(),
            },
        };

        info!("Gemini generateContent request: model={}, level={:?}", self.model, level);

        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("Gemini response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Gemini API error: {} - {}", status, err_body);
            return Err(ProviderError::Api { status, message: err_body });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Payload(e.to_string()))?;

        let text = response_text(body)
            .ok_or_else(|| ProviderError::Payload("response has no candidate text".to_string()))?;

        let payload: Vec<QuestionPayload> = serde_json::from_str(&text)
            .map_err(|e| ProviderError::Payload(format!("candidate text is not a question array: {e}")))?;

        let questions = validate_round(payload).map_err(|e| ProviderError::Payload(e.to_string()))?;
        info!("Gemini returned a valid round of {} questions", questions.len());
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_schema_is_array_of_objects() {
        let schema = round_schema();
        assert_eq!(schema["type"], "array");
        let props = &schema["items"]["properties"];
        assert!(props.get("content").is_some());
        assert!(props.get("correct_index").is_some());
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![
                        CandidatePart { text: "[{\"a\":".to_string() },
                        CandidatePart { text: "1}]".to_string() },
                    ],
                },
            }],
        };
        assert_eq!(response_text(response).as_deref(), Some("[{\"a\":1}]"));
    }

    #[test]
    fn test_response_text_empty_candidates() {
        let response = GenerateContentResponse { candidates: vec![] };
        assert!(response_text(response).is_none());
    }
}
