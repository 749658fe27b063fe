//! LM Studio provider implementation using the chat completions endpoint.
//!
//! Runs against a local OpenAI-compatible server, so there is no auth. The
//! model is steered to JSON-only output through the system prompt and
//! `response_format: json_object`; the reply content is parsed into the
//! shared question payload.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::level::Level;
use crate::questions::types::{QuestionPayload, generation_prompt, validate_round};
use crate::questions::{ProviderError, Question, QuestionProvider};

pub const DEFAULT_LMSTUDIO_BASE_URL: &str = "http://localhost:1234/v1";
pub const DEFAULT_LMSTUDIO_MODEL: &str = "qwen2.5-7b-instruct";

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

const SYSTEM_PROMPT: &str = "Bạn là người soạn câu hỏi trắc nghiệm văn học Việt Nam cho học sinh. \
    Chỉ trả về một mảng JSON các đối tượng câu hỏi với các trường: \
    content (chuỗi), options (mảng 4 chuỗi), correct_index (số, bắt đầu từ 0), \
    explanation (chuỗi), citation (chuỗi, tùy chọn). \
    Không trả về bất kỳ văn bản nào ngoài JSON.";

// ============================================================================
// Chat Completions API Types
// ============================================================================

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "lowercase")]
enum Role {
    System,
    User,
}

#[derive(Serialize, Debug, Clone)]
struct ChatMessage {
    role: Role,
    content: String,
}

#[derive(Serialize, Debug)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str, // always "json_object"
}

#[derive(Serialize, Debug)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

// ============================================================================
// Translation Layer
// ============================================================================

/// Parses the reply content into a question array.
///
/// Some local models wrap the array in an object (`{"questions": [...]}`)
/// when forced into json_object mode; both shapes are accepted.
fn parse_reply(content: &str) -> Result<Vec<QuestionPayload>, String> {
    if let Ok(payload) = serde_json::from_str::<Vec<QuestionPayload>>(content) {
        return Ok(payload);
    }

    #[derive(Deserialize)]
    struct Wrapped {
        questions: Vec<QuestionPayload>,
    }
    serde_json::from_str::<Wrapped>(content)
        .map(|w| w.questions)
        .map_err(|e| format!("reply is not a question array: {e}"))
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// LM Studio question generator (local inference server).
pub struct LmStudioProvider {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl LmStudioProvider {
    pub fn new(base_url: Option<String>, model: Option<String>) -> Self {
        let env_url = std::env::var("LM_STUDIO_BASE_URL").ok();
        let final_url = base_url
            .or(env_url)
            .unwrap_or_else(|| DEFAULT_LMSTUDIO_BASE_URL.to_string());

        Self {
            base_url: final_url,
            model: model.unwrap_or_else(|| DEFAULT_LMSTUDIO_MODEL.to_string()),
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
        }
    }
}

#[async_trait::async_trait]
impl QuestionProvider for LmStudioProvider {
    fn name(&self) -> &str {
        "lmstudio"
    }

    async fn fetch_questions(&self, level: Level) -> Result<Vec<Question>, ProviderError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage { role: Role::System, content: SYSTEM_PROMPT.to_string() },
                ChatMessage { role: Role::User, content: generation_prompt(level) },
            ],
            response_format: ResponseFormat { format_type: "json_object" },
        };

        info!("LM Studio chat request: model={}, level={:?}", self.model, level);

        // No auth for local LM Studio
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("LM Studio response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("LM Studio API error: {} - {}", status, err_body);
            return Err(ProviderError::Api { status, message: err_body });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Payload(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ProviderError::Payload("response has no choice content".to_string()))?;

        let payload = parse_reply(&content).map_err(ProviderError::Payload)?;
        let questions = validate_round(payload).map_err(|e| ProviderError::Payload(e.to_string()))?;
        info!("LM Studio returned a valid round of {} questions", questions.len());
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTION_JSON: &str = r#"{
        "content": "Ai là tác giả của bài thơ Tây Tiến?",
        "options": ["Quang Dũng", "Tố Hữu", "Xuân Diệu", "Huy Cận"],
        "correct_index": 0,
        "explanation": "Tây Tiến là bài thơ nổi tiếng của Quang Dũng."
    }"#;

    #[test]
    fn test_parse_reply_bare_array() {
        let content = format!("[{QUESTION_JSON}]");
        let payload = parse_reply(&content).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].correct_index, 0);
    }

    #[test]
    fn test_parse_reply_wrapped_object() {
        let content = format!("{{\"questions\": [{QUESTION_JSON}]}}");
        let payload = parse_reply(&content).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].options.len(), 4);
    }

    #[test]
    fn test_parse_reply_rejects_garbage() {
        assert!(parse_reply("not json at all").is_err());
        assert!(parse_reply("{\"answers\": []}").is_err());
    }
}
