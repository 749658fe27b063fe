use serde_json::json;
use vanhoc::core::level::{Level, QUESTIONS_PER_LEVEL};
use vanhoc::questions::{GeminiProvider, LmStudioProvider, ProviderError, QuestionProvider};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

/// A valid round of questions as the services would emit it, serialized.
fn round_json(count: usize) -> String {
    let questions: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "content": format!("Câu hỏi {i}: Ai là tác giả của Truyện Kiều?"),
                "options": ["Nguyễn Du", "Nguyễn Trãi", "Hồ Xuân Hương", "Nguyễn Đình Chiểu"],
                "correct_index": 0,
                "explanation": "Truyện Kiều là kiệt tác của đại thi hào Nguyễn Du.",
                "citation": "Truyện Kiều — Nguyễn Du"
            })
        })
        .collect();
    serde_json::to_string(&questions).unwrap()
}

/// Wraps question-array text in a Gemini generateContent response body.
fn gemini_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

/// Wraps reply content in an OpenAI-style chat completions response body.
fn chat_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

fn gemini_provider(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new(
        "test-key".to_string(),
        Some(server.uri()),
        Some("gemini-test".to_string()),
    )
}

fn lmstudio_provider(server: &MockServer) -> LmStudioProvider {
    LmStudioProvider::new(Some(server.uri()), Some("test-model".to_string()))
}

// ============================================================================
// Gemini Provider Tests
// ============================================================================

#[tokio::test]
async fn test_gemini_successful_round() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_body(&round_json(QUESTIONS_PER_LEVEL))),
        )
        .mount(&mock_server)
        .await;

    let provider = gemini_provider(&mock_server);
    let questions = provider.fetch_questions(Level::Level1).await.unwrap();

    assert_eq!(questions.len(), QUESTIONS_PER_LEVEL);
    assert_eq!(questions[0].options.len(), 4);
    assert_eq!(questions[0].correct_index, 0);
    assert_eq!(questions[0].citation.as_deref(), Some("Truyện Kiều — Nguyễn Du"));
}

#[tokio::test]
async fn test_gemini_request_asks_for_structured_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_body(&round_json(QUESTIONS_PER_LEVEL))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = gemini_provider(&mock_server);
    provider.fetch_questions(Level::Level3).await.unwrap();
}

#[tokio::test]
async fn test_gemini_api_error_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let provider = gemini_provider(&mock_server);
    let result = provider.fetch_questions(Level::Level1).await;

    assert!(matches!(result, Err(ProviderError::Api { status: 403, .. })));
}

#[tokio::test]
async fn test_gemini_empty_api_key_is_config_error() {
    let provider = GeminiProvider::new(String::new(), None, None);
    let result = provider.fetch_questions(Level::Level1).await;
    assert!(matches!(result, Err(ProviderError::Config(_))));
}

#[tokio::test]
async fn test_gemini_malformed_candidate_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("this is not json")))
        .mount(&mock_server)
        .await;

    let provider = gemini_provider(&mock_server);
    let result = provider.fetch_questions(Level::Level1).await;

    assert!(matches!(result, Err(ProviderError::Payload(_))));
}

#[tokio::test]
async fn test_gemini_short_round_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(&round_json(3))))
        .mount(&mock_server)
        .await;

    let provider = gemini_provider(&mock_server);
    let result = provider.fetch_questions(Level::Level2).await;

    match result {
        Err(ProviderError::Payload(msg)) => assert!(msg.contains("got 3"), "message: {msg}"),
        other => panic!("expected payload error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_gemini_out_of_range_correct_index_is_rejected() {
    let mock_server = MockServer::start().await;

    let mut questions: Vec<serde_json::Value> =
        serde_json::from_str(&round_json(QUESTIONS_PER_LEVEL)).unwrap();
    questions[1]["correct_index"] = json!(7);
    let text = serde_json::to_string(&questions).unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(&text)))
        .mount(&mock_server)
        .await;

    let provider = gemini_provider(&mock_server);
    let result = provider.fetch_questions(Level::Level1).await;

    assert!(matches!(result, Err(ProviderError::Payload(_))));
}

#[tokio::test]
async fn test_gemini_no_candidates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&mock_server)
        .await;

    let provider = gemini_provider(&mock_server);
    let result = provider.fetch_questions(Level::Level1).await;

    assert!(matches!(result, Err(ProviderError::Payload(_))));
}

// ============================================================================
// LM Studio Provider Tests
// ============================================================================

#[tokio::test]
async fn test_lmstudio_successful_round() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_body(&round_json(QUESTIONS_PER_LEVEL))),
        )
        .mount(&mock_server)
        .await;

    let provider = lmstudio_provider(&mock_server);
    let questions = provider.fetch_questions(Level::Special).await.unwrap();

    assert_eq!(questions.len(), QUESTIONS_PER_LEVEL);
    assert!(questions.iter().all(|q| q.correct_index < q.options.len()));
}

#[tokio::test]
async fn test_lmstudio_accepts_wrapped_question_object() {
    let mock_server = MockServer::start().await;

    // json_object mode makes some models wrap the array in an object
    let wrapped = format!("{{\"questions\": {}}}", round_json(QUESTIONS_PER_LEVEL));
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(&wrapped)))
        .mount(&mock_server)
        .await;

    let provider = lmstudio_provider(&mock_server);
    let questions = provider.fetch_questions(Level::Level1).await.unwrap();
    assert_eq!(questions.len(), QUESTIONS_PER_LEVEL);
}

#[tokio::test]
async fn test_lmstudio_sends_model_and_level_prompt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "model": "test-model" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_body(&round_json(QUESTIONS_PER_LEVEL))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = lmstudio_provider(&mock_server);
    provider.fetch_questions(Level::Graduation).await.unwrap();

    // The user message carries the level's generation prompt.
    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = body_json(&requests[0]);
    let user_content = body["messages"][1]["content"].as_str().unwrap();
    assert!(user_content.contains("5 câu hỏi"));
}

fn body_json(request: &Request) -> serde_json::Value {
    serde_json::from_slice(&request.body).unwrap()
}

#[tokio::test]
async fn test_lmstudio_api_error_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&mock_server)
        .await;

    let provider = lmstudio_provider(&mock_server);
    let result = provider.fetch_questions(Level::Level1).await;

    assert!(matches!(result, Err(ProviderError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_lmstudio_empty_choices() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&mock_server)
        .await;

    let provider = lmstudio_provider(&mock_server);
    let result = provider.fetch_questions(Level::Level1).await;

    assert!(matches!(result, Err(ProviderError::Payload(_))));
}

#[tokio::test]
async fn test_lmstudio_short_round_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(&round_json(4))))
        .mount(&mock_server)
        .await;

    let provider = lmstudio_provider(&mock_server);
    let result = provider.fetch_questions(Level::Level1).await;

    assert!(matches!(result, Err(ProviderError::Payload(_))));
}

// ============================================================================
// Network Failure Tests
// ============================================================================

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Port 1 is essentially never listening.
    let provider = LmStudioProvider::new(
        Some("http://127.0.0.1:1".to_string()),
        Some("test-model".to_string()),
    );
    let result = provider.fetch_questions(Level::Level1).await;
    assert!(matches!(result, Err(ProviderError::Network(_))));
}
