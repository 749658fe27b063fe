//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::level::Level;
use crate::core::state::UserProfile;
use crate::questions::{ProviderError, Question, QuestionProvider};

/// A complete profile for tests.
pub fn test_profile() -> UserProfile {
    UserProfile {
        name: "Nguyễn Văn An".to_string(),
        class_name: "9A1".to_string(),
        school: "THCS Chu Văn An".to_string(),
    }
}

/// A round of `count` questions, each with four options and option 0 correct.
pub fn test_round(count: usize) -> Vec<Question> {
    (0..count)
        .map(|i| Question {
            content: format!("Câu hỏi số {}?", i + 1),
            options: vec![
                "Đáp án đúng".to_string(),
                "Đáp án sai 1".to_string(),
                "Đáp án sai 2".to_string(),
                "Đáp án sai 3".to_string(),
            ],
            correct_index: 0,
            explanation: format!("Giải thích cho câu {}.", i + 1),
            citation: if i % 2 == 0 { Some("Truyện Kiều — Nguyễn Du".to_string()) } else { None },
        })
        .collect()
}

/// A provider that always returns a canned round, for tests that don't need
/// real API calls.
pub struct CannedProvider {
    pub round: Vec<Question>,
}

#[async_trait]
impl QuestionProvider for CannedProvider {
    fn name(&self) -> &str {
        "canned"
    }

    async fn fetch_questions(&self, _level: Level) -> Result<Vec<Question>, ProviderError> {
        Ok(self.round.clone())
    }
}

/// A provider that always fails, for error-path tests.
pub struct FailingProvider;

#[async_trait]
impl QuestionProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_questions(&self, _level: Level) -> Result<Vec<Question>, ProviderError> {
        Err(ProviderError::Network("connection refused".to_string()))
    }
}
