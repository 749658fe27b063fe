//! Question records and the wire payload the AI services return.
//!
//! Both providers ask their model for a JSON array of question objects; the
//! shared payload type and its validation live here so the two translation
//! layers stay identical at the boundary.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::level::{Level, QUESTIONS_PER_LEVEL};

/// A single validated multiple-choice question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub content: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    /// Source of a quoted passage or poem, when the question cites one.
    pub citation: Option<String>,
}

/// One question as the generation services emit it, before validation.
#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
pub struct QuestionPayload {
    /// The question text, in Vietnamese.
    pub content: String,
    /// Exactly four answer options.
    pub options: Vec<String>,
    /// Zero-based index of the correct option.
    pub correct_index: u32,
    /// A short explanation of the correct answer, in Vietnamese.
    pub explanation: String,
    /// Title and author of the quoted work, if the question quotes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

/// Why a payload was rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum PayloadError {
    TooFewQuestions { got: usize },
    TooFewOptions { question: usize, got: usize },
    CorrectIndexOutOfRange { question: usize, index: u32, options: usize },
    EmptyContent { question: usize },
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadError::TooFewQuestions { got } => {
                write!(f, "expected {QUESTIONS_PER_LEVEL} questions, got {got}")
            }
            PayloadError::TooFewOptions { question, got } => {
                write!(f, "question {question} has only {got} options")
            }
            PayloadError::CorrectIndexOutOfRange { question, index, options } => {
                write!(f, "question {question}: correct_index {index} out of range for {options} options")
            }
            PayloadError::EmptyContent { question } => {
                write!(f, "question {question} has empty content")
            }
        }
    }
}

/// Validates a raw payload list into a full round of questions.
///
/// Rejects short sets, empty content, fewer than two options, and an
/// out-of-range correct index. Extra questions beyond the round size are
/// truncated, not rejected.
pub fn validate_round(payload: Vec<QuestionPayload>) -> Result<Vec<Question>, PayloadError> {
    if payload.len() < QUESTIONS_PER_LEVEL {
        return Err(PayloadError::TooFewQuestions { got: payload.len() });
    }

    payload
        .into_iter()
        .take(QUESTIONS_PER_LEVEL)
        .enumerate()
        .map(|(i, q)| {
            if q.content.trim().is_empty() {
                return Err(PayloadError::EmptyContent { question: i });
            }
            if q.options.len() < 2 {
                return Err(PayloadError::TooFewOptions { question: i, got: q.options.len() });
            }
            if (q.correct_index as usize) >= q.options.len() {
                return Err(PayloadError::CorrectIndexOutOfRange {
                    question: i,
                    index: q.correct_index,
                    options: q.options.len(),
                });
            }
            Ok(Question {
                content: q.content,
                options: q.options,
                correct_index: q.correct_index as usize,
                explanation: q.explanation,
                citation: q.citation,
            })
        })
        .collect()
}

/// The generation prompt for a level's round of questions.
///
/// Difficulty and topic focus follow the level sequence; both providers send
/// this as the user message.
pub fn generation_prompt(level: Level) -> String {
    let difficulty = match level {
        Level::Level1 => {
            "mức độ cơ bản: nhận biết tác giả, tác phẩm, thể loại quen thuộc trong chương trình Ngữ văn"
        }
        Level::Level2 => {
            "mức độ trung bình: nội dung, nhân vật và ý nghĩa của các tác phẩm trong chương trình Ngữ văn"
        }
        Level::Level3 => {
            "mức độ khó: phân tích nghệ thuật, hoàn cảnh sáng tác và chi tiết đặc sắc của tác phẩm"
        }
        Level::Special => {
            "mức độ nâng cao dành cho học sinh giỏi: so sánh tác phẩm, phong cách tác giả, kiến thức văn học sử"
        }
        Level::Graduation => {
            "mức độ thử thách cao nhất: câu hỏi tổng hợp, liên hệ giữa các tác phẩm và giai đoạn văn học"
        }
    };

    format!(
        "Hãy tạo {QUESTIONS_PER_LEVEL} câu hỏi trắc nghiệm về văn học Việt Nam, {difficulty}. \
         Mỗi câu hỏi có đúng 4 phương án trả lời và duy nhất một phương án đúng. \
         Kèm theo mỗi câu một lời giải thích ngắn gọn, dễ hiểu với học sinh. \
         Nếu câu hỏi trích dẫn thơ hoặc văn, ghi rõ nguồn (tên tác phẩm và tác giả) vào trường citation. \
         Trả về đúng định dạng JSON đã cho, không thêm văn bản nào khác."
    )
}
