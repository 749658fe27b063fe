//! # Levels
//!
//! The fixed level sequence and its progression table.
//!
//! ```text
//! Level1 ──▶ Level2 ──▶ Level3 ──▶ (counter +1, certificate)
//!                                        │ count ≥ 9, opt-in
//!                                        ▼
//!                                     Special ──▶ Graduation ──▶ certificate
//! ```
//!
//! Progression is a single exhaustive `match` in [`advance`] so the whole
//! graph is checkable at a glance, instead of branching scattered across
//! screen handlers.

use serde::{Deserialize, Serialize};

/// Completed core passes required before the special round opens up.
pub const SPECIAL_UNLOCK_COUNT: u32 = 9;

/// Every round asks the question service for exactly this many questions.
pub const QUESTIONS_PER_LEVEL: usize = 5;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    #[serde(rename = "level_1")]
    Level1,
    #[serde(rename = "level_2")]
    Level2,
    #[serde(rename = "level_3")]
    Level3,
    #[serde(rename = "special")]
    Special,
    #[serde(rename = "graduation")]
    Graduation,
}

/// What happens after a level is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Load the next level in the sequence.
    Next(Level),
    /// The core sequence is done: bump the persisted counter, then show the
    /// certificate.
    CoreComplete,
    /// Graduation passed: show the final certificate (rank forced to the top
    /// label, no counter change).
    FinalCertificate,
}

/// The complete progression table.
pub fn advance(current: Level) -> Advance {
    match current {
        Level::Level1 => Advance::Next(Level::Level2),
        Level::Level2 => Advance::Next(Level::Level3),
        Level::Level3 => Advance::CoreComplete,
        Level::Special => Advance::Next(Level::Graduation),
        Level::Graduation => Advance::FinalCertificate,
    }
}

/// True once the completion counter has unlocked the special round.
pub fn special_unlocked(completion_count: u32) -> bool {
    completion_count >= SPECIAL_UNLOCK_COUNT
}

impl Level {
    /// Display title shown on the roadmap and level intro cards.
    pub fn title(self) -> &'static str {
        match self {
            Level::Level1 => "Vòng 1: Khởi Động",
            Level::Level2 => "Vòng 2: Tăng Tốc",
            Level::Level3 => "Vòng 3: Về Đích",
            Level::Special => "Thử Thách Đặc Biệt",
            Level::Graduation => "Vòng Đỉnh Cao Trí Tuệ",
        }
    }

    /// One-line description for the roadmap card.
    pub fn description(self) -> &'static str {
        match self {
            Level::Level1 => "Những câu hỏi cơ bản về tác giả và tác phẩm quen thuộc.",
            Level::Level2 => "Nội dung và ý nghĩa của các tác phẩm trong chương trình.",
            Level::Level3 => "Phân tích chi tiết, nghệ thuật và hoàn cảnh sáng tác.",
            Level::Special => "Câu hỏi nâng cao dành cho học sinh xuất sắc.",
            Level::Graduation => "Thử thách cuối cùng trên con đường trở thành thiên tài văn học.",
        }
    }

    /// Short badge icon for the roadmap.
    pub fn icon(self) -> &'static str {
        match self {
            Level::Level1 => "📚",
            Level::Level2 => "✏️",
            Level::Level3 => "🏅",
            Level::Special => "🔥",
            Level::Graduation => "🎓",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_sequence_is_linear() {
        assert_eq!(advance(Level::Level1), Advance::Next(Level::Level2));
        assert_eq!(advance(Level::Level2), Advance::Next(Level::Level3));
        assert_eq!(advance(Level::Level3), Advance::CoreComplete);
    }

    #[test]
    fn test_special_branch_ends_at_final_certificate() {
        assert_eq!(advance(Level::Special), Advance::Next(Level::Graduation));
        assert_eq!(advance(Level::Graduation), Advance::FinalCertificate);
    }

    #[test]
    fn test_special_unlock_threshold_is_inclusive() {
        assert!(!special_unlocked(0));
        assert!(!special_unlocked(8));
        assert!(special_unlocked(9));
        assert!(special_unlocked(40));
    }

    #[test]
    fn test_level_serde_names() {
        assert_eq!(serde_json::to_string(&Level::Level1).unwrap(), "\"level_1\"");
        assert_eq!(serde_json::to_string(&Level::Special).unwrap(), "\"special\"");
    }
}
