//! # Game State
//!
//! Core business state for Vanhoc. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! Game
//! ├── screen: Screen                 // which screen is showing
//! ├── current_level: Level           // level being played or loaded
//! ├── questions: Vec<Question>       // the loaded round
//! ├── question_index: usize          // position within the round
//! ├── answered: Option<usize>        // selected option for the current question
//! ├── score: usize                   // correct answers this round
//! ├── user: UserProfile              // set once at intro submission
//! ├── streak: usize                  // consecutive correct answers
//! ├── xp: u32                        // accumulated across the session
//! ├── completion_count: u32          // persisted core-sequence completions
//! └── fetch_seq: u64                 // latest issued question-fetch tag
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use serde::{Deserialize, Serialize};

use crate::core::level::Level;
use crate::questions::Question;

/// XP awarded per correct answer. Fixed increment, no partial credit.
pub const XP_PER_CORRECT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Roadmap,
    Loading,
    LevelIntro,
    Playing,
    LevelResult,
    Certificate,
    Error,
}

/// Who is playing. Created at intro submission, immutable afterward.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub class_name: String,
    pub school: String,
}

impl UserProfile {
    /// All three fields must be non-empty (whitespace-only counts as empty).
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.class_name.trim().is_empty()
            && !self.school.trim().is_empty()
    }
}

pub struct Game {
    pub screen: Screen,
    pub current_level: Level,
    pub questions: Vec<Question>,
    pub question_index: usize,
    /// The option picked for the current question, once one has been picked.
    /// Cleared on every question advance and level (re)entry.
    pub answered: Option<usize>,
    pub score: usize,
    pub user: UserProfile,
    pub streak: usize,
    pub xp: u32,
    pub completion_count: u32,
    /// Tag of the most recently issued fetch. Results carrying an older tag
    /// are discarded (see action.rs).
    pub fetch_seq: u64,
}

impl Game {
    /// Fresh session. The completion count is the one datum that survives
    /// reloads; everything else starts from zero.
    pub fn new(completion_count: u32) -> Self {
        Self {
            screen: Screen::Intro,
            current_level: Level::Level1,
            questions: Vec::new(),
            question_index: 0,
            answered: None,
            score: 0,
            user: UserProfile::default(),
            streak: 0,
            xp: 0,
            completion_count,
            fetch_seq: 0,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.question_index)
    }

    pub fn on_last_question(&self) -> bool {
        !self.questions.is_empty() && self.question_index + 1 == self.questions.len()
    }

    /// Perfect score required to pass. Checked only at the level result.
    pub fn is_pass(&self) -> bool {
        !self.questions.is_empty() && self.score == self.questions.len()
    }
}
