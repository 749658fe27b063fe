//! # Actions
//!
//! Everything that can happen in Vanhoc becomes an `Action`.
//! User picks an answer? That's `Action::SelectAnswer(2)`.
//! The question service replies? That's `Action::QuestionsLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing the I/O the caller must perform.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: drive a whole session through `update()`
//! and assert on the state after each step.
//!
//! ## Stale fetch results
//!
//! Every level load bumps `Game::fetch_seq` and the effect carries the new
//! tag. The provider task echoes the tag back in `QuestionsLoaded` /
//! `QuestionsFailed`, and `update()` drops any result whose tag is not the
//! latest issued. A slow response for a level the user already left can
//! therefore never overwrite the current round.

use log::{debug, info};

use crate::core::level::{Advance, Level, advance, special_unlocked};
use crate::core::state::{Game, Screen, UserProfile, XP_PER_CORRECT};
use crate::questions::Question;

#[derive(Debug)]
pub enum Action {
    /// Intro form submitted. Ignored unless the profile is complete.
    SubmitProfile(UserProfile),
    /// Roadmap confirmed: start the first level.
    StartLevel(Level),
    /// A question fetch finished. `seq` is the tag the fetch was issued with.
    QuestionsLoaded { seq: u64, questions: Vec<Question> },
    QuestionsFailed { seq: u64, error: String },
    /// Level intro card dismissed, begin the quiz.
    BeginQuiz,
    /// An option was picked for the current question.
    SelectAnswer(usize),
    /// Move past an answered question.
    NextQuestion,
    /// Level result confirmed on the pass branch.
    AdvanceStage,
    /// Level result confirmed on the fail branch: replay the level.
    RetryLevel,
    /// Opt into the special round from the certificate.
    StartSpecial,
    /// Back to level 1 from the certificate, keeping XP and profile.
    Restart,
    Quit,
}

/// I/O the caller must perform after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn a provider fetch tagged with `seq`.
    FetchQuestions { level: Level, seq: u64 },
    /// Persist the completion counter.
    SaveCompletion(u32),
    Quit,
}

/// Puts the game into the loading state for `level` and issues a fresh fetch.
///
/// Question index, answered flag, score, and streak always reset; a previous
/// round's questions are never reused.
fn begin_level(game: &mut Game, level: Level) -> Effect {
    game.current_level = level;
    game.screen = Screen::Loading;
    game.questions.clear();
    game.question_index = 0;
    game.answered = None;
    game.score = 0;
    game.streak = 0;
    game.fetch_seq += 1;
    info!("Loading {:?} (fetch seq {})", level, game.fetch_seq);
    Effect::FetchQuestions { level, seq: game.fetch_seq }
}

pub fn update(game: &mut Game, action: Action) -> Effect {
    match action {
        Action::SubmitProfile(user) => {
            if game.screen == Screen::Intro && user.is_complete() {
                game.user = user;
                game.screen = Screen::Roadmap;
            }
            Effect::None
        }

        Action::StartLevel(level) => {
            if game.screen == Screen::Roadmap {
                begin_level(game, level)
            } else {
                Effect::None
            }
        }

        Action::QuestionsLoaded { seq, questions } => {
            if seq != game.fetch_seq {
                debug!("Dropping stale question set (seq {} != {})", seq, game.fetch_seq);
                return Effect::None;
            }
            game.questions = questions;
            game.screen = Screen::LevelIntro;
            Effect::None
        }

        Action::QuestionsFailed { seq, error } => {
            if seq != game.fetch_seq {
                debug!("Dropping stale fetch failure (seq {} != {})", seq, game.fetch_seq);
                return Effect::None;
            }
            info!("Question fetch failed: {}", error);
            game.screen = Screen::Error;
            Effect::None
        }

        Action::BeginQuiz => {
            if game.screen == Screen::LevelIntro {
                game.screen = Screen::Playing;
            }
            Effect::None
        }

        Action::SelectAnswer(index) => {
            if game.screen != Screen::Playing || game.answered.is_some() {
                return Effect::None;
            }
            let Some(question) = game.current_question() else {
                return Effect::None;
            };
            if index >= question.options.len() {
                return Effect::None;
            }
            let correct = index == question.correct_index;
            game.answered = Some(index);
            if correct {
                game.score += 1;
                game.xp += XP_PER_CORRECT;
                game.streak += 1;
            } else {
                game.streak = 0;
            }
            Effect::None
        }

        Action::NextQuestion => {
            if game.screen != Screen::Playing || game.answered.is_none() {
                return Effect::None;
            }
            if game.on_last_question() {
                game.screen = Screen::LevelResult;
            } else {
                game.question_index += 1;
                game.answered = None;
            }
            Effect::None
        }

        Action::AdvanceStage => {
            if game.screen != Screen::LevelResult || !game.is_pass() {
                return Effect::None;
            }
            match advance(game.current_level) {
                Advance::Next(level) => begin_level(game, level),
                Advance::CoreComplete => {
                    // Counter update happens-before the screen transition so
                    // the certificate always renders the new count.
                    game.completion_count += 1;
                    game.screen = Screen::Certificate;
                    info!("Core sequence complete, count now {}", game.completion_count);
                    Effect::SaveCompletion(game.completion_count)
                }
                Advance::FinalCertificate => {
                    game.screen = Screen::Certificate;
                    Effect::None
                }
            }
        }

        Action::RetryLevel => {
            if game.screen == Screen::LevelResult {
                begin_level(game, game.current_level)
            } else {
                Effect::None
            }
        }

        Action::StartSpecial => {
            if game.screen == Screen::Certificate
                && game.current_level == Level::Level3
                && special_unlocked(game.completion_count)
            {
                begin_level(game, Level::Special)
            } else {
                Effect::None
            }
        }

        Action::Restart => {
            if game.screen == Screen::Certificate {
                begin_level(game, Level::Level1)
            } else {
                Effect::None
            }
        }

        Action::Quit => Effect::Quit,
    }
}
