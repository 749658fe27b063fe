//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. It also
//! owns the two pieces of real I/O the reducer asks for through `Effect`:
//! spawning question fetches on the tokio runtime and saving the completion
//! counter through the injected store.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 250ms, only redraws on events or background
//!   actions.

mod component;
mod event;
pub mod screens;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};

use crate::core::action::{Action, Effect, update};
use crate::core::level::Level;
use crate::core::state::{Game, Screen};
use crate::core::store::CompletionStore;
use crate::questions::QuestionProvider;
use crate::tui::component::EventHandler;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screens::{IntroEvent, IntroForm, quiz::answer_index};

/// TUI-specific presentation state (not part of core game logic).
pub struct TuiState {
    /// The intro form owns its field buffers until the profile is submitted.
    pub intro_form: IntroForm,
}

impl TuiState {
    pub fn new() -> Self {
        Self { intro_form: IntroForm::new() }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(
    provider: Arc<dyn QuestionProvider>,
    store: Box<dyn CompletionStore>,
) -> std::io::Result<()> {
    let mut game = Game::new(store.load());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = game.screen == Screen::Loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &game, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C and Esc always quit regardless of screen
            if matches!(event, TuiEvent::ForceQuit | TuiEvent::Quit) {
                if update(&mut game, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // The error screen's confirm is a full reload: all in-memory
            // state is discarded, the persisted counter is re-read.
            if game.screen == Screen::Error && event == TuiEvent::Submit {
                info!("Reloading after provider failure");
                game = Game::new(store.load());
                tui = TuiState::new();
                continue;
            }

            let action = match game.screen {
                Screen::Intro => match tui.intro_form.handle_event(&event) {
                    Some(IntroEvent::Submit(profile)) => Some(Action::SubmitProfile(profile)),
                    None => None,
                },
                Screen::Roadmap => match event {
                    TuiEvent::Submit => Some(Action::StartLevel(Level::Level1)),
                    _ => None,
                },
                Screen::Loading | Screen::Error => None,
                Screen::LevelIntro => match event {
                    TuiEvent::Submit => Some(Action::BeginQuiz),
                    _ => None,
                },
                Screen::Playing => match event {
                    TuiEvent::InputChar(c) => answer_index(c).map(Action::SelectAnswer),
                    TuiEvent::Submit => Some(Action::NextQuestion),
                    _ => None,
                },
                Screen::LevelResult => match event {
                    TuiEvent::Submit if game.is_pass() => Some(Action::AdvanceStage),
                    TuiEvent::Submit => Some(Action::RetryLevel),
                    _ => None,
                },
                Screen::Certificate => match event {
                    TuiEvent::InputChar('s') | TuiEvent::InputChar('S') => Some(Action::StartSpecial),
                    TuiEvent::Submit => Some(Action::Restart),
                    _ => None,
                },
            };

            if let Some(action) = action {
                let effect = update(&mut game, action);
                handle_effect(effect, &provider, store.as_ref(), &tx, &mut should_quit);
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut game, action);
            handle_effect(effect, &provider, store.as_ref(), &tx, &mut should_quit);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_effect(
    effect: Effect,
    provider: &Arc<dyn QuestionProvider>,
    store: &dyn CompletionStore,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match effect {
        Effect::None => {}
        Effect::FetchQuestions { level, seq } => {
            spawn_fetch(provider.clone(), level, seq, tx.clone());
        }
        Effect::SaveCompletion(count) => {
            if let Err(e) = store.save(count) {
                // The in-memory count is still correct for this session;
                // only the next startup would see the old value.
                warn!("Failed to persist completion count {}: {}", count, e);
            }
        }
        Effect::Quit => *should_quit = true,
    }
}

/// Spawns a provider fetch for `level`, tagged with `seq`.
///
/// The task reports back over the action channel; the reducer drops results
/// whose tag is no longer the latest issued, so a late response for an
/// abandoned load can never clobber the current round.
fn spawn_fetch(
    provider: Arc<dyn QuestionProvider>,
    level: Level,
    seq: u64,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning question fetch: provider={}, level={:?}, seq={}", provider.name(), level, seq);
    tokio::spawn(async move {
        let action = match provider.fetch_questions(level).await {
            Ok(questions) => Action::QuestionsLoaded { seq, questions },
            Err(e) => {
                warn!("Question fetch failed (seq={}): {}", seq, e);
                Action::QuestionsFailed { seq, error: e.to_string() }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result for seq={}: receiver dropped", seq);
        }
    });
}
