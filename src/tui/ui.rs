use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::rank::rank;
use crate::core::state::{Game, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::screens::{
    CertificateScreen, ErrorScreen, LevelIntroScreen, LoadingScreen, QuizScreen, ResultScreen,
    Roadmap,
};

pub fn draw_ui(frame: &mut Frame, game: &Game, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    // Title bar: app name, player, accumulated XP
    let mut spans = vec![Span::styled(
        " Thử Tài Văn Học ",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if game.user.is_complete() {
        spans.push(Span::raw(format!("· {} ", game.user.name)));
    }
    spans.push(Span::styled(
        format!("· ★ {} XP", game.xp),
        Style::default().fg(Color::Cyan),
    ));
    frame.render_widget(Line::from(spans), title_area);

    match game.screen {
        Screen::Intro => tui.intro_form.render(frame, main_area),
        Screen::Roadmap => Roadmap {
            user: &game.user,
            completion_count: game.completion_count,
        }
        .render(frame, main_area),
        Screen::Loading => LoadingScreen { spinner_frame }.render(frame, main_area),
        Screen::LevelIntro => LevelIntroScreen { level: game.current_level }.render(frame, main_area),
        Screen::Playing => QuizScreen { game }.render(frame, main_area),
        Screen::LevelResult => ResultScreen {
            score: game.score,
            total: game.questions.len(),
            level: game.current_level,
            pass: game.is_pass(),
        }
        .render(frame, main_area),
        Screen::Certificate => CertificateScreen {
            user: &game.user,
            rank: rank(game.completion_count, game.current_level),
            xp: game.xp,
            level: game.current_level,
            completion_count: game.completion_count,
        }
        .render(frame, main_area),
        Screen::Error => ErrorScreen.render(frame, main_area),
    }
}
