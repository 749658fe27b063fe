//! # Loading Screen
//!
//! Shown while the question fetch is outstanding — the only suspension point
//! in the whole game.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub struct LoadingScreen {
    pub spinner_frame: usize,
}

impl Component for LoadingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [center] = Layout::vertical([Constraint::Length(3)]).flex(Flex::Center).areas(area);

        let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("{spinner} Roboki AI đang soạn câu hỏi..."),
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(Span::styled(
                    "Chờ một chút nhé!",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .centered(),
            center,
        );
    }
}
