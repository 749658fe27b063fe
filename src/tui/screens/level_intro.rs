//! # Level Intro Screen
//!
//! The card shown once a round has loaded, before the first question.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::level::{Level, QUESTIONS_PER_LEVEL};
use crate::tui::component::Component;

pub struct LevelIntroScreen {
    pub level: Level,
}

impl Component for LevelIntroScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;

        let [card] = Layout::horizontal([Length(56)]).flex(Flex::Center).areas(area);
        let [card] = Layout::vertical([Length(10)]).flex(Flex::Center).areas(card);

        let accent = match self.level {
            Level::Special => Color::Red,
            Level::Graduation => Color::Cyan,
            _ => Color::Blue,
        };

        let block = Block::bordered().border_style(Style::default().fg(accent));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::raw(self.level.icon())),
                Line::from(Span::styled(
                    self.level.title(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::raw(self.level.description())),
                Line::from(""),
                Line::from(Span::styled(
                    format!("{QUESTIONS_PER_LEVEL} câu hỏi · trả lời đúng tất cả để qua vòng"),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                Line::from(Span::styled("Enter — bắt đầu!", Style::default().fg(Color::Yellow))),
            ])
            .wrap(Wrap { trim: true })
            .centered(),
            inner,
        );
    }
}
