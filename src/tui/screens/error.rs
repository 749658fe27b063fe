//! # Error Screen
//!
//! Terminal failure state: the question service could not deliver a round.
//! The only way out is a full reload, which discards all in-memory state
//! (the persisted completion count survives).

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct ErrorScreen;

impl Component for ErrorScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;

        let [card] = Layout::horizontal([Length(50)]).flex(Flex::Center).areas(area);
        let [card] = Layout::vertical([Length(7)]).flex(Flex::Center).areas(card);

        let block = Block::bordered().border_style(Style::default().fg(Color::Red));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "Có lỗi xảy ra khi tải dữ liệu.",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled("Enter — Tải lại", Style::default().fg(Color::Yellow))),
                Line::from(Span::styled("Esc — Thoát", Style::default().fg(Color::DarkGray))),
            ])
            .wrap(Wrap { trim: true })
            .centered(),
            inner,
        );
    }
}
