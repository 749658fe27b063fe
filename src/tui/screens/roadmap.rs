//! # Roadmap Screen
//!
//! The level map shown after registration: the three core rounds, the locked
//! special/graduation branch, and how far the player is from unlocking it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::level::{Level, QUESTIONS_PER_LEVEL, SPECIAL_UNLOCK_COUNT, special_unlocked};
use crate::core::state::UserProfile;
use crate::tui::component::Component;

pub struct Roadmap<'a> {
    pub user: &'a UserProfile,
    pub completion_count: u32,
}

impl Roadmap<'_> {
    fn level_card(&self, level: Level, locked: bool, next: bool) -> Paragraph<'static> {
        let border_style = if locked {
            Style::default().fg(Color::DarkGray)
        } else if next {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue)
        };

        let badge = if locked {
            Span::styled(" Khóa ", Style::default().fg(Color::DarkGray))
        } else if next {
            Span::styled(" Tiếp theo ", Style::default().fg(Color::Yellow))
        } else {
            Span::raw("")
        };

        let text_style = if locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Paragraph::new(vec![
            Line::from(vec![Span::raw(level.icon()), Span::raw(" "), badge]),
            Line::from(Span::styled(level.title(), text_style.add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(level.description(), text_style)),
            Line::from(Span::styled(
                format!("{QUESTIONS_PER_LEVEL} câu hỏi"),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::bordered().border_style(border_style))
    }
}

impl Component for Roadmap<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let [content] = Layout::horizontal([Length(76)]).flex(Flex::Center).areas(area);
        let [header, cards, branch, hint] =
            Layout::vertical([Length(3), Length(7), Length(7), Min(1)]).areas(content);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "LỘ TRÌNH CHINH PHỤC",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::raw(format!("Xin chào, {}! ", self.user.name)),
                    Span::styled(
                        format!("Đã hoàn thành {} vòng thi", self.completion_count),
                        Style::default().fg(Color::Cyan),
                    ),
                ]),
            ])
            .centered(),
            header,
        );

        let core: [Rect; 3] = Layout::horizontal([Length(25); 3]).flex(Flex::Center).areas(cards);
        for (i, level) in [Level::Level1, Level::Level2, Level::Level3].into_iter().enumerate() {
            frame.render_widget(self.level_card(level, false, i == 0), core[i]);
        }

        let unlocked = special_unlocked(self.completion_count);
        let side: [Rect; 2] = Layout::horizontal([Length(37); 2]).flex(Flex::Center).areas(branch);
        frame.render_widget(self.level_card(Level::Special, !unlocked, false), side[0]);
        frame.render_widget(self.level_card(Level::Graduation, !unlocked, false), side[1]);

        let mut hint_lines = vec![Line::from(Span::styled(
            "Enter — bắt đầu Vòng 1",
            Style::default().fg(Color::Yellow),
        ))];
        let remaining = SPECIAL_UNLOCK_COUNT.saturating_sub(self.completion_count);
        if !unlocked && remaining <= 2 {
            // Close to the unlock: nudge the player.
            hint_lines.push(Line::from(Span::styled(
                format!("Chỉ còn {remaining} vòng nữa để mở Thử Thách Đặc Biệt!"),
                Style::default().fg(Color::Magenta),
            )));
        }
        frame.render_widget(Paragraph::new(hint_lines).centered(), hint);
    }
}
