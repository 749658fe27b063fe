//! # Level Result Screen
//!
//! Pass or retry. A pass needs a perfect score; the confirm button's label
//! depends on where the level sits in the progression.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::level::{Advance, Level, advance};
use crate::tui::component::Component;

pub struct ResultScreen {
    pub score: usize,
    pub total: usize,
    pub level: Level,
    pub pass: bool,
}

impl ResultScreen {
    /// Confirm label on the pass branch, per the level's next step.
    fn next_label(&self) -> &'static str {
        match advance(self.level) {
            Advance::Next(Level::Level2) => "Enter — BƯỚC VÀO VÒNG 2",
            Advance::Next(Level::Level3) => "Enter — BƯỚC VÀO VÒNG 3",
            Advance::Next(Level::Graduation) => "Enter — VÒNG ĐỈNH CAO TRÍ TUỆ",
            Advance::Next(_) => "Enter — VÒNG TIẾP THEO",
            Advance::CoreComplete => "Enter — NHẬN GIẤY CHỨNG NHẬN",
            Advance::FinalCertificate => "Enter — XEM DANH HIỆU THIÊN TÀI",
        }
    }
}

impl Component for ResultScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;

        let [card] = Layout::horizontal([Length(52)]).flex(Flex::Center).areas(area);
        let [card] = Layout::vertical([Length(10)]).flex(Flex::Center).areas(card);

        let accent = if self.pass { Color::Green } else { Color::Yellow };
        let block = Block::bordered().border_style(Style::default().fg(accent));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let mut lines = vec![
            Line::from(Span::raw(if self.pass { "🏆" } else { "💪" })),
            Line::from(Span::styled(
                if self.pass { "HOÀN THÀNH!" } else { "CỐ GẮNG LÊN!" },
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw("Kết quả: "),
                Span::styled(
                    format!("{}/{}", self.score, self.total),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" câu"),
            ]),
            Line::from(""),
        ];

        if self.pass {
            lines.push(Line::from(Span::raw("Bạn đã hoàn thành xuất sắc vòng này!")));
            lines.push(Line::from(Span::styled(
                self.next_label(),
                Style::default().fg(Color::Yellow),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("Bạn cần trả lời đúng {}/{} câu để qua vòng.", self.total, self.total),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(Span::styled(
                "Enter — LÀM LẠI BÀI TẬP",
                Style::default().fg(Color::Yellow),
            )));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).centered(), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_label_follows_progression() {
        let screen = |level| ResultScreen { score: 5, total: 5, level, pass: true };
        assert!(screen(Level::Level1).next_label().contains("VÒNG 2"));
        assert!(screen(Level::Level2).next_label().contains("VÒNG 3"));
        assert!(screen(Level::Level3).next_label().contains("CHỨNG NHẬN"));
        assert!(screen(Level::Special).next_label().contains("ĐỈNH CAO"));
        assert!(screen(Level::Graduation).next_label().contains("THIÊN TÀI"));
    }
}
