//! # Quiz Screen
//!
//! One question at a time: question card, four options, and — once the
//! player has answered — a feedback panel with the explanation and citation.
//!
//! Option keys are 1-4. The option list is frozen after the first answer;
//! repeat presses are dropped by the reducer, so the screen only has to
//! paint the answered state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::Game;
use crate::questions::Question;
use crate::tui::component::Component;

const OPTION_KEYS: [char; 4] = ['1', '2', '3', '4'];

pub struct QuizScreen<'a> {
    pub game: &'a Game,
}

impl QuizScreen<'_> {
    fn top_bar(&self) -> Paragraph<'static> {
        let total = self.game.questions.len();
        let index = self.game.question_index + 1;

        // One filled segment per question, like the roadmap's progress pips.
        let mut segments = String::new();
        for i in 0..total {
            segments.push(if i < index { '■' } else { '□' });
        }

        let mut spans = vec![
            Span::styled(
                self.game.current_level.title().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("Câu {index}/{total}  "), Style::default().fg(Color::Cyan)),
            Span::styled(segments, Style::default().fg(Color::Blue)),
        ];
        if self.game.streak >= 2 {
            spans.push(Span::styled(
                format!("  🔥 chuỗi {}", self.game.streak),
                Style::default().fg(Color::Magenta),
            ));
        }
        Paragraph::new(Line::from(spans))
    }

    fn option_line(&self, question: &Question, index: usize, text: &str) -> Line<'static> {
        let marker = format!(" {} ", OPTION_KEYS.get(index).copied().unwrap_or('?'));

        let style = match self.game.answered {
            // Revealed: the correct option goes green, a wrong pick red,
            // everything else dims out.
            Some(_) if index == question.correct_index => {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            }
            Some(picked) if index == picked => Style::default().fg(Color::Red),
            Some(_) => Style::default().fg(Color::DarkGray),
            None => Style::default(),
        };

        Line::from(vec![
            Span::styled(marker, style.add_modifier(Modifier::REVERSED)),
            Span::raw(" "),
            Span::styled(text.to_string(), style),
        ])
    }

    fn feedback(&self, question: &Question, width: u16) -> (Paragraph<'static>, u16) {
        let correct = self.game.answered == Some(question.correct_index);

        let (headline, color) = if correct {
            ("🌸 Tuyệt vời! Chính xác!", Color::Green)
        } else {
            ("🤡 Sai mất rồi! Tiếc quá!", Color::Red)
        };

        let mut lines = vec![
            Line::from(Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Giải thích chi tiết:", Style::default().fg(Color::Cyan))),
            Line::from(Span::raw(question.explanation.clone())),
        ];
        if let Some(citation) = &question.citation {
            lines.push(Line::from(Span::styled(
                format!("Nguồn: {citation}"),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(Span::styled(
            "Enter — KẾ TIẾP",
            Style::default().fg(Color::Yellow),
        )));

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().border_style(Style::default().fg(color)));
        // +2 for the block borders
        let height = paragraph.line_count(width.saturating_sub(2)) as u16 + 2;
        (paragraph, height)
    }
}

impl Component for QuizScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let Some(question) = self.game.current_question() else {
            return;
        };

        let [content] = Layout::horizontal([Length(72)]).flex(Flex::Center).areas(area);

        let feedback_height = if self.game.answered.is_some() {
            self.feedback(question, content.width).1
        } else {
            0
        };

        let [bar, card, options_area, feedback_area] = Layout::vertical([
            Length(2),
            Length(6),
            Min(6),
            Length(feedback_height),
        ])
        .areas(content);

        frame.render_widget(self.top_bar(), bar);

        frame.render_widget(
            Paragraph::new(question.content.clone())
                .wrap(Wrap { trim: true })
                .centered()
                .block(Block::bordered()),
            card,
        );

        let option_lines: Vec<Line> = question
            .options
            .iter()
            .enumerate()
            .flat_map(|(i, text)| [self.option_line(question, i, text), Line::from("")])
            .collect();
        frame.render_widget(Paragraph::new(option_lines).wrap(Wrap { trim: true }), options_area);

        if self.game.answered.is_some() {
            let (panel, _) = self.feedback(question, content.width);
            frame.render_widget(panel, feedback_area);
        }
    }
}

/// Maps an option key to its answer index, if it is one.
pub fn answer_index(c: char) -> Option<usize> {
    OPTION_KEYS.iter().position(|&k| k == c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_index_maps_keys() {
        assert_eq!(answer_index('1'), Some(0));
        assert_eq!(answer_index('4'), Some(3));
        assert_eq!(answer_index('5'), None);
        assert_eq!(answer_index('a'), None);
    }
}
