//! # Intro Screen
//!
//! The registration form: name, class, school. The only stateful screen —
//! it owns the field buffers and focus until the profile is submitted.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::UserProfile;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const FIELD_COUNT: usize = 3;
const FIELD_LABELS: [&str; FIELD_COUNT] = ["Họ và tên", "Lớp", "Trường"];

/// High-level events emitted by the form.
pub enum IntroEvent {
    /// Enter pressed on the last field (or anywhere with a full form).
    Submit(UserProfile),
}

pub struct IntroForm {
    fields: [String; FIELD_COUNT],
    focus: usize,
}

impl IntroForm {
    pub fn new() -> Self {
        Self { fields: std::array::from_fn(|_| String::new()), focus: 0 }
    }

    fn profile(&self) -> UserProfile {
        UserProfile {
            name: self.fields[0].trim().to_string(),
            class_name: self.fields[1].trim().to_string(),
            school: self.fields[2].trim().to_string(),
        }
    }
}

impl Default for IntroForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for IntroForm {
    type Event = IntroEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<IntroEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.fields[self.focus].push(*c);
                None
            }
            TuiEvent::Backspace => {
                self.fields[self.focus].pop();
                None
            }
            TuiEvent::NextField => {
                self.focus = (self.focus + 1) % FIELD_COUNT;
                None
            }
            TuiEvent::PrevField => {
                self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
                None
            }
            TuiEvent::Submit => {
                let profile = self.profile();
                if profile.is_complete() {
                    Some(IntroEvent::Submit(profile))
                } else {
                    // Required fields missing: jump focus to the first empty one.
                    self.focus = self
                        .fields
                        .iter()
                        .position(|f| f.trim().is_empty())
                        .unwrap_or(self.focus);
                    None
                }
            }
            _ => None,
        }
    }
}

impl Component for IntroForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;

        let [card] = Layout::horizontal([Length(52)]).flex(Flex::Center).areas(area);
        let [card] = Layout::vertical([Length(16)]).flex(Flex::Center).areas(card);

        let block = Block::bordered().title(" THỬ TÀI VĂN HỌC ");
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [headline, _, fields_area, _, hint] =
            Layout::vertical([Length(2), Length(1), Length(9), Length(1), Length(1)]).areas(inner);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "Cùng Roboki AI chinh phục đỉnh cao tri thức!",
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(Span::styled(
                    "3 cấp độ · 5 câu hỏi mỗi vòng",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .centered(),
            headline,
        );

        let field_rows: [Rect; FIELD_COUNT] =
            Layout::vertical([Length(3); FIELD_COUNT]).areas(fields_area);
        for (i, row) in field_rows.into_iter().enumerate() {
            let focused = i == self.focus;
            let style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let field = Paragraph::new(self.fields[i].as_str())
                .block(Block::bordered().title(FIELD_LABELS[i]).border_style(style));
            frame.render_widget(field, row);

            if focused {
                // Cursor sits after the typed text (display columns, not bytes).
                let x = row.x + 1 + self.fields[i].width() as u16;
                frame.set_cursor_position((x.min(row.x + row.width.saturating_sub(2)), row.y + 1));
            }
        }

        frame.render_widget(
            Paragraph::new("Tab chuyển ô · Enter bắt đầu")
                .style(Style::default().fg(Color::DarkGray))
                .centered(),
            hint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut IntroForm, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut form = IntroForm::new();
        type_text(&mut form, "Lan");
        assert_eq!(form.fields[0], "Lan");
        form.handle_event(&TuiEvent::Backspace);
        assert_eq!(form.fields[0], "La");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut form = IntroForm::new();
        form.handle_event(&TuiEvent::NextField);
        assert_eq!(form.focus, 1);
        form.handle_event(&TuiEvent::PrevField);
        assert_eq!(form.focus, 0);
        form.handle_event(&TuiEvent::PrevField);
        assert_eq!(form.focus, 2);
    }

    #[test]
    fn test_submit_requires_all_fields() {
        let mut form = IntroForm::new();
        type_text(&mut form, "Lan");
        assert!(form.handle_event(&TuiEvent::Submit).is_none());
        // Focus jumped to the first empty field.
        assert_eq!(form.focus, 1);

        type_text(&mut form, "9A");
        form.handle_event(&TuiEvent::NextField);
        type_text(&mut form, "THCS An Giang");
        match form.handle_event(&TuiEvent::Submit) {
            Some(IntroEvent::Submit(profile)) => {
                assert_eq!(profile.name, "Lan");
                assert_eq!(profile.class_name, "9A");
                assert_eq!(profile.school, "THCS An Giang");
            }
            None => panic!("expected submit"),
        }
    }

    #[test]
    fn test_whitespace_only_field_blocks_submit() {
        let mut form = IntroForm::new();
        type_text(&mut form, "Lan");
        form.handle_event(&TuiEvent::NextField);
        type_text(&mut form, "   ");
        form.handle_event(&TuiEvent::NextField);
        type_text(&mut form, "THCS");
        assert!(form.handle_event(&TuiEvent::Submit).is_none());
    }
}
