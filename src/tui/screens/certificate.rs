//! # Certificate Screen
//!
//! The award card at the end of the core sequence (and after graduation),
//! plus the follow-up actions: replay for a higher rank, or step into the
//! special round once it is unlocked.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::level::{Level, special_unlocked};
use crate::core::rank::{Rank, certificate_title, next_rank_info};
use crate::core::state::UserProfile;
use crate::tui::component::Component;

pub struct CertificateScreen<'a> {
    pub user: &'a UserProfile,
    pub rank: Rank,
    pub xp: u32,
    pub level: Level,
    pub completion_count: u32,
}

impl CertificateScreen<'_> {
    fn action_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        match self.level {
            Level::Graduation => {
                lines.push(Line::from(Span::raw(
                    "Chúc mừng THIÊN TÀI VĂN HỌC! Hãy tiếp tục rèn luyện nhé!",
                )));
                lines.push(Line::from(Span::styled(
                    "Enter — QUAY LẠI TÍCH ĐIỂM XP",
                    Style::default().fg(Color::Yellow),
                )));
            }
            _ if special_unlocked(self.completion_count) => {
                lines.push(Line::from(Span::raw(
                    "Bạn đã đạt danh hiệu Xuất Sắc! Hãy thử thách bản thân để trở thành Nhân Tài!",
                )));
                lines.push(Line::from(Span::styled(
                    "S — BƯỚC VÀO THỬ THÁCH ĐẶC BIỆT",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    "Enter — quay lại làm bài tích điểm thêm",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            _ => {
                if let Some((remaining, next_rank)) = next_rank_info(self.completion_count) {
                    lines.push(Line::from(Span::styled(
                        format!(
                            "Hoàn thành {remaining} lần nữa để nâng hạng lên {}!",
                            next_rank.label()
                        ),
                        Style::default().fg(Color::Magenta),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    "Enter — làm lại để nâng hạng & tích điểm",
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
        lines
    }
}

impl Component for CertificateScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let [card] = Layout::horizontal([Length(64)]).flex(Flex::Center).areas(area);
        let [card] = Layout::vertical([Min(18)]).flex(Flex::Center).areas(card);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" ✦ GIẤY CHỨNG NHẬN ✦ ")
            .title_alignment(ratatui::layout::Alignment::Center);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [body, actions] = Layout::vertical([Length(12), Min(3)]).areas(inner);

        let date = Local::now().format("%d/%m/%Y");
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "THỬ TÀI VĂN HỌC",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Trân trọng trao tặng danh hiệu này cho",
                    Style::default().add_modifier(Modifier::ITALIC),
                )),
                Line::from(Span::styled(
                    self.user.name.clone(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::raw(format!("{} - {}", self.user.class_name, self.user.school))),
                Line::from(Span::styled("────────✦────────", Style::default().fg(Color::Yellow))),
                Line::from(Span::raw("Đã hoàn thành xuất sắc và đạt cột mốc")),
                Line::from(Span::styled(
                    certificate_title(self.level, self.completion_count),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::raw("Xếp loại: "),
                    Span::styled(
                        self.rank.label(),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("   ★ "),
                    Span::styled(
                        format!("{} XP", self.xp),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    format!("An Giang, {date} · Xác nhận tự động"),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .wrap(Wrap { trim: true })
            .centered(),
            body,
        );

        frame.render_widget(
            Paragraph::new(self.action_lines()).wrap(Wrap { trim: true }).centered(),
            actions,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_profile;

    fn screen(level: Level, count: u32) -> CertificateScreen<'static> {
        // Leak is fine in tests; keeps the lifetime simple.
        let user: &'static UserProfile = Box::leak(Box::new(test_profile()));
        CertificateScreen {
            user,
            rank: crate::core::rank::rank(count, level),
            xp: 150,
            level,
            completion_count: count,
        }
    }

    fn action_text(screen: &CertificateScreen) -> String {
        screen
            .action_lines()
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_special_invite_only_when_unlocked() {
        let below = screen(Level::Level3, 8);
        assert!(!action_text(&below).contains("THỬ THÁCH ĐẶC BIỆT"));
        let at = screen(Level::Level3, 9);
        assert!(action_text(&at).contains("THỬ THÁCH ĐẶC BIỆT"));
    }

    #[test]
    fn test_next_rank_hint_below_unlock() {
        let text = action_text(&screen(Level::Level3, 1));
        assert!(text.contains("2 lần nữa"));
        assert!(text.contains("KHÁ"));
    }

    #[test]
    fn test_graduation_actions() {
        let text = action_text(&screen(Level::Graduation, 9));
        assert!(text.contains("THIÊN TÀI"));
        assert!(!text.contains("THỬ THÁCH ĐẶC BIỆT"));
    }
}
