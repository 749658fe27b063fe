//! # Ranks and certificate text
//!
//! Pure functions from `(completion count, level)` to the labels printed on
//! the certificate. No state, no I/O — everything here is a straight lookup
//! so the threshold boundaries can be tested exhaustively.

use crate::core::level::Level;

/// Certificate rank, ordered lowest to highest.
///
/// The first four are the core-sequence tiers driven by the completion
/// counter; the last two are forced by finishing the special and graduation
/// rounds regardless of count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Dat,
    Kha,
    Gioi,
    XuatSac,
    NhanTai,
    ThienTai,
}

impl Rank {
    /// Display label as printed on the certificate.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Dat => "ĐẠT",
            Rank::Kha => "KHÁ",
            Rank::Gioi => "GIỎI",
            Rank::XuatSac => "XUẤT SẮC",
            Rank::NhanTai => "NHÂN TÀI",
            Rank::ThienTai => "THIÊN TÀI",
        }
    }
}

/// Maps a completion count and the level just finished to a rank.
///
/// Level takes priority: graduation and special force their labels. The core
/// thresholds are inclusive lower bounds — a count of exactly 3 is already
/// KHÁ, not ĐẠT.
pub fn rank(completion_count: u32, level: Level) -> Rank {
    match level {
        Level::Graduation => Rank::ThienTai,
        Level::Special => Rank::NhanTai,
        Level::Level1 | Level::Level2 | Level::Level3 => {
            if completion_count >= 9 {
                Rank::XuatSac
            } else if completion_count >= 6 {
                Rank::Gioi
            } else if completion_count >= 3 {
                Rank::Kha
            } else {
                Rank::Dat
            }
        }
    }
}

/// Celebratory headline on the certificate, first matching rule wins.
pub fn certificate_title(level: Level, completion_count: u32) -> &'static str {
    if level == Level::Special {
        return "CHỨNG NHẬN NHÂN TÀI VĂN HỌC";
    }
    if level == Level::Graduation {
        return "CHỨNG NHẬN THIÊN TÀI VĂN HỌC";
    }
    if completion_count >= 9 {
        return "HUY CHƯƠNG KIM CƯƠNG";
    }
    if completion_count >= 6 {
        return "NHÀ VÔ ĐỊCH HỌC TẬP";
    }
    if completion_count >= 3 {
        return "CHUỖI CHIẾN THẮNG";
    }
    if completion_count >= 1 {
        return "MỞ KHÓA THÀNH TÍCH";
    }
    "CUỘC THI SÁNG TẠO SẢN PHẨM GIÁO DỤC TRÊN NỀN TẢNG ROBOKI"
}

/// How many more core passes until the next core rank, if any.
///
/// Returns `None` once the count has reached the top core tier (XUẤT SẮC).
pub fn next_rank_info(completion_count: u32) -> Option<(u32, Rank)> {
    if completion_count < 3 {
        Some((3 - completion_count, Rank::Kha))
    } else if completion_count < 6 {
        Some((6 - completion_count, Rank::Gioi))
    } else if completion_count < 9 {
        Some((9 - completion_count, Rank::XuatSac))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_rank_boundaries() {
        // Inclusive lower bounds: 0,2 → ĐẠT; 3,5 → KHÁ; 6,8 → GIỎI; 9 → XUẤT SẮC
        assert_eq!(rank(0, Level::Level3), Rank::Dat);
        assert_eq!(rank(2, Level::Level3), Rank::Dat);
        assert_eq!(rank(3, Level::Level3), Rank::Kha);
        assert_eq!(rank(5, Level::Level3), Rank::Kha);
        assert_eq!(rank(6, Level::Level3), Rank::Gioi);
        assert_eq!(rank(8, Level::Level3), Rank::Gioi);
        assert_eq!(rank(9, Level::Level3), Rank::XuatSac);
        assert_eq!(rank(100, Level::Level3), Rank::XuatSac);
    }

    #[test]
    fn test_special_and_graduation_override_count() {
        for count in [0, 3, 9, 42] {
            assert_eq!(rank(count, Level::Special), Rank::NhanTai);
            assert_eq!(rank(count, Level::Graduation), Rank::ThienTai);
        }
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::Dat < Rank::Kha);
        assert!(Rank::XuatSac < Rank::NhanTai);
        assert!(Rank::NhanTai < Rank::ThienTai);
    }

    #[test]
    fn test_certificate_title_level_takes_priority() {
        // Even a maxed-out counter loses to the special/graduation titles.
        assert_eq!(certificate_title(Level::Special, 20), "CHỨNG NHẬN NHÂN TÀI VĂN HỌC");
        assert_eq!(
            certificate_title(Level::Graduation, 0),
            "CHỨNG NHẬN THIÊN TÀI VĂN HỌC"
        );
    }

    #[test]
    fn test_certificate_title_count_tiers() {
        assert_eq!(certificate_title(Level::Level3, 9), "HUY CHƯƠNG KIM CƯƠNG");
        assert_eq!(certificate_title(Level::Level3, 6), "NHÀ VÔ ĐỊCH HỌC TẬP");
        assert_eq!(certificate_title(Level::Level3, 3), "CHUỖI CHIẾN THẮNG");
        assert_eq!(certificate_title(Level::Level3, 1), "MỞ KHÓA THÀNH TÍCH");
        assert!(certificate_title(Level::Level3, 0).starts_with("CUỘC THI"));
    }

    #[test]
    fn test_next_rank_info_progress() {
        assert_eq!(next_rank_info(0), Some((3, Rank::Kha)));
        assert_eq!(next_rank_info(2), Some((1, Rank::Kha)));
        assert_eq!(next_rank_info(3), Some((3, Rank::Gioi)));
        assert_eq!(next_rank_info(8), Some((1, Rank::XuatSac)));
        assert_eq!(next_rank_info(9), None);
    }
}
