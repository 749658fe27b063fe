//! # Screens
//!
//! One file per screen of the game flow:
//!
//! ```text
//! intro ─▶ roadmap ─▶ loading ─▶ level_intro ─▶ quiz ─▶ result
//!                        ▲                                │
//!                        └──── next level / retry ────────┤
//!                                                         ▼
//!                                  error            certificate
//! ```
//!
//! Screens are props-based: each borrows what it needs from the `Game` and
//! renders it. The intro form is the only screen with internal state (field
//! buffers and focus); everything else is rebuilt per frame.

pub mod certificate;
pub mod error;
pub mod intro;
pub mod level_intro;
pub mod loading;
pub mod quiz;
pub mod result;
pub mod roadmap;

pub use certificate::CertificateScreen;
pub use error::ErrorScreen;
pub use intro::{IntroEvent, IntroForm};
pub use level_intro::LevelIntroScreen;
pub use loading::LoadingScreen;
pub use quiz::QuizScreen;
pub use result::ResultScreen;
pub use roadmap::Roadmap;
