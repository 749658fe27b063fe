//! Vanhoc library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod questions;
pub mod tui;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Debug, Default, ValueEnum)]
pub enum Provider {
    #[default]
    Gemini,
    LmStudio,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::LmStudio => "lmstudio",
        }
    }
}
