mod core;
mod questions;
#[cfg(test)]
mod test_support;
mod tui;

use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use vanhoc::Provider;

use crate::core::config::{ResolvedConfig, load_config, resolve};
use crate::core::store::FileCompletionStore;
use crate::questions::{GeminiProvider, LmStudioProvider, QuestionProvider};

#[derive(Parser)]
#[command(name = "vanhoc", about = "Trò chơi thử tài văn học với Roboki AI")]
struct Args {
    /// Question generation service to use
    #[arg(short, long, value_enum)]
    provider: Option<Provider>,
}

/// Build a question provider from the resolved config.
fn build_provider(config: &ResolvedConfig) -> Arc<dyn QuestionProvider> {
    match config.provider.as_str() {
        "lmstudio" => Arc::new(LmStudioProvider::new(
            Some(config.lmstudio_base_url.clone()),
            Some(config.lmstudio_model.clone()),
        )),
        _ => {
            // Default to gemini
            let api_key = config
                .gemini_api_key
                .clone()
                .expect("Gemini API key must be set (config file, GEMINI_API_KEY env var, or --provider lm-studio)");
            Arc::new(GeminiProvider::new(
                api_key,
                Some(config.gemini_base_url.clone()),
                Some(config.gemini_model.clone()),
            ))
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to vanhoc.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("vanhoc.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };
    let resolved = resolve(&config, args.provider.as_ref().map(|p| p.as_str()));

    log::info!("Vanhoc starting up with provider: {}", resolved.provider);

    let provider = build_provider(&resolved);
    let store = Box::new(FileCompletionStore::open_default()?);

    tui::run(provider, store)
}
