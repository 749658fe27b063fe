//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vanhoc/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::questions::providers::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::questions::providers::lmstudio::{DEFAULT_LMSTUDIO_BASE_URL, DEFAULT_LMSTUDIO_MODEL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VanhocConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub lmstudio: LmStudioConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_provider: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LmStudioConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub provider: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub lmstudio_base_url: String,
    pub lmstudio_model: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.vanhoc/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vanhoc").join("config.toml"))
}

/// Load config from `~/.vanhoc/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VanhocConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VanhocConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VanhocConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VanhocConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: VanhocConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Vanhoc Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_provider = "gemini"        # "gemini" or "lmstudio"

# [gemini]
# api_key = "AIza..."                # Or set GEMINI_API_KEY env var
# base_url = "https://generativelanguage.googleapis.com/v1beta"
# model = "gemini-2.5-flash"

# [lmstudio]
# base_url = "http://localhost:1234/v1"
# model = "qwen2.5-7b-instruct"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_provider` is from the CLI flag (None = not specified).
pub fn resolve(config: &VanhocConfig, cli_provider: Option<&str>) -> ResolvedConfig {
    // Provider: CLI → env → config → default
    let provider = cli_provider
        .map(|s| s.to_string())
        .or_else(|| std::env::var("VANHOC_PROVIDER").ok())
        .or_else(|| config.general.default_provider.clone())
        .unwrap_or_else(|| "gemini".to_string());

    // Gemini API key: env → config
    let gemini_api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .or_else(|| config.gemini.api_key.clone());

    // Gemini base URL / model: env → config → default
    let gemini_base_url = std::env::var("GEMINI_BASE_URL")
        .ok()
        .or_else(|| config.gemini.base_url.clone())
        .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());
    let gemini_model = std::env::var("GEMINI_MODEL")
        .ok()
        .or_else(|| config.gemini.model.clone())
        .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

    // LM Studio base URL / model: env → config → default
    let lmstudio_base_url = std::env::var("LM_STUDIO_BASE_URL")
        .ok()
        .or_else(|| config.lmstudio.base_url.clone())
        .unwrap_or_else(|| DEFAULT_LMSTUDIO_BASE_URL.to_string());
    let lmstudio_model = std::env::var("LM_STUDIO_MODEL")
        .ok()
        .or_else(|| config.lmstudio.model.clone())
        .unwrap_or_else(|| DEFAULT_LMSTUDIO_MODEL.to_string());

    ResolvedConfig {
        provider,
        gemini_api_key,
        gemini_base_url,
        gemini_model,
        lmstudio_base_url,
        lmstudio_model,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = VanhocConfig::default();
        assert!(config.general.default_provider.is_none());
        assert!(config.gemini.api_key.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = VanhocConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(resolved.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(resolved.lmstudio_base_url, DEFAULT_LMSTUDIO_BASE_URL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = VanhocConfig {
            general: GeneralConfig { default_provider: Some("lmstudio".to_string()) },
            gemini: GeminiConfig {
                api_key: Some("test-key".to_string()),
                base_url: Some("http://gemini.local".to_string()),
                model: Some("gemini-test".to_string()),
            },
            lmstudio: LmStudioConfig {
                base_url: Some("http://192.168.1.100:1234/v1".to_string()),
                model: Some("local-model".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.provider, "lmstudio");
        assert_eq!(resolved.gemini_api_key.as_deref(), Some("test-key"));
        assert_eq!(resolved.gemini_base_url, "http://gemini.local");
        assert_eq!(resolved.gemini_model, "gemini-test");
        assert_eq!(resolved.lmstudio_base_url, "http://192.168.1.100:1234/v1");
        assert_eq!(resolved.lmstudio_model, "local-model");
    }

    #[test]
    fn test_resolve_cli_provider_wins() {
        let config = VanhocConfig {
            general: GeneralConfig { default_provider: Some("lmstudio".to_string()) },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("gemini"));
        assert_eq!(resolved.provider, "gemini");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[gemini]
api_key = "AIza-test"
"#;
        let config: VanhocConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key.as_deref(), Some("AIza-test"));
        assert!(config.general.default_provider.is_none());
        assert!(config.lmstudio.base_url.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_provider = "gemini"

[gemini]
api_key = "AIza-123"
model = "gemini-2.5-pro"

[lmstudio]
base_url = "http://localhost:4321/v1"
"#;
        let config: VanhocConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_provider.as_deref(), Some("gemini"));
        assert_eq!(config.gemini.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(config.lmstudio.base_url.as_deref(), Some("http://localhost:4321/v1"));
        assert!(config.lmstudio.model.is_none());
    }
}
