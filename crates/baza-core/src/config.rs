use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{BazaError, Result};

/// Greeting shown when the chat widget is first opened.
pub const DEFAULT_GREETING: &str = "Привет! Чем могу помочь?";

/// Reply issued when no catalog entry matches the user's message.
pub const DEFAULT_FALLBACK: &str = "Извините, я не понял вопрос. Попробуйте спросить про запись, цены или адрес. Или позвоните нам: +420 123 456 789";

/// Top-level configuration for the BAZA assistant.
///
/// Loaded from `~/.baza/config.toml` by default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BazaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl BazaConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BazaConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| BazaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Chat widget configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Delay before the assistant reply is appended, in milliseconds.
    pub reply_delay_ms: u64,
    /// Greeting shown when the widget is first opened.
    pub greeting: String,
    /// Reply used when no intent matches.
    pub fallback: String,
    /// Name shown in the widget header.
    pub assistant_name: String,
    /// Subtitle shown under the assistant name.
    pub tagline: String,
    /// Placeholder for the empty input field.
    pub placeholder: String,
    /// Optional TOML file replacing the built-in intent catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
    /// Whether the widget starts open.
    pub start_open: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 500,
            greeting: DEFAULT_GREETING.to_string(),
            fallback: DEFAULT_FALLBACK.to_string(),
            assistant_name: "BAZA Assistant".to_string(),
            tagline: "Обычно отвечает мгновенно".to_string(),
            placeholder: "Напишите сообщение...".to_string(),
            catalog_path: None,
            start_open: false,
        }
    }
}
