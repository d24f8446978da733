//! CLI argument definitions for the `baza` chat binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use baza_core::BazaConfig;

/// BAZA Assistant: the barbershop FAQ chat widget in your terminal.
#[derive(Parser, Debug, Default)]
#[command(name = "baza", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Delay before the assistant replies, in milliseconds.
    #[arg(long = "reply-delay-ms")]
    pub reply_delay_ms: Option<u64>,

    /// TOML file replacing the built-in FAQ catalog.
    #[arg(long = "catalog")]
    pub catalog: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > BAZA_CONFIG env var > ~/.baza/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("BAZA_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Apply flag overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut BazaConfig) {
        if let Some(delay) = self.reply_delay_ms {
            config.chat.reply_delay_ms = delay;
        }
        if let Some(ref catalog) = self.catalog {
            config.chat.catalog_path = Some(catalog.to_string_lossy().to_string());
        }
        if let Some(ref level) = self.log_level {
            config.general.log_level = level.clone();
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".baza").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".baza").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "baza",
            "-c",
            "/tmp/baza.toml",
            "--log-level",
            "debug",
            "--reply-delay-ms",
            "0",
            "--catalog",
            "faq.toml",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/baza.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.reply_delay_ms, Some(0));
        assert_eq!(args.catalog, Some(PathBuf::from("faq.toml")));
    }

    #[test]
    fn test_no_flags() {
        let args = CliArgs::try_parse_from(["baza"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.reply_delay_ms.is_none());
    }

    #[test]
    fn test_invalid_delay_rejected() {
        assert!(CliArgs::try_parse_from(["baza", "--reply-delay-ms", "soon"]).is_err());
    }

    #[test]
    fn test_config_flag_wins() {
        let args = CliArgs {
            config: Some(PathBuf::from("/etc/baza.toml")),
            ..CliArgs::default()
        };
        assert_eq!(args.resolve_config_path(), PathBuf::from("/etc/baza.toml"));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = BazaConfig::default();
        let args = CliArgs {
            reply_delay_ms: Some(50),
            catalog: Some(PathBuf::from("custom.toml")),
            ..CliArgs::default()
        };
        args.apply(&mut config);
        assert_eq!(config.chat.reply_delay_ms, 50);
        assert_eq!(config.chat.catalog_path.as_deref(), Some("custom.toml"));
        assert_eq!(config.general.log_level, "info");

        let args = CliArgs {
            log_level: Some("trace".to_string()),
            ..CliArgs::default()
        };
        args.apply(&mut config);
        assert_eq!(config.general.log_level, "trace");
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let mut config = BazaConfig::default();
        config.chat.reply_delay_ms = 900;
        CliArgs::default().apply(&mut config);
        assert_eq!(config.chat.reply_delay_ms, 900);
        assert!(config.chat.catalog_path.is_none());
    }
}
