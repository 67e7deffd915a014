//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/my-cli/my-cli.toml`
//! 3. Environment variables: `MYCLI_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::Language;

/// Unified configuration for my-cli.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Initial log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Default greeting word for `greet`
    pub greeting: String,
    /// Default language for `hello`
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            greeting: "Hello".into(),
            language: Language::English,
        }
    }
}

/// Get the XDG config directory for my-cli.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "my-cli").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("my-cli.toml"))
}

impl Settings {
    /// Load settings from the global config file and environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence, reading `path` as the config file.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("log_level", defaults.log_level)
            .map_err(config_err)?
            .set_default("greeting", defaults.greeting)
            .map_err(config_err)?
            .set_default("language", defaults.language.as_str())
            .map_err(config_err)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("MYCLI"));

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# my-cli configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/my-cli/my-cli.toml
#   Env:    MYCLI_* environment variables (explicit overrides)

# Initial log level: error, warn, info, debug, trace
# log_level = "info"

# Default greeting used by `greet`
# greeting = "Hello"

# Default language used by `hello`: english, spanish
# language = "english"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_created_then_match_documented_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.greeting, "Hello");
        assert_eq!(settings.language, Language::English);
    }

    #[test]
    fn given_settings_when_serialized_then_language_is_lowercase() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("language = \"english\""));
        assert!(toml.contains("greeting = \"Hello\""));
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let parsed: Result<toml::Value, _> = toml::from_str(&Settings::template());
        assert!(parsed.is_ok());
    }
}
