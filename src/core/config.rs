use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::monitor::{validate_monitored_path, DEFAULT_DISK_PATH};
use crate::error::AssistError;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_CLASSIFIER_MODEL: &str = "llama3:8b";
pub const DEFAULT_COMPOSER_MODEL: &str = "mistral:7b-instruct";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Keys accepted by `config set`
pub const CONFIG_KEYS: [&str; 5] = [
    "disk_path",
    "ollama_url",
    "classifier_model",
    "composer_model",
    "request_timeout_secs",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Filesystem path whose disk usage is reported
    #[serde(default = "default_disk_path")]
    pub disk_path: String,
    /// Base URL of the Ollama server
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,
    /// Model that classifies questions into metric kinds
    #[serde(default = "default_classifier_model")]
    pub classifier_model: String,
    /// Model that rephrases reports into a reply
    #[serde(default = "default_composer_model")]
    pub composer_model: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_disk_path() -> String {
    DEFAULT_DISK_PATH.to_string()
}

fn default_ollama_url() -> String {
    DEFAULT_OLLAMA_URL.to_string()
}

fn default_classifier_model() -> String {
    DEFAULT_CLASSIFIER_MODEL.to_string()
}

fn default_composer_model() -> String {
    DEFAULT_COMPOSER_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disk_path: default_disk_path(),
            ollama_url: default_ollama_url(),
            classifier_model: default_classifier_model(),
            composer_model: default_composer_model(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from an explicit file. Missing, empty or unreadable JSON all
    /// fall back to defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!(
                "Ignoring unreadable config file {:?}: {}. Using defaults.",
                config_path,
                e
            );
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("mac-assist").join("config.json"))
    }

    /// Set one key from its textual value, validating it first
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), AssistError> {
        match key {
            "disk_path" => {
                validate_monitored_path(Path::new(value))?;
                self.disk_path = value.to_string();
            }
            "ollama_url" => {
                self.ollama_url = validate_ollama_url(value)?;
            }
            "classifier_model" => {
                self.classifier_model = validate_model_name(value)?;
            }
            "composer_model" => {
                self.composer_model = validate_model_name(value)?;
            }
            "request_timeout_secs" => {
                self.request_timeout_secs = parse_timeout(value)?;
            }
            other => {
                return Err(AssistError::config(format!(
                    "Unknown key '{}'. Valid keys: {}",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Value of one key as text
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "disk_path" => Some(self.disk_path.clone()),
            "ollama_url" => Some(self.ollama_url.clone()),
            "classifier_model" => Some(self.classifier_model.clone()),
            "composer_model" => Some(self.composer_model.clone()),
            "request_timeout_secs" => Some(self.request_timeout_secs.to_string()),
            _ => None,
        }
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Config::default();
    }
}

/// Accept only absolute http(s) URLs; returns the URL without a trailing slash
pub fn validate_ollama_url(value: &str) -> std::result::Result<String, AssistError> {
    let parsed = url::Url::parse(value.trim())
        .map_err(|e| AssistError::config(format!("Invalid Ollama URL '{}': {}", value, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed.as_str().trim_end_matches('/').to_string()),
        scheme => Err(AssistError::config(format!(
            "Ollama URL must use http or https, got '{}'",
            scheme
        ))),
    }
}

fn validate_model_name(value: &str) -> std::result::Result<String, AssistError> {
    let value = value.trim();
    if value.is_empty() || value.contains(char::is_whitespace) {
        return Err(AssistError::config(
            "Model name must be non-empty and contain no whitespace",
        ));
    }
    Ok(value.to_string())
}

fn parse_timeout(value: &str) -> std::result::Result<u64, AssistError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(AssistError::config(format!(
            "Timeout must be a positive number of seconds, got '{}'",
            value
        ))),
    }
}
