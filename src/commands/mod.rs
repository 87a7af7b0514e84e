// Command handlers module
pub mod ask;
pub mod chat;
pub mod config;
pub mod report;
pub mod version;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::assistant::{Assistant, OllamaClient};
use crate::core::config::validate_ollama_url;
use crate::core::{Config, SystemMonitor};
use crate::ui;

// Re-exports for cleaner imports
pub use ask::execute as ask;
pub use chat::execute as chat;
pub use report::execute as report;
pub use version::execute as version;

/// Load the saved configuration and apply per-invocation overrides
pub fn resolve_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = Config::load()?;

    if let Some(path) = matches.get_one::<String>("path") {
        config.set("disk_path", path)?;
    }
    if let Some(url) = matches.get_one::<String>("ollama-url") {
        config.ollama_url = validate_ollama_url(url)?;
    }
    if let Some(model) = matches.get_one::<String>("classifier-model") {
        config.set("classifier_model", model)?;
    }
    if let Some(model) = matches.get_one::<String>("composer-model") {
        config.set("composer_model", model)?;
    }

    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

pub fn build_monitor(config: &Config) -> Result<SystemMonitor> {
    SystemMonitor::with_path(&config.disk_path)
        .with_context(|| format!("Cannot monitor path '{}'", config.disk_path))
}

pub fn build_assistant(config: &Config) -> Result<Assistant> {
    let monitor = build_monitor(config)?;
    let client = OllamaClient::new(
        &config.ollama_url,
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("Failed to create HTTP client")?;

    if !client.is_running() {
        ui::warn(&format!(
            "Ollama does not answer at {}. Questions will fail until it is running.",
            client.base_url()
        ));
    }

    Ok(Assistant::new(
        monitor,
        Box::new(client),
        config.classifier_model.clone(),
        config.composer_model.clone(),
    ))
}
