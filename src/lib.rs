// Mac Assist Library - Public API

// Re-export error types
pub mod error;
pub use error::{AssistError, Result};

// Module declarations
pub mod assistant;
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::monitor::SystemMonitor;

// Initialize logging
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
