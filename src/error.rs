use std::io;
use thiserror::Error;

/// Custom error type for the assistant
#[derive(Error, Debug)]
pub enum AssistError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),

    #[error("Language model error: {0}")]
    Llm(String),
}

/// Result type alias for the assistant
pub type Result<T> = std::result::Result<T, AssistError>;

impl AssistError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AssistError::Config(msg.into())
    }

    /// Create an invalid path error
    pub fn invalid_path<S: Into<String>>(msg: S) -> Self {
        AssistError::InvalidPath(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        AssistError::MetricCollection(msg.into())
    }

    pub fn llm<S: Into<String>>(msg: S) -> Self {
        AssistError::Llm(msg.into())
    }
}
