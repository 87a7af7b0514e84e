//! Ollama Integration
//!
//! Blocking client for the Ollama chat API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::llm::{ChatMessage, ChatModel};
use crate::error::{AssistError, Result};

/// Upper bound for the startup reachability check
const LIVENESS_TIMEOUT: Duration = Duration::from_secs(3);

/// Request body for /api/chat
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

/// Ollama API response for /api/chat (non-streaming)
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Ollama client for API interactions
pub struct OllamaClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl OllamaClient {
    /// Create a new Ollama client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mac-assist/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if Ollama is reachable. Gives up after a few seconds
    /// regardless of the request timeout.
    pub fn is_running(&self) -> bool {
        self.client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(LIVENESS_TIMEOUT)
            .send()
            .map(|resp| resp.status().is_success())
            .unwrap_or(false)
    }
}

impl ChatModel for OllamaClient {
    fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        let body = ChatRequest {
            model,
            messages,
            stream: false,
        };

        log::debug!("POST {}/api/chat model={}", self.base_url, model);

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistError::llm(format!(
                "Ollama returned status {}: {}",
                status,
                response.text().unwrap_or_default()
            )));
        }

        let reply: ChatResponse = response.json()?;
        Ok(reply.message.content)
    }
}
