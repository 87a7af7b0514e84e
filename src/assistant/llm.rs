use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One message of a chat exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Trait for chat-style language models
///
/// The classifier and composer only need a single prompt/response exchange;
/// the transport behind it is up to the implementation.
pub trait ChatModel {
    /// Send `messages` to `model` and return the reply text
    fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String>;
}
