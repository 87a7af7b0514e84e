use super::llm::{ChatMessage, ChatModel};
use super::prompts::{composer_query, COMPOSER_PROMPT};

/// Rephrases report text into a conversational reply.
pub struct ResponseComposer<'a> {
    llm: &'a dyn ChatModel,
    model: &'a str,
}

impl<'a> ResponseComposer<'a> {
    pub fn new(llm: &'a dyn ChatModel, model: &'a str) -> Self {
        Self { llm, model }
    }

    /// Never fails: transport errors come back as a displayable string.
    pub fn compose(&self, question: &str, answer: &str) -> String {
        let messages = [
            ChatMessage::system(COMPOSER_PROMPT),
            ChatMessage::user(composer_query(question, answer)),
        ];

        match self.llm.chat(self.model, &messages) {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("Composer call failed: {}", e);
                format!("Error while generating response: {}", e)
            }
        }
    }
}
