//! Language-model collaborators and the question-answering session.

pub mod classifier;
pub mod composer;
pub mod llm;
pub mod ollama;
pub mod prompts;
pub mod session;

pub use classifier::{parse_classification, Intent, IntentClassifier};
pub use composer::ResponseComposer;
pub use llm::{ChatMessage, ChatModel, Role};
pub use ollama::OllamaClient;
pub use session::{collect_reports, is_exit_command, Answer, Assistant};
