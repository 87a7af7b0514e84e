//! Maps free-text questions to metric-kind tokens via a language model.

use super::llm::{ChatMessage, ChatModel};
use super::prompts::CLASSIFIER_PROMPT;
use crate::core::metrics::MetricKind;
use crate::error::Result;

/// What the classifier made of a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Metric tokens in the order the model produced them, duplicates kept.
    /// Tokens are not validated; the monitor answers unknown ones itself.
    Metrics(Vec<String>),
    /// A sentence to show the user unchanged
    Irrelevant(String),
}

pub struct IntentClassifier<'a> {
    llm: &'a dyn ChatModel,
    model: &'a str,
}

impl<'a> IntentClassifier<'a> {
    pub fn new(llm: &'a dyn ChatModel, model: &'a str) -> Self {
        Self { llm, model }
    }

    pub fn classify(&self, question: &str) -> Result<Intent> {
        let messages = [
            ChatMessage::system(CLASSIFIER_PROMPT),
            ChatMessage::user(question),
        ];
        let output = self.llm.chat(self.model, &messages)?;
        log::debug!("Classifier output: {:?}", output);

        Ok(parse_classification(&output))
    }
}

/// Interpret raw classifier output.
///
/// Any mention of a metric name turns the whole output into a token list;
/// anything else is an irrelevant reply.
pub fn parse_classification(output: &str) -> Intent {
    let mentions_metric = MetricKind::ALL
        .iter()
        .any(|kind| output.contains(kind.as_str()));

    if mentions_metric {
        Intent::Metrics(output.split_whitespace().map(str::to_string).collect())
    } else {
        Intent::Irrelevant(output.trim().to_string())
    }
}
