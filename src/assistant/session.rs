//! Question answering: classify, report, compose.

use super::classifier::{Intent, IntentClassifier};
use super::composer::ResponseComposer;
use super::llm::ChatModel;
use crate::core::monitor::SystemMonitor;

/// Words that end an interactive session
pub const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

pub fn is_exit_command(input: &str) -> bool {
    let input = input.trim();
    EXIT_COMMANDS
        .iter()
        .any(|cmd| input.eq_ignore_ascii_case(cmd))
}

/// Outcome of answering one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Reports were collected and rephrased
    Composed { reports: String, reply: String },
    /// The classifier judged the question irrelevant; its sentence is shown as is
    Passthrough(String),
    /// The classifier could not be reached
    Unavailable(String),
}

impl Answer {
    pub fn text(&self) -> &str {
        match self {
            Answer::Composed { reply, .. } => reply,
            Answer::Passthrough(text) => text,
            Answer::Unavailable(text) => text,
        }
    }
}

/// Ties the monitor to the two language-model collaborators.
pub struct Assistant {
    monitor: SystemMonitor,
    llm: Box<dyn ChatModel>,
    classifier_model: String,
    composer_model: String,
}

impl Assistant {
    pub fn new(
        monitor: SystemMonitor,
        llm: Box<dyn ChatModel>,
        classifier_model: impl Into<String>,
        composer_model: impl Into<String>,
    ) -> Self {
        Self {
            monitor,
            llm,
            classifier_model: classifier_model.into(),
            composer_model: composer_model.into(),
        }
    }

    pub fn monitor(&self) -> &SystemMonitor {
        &self.monitor
    }

    pub fn answer(&self, question: &str) -> Answer {
        let classifier = IntentClassifier::new(self.llm.as_ref(), &self.classifier_model);

        let tokens = match classifier.classify(question) {
            Ok(Intent::Metrics(tokens)) => tokens,
            Ok(Intent::Irrelevant(text)) => return Answer::Passthrough(text),
            Err(e) => {
                log::error!("Intent classification failed: {}", e);
                return Answer::Unavailable(format!("Error while understanding question: {}", e));
            }
        };

        let reports = collect_reports(&self.monitor, &tokens);
        let composer = ResponseComposer::new(self.llm.as_ref(), &self.composer_model);
        let reply = composer.compose(question, &reports);

        Answer::Composed { reports, reply }
    }
}

/// One report per token, in order, joined with single spaces
pub fn collect_reports<S: AsRef<str>>(monitor: &SystemMonitor, tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| monitor.get_report(token.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
