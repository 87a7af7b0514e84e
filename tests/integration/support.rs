// Scripted stand-ins for the OS and the language model

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use mac_assist::assistant::{ChatMessage, ChatModel};
use mac_assist::core::{DiskSpace, MetricSource};
use mac_assist::error::{AssistError, Result};

#[derive(Default, Clone)]
pub struct ScriptedSource {
    pub disk: Option<DiskSpace>,
    pub battery: Option<f32>,
    pub pmset: Option<String>,
    pub top: Option<String>,
    pub disk_paths: Rc<RefCell<Vec<PathBuf>>>,
    pub commands_run: Rc<RefCell<Vec<&'static str>>>,
}

impl MetricSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn disk_space(&self, path: &Path) -> Result<DiskSpace> {
        self.disk_paths.borrow_mut().push(path.to_path_buf());
        self.disk
            .ok_or_else(|| AssistError::Io(std::io::Error::from(std::io::ErrorKind::NotFound)))
    }

    fn battery_charge(&self) -> Result<Option<f32>> {
        Ok(self.battery)
    }

    fn power_status(&self) -> Result<String> {
        self.commands_run.borrow_mut().push("pmset");
        self.pmset
            .clone()
            .ok_or_else(|| AssistError::metric_collection("pmset failed"))
    }

    fn memory_status(&self) -> Result<String> {
        self.commands_run.borrow_mut().push("top");
        self.top
            .clone()
            .ok_or_else(|| AssistError::metric_collection("top failed"))
    }
}

/// Replies with queued responses in order and records every request
#[derive(Default, Clone)]
pub struct ScriptedModel {
    replies: Rc<RefCell<VecDeque<Result<String>>>>,
    pub requests: Rc<RefCell<Vec<(String, Vec<ChatMessage>)>>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, msg: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(AssistError::llm(msg)));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl ChatModel for ScriptedModel {
    fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        self.requests
            .borrow_mut()
            .push((model.to_string(), messages.to_vec()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AssistError::llm("no scripted reply left")))
    }
}
