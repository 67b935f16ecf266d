use crate::model::Record;

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod search;
pub mod stats;
pub mod tags;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Record>,
    pub listed: Vec<Record>,
    pub tags: Vec<(String, usize)>,
    pub dashboard: Option<stats::Dashboard>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, records: Vec<Record>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_tags(mut self, tags: Vec<(String, usize)>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_dashboard(mut self, dashboard: stats::Dashboard) -> Self {
        self.dashboard = Some(dashboard);
        self
    }
}
