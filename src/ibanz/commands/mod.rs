use crate::config::IbanzConfig;
use crate::index::DisplayRecord;
use crate::model::Record;
use std::path::PathBuf;

pub mod add;
pub mod clear;
pub mod config;
pub mod copy;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// Text a command wants placed on the clipboard. The caller does the copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardText {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<DisplayRecord>,
    pub clipboard: Option<ClipboardText>,
    pub config: Option<IbanzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_clipboard(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.clipboard = Some(ClipboardText {
            label: label.into(),
            text: text.into(),
        });
        self
    }

    pub fn with_config(mut self, config: IbanzConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field changes for an edit. Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct RecordEdit {
    pub name: Option<String>,
    pub iban: Option<String>,
    pub desc: Option<String>,
}

impl RecordEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.iban.is_none() && self.desc.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct IbanzPaths {
    pub data: PathBuf,
}

impl IbanzPaths {
    pub fn new(data: impl Into<PathBuf>) -> Self {
        Self { data: data.into() }
    }

    /// Directory holding the key-value blobs.
    pub fn store_dir(&self) -> PathBuf {
        self.data.join("store")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.data.clone()
    }
}
