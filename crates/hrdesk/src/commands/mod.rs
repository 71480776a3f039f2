//! # Command Layer
//!
//! This module contains the business logic of hrdesk. Each operation lives in
//! its own submodule and works on a [`Store`](crate::store::Store) passed in by
//! the caller.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr, prompts or dialogs
//! - **Exit codes**: return `Result`, let the caller decide
//! - **Confirmation**: destructive commands take an explicit `confirmed` flag
//!
//! Where the browser app popped an alert, commands return a [`CmdMessage`] with a
//! level; the UI decides how loud to be about it.
//!
//! ## Command Modules
//!
//! - [`values`]: Read, write, list and remove raw keys
//! - [`ids`]: Next record id and employee code generation
//! - [`export`]: Write one key to a dated JSON file
//! - [`import`]: Replace one key with the contents of a JSON file
//! - [`session`]: Login state and the auth gate
//! - [`init`]: First-run flag
//! - [`clear`]: Wipe the namespace

use crate::model::SessionUser;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

pub mod clear;
pub mod export;
pub mod ids;
pub mod import;
pub mod init;
pub mod session;
pub mod values;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
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
    pub value: Option<Value>,
    pub keys: Vec<String>,
    pub paths: Vec<PathBuf>,
    pub user: Option<SessionUser>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_keys(mut self, keys: Vec<String>) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_user(mut self, user: SessionUser) -> Self {
        self.user = Some(user);
        self
    }

    /// Convenience for tests and UIs: does any message have this level?
    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
