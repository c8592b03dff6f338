//! # Command Layer
//!
//! Each command lives in its own submodule and implements plain Rust functions
//! over a [`RecordStore`](crate::store::RecordStore).
//!
//! Commands:
//! - Return structured [`CmdResult`] values with students and messages
//! - Never print, never exit, never prompt: the UI decides how to show results
//!
//! ## Command Modules
//!
//! - [`init`]: Open (or bootstrap) the store
//! - [`import`]: Bulk student import
//! - [`list`]: List students
//! - [`update`]: Corrective edits
//! - [`status`]: Store overview
//! - [`config`]: Read and write configuration

use crate::config::RollbookConfig;
use crate::enrollment::ImportReport;
use crate::model::Student;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod import;
pub mod init;
pub mod list;
pub mod status;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
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
}

/// Counts and metadata shown by `status`.
#[derive(Debug, Clone, Serialize)]
pub struct StoreSummary {
    pub data_path: PathBuf,
    pub exists: bool,
    pub students: usize,
    pub attendance: usize,
    pub grades: usize,
    pub app_name: String,
    pub version: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_students: Vec<Student>,
    pub listed_students: Vec<Student>,
    pub import: Option<ImportReport>,
    pub summary: Option<StoreSummary>,
    pub paths: Vec<PathBuf>,
    pub config: Option<RollbookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }

    pub fn with_import(mut self, report: ImportReport) -> Self {
        self.import = Some(report);
        self
    }

    pub fn with_summary(mut self, summary: StoreSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: RollbookConfig) -> Self {
        self.config = Some(config);
        self
    }
}
