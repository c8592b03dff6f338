//! # Data Model
//!
//! Everything rollbook persists lives in one [`Document`]:
//!
//! ```text
//! {
//!   "students":   [ { "id", "name", "class", "grade", "createdAt" } ],
//!   "attendance": [ ...opaque... ],
//!   "grades":     [ ...opaque... ],
//!   "settings":   { "appName", "version" }
//! }
//! ```
//!
//! Field names are camelCase on disk so files written by earlier versions of the
//! application load unchanged. Attendance and grade records are kept as raw
//! JSON values: nothing in rollbook writes them yet, but whatever is in the file
//! survives a load/save cycle. The same holds for keys rollbook does not know
//! about (e.g. a top-level `developmentNotes` array, or extra per-student
//! fields): they are carried in `extra` and written back untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_APP_NAME: &str = "Student Information System";
pub const DEFAULT_VERSION: &str = "0.0.1-ArrowLake-Alpha";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub grade: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Student {
    pub fn new(
        id: String,
        name: String,
        class_name: String,
        grade: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            class_name,
            grade,
            created_at,
            extra: Map::new(),
        }
    }
}

/// A corrective edit to an existing student. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub grade: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.class_name.is_none() && self.grade.is_none()
    }

    pub(crate) fn apply(&self, student: &mut Student) {
        if let Some(name) = &self.name {
            student.name = name.trim().to_string();
        }
        if let Some(class_name) = &self.class_name {
            student.class_name = class_name.clone();
        }
        if let Some(grade) = &self.grade {
            student.grade = grade.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub app_name: String,
    pub version: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub students: Vec<Student>,
    #[serde(default)]
    pub attendance: Vec<Value>,
    #[serde(default)]
    pub grades: Vec<Value>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Serialize the way the data file is laid out: pretty-printed, 2-space indent.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Parse raw file bytes. Invalid UTF-8 is reported as a JSON error.
    pub fn from_slice(raw: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(raw)
    }
}
