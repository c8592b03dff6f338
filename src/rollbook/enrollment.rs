//! # Enrollment Rules
//!
//! Bulk import turns a list of names plus one class string (e.g. `2024级1班`)
//! into [`Student`] records.
//!
//! ## Class Info
//!
//! The class string is split on [`GRADE_DELIMITER`]:
//! - `2024级1班` → grade `2024级`, class `1班`
//! - `NoDelimiter` → grade `NoDelimiter级`, class `NoDelimiter`
//!
//! With more than one delimiter only the first two segments count
//! (`A级B级C` → grade `A级`, class `B`).
//!
//! ## Identifiers
//!
//! `<year><CLASS_SEGMENT><position + 1, zero-padded to 2 digits>`, where position is
//! the name's index in the input list. Blank names are skipped but still use up
//! their position, so `["Alice", "", "Carol"]` yields `…01` and `…03`.
//!
//! The class segment is always `01` and the counter restarts every batch, so two
//! batches (or one batch past 99 names) can produce duplicate ids. This is a known
//! limitation of the numbering scheme and is kept as-is.

use crate::error::{Result, RollbookError};
use crate::model::Student;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const GRADE_DELIMITER: char = '级';
pub const CLASS_SEGMENT: &str = "01";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub grade: String,
    pub class_name: String,
}

impl ClassInfo {
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(GRADE_DELIMITER);
        let first = parts.next().unwrap_or_default();
        let grade = format!("{}{}", first, GRADE_DELIMITER);
        let class_name = match parts.next() {
            Some(second) => second.to_string(),
            None => raw.to_string(),
        };
        Self { grade, class_name }
    }
}

/// A name that could not be turned into a student. Reported, not raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportItemError {
    pub name: String,
    pub error: String,
}

/// Outcome of one import batch. `errors` is `None` (serialized as `null`) when
/// every non-blank name was imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub count: usize,
    pub errors: Option<Vec<ImportItemError>>,
}

pub(crate) struct ImportBatch {
    pub students: Vec<Student>,
    pub errors: Vec<ImportItemError>,
}

impl ImportBatch {
    pub fn report(&self) -> ImportReport {
        ImportReport {
            count: self.students.len(),
            errors: if self.errors.is_empty() {
                None
            } else {
                Some(self.errors.clone())
            },
        }
    }
}

pub fn student_id(year: i32, position: usize) -> String {
    format!("{}{}{:02}", year, CLASS_SEGMENT, position + 1)
}

pub(crate) fn validate_input<S: AsRef<str>>(names: &[S], class_info: &str) -> Result<()> {
    if names.is_empty() {
        return Err(RollbookError::InvalidImportInput(
            "student list is empty".to_string(),
        ));
    }
    if class_info.is_empty() {
        return Err(RollbookError::InvalidImportInput(
            "class info is empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_name(name: &str) -> std::result::Result<(), String> {
    if name.chars().any(char::is_control) {
        return Err("name contains control characters".to_string());
    }
    Ok(())
}

/// Build the students for one batch. Pure: no store access, no clock.
pub(crate) fn build_batch<S: AsRef<str>>(
    names: &[S],
    class_info: &ClassInfo,
    year: i32,
    created_at: DateTime<Utc>,
) -> ImportBatch {
    let mut students = Vec::new();
    let mut errors = Vec::new();

    for (position, raw) in names.iter().enumerate() {
        let raw = raw.as_ref();
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }

        match validate_name(name) {
            Ok(()) => students.push(Student::new(
                student_id(year, position),
                name.to_string(),
                class_info.class_name.clone(),
                class_info.grade.clone(),
                created_at,
            )),
            Err(error) => errors.push(ImportItemError {
                name: raw.to_string(),
                error,
            }),
        }
    }

    ImportBatch { students, errors }
}
