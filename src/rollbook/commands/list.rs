use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::DocumentBackend;
use crate::store::RecordStore;

/// Narrowing applied to `list`. Matching is exact; empty filter lists everyone.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub grade: Option<String>,
    pub class_name: Option<String>,
}

pub fn run<B: DocumentBackend>(
    store: &RecordStore<B>,
    filter: &StudentFilter,
) -> Result<CmdResult> {
    let students: Vec<_> = store
        .students()?
        .iter()
        .filter(|s| filter.grade.as_ref().map_or(true, |g| &s.grade == g))
        .filter(|s| {
            filter
                .class_name
                .as_ref()
                .map_or(true, |c| &s.class_name == c)
        })
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if students.is_empty() {
        result.add_message(CmdMessage::info("No students found."));
    }
    Ok(result.with_listed_students(students))
}
