use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollbookError};
use crate::store::backend::DocumentBackend;
use crate::store::RecordStore;
use std::fs;
use std::path::Path;

pub fn run<B: DocumentBackend>(
    store: &mut RecordStore<B>,
    names: &[String],
    class_info: &str,
) -> Result<CmdResult> {
    let before = store.students()?.len();
    let report = store.import_students(names, class_info)?;
    let added = store.students()?[before..].to_vec();

    let mut result = CmdResult::default().with_affected_students(added);
    if let Some(errors) = &report.errors {
        for item in errors {
            result.add_message(CmdMessage::warning(format!(
                "Skipped {:?}: {}",
                item.name, item.error
            )));
        }
    }
    result.add_message(CmdMessage::success(format!(
        "Total imported: {}",
        report.count
    )));
    Ok(result.with_import(report))
}

/// Read names from a text file, one per line. Blank lines are kept so a
/// name's position matches its line number.
pub fn read_names_file(path: &Path) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).map_err(|e| RollbookError::persistence("read", path, e))?;
    Ok(content.lines().map(str::to_string).collect())
}
