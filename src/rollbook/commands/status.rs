use crate::commands::{CmdResult, StoreSummary};
use crate::error::Result;
use crate::store::backend::DocumentBackend;
use crate::store::RecordStore;

pub fn run<B: DocumentBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let doc = store.document()?;
    let summary = StoreSummary {
        data_path: store.data_path(),
        exists: store.exists(),
        students: doc.students.len(),
        attendance: doc.attendance.len(),
        grades: doc.grades.len(),
        app_name: doc.settings.app_name.clone(),
        version: doc.settings.version.clone(),
    };
    Ok(CmdResult::default().with_summary(summary))
}
