use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollbookError};
use crate::model::StudentPatch;
use crate::store::backend::DocumentBackend;
use crate::store::RecordStore;

pub fn run<B: DocumentBackend>(
    store: &mut RecordStore<B>,
    id: &str,
    patch: &StudentPatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        return Err(RollbookError::InvalidUpdate(
            "nothing to update: pass at least one of name, class, grade".to_string(),
        ));
    }
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(RollbookError::InvalidUpdate(
            "name cannot be blank".to_string(),
        ));
    }

    let updated = store.update_student(id, patch)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated {} ({})",
        updated.id, updated.name
    )));
    Ok(result.with_affected_students(vec![updated]))
}
