use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::DocumentBackend;
use crate::store::record_store::InitOutcome;
use crate::store::RecordStore;

pub fn run<B: DocumentBackend>(store: &mut RecordStore<B>) -> Result<CmdResult> {
    let outcome = store.init()?;
    let path = store.data_path();

    let mut result = CmdResult::default().with_paths(vec![path.clone()]);
    let message = match outcome {
        InitOutcome::Created => CmdMessage::success(format!(
            "Created new data file at {}",
            path.display()
        )),
        InitOutcome::Loaded => CmdMessage::info(format!(
            "Loaded {} students from {}",
            store.students()?.len(),
            path.display()
        )),
        InitOutcome::AlreadyReady => {
            CmdMessage::info(format!("Data file already open at {}", path.display()))
        }
    };
    result.add_message(message);
    Ok(result)
}
