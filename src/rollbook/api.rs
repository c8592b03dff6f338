//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point a UI (the bundled CLI, or any other shell) uses to drive the store.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the [`RecordStore`]: one explicitly constructed instance per
//!   application, never a process-wide global
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! ## Generic Over DocumentBackend
//!
//! `RollbookApi<B: DocumentBackend>`:
//! - Production: `RollbookApi<FsBackend>`
//! - Testing: `RollbookApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::StudentPatch;
use crate::store::backend::DocumentBackend;
use crate::store::{RecordStore, StoreState};
use std::path::PathBuf;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::StudentFilter;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, StoreSummary};
pub use crate::enrollment::{ImportItemError, ImportReport};

#[derive(Debug, Clone)]
pub struct RollbookPaths {
    /// Directory holding the data file and `config.json`.
    pub data_dir: PathBuf,
}

pub struct RollbookApi<B: DocumentBackend> {
    store: RecordStore<B>,
    paths: RollbookPaths,
}

impl<B: DocumentBackend> RollbookApi<B> {
    pub fn new(store: RecordStore<B>, paths: RollbookPaths) -> Self {
        Self { store, paths }
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    pub fn state(&self) -> StoreState {
        self.store.state()
    }

    pub fn data_path(&self) -> PathBuf {
        self.store.data_path()
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn exists(&self) -> bool {
        self.store.exists()
    }

    pub fn import_students(&mut self, names: &[String], class_info: &str) -> Result<CmdResult> {
        commands::import::run(&mut self.store, names, class_info)
    }

    pub fn list_students(&self, filter: &StudentFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn update_student(&mut self, id: &str, patch: &StudentPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn status(&self) -> Result<CmdResult> {
        commands::status::run(&self.store)
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save()
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths.data_dir, action)
    }

    pub fn close(&mut self) {
        self.store.close()
    }
}
