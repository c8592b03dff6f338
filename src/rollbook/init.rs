//! # Context Setup
//!
//! Rollbook keeps its data in a single directory. The directory is resolved in
//! priority order:
//!
//! 1. **Explicit override**: `--data-dir <path>` on the command line.
//! 2. **Environment**: `ROLLBOOK_HOME`.
//! 3. **Per-user data directory**: the OS-appropriate application-data location
//!    (via the `directories` crate), e.g. `~/.local/share/rollbook` on Linux.
//!
//! [`initialize`] wires the configuration, backend, store and API together but
//! does not open the store: callers decide when to call `init()`.

use crate::api::{RollbookApi, RollbookPaths};
use crate::config::RollbookConfig;
use crate::error::{Result, RollbookError};
use crate::store::fs_backend::FsBackend;
use crate::store::RecordStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const HOME_ENV: &str = "ROLLBOOK_HOME";

pub struct RollbookContext {
    pub api: RollbookApi<FsBackend>,
    pub config: RollbookConfig,
}

/// Pick the data directory from an explicit override, the environment, or the
/// per-user default.
pub fn resolve_data_dir(data_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "rollbook", "rollbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            RollbookError::Config("could not determine the user data directory".to_string())
        })
}

pub fn initialize(data_override: Option<&Path>) -> Result<RollbookContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = RollbookConfig::load(&data_dir)?;
    debug!(dir = %data_dir.display(), file = %config.data_file, "resolved data location");

    let backend = FsBackend::new(data_dir.clone()).with_file_name(&config.data_file);
    let api = RollbookApi::new(RecordStore::new(backend), RollbookPaths { data_dir });

    Ok(RollbookContext { api, config })
}
