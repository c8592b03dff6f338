use super::backend::DocumentBackend;
use crate::error::{Result, RollbookError};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "student-data.json";

/// Filesystem backend: one JSON file inside a data directory.
pub struct FsBackend {
    root: PathBuf,
    file_name: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            debug!(dir = %path.display(), "creating data directory");
            fs::create_dir_all(path)
                .map_err(|e| RollbookError::persistence("create directory", path, e))?;
        }
        Ok(())
    }
}

impl DocumentBackend for FsBackend {
    fn prepare(&self) -> Result<()> {
        self.ensure_dir(&self.root)
    }

    fn exists(&self) -> Result<bool> {
        let path = self.data_file();
        path.try_exists()
            .map_err(|e| RollbookError::persistence("inspect", path, e))
    }

    fn read(&self) -> Result<Option<Vec<u8>>> {
        let path = self.data_file();
        match fs::read(&path) {
            Ok(content) => {
                debug!(file = %path.display(), bytes = content.len(), "read data file");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RollbookError::persistence("read", path, e)),
        }
    }

    fn write(&self, content: &str) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let target = self.data_file();

        // Atomic write: same-directory tmp file, synced, then renamed over the target
        let tmp = self.root.join(format!(".student-data-{}.tmp", Uuid::new_v4()));
        let written = File::create(&tmp).and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written {
            remove_tmp(&tmp);
            return Err(RollbookError::persistence("write", tmp, e));
        }
        if let Err(e) = fs::rename(&tmp, &target) {
            remove_tmp(&tmp);
            return Err(RollbookError::persistence("rename", target, e));
        }

        debug!(file = %target.display(), bytes = content.len(), "wrote data file");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file()
    }
}

fn remove_tmp(tmp: &Path) {
    if let Err(e) = fs::remove_file(tmp) {
        debug!(file = %tmp.display(), error = %e, "could not remove tmp file");
    }
}
