use super::backend::DocumentBackend;
use crate::error::{Result, RollbookError};
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
/// Counts reads and writes so tests can assert how much I/O an operation did.
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<Vec<u8>>>,
    reads: Cell<usize>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a document already "on disk".
    pub fn with_content(content: &str) -> Self {
        let backend = Self::default();
        Self::with_bytes(content.as_bytes())
    }

    /// Start with arbitrary bytes "on disk", e.g. a file that is not UTF-8.
    pub fn with_bytes(content: &[u8]) -> Self {
        let backend = Self::default();
        *backend.content.borrow_mut() = Some(content.to_vec());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    pub fn content(&self) -> Option<String> {
        self.content
            .borrow()
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl DocumentBackend for MemBackend {
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    fn exists(&self) -> Result<bool> {
        if self.simulate_read_error.get() {
            return Err(RollbookError::persistence(
                "inspect",
                self.location(),
                io::Error::other("simulated read error"),
            ));
        }
        Ok(self.content.borrow().is_some())
    }

    fn read(&self) -> Result<Option<Vec<u8>>> {
        if self.simulate_read_error.get() {
            return Err(RollbookError::persistence(
                "read",
                self.location(),
                io::Error::other("simulated read error"),
            ));
        }
        self.reads.set(self.reads.get() + 1);
        Ok(self.content.borrow().clone())
    }

    fn write(&self, content: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(RollbookError::persistence(
                "write",
                self.location(),
                io::Error::other("simulated write error"),
            ));
        }
        self.writes.set(self.writes.get() + 1);
        *self.content.borrow_mut() = Some(content.as_bytes().to_vec());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://student-data.json")
    }
}
