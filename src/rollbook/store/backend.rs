use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `RecordStore` handles the "what" (lifecycle, parsing, import rules).
pub trait DocumentBackend {
    /// Make sure the location that holds the document exists (e.g. create the data dir).
    fn prepare(&self) -> Result<()>;

    /// Whether the document is present. Errors only on actual I/O failures.
    fn exists(&self) -> Result<bool>;

    /// Read the raw document bytes. Decoding is left to the caller, so content
    /// problems (bad UTF-8 included) never surface as I/O errors.
    /// Returns Ok(None) if there is no document yet.
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the whole document.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid torn writes.
    fn write(&self, content: &str) -> Result<()>;

    /// Where the document lives. For `MemBackend`, a virtual path.
    fn location(&self) -> PathBuf;
}
