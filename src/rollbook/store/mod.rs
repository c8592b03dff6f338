//! # Storage Layer
//!
//! All rollbook data lives in one JSON document (`student-data.json`). There are
//! no partial updates: the document is read whole when the store opens and
//! written whole after every mutation.
//!
//! ## Pieces
//!
//! - [`backend::DocumentBackend`]: raw I/O for the document text.
//!   - [`fs_backend::FsBackend`]: production, atomic tmp-file + rename writes.
//!   - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//! - [`record_store::RecordStore`]: lifecycle, parsing, and the mutating
//!   operations. Every mutator flushes before returning.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized ──init()──▶ Initializing ──ok──▶ Ready ──close()──▶ Closed
//!       ▲                        │                                    │
//!       └────────── error ───────┘              init() re-opens ◀─────┘
//! ```
//!
//! Anything but `init`, `exists`, `close` and `data_path` requires `Ready`.
//! Calls after `close()` fail with [`crate::error::RollbookError::NotInitialized`].
//!
//! ## Concurrency
//!
//! Mutators take `&mut self`, so a single owner can never interleave two writes.
//! To share one store between threads, wrap it in `Arc<Mutex<_>>`.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── student-data.json   # The document
//! └── config.json         # Optional configuration
//! ```

use std::fmt;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use record_store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Uninitialized,
    Initializing,
    Ready,
    Closed,
}

impl fmt::Display for StoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreState::Uninitialized => "uninitialized",
            StoreState::Initializing => "initializing",
            StoreState::Ready => "ready",
            StoreState::Closed => "closed",
        };
        f.write_str(name)
    }
}
