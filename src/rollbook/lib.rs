//! # Rollbook Architecture
//!
//! Rollbook is a **UI-agnostic student record store**. It keeps students (plus
//! attendance and grade records) in a single JSON document and exposes the
//! operations a front end needs: open, import, list, edit, save, close. The
//! bundled command-line client is one such front end.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore lifecycle over a DocumentBackend             │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; the binary decides whether to show them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user-facing operation
//! - [`store`]: The record store and its backends
//! - [`enrollment`]: Class-info parsing and student id rules
//! - [`model`]: Document types (`Document`, `Student`, `Settings`)
//! - [`config`]: `config.json` handling
//! - [`init`]: Data-directory resolution and context wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod enrollment;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
