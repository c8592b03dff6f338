//! # CLI Layer
//!
//! One possible UI client for rollbook, and the only place in the codebase that
//! parses arguments, prints to the terminal, or sets up logging output.
//!
//! - [`setup`]: clap definitions
//! - [`commands`]: context setup and dispatch to the API
//! - [`render`]: terminal formatting of `CmdResult`s

mod commands;
mod render;
mod setup;

pub use commands::run;
