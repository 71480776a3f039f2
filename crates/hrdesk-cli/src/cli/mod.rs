//! # CLI Layer
//!
//! This module is **one possible UI client** for hrdesk.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context setup and per-command handlers
//! - `print`: Message and value rendering

mod commands;
mod print;
pub mod setup;

pub use commands::run;
