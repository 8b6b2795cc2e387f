//! # CLI Behavior
//!
//! This is the terminal client for the library. It is the only place that
//! knows about stdout/stderr, exit codes and argument parsing.
//!
//! For the overall architecture, see the crate-level documentation of the
//! `changelog` library.
//!
//! ## Commands
//!
//! - `changelog add [-s] [-u USER] ["log entry"]`: record an entry. Root only.
//!   The message comes from the arguments, or from stdin with `--stdin`.
//! - `changelog show [-l N] [-u USER] [-w N]`: print the newest entries.
//!   An absent or empty journal prints `No entry found.` and succeeds.
//!
//! Running `changelog` with no command prints the help. An unknown command
//! prints a notice and the help, and exits with status 1.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: Turns `CmdResult` values into terminal output
//! - `setup`: clap definitions, version string, help

mod commands;
mod render;
pub mod setup;

pub use commands::{init_logging, run};
