//! # Changelog Architecture
//!
//! Changelog keeps a journal of the maintenance, upgrades and changes done to
//! a machine. Each entry is a timestamp, the user who did the work and a free
//! text message. Entries are appended by root and read back by anyone.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints output, maps errors to exits    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns config, host and store source                       │
//! │  - One method per operation, returns `Result<CmdResult>`    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Privilege and input validation, store calls              │
//! │  - Layout of the listing (format.rs)                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore / StoreSource traits                           │
//! │  - SQLite journal, statement builder                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! OS lookups (root check, user name, terminal width, stdin) sit behind the
//! [`system::Host`] trait so the command layer can be tested without root.
//!
//! ## Errors
//!
//! Everything returns [`error::Result`]. An empty journal is not an error:
//! `show` returns a [`commands::CmdResult`] carrying the
//! [`commands::NO_ENTRY_NOTICE`] message instead.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: `add` and `show`
//! - [`store`]: Storage traits, SQLite implementation, query builder
//! - [`format`]: Word wrapping and column alignment
//! - [`model`]: The [`model::Entry`] record
//! - [`system`]: Privilege, identity and terminal lookups
//! - [`config`]: Database location and display defaults
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod store;
pub mod system;

#[cfg(test)]
pub(crate) mod test_utils;
