//! # API Facade
//!
//! A thin layer over the commands. It owns what every operation needs (the
//! configuration, the [`Host`] and the [`StoreSource`]) and hands them to the
//! right command. No terminal I/O happens here or below.
//!
//! `ChangelogApi` is generic over both collaborators:
//! - Production: `ChangelogApi<SystemHost, SqliteSource>`
//! - Testing: a fake host and a journal in a temp directory
//!
//! Each call opens the journal, runs one operation and closes it again, so a
//! handle never outlives the operation that needed it.

use crate::commands::{self, CmdResult};
use crate::config::ChangelogConfig;
use crate::error::Result;
use crate::store::sqlite::SqliteSource;
use crate::store::StoreSource;
use crate::system::{Host, SystemHost};

pub use crate::commands::add::AddRequest;
pub use crate::commands::show::ShowRequest;
pub use crate::commands::{CmdMessage, Listing, MessageLevel, NO_ENTRY_NOTICE};

pub struct ChangelogApi<H: Host, P: StoreSource> {
    config: ChangelogConfig,
    host: H,
    source: P,
}

impl ChangelogApi<SystemHost, SqliteSource> {
    /// The real thing: the journal at `config.db_path`, the current process
    /// as host.
    pub fn system(config: ChangelogConfig) -> Self {
        let source = SqliteSource::new(&config.db_path);
        Self::new(config, SystemHost, source)
    }
}

impl<H: Host, P: StoreSource> ChangelogApi<H, P> {
    pub fn new(config: ChangelogConfig, host: H, source: P) -> Self {
        Self {
            config,
            host,
            source,
        }
    }

    pub fn add(&self, request: AddRequest) -> Result<CmdResult> {
        commands::add::run(&self.host, &self.source, request)
    }

    pub fn show(&self, request: ShowRequest) -> Result<CmdResult> {
        commands::show::run(&self.host, &self.source, &self.config, request)
    }

    pub fn config(&self) -> &ChangelogConfig {
        &self.config
    }
}
