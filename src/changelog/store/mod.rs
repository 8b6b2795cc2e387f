//! # Storage Layer
//!
//! Entries live in a single SQLite table:
//!
//! ```text
//! entries
//! ├── timestamp  DATETIME  PRIMARY KEY, defaults to local time at insert
//! ├── user       TEXT      NOT NULL
//! └── entry      TEXT      NOT NULL, may contain newlines
//! ```
//!
//! The store is append-only: there is no update or delete. Because the
//! timestamp has second resolution and is the primary key, two inserts in the
//! same second conflict. That conflict is reported as
//! [`ChangelogError::Conflict`](crate::error::ChangelogError::Conflict) and never
//! resolved silently.
//!
//! The command layer talks to two traits: [`StoreSource`] says whether a
//! journal exists and opens it, [`DataStore`] is the opened handle.
//! [`sqlite::SqliteSource`] / [`sqlite::SqliteStore`] are the SQLite
//! implementations; the store can also be opened in memory for tests.

use crate::error::Result;
use crate::model::Entry;
use chrono::NaiveDateTime;

pub mod query;
pub mod sqlite;

/// Rows returned by a lookup, with aggregates computed over the same window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    /// Newest first.
    pub entries: Vec<Entry>,
    pub count: usize,
    /// Longest user name (in characters) among `entries`.
    pub max_user_len: usize,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub trait DataStore {
    /// Insert an entry stamped with the current local time.
    fn insert(&mut self, user: &str, message: &str) -> Result<Entry>;

    /// Insert an entry with an explicit timestamp (truncated to the second).
    fn insert_at(&mut self, timestamp: NaiveDateTime, user: &str, message: &str) -> Result<Entry>;

    /// The `limit` most recent entries, optionally restricted to one user.
    fn query(&self, limit: usize, user: Option<&str>) -> Result<QueryResult>;

    /// Releases the handle. Dropping it releases it as well, minus the error.
    fn close(self) -> Result<()>
    where
        Self: Sized;
}

/// Where a journal lives.
pub trait StoreSource {
    type Store: DataStore;

    fn exists(&self) -> bool;

    /// Opens the journal. Creating a missing one requires `privileged`.
    fn open(&self, privileged: bool) -> Result<Self::Store>;
}
