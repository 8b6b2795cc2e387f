use super::query::{Lookup, Predicate};
use super::{DataStore, QueryResult, StoreSource};
use crate::error::{ChangelogError, Result};
use crate::model::{Entry, STORAGE_TIME_FORMAT};
use chrono::{Local, NaiveDateTime, Timelike};
use log::{debug, error, info};
use rusqlite::types::Type;
use rusqlite::{params, Connection, ErrorCode, Row};
use std::path::{Path, PathBuf};
use std::time::Duration;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS entries (
    timestamp DATETIME NOT NULL DEFAULT (datetime('now','localtime')),
    user      TEXT NOT NULL,
    entry     TEXT NOT NULL,
    PRIMARY KEY(timestamp)
);";

const INSERT_DEFAULT: &str = "INSERT INTO entries (user, entry) VALUES (?1, ?2) RETURNING timestamp";
const INSERT_AT: &str =
    "INSERT INTO entries (timestamp, user, entry) VALUES (?1, ?2, ?3) RETURNING timestamp";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[cfg(unix)]
const DB_FILE_MODE: u32 = 0o644;

/// Handle on the SQLite journal. The connection is opened once and released
/// when the handle is closed or dropped.
pub struct SqliteStore {
    conn: Connection,
}

/// Whether a journal file is present at `path`.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// A journal file on disk.
#[derive(Debug, Clone)]
pub struct SqliteSource {
    path: PathBuf,
}

impl SqliteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StoreSource for SqliteSource {
    type Store = SqliteStore;

    fn exists(&self) -> bool {
        exists(&self.path)
    }

    fn open(&self, privileged: bool) -> Result<SqliteStore> {
        SqliteStore::open(&self.path, privileged)
    }
}

impl SqliteStore {
    /// Opens the journal at `path`, creating it when missing.
    ///
    /// Creating a journal requires `privileged`. A freshly created file gets
    /// the schema and mode 0644.
    pub fn open(path: &Path, privileged: bool) -> Result<Self> {
        let existed = exists(path);
        if !existed && !privileged {
            return Err(ChangelogError::Permission(
                "can't create a new database if not root".into(),
            ));
        }

        info!(
            "event=db_open module=store status=start path={} create={}",
            path.display(),
            !existed
        );

        let conn = Connection::open(path).map_err(|err| {
            error!(
                "event=db_open module=store status=error error_code=db_open_failed error={}",
                err
            );
            ChangelogError::Connection(err)
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(ChangelogError::Connection)?;
        // Forces SQLite to actually read the file header.
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(|err| {
                error!(
                    "event=db_open module=store status=error error_code=db_unreadable error={}",
                    err
                );
                ChangelogError::Connection(err)
            })?;

        if !existed {
            conn.execute_batch(SCHEMA)?;
            set_file_mode(path)?;
            info!(
                "event=db_create module=store status=ok path={}",
                path.display()
            );
        }

        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(ChangelogError::Connection)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    fn insert_with(
        &mut self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
        key: String,
        user: &str,
        message: &str,
    ) -> Result<Entry> {
        let stored: String = self
            .conn
            .query_row(sql, params, |row| row.get(0))
            .map_err(|err| {
                error!(
                    "event=entry_insert module=store status=error timestamp={} error={}",
                    key, err
                );
                map_insert_error(err, key)
            })?;
        let timestamp = parse_timestamp(&stored).map_err(ChangelogError::Storage)?;
        debug!("event=entry_insert module=store status=ok timestamp={}", stored);
        Ok(Entry::new(timestamp, user, message))
    }
}

impl DataStore for SqliteStore {
    fn insert(&mut self, user: &str, message: &str) -> Result<Entry> {
        let key = Local::now()
            .naive_local()
            .format(STORAGE_TIME_FORMAT)
            .to_string();
        self.insert_with(INSERT_DEFAULT, params![user, message], key, user, message)
    }

    fn insert_at(&mut self, timestamp: NaiveDateTime, user: &str, message: &str) -> Result<Entry> {
        let key = timestamp
            .with_nanosecond(0)
            .unwrap_or(timestamp)
            .format(STORAGE_TIME_FORMAT)
            .to_string();
        self.insert_with(
            INSERT_AT,
            params![key, user, message],
            key.clone(),
            user,
            message,
        )
    }

    fn query(&self, limit: usize, user: Option<&str>) -> Result<QueryResult> {
        if limit == 0 {
            return Err(ChangelogError::Validation("can't display 0 entry".into()));
        }

        let pred = Predicate::new(limit, user);
        let params = pred.params();
        debug!(
            "event=entry_query module=store status=start limit={} user={}",
            pred.limit(),
            pred.user().unwrap_or("*")
        );

        let count: i64 = self
            .conn
            .query_row(&pred.sql(Lookup::Count), params.as_slice(), |row| row.get(0))?;
        if count == 0 {
            return Ok(QueryResult::default());
        }

        let max_user_len: Option<i64> =
            self.conn
                .query_row(&pred.sql(Lookup::MaxUserLength), params.as_slice(), |row| {
                    row.get(0)
                })?;

        let mut stmt = self.conn.prepare(&pred.sql(Lookup::Select))?;
        let entries = stmt
            .query_map(params.as_slice(), entry_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(
            "event=entry_query module=store status=ok count={} rows={}",
            count,
            entries.len()
        );

        Ok(QueryResult {
            entries,
            count: usize::try_from(count).unwrap_or_default(),
            max_user_len: max_user_len
                .and_then(|len| usize::try_from(len).ok())
                .unwrap_or_default(),
        })
    }

    fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, err)| ChangelogError::Storage(err))
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let raw: String = row.get(0)?;
    Ok(Entry {
        timestamp: parse_timestamp(&raw)?,
        user: row.get(1)?,
        message: row.get(2)?,
    })
}

fn parse_timestamp(raw: &str) -> rusqlite::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, STORAGE_TIME_FORMAT)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err)))
}

fn map_insert_error(err: rusqlite::Error, key: String) -> ChangelogError {
    match err.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => ChangelogError::Conflict(key),
        _ => ChangelogError::Storage(err),
    }
}

#[cfg(unix)]
fn set_file_mode(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(DB_FILE_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_file_mode(_path: &Path) -> Result<()> {
    Ok(())
}
