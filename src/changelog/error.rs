use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Cannot open the changelog database: {0}")]
    Connection(#[source] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[source] rusqlite::Error),

    #[error("Entry conflict: an entry already exists for {0}")]
    Conflict(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChangelogError {
    /// True when an insert hit the timestamp primary key.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ChangelogError::Conflict(_))
    }

    pub fn is_permission(&self) -> bool {
        matches!(self, ChangelogError::Permission(_))
    }
}

impl From<rusqlite::Error> for ChangelogError {
    fn from(err: rusqlite::Error) -> Self {
        ChangelogError::Storage(err)
    }
}

pub type Result<T> = std::result::Result<T, ChangelogError>;
