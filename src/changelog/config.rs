use std::path::PathBuf;

/// Environment variable overriding the journal location.
pub const DB_ENV_VAR: &str = "CHANGELOG_DB";

/// Used when neither the environment nor the build sets a location.
pub const DEFAULT_DB_PATH: &str = "/var/log/changelog.db";

pub const DEFAULT_LIMIT: usize = 5;

/// Columns taken by the timestamp and the separators around the user column.
pub const DATE_SPACING: usize = 20;

/// Runtime configuration for changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogConfig {
    pub db_path: PathBuf,
    pub default_limit: usize,
    pub date_spacing: usize,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(build_db_path()),
            default_limit: DEFAULT_LIMIT,
            date_spacing: DATE_SPACING,
        }
    }
}

impl ChangelogConfig {
    /// Defaults, with the database path taken from `CHANGELOG_DB` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(DB_ENV_VAR).filter(|p| !p.trim().is_empty()) {
            config.db_path = PathBuf::from(path);
        }
        config
    }

    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }
}

/// The location baked in at build time via `CHANGELOG_DB_PATH`.
fn build_db_path() -> &'static str {
    match option_env!("CHANGELOG_DB_PATH") {
        Some(path) if !path.is_empty() => path,
        _ => DEFAULT_DB_PATH,
    }
}
