use crate::config::ChangelogConfig;
use crate::store::sqlite::SqliteSource;
use crate::system::Host;
use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

/// Scripted [`Host`]: no root, no terminal, no real stdin needed.
#[derive(Debug, Clone)]
pub struct FakeHost {
    pub privileged: bool,
    pub user: String,
    pub width: Option<usize>,
    pub stdin: Option<String>,
}

impl FakeHost {
    pub fn root(user: &str) -> Self {
        Self {
            privileged: true,
            user: user.to_string(),
            width: Some(80),
            stdin: None,
        }
    }

    pub fn unprivileged(user: &str) -> Self {
        Self {
            privileged: false,
            ..Self::root(user)
        }
    }

    pub fn with_stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }
}

impl Host for FakeHost {
    fn is_privileged(&self) -> bool {
        self.privileged
    }

    fn real_user(&self) -> String {
        self.user.clone()
    }

    fn terminal_width(&self) -> Option<usize> {
        self.width
    }

    fn read_stdin(&self) -> io::Result<String> {
        self.stdin
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no stdin"))
    }
}

pub struct TestEnv {
    // Keeps the directory alive for the duration of the test
    pub _temp_dir: TempDir,
    pub db_path: PathBuf,
    pub source: SqliteSource,
    pub config: ChangelogConfig,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = temp_dir.path().join("changelog.db");
        Self {
            source: SqliteSource::new(&db_path),
            config: ChangelogConfig::default().with_db_path(&db_path),
            db_path,
            _temp_dir: temp_dir,
        }
    }
}
