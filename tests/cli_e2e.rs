use assert_cmd::Command;
use changelog::store::sqlite::SqliteStore;
use changelog::store::DataStore;
use chrono::{Local, NaiveDate, NaiveDateTime};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn changelog_cmd(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("changelog").unwrap();
    cmd.env("CHANGELOG_DB", db).env_remove("CHANGELOG_LOG");
    cmd
}

fn is_root() -> bool {
    nix::unistd::Uid::effective().is_root()
}

fn at(minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, minute, 0)
        .unwrap()
}

fn seed(db: &Path, rows: &[(u32, &str, &str)]) {
    let mut store = SqliteStore::open(db, true).unwrap();
    for (minute, user, message) in rows {
        store.insert_at(at(*minute), user, message).unwrap();
    }
    store.close().unwrap();
}

#[test]
fn show_without_journal_prints_notice() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("changelog.db");

    changelog_cmd(&db)
        .arg("show")
        .assert()
        .success()
        .stdout("No entry found.\n");

    assert!(!db.exists());
}

#[test]
fn show_prints_aligned_entries() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("changelog.db");
    seed(
        &db,
        &[
            (0, "christophe", "resized /var"),
            (1, "bob", "rotated keys"),
            (2, "alice", "patched openssl\nrestarted nginx"),
        ],
    );

    let expected = format!(
        "2024-01-15T10:02  alice       patched openssl\n{}restarted nginx\n\
         2024-01-15T10:01  bob         rotated keys\n\
         2024-01-15T10:00  christophe  resized /var\n",
        " ".repeat(30)
    );
    changelog_cmd(&db)
        .args(["show", "-w", "100"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn show_filters_and_limits() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("changelog.db");
    seed(
        &db,
        &[
            (0, "alice", "first"),
            (1, "bob", "second"),
            (2, "alice", "third"),
            (3, "alice", "fourth"),
        ],
    );

    changelog_cmd(&db)
        .args(["show", "--user", "alice", "--last", "2"])
        .assert()
        .success()
        .stdout("2024-01-15T10:03  alice  fourth\n2024-01-15T10:02  alice  third\n");

    changelog_cmd(&db)
        .args(["show", "-u", "nobody"])
        .assert()
        .success()
        .stdout("No entry found.\n");
}

#[test]
fn show_wraps_long_messages_to_width() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("changelog.db");
    seed(&db, &[(0, "bob", "moved the backups to the new array")]);

    // margin 23, width 40: 17 columns for the message
    changelog_cmd(&db)
        .args(["show", "-w", "40"])
        .assert()
        .success()
        .stdout(format!(
            "2024-01-15T10:00  bob  moved the backups\n{0}to the new array\n",
            " ".repeat(23)
        ));
}

#[test]
fn show_rejects_non_positive_limit() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("changelog.db");
    seed(&db, &[(0, "alice", "first")]);

    changelog_cmd(&db)
        .args(["show", "-l", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("can't display 0 entries"));
}

#[test]
fn unknown_command_prints_help_and_fails() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("changelog.db");

    changelog_cmd(&db)
        .arg("frobnicate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No matching command 'frobnicate'"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn no_command_prints_help() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("changelog.db");

    changelog_cmd(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn add_without_root_is_refused() {
    if is_root() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("changelog.db");

    changelog_cmd(&db)
        .args(["add", "sneaky change"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("root privileges"));
    assert!(!db.exists());

    seed(&db, &[(0, "alice", "first")]);
    changelog_cmd(&db)
        .args(["add", "sneaky change"])
        .assert()
        .code(1);
    changelog_cmd(&db)
        .arg("show")
        .assert()
        .success()
        .stdout("2024-01-15T10:00  alice  first\n");
}

#[test]
fn add_then_show_as_root() {
    if !is_root() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("changelog.db");

    let before = Local::now().format("%Y-%m-%dT%H:%M").to_string();
    changelog_cmd(&db)
        .args(["add", "--user", "alice", "fixed", "bug"])
        .assert()
        .success()
        .stdout("");
    let after = Local::now().format("%Y-%m-%dT%H:%M").to_string();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&db).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    let output = changelog_cmd(&db).arg("show").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "{stdout}");
    assert!(lines[0].starts_with(&before) || lines[0].starts_with(&after));
    assert!(lines[0].ends_with("  alice  fixed bug"), "{stdout}");
}

#[test]
fn add_from_stdin_as_root() {
    if !is_root() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("changelog.db");

    changelog_cmd(&db)
        .args(["add", "-s", "-u", "ops"])
        .write_stdin("upgraded postgres\nran vacuum\n")
        .assert()
        .success();

    let store = SqliteStore::open(&db, false).unwrap();
    let found = store.query(5, Some("ops")).unwrap();
    assert_eq!(found.count, 1);
    assert_eq!(found.entries[0].message, "upgraded postgres\nran vacuum");
}

#[test]
fn add_without_message_fails_as_root() {
    if !is_root() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("changelog.db");

    changelog_cmd(&db)
        .arg("add")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("please add a message"));
}
