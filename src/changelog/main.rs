//! # Changelog CLI
//!
//! The binary is thin: the CLI lives in `cli/`, this file sets up logging,
//! invokes `cli::run()` and turns a failure into a logged error and a
//! non-zero exit status.
//!
//! Every resource an operation opens (the journal connection in particular)
//! is owned by a value scoped inside `cli::run()`, so it has been released by
//! the time an error reaches this function.
//!
//! Logging uses `log` + `env_logger`; the filter is read from `CHANGELOG_LOG`
//! and defaults to `warn`.

mod cli;

fn main() {
    cli::init_logging();
    if let Err(e) = cli::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
