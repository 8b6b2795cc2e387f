use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser, Subcommand};

/// Returns the version string, with the build target and, for non-release
/// builds, the git hash and commit date.
/// Format: "0.3.0 (linux x86_64)" for releases,
/// "0.3.0@abc1234 (linux x86_64, built 2024-01-15 14:30)" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("{} ({})", VERSION, BUILD_TARGET)
        } else {
            format!(
                "{}@{} ({}, built {})",
                VERSION, GIT_HASH, BUILD_TARGET, GIT_COMMIT_DATE
            )
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "changelog", bin_name = "changelog", version = get_version())]
#[command(
    about = "Keep a journal of maintenance, upgrades and changes done to a system.",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new entry to the changelog (root only)
    #[command(display_order = 1)]
    Add {
        /// Take the log entry from stdin instead of from arguments
        #[arg(short, long)]
        stdin: bool,

        /// Set the entry to user USER
        #[arg(short, long, value_name = "USER")]
        user: Option<String>,

        /// The log entry (words are joined with spaces)
        #[arg(trailing_var_arg = true, value_name = "LOG ENTRY")]
        message: Vec<String>,
    },

    /// Show entries from the changelog
    #[command(display_order = 2)]
    Show {
        /// Show the last X entries
        #[arg(short, long, value_name = "X", allow_negative_numbers = true)]
        last: Option<i64>,

        /// Show the entries of user USER
        #[arg(short, long, value_name = "USER")]
        user: Option<String>,

        /// Format the output to a width of X characters
        #[arg(short, long, value_name = "X")]
        width: Option<usize>,
    },
}

/// Outcome of parsing the command line.
#[derive(Debug)]
pub enum Parsed {
    Run(Cli),
    /// The first positional argument names no known command.
    UnknownCommand(String),
    /// Any other clap outcome (`--help`, `--version`, usage errors).
    Clap(clap::Error),
}

pub fn parse<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Parsed::Run(cli),
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => {
            let name = match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.clone(),
                _ => String::new(),
            };
            Parsed::UnknownCommand(name)
        }
        Err(err) => Parsed::Clap(err),
    }
}

pub fn get_help() -> String {
    Cli::command().render_help().to_string()
}

pub fn print_help() {
    print!("{}", get_help());
}
