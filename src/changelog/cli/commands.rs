//! Dispatch from parsed arguments to the API, and process-level setup.

use super::render::{print_listing, print_messages};
use super::setup::{parse, print_help, Cli, Commands, Parsed};
use changelog::api::{AddRequest, ChangelogApi, ShowRequest};
use changelog::config::ChangelogConfig;
use changelog::error::Result;
use changelog::store::sqlite::SqliteSource;
use changelog::system::SystemHost;
use env_logger::Env;
use log::debug;

/// Environment variable holding the log filter (`error`, `debug`, ...).
pub const LOG_ENV_VAR: &str = "CHANGELOG_LOG";

/// Logs go to stderr so they never mix with rendered entries.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV_VAR, "warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

type AppApi = ChangelogApi<SystemHost, SqliteSource>;

pub fn run() -> Result<()> {
    let cli: Cli = match parse(std::env::args_os()) {
        Parsed::Run(cli) => cli,
        Parsed::UnknownCommand(name) => {
            println!("No matching command '{}'", name);
            println!();
            print_help();
            std::process::exit(1);
        }
        Parsed::Clap(err) => err.exit(),
    };

    let config = ChangelogConfig::from_env();
    debug!(
        "event=cli_start module=cli db_path={}",
        config.db_path.display()
    );
    let api = ChangelogApi::system(config);

    match cli.command {
        Some(Commands::Add {
            stdin,
            user,
            message,
        }) => handle_add(&api, message, stdin, user),
        Some(Commands::Show { last, user, width }) => handle_show(&api, last, user, width),
        None => {
            print_help();
            Ok(())
        }
    }
}

fn handle_add(
    api: &AppApi,
    words: Vec<String>,
    from_stdin: bool,
    user: Option<String>,
) -> Result<()> {
    let result = api.add(AddRequest {
        words,
        from_stdin,
        user,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(
    api: &AppApi,
    limit: Option<i64>,
    user: Option<String>,
    width: Option<usize>,
) -> Result<()> {
    let result = api.show(ShowRequest { limit, user, width })?;
    if let Some(listing) = &result.listing {
        print_listing(listing);
    }
    print_messages(&result.messages);
    Ok(())
}
