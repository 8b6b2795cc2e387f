use crate::commands::{CmdMessage, CmdResult, Listing};
use crate::config::ChangelogConfig;
use crate::error::{ChangelogError, Result};
use crate::format::{resolve_width, MIN_WRAP_LENGTH};
use crate::store::{DataStore, StoreSource};
use crate::system::Host;
use log::debug;

#[derive(Debug, Clone, Default)]
pub struct ShowRequest {
    /// How many of the newest entries to show. `None` uses the default.
    pub limit: Option<i64>,
    /// Only entries recorded by this user.
    pub user: Option<String>,
    /// Lay out for this many columns instead of the terminal width.
    pub width: Option<usize>,
}

pub fn run<H: Host, P: StoreSource>(
    host: &H,
    source: &P,
    config: &ChangelogConfig,
    request: ShowRequest,
) -> Result<CmdResult> {
    if !source.exists() {
        debug!("event=entry_show module=commands status=empty reason=no_store");
        return Ok(CmdResult::no_entries());
    }

    let limit = resolve_limit(request.limit, config.default_limit)?;

    let store = source.open(host.is_privileged())?;
    let found = store.query(limit, request.user.as_deref())?;
    store.close()?;

    if found.is_empty() {
        return Ok(CmdResult::no_entries());
    }

    let width = resolve_width(request.width, host.terminal_width());
    let listing = Listing::new(found.entries, found.max_user_len, width, config);

    let mut result = CmdResult::default();
    if request.width.is_some() && width < listing.margin + MIN_WRAP_LENGTH {
        result.add_message(CmdMessage::warning(format!(
            "a width of {} leaves too little room, messages are wrapped at {} characters",
            width, MIN_WRAP_LENGTH
        )));
    }
    Ok(result.with_listing(listing))
}

fn resolve_limit(requested: Option<i64>, default: usize) -> Result<usize> {
    match requested {
        None => Ok(default),
        Some(n) if n < 1 => Err(ChangelogError::Validation(format!(
            "can't display {} entries, use a limit of at least 1",
            n
        ))),
        Some(n) => Ok(usize::try_from(n).unwrap_or(usize::MAX)),
    }
}
