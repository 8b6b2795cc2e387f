use crate::commands::CmdResult;
use crate::error::{ChangelogError, Result};
use crate::store::{DataStore, StoreSource};
use crate::system::Host;
use log::info;

#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    /// Message words, joined with single spaces.
    pub words: Vec<String>,
    /// Read the message from stdin when no words are given.
    pub from_stdin: bool,
    /// Record the entry under this user instead of the detected one.
    pub user: Option<String>,
}

pub fn run<H: Host, P: StoreSource>(
    host: &H,
    source: &P,
    request: AddRequest,
) -> Result<CmdResult> {
    if !host.is_privileged() {
        return Err(ChangelogError::Permission(
            "please add new entries with root privileges".into(),
        ));
    }

    let mut store = source.open(true)?;

    let user = match request.user.filter(|u| !u.is_empty()) {
        Some(user) => user,
        None => host.real_user(),
    };
    if user.is_empty() {
        return Err(ChangelogError::Validation(
            "can't determine the current user, please set one with --user".into(),
        ));
    }

    let message = resolve_message(host, &request.words, request.from_stdin)?;

    let entry = store.insert(&user, &message)?;
    store.close()?;

    info!(
        "event=entry_add module=commands status=ok user={} timestamp={}",
        entry.user, entry.timestamp
    );
    Ok(CmdResult::default().with_added(entry))
}

fn resolve_message<H: Host>(host: &H, words: &[String], from_stdin: bool) -> Result<String> {
    let message = if !words.is_empty() {
        words.join(" ")
    } else if from_stdin {
        let input = host.read_stdin()?;
        match input.strip_suffix('\n') {
            Some(trimmed) => trimmed.to_string(),
            None => input,
        }
    } else {
        return Err(ChangelogError::Validation(
            "please add a message to create an entry".into(),
        ));
    };

    if message.is_empty() {
        return Err(ChangelogError::Validation("the entry message is empty".into()));
    }
    Ok(message)
}
