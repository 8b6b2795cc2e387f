use crate::config::ChangelogConfig;
use crate::format::entry_line;
use crate::model::Entry;

pub mod add;
pub mod show;

/// Notice printed when there is nothing to show.
pub const NO_ENTRY_NOTICE: &str = "No entry found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Entries to print plus the layout they were laid out for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub entries: Vec<Entry>,
    /// Width of the user column (longest user name in `entries`).
    pub user_width: usize,
    /// Column where message text starts.
    pub margin: usize,
    /// Total line width to wrap to.
    pub width: usize,
}

impl Listing {
    pub fn new(
        entries: Vec<Entry>,
        user_width: usize,
        width: usize,
        config: &ChangelogConfig,
    ) -> Self {
        Self {
            entries,
            user_width,
            margin: user_width + config.date_spacing,
            width,
        }
    }

    /// One rendered block per entry, in listing order.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| {
                entry_line(
                    entry.display_time(),
                    &entry.user,
                    self.user_width,
                    &entry.message,
                    self.margin,
                    self.width,
                )
            })
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub added: Option<Entry>,
    pub listing: Option<Listing>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_added(mut self, entry: Entry) -> Self {
        self.added = Some(entry);
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    /// The "nothing to show" outcome. Not an error.
    pub fn no_entries() -> Self {
        let mut result = Self::default();
        result.add_message(CmdMessage::info(NO_ENTRY_NOTICE));
        result
    }
}
