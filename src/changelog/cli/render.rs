//! Terminal output for command results.
//!
//! Layout (column widths, wrapping) is computed in the library; this module
//! only joins the lines and picks streams and styles.

use changelog::api::{CmdMessage, Listing, MessageLevel};
use console::style;

/// The listing as printed: one block per entry, newline-terminated.
pub fn render_listing(listing: &Listing) -> String {
    let mut out = String::new();
    for line in listing.lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn print_listing(listing: &Listing) {
    print!("{}", render_listing(listing));
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Warning => eprintln!(
                "{}",
                style(format!("Warning: {}", message.content))
                    .yellow()
                    .for_stderr()
            ),
        }
    }
}
