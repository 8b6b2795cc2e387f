//! # Message Layout
//!
//! Entries are printed as `<time>  <user>  <message>`. The first two columns
//! have a fixed width for a given result window, so the message starts at the
//! same column on every line. Long or multi-line messages are wrapped and the
//! continuation lines are indented by that same column (the *margin*), so
//! that the text lines up:
//!
//! ```text
//! 2024-01-15T10:02  alice  patched openssl on the web tier and then
//!                          restarted every service depending on it
//! 2024-01-15T10:01  bob    rotated keys
//! ```
//!
//! Lengths are measured in `char`s, never bytes.

/// Narrowest wrap length, whatever the margin.
pub const MIN_WRAP_LENGTH: usize = 10;

/// Fallback and floor for the detected terminal width.
pub const MIN_TERMINAL_WIDTH: usize = 40;

/// Width to lay out for: an explicit request wins, otherwise the detected
/// terminal width, never narrower than [`MIN_TERMINAL_WIDTH`].
pub fn resolve_width(requested: Option<usize>, detected: Option<usize>) -> usize {
    match requested.filter(|w| *w > 0) {
        Some(width) => width,
        None => detected
            .filter(|w| *w >= MIN_TERMINAL_WIDTH)
            .unwrap_or(MIN_TERMINAL_WIDTH),
    }
}

/// Characters available for message text once `margin` columns are used.
pub fn wrap_length(width: usize, margin: usize) -> usize {
    width.saturating_sub(margin).max(MIN_WRAP_LENGTH)
}

/// Lays out `message` for a line whose first `margin` columns are already
/// printed by the caller.
///
/// A single line that fits comes back untouched. Otherwise the message is
/// split on `\n`, over-long lines are wrapped on spaces, and every line but
/// the first is prefixed with `margin` spaces.
pub fn format_message(message: &str, margin: usize, width: usize) -> String {
    let max = wrap_length(width, margin);

    if !message.contains('\n') && message.chars().count() <= max {
        return message.to_string();
    }

    let indent = " ".repeat(margin);
    let mut lines: Vec<String> = Vec::new();

    for segment in message.split('\n') {
        let chunks = if segment.chars().count() <= max {
            vec![segment.to_string()]
        } else {
            chunk_by_words(segment, max)
        };
        for chunk in chunks {
            if lines.is_empty() {
                lines.push(chunk);
            } else {
                lines.push(format!("{indent}{chunk}"));
            }
        }
    }

    lines.join("\n")
}

/// Cuts `text` into chunks of at most `max` characters, breaking only on
/// spaces. The space at a break is dropped.
///
/// Each step looks at the next `max + 1` characters and cuts at the last space
/// among them. A word longer than `max` is never split: its chunk runs to the
/// next space (or the end) and is simply wider than `max`.
pub fn chunk_by_words(text: &str, max: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < len {
        if len - start <= max {
            chunks.push(chars[start..].iter().collect());
            break;
        }

        let window_end = (start + max + 1).min(len);
        let cut = chars[start + 1..window_end]
            .iter()
            .rposition(|c| *c == ' ')
            .map(|pos| start + 1 + pos)
            .or_else(|| {
                chars[window_end..]
                    .iter()
                    .position(|c| *c == ' ')
                    .map(|pos| window_end + pos)
            });

        match cut {
            Some(cut) => {
                chunks.push(chars[start..cut].iter().collect());
                start = cut + 1;
            }
            None => {
                chunks.push(chars[start..].iter().collect());
                break;
            }
        }
    }

    chunks
}

/// One printed entry: `<time>  <user>  <message>`, with the user padded to
/// `user_width` and the message laid out by [`format_message`].
pub fn entry_line(
    time: impl std::fmt::Display,
    user: &str,
    user_width: usize,
    message: &str,
    margin: usize,
    width: usize,
) -> String {
    format!(
        "{}  {}  {}",
        time,
        pad(user, user_width, false),
        format_message(message, margin, width)
    )
}

/// Pads `text` with spaces up to `width` characters, on the left when
/// `left` is set. Text already that wide is returned as is.
pub fn pad(text: &str, width: usize, left: bool) -> String {
    if left {
        format!("{text:>width$}")
    } else {
        format!("{text:<width$}")
    }
}
