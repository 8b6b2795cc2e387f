use chrono::NaiveDateTime;

/// Format SQLite uses for `datetime('now','localtime')`.
pub const STORAGE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Minute resolution, used when printing entries.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One journal record. The timestamp is the primary key of the store, so
/// two entries never share the same second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub timestamp: NaiveDateTime,
    pub user: String,
    pub message: String,
}

impl Entry {
    pub fn new(
        timestamp: NaiveDateTime,
        user: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            user: user.into(),
            message: message.into(),
        }
    }

    pub fn display_time(&self) -> String {
        self.timestamp.format(DISPLAY_TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn display_time_drops_seconds() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 59)
            .unwrap();
        let entry = Entry::new(ts, "root", "upgraded kernel");
        assert_eq!(entry.display_time(), "2024-03-09T07:05");
    }
}
