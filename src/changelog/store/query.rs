//! Lookup statement construction.
//!
//! All three lookups (count, max user length, select) must see exactly the
//! same rows. They share one [`Predicate`]: the filter/order/limit fragment
//! is rendered once and embedded in each template. The two aggregates wrap
//! the fragment in a `timestamp IN (...)` subquery so they are computed over
//! the limited window, not over the whole table.

use rusqlite::ToSql;

pub const TABLE: &str = "entries";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Count,
    MaxUserLength,
    Select,
}

/// Optional user filter plus the newest-first limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    user: Option<String>,
    limit: i64,
}

impl Predicate {
    /// An empty user string means "no filter". `limit` is expected to be
    /// positive; callers validate it before building statements.
    pub fn new(limit: usize, user: Option<&str>) -> Self {
        Self {
            user: user.filter(|u| !u.is_empty()).map(str::to_string),
            limit: i64::try_from(limit).unwrap_or(i64::MAX),
        }
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    fn fragment(&self) -> String {
        let mut frag = String::new();
        if self.user.is_some() {
            frag.push_str("WHERE user = ? ");
        }
        frag.push_str("ORDER BY timestamp DESC LIMIT ?");
        frag
    }

    pub fn sql(&self, lookup: Lookup) -> String {
        let frag = self.fragment();
        match lookup {
            Lookup::Count => format!(
                "SELECT count(*) FROM {TABLE} WHERE timestamp IN (SELECT timestamp FROM {TABLE} {frag})"
            ),
            Lookup::MaxUserLength => format!(
                "SELECT max(length(user)) FROM {TABLE} WHERE timestamp IN (SELECT timestamp FROM {TABLE} {frag})"
            ),
            Lookup::Select => format!("SELECT timestamp, user, entry FROM {TABLE} {frag}"),
        }
    }

    /// Positional parameters in the order the fragment declares them.
    pub fn params(&self) -> Vec<&dyn ToSql> {
        let mut params: Vec<&dyn ToSql> = Vec::with_capacity(2);
        if let Some(user) = &self.user {
            params.push(user);
        }
        params.push(&self.limit);
        params
    }
}
