//! Worklog value types.
//!
//! A [`WorklogEntry`] is built once from the raw tracker record and its parent
//! issue, and never changes afterwards. The parent issue's key and summary are
//! copied in at construction time.

use crate::api::jira::{JiraUser, JiraWorklog};
use crate::libs::error::WorklogError;
use chrono::{DateTime, FixedOffset};
use std::hash::{Hash, Hasher};

/// Jira's own timestamp layout, e.g. `2024-01-15T10:00:00.000+0000`.
const JIRA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// A tracker user. Two authors are the same person iff their keys match.
#[derive(Debug, Clone, Eq)]
pub struct Author {
    pub key: String,
    pub display_name: String,
}

impl Author {
    pub fn new(key: &str, display_name: &str) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

impl From<&JiraUser> for Author {
    fn from(user: &JiraUser) -> Self {
        let key = user.identity();
        let display_name = if user.display_name.is_empty() { key.clone() } else { user.display_name.clone() };
        Self { key, display_name }
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorklogEntry {
    pub id: String,
    pub issue_key: String,
    pub issue_summary: String,
    pub author: Author,
    pub started_at: DateTime<FixedOffset>,
    pub time_spent_seconds: u64,
}

impl WorklogEntry {
    /// Parses a raw worklog belonging to `issue_key`.
    ///
    /// Fails with [`WorklogError::MalformedTimestamp`] if `started` is not a
    /// valid timestamp.
    pub fn parse(raw: &JiraWorklog, issue_key: &str, issue_summary: &str) -> Result<Self, WorklogError> {
        Ok(Self {
            id: raw.id.clone(),
            issue_key: issue_key.to_string(),
            issue_summary: issue_summary.to_string(),
            author: Author::from(&raw.author),
            started_at: parse_timestamp(&format!("worklog {} started", raw.id), &raw.started)?,
            time_spent_seconds: raw.time_spent_seconds,
        })
    }

    pub fn hours(&self) -> f64 {
        seconds_to_hours(self.time_spent_seconds)
    }
}

pub fn seconds_to_hours(seconds: u64) -> f64 {
    seconds as f64 / 3600.0
}

/// Parses a tracker timestamp: RFC 3339 (`...Z`, `+00:00`) or Jira's `+0000` form.
pub fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<FixedOffset>, WorklogError> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, JIRA_TIMESTAMP_FORMAT))
        .map_err(|_| WorklogError::MalformedTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        })
}
