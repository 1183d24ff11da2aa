//! Coarse tracker query for a project and date window.
//!
//! Jira's search can filter issues by creation and update dates, never by the
//! start date of the worklogs they carry. The query is therefore a superset:
//! the upper bound is pushed [`GRACE_DAYS`] past the window and the exact
//! filtering happens later in [`crate::libs::aggregate`].

use crate::libs::window::DateWindow;
use chrono::{Duration, NaiveDate};
use std::fmt;

/// Days added to the window end when bounding issue creation.
pub const GRACE_DAYS: i64 = 5;

/// Issues requested per search page.
pub const PAGE_SIZE: usize = 1000;

/// Issue fields the search must return.
pub const SEARCH_FIELDS: [&str; 2] = ["summary", "worklog"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklogQuery {
    pub project: String,
    pub created_before: NaiveDate,
    pub updated_after: NaiveDate,
}

impl WorklogQuery {
    pub fn new(project: &str, window: &DateWindow) -> Self {
        Self {
            project: project.to_string(),
            created_before: window.last_day() + Duration::days(GRACE_DAYS),
            updated_after: window.first_day(),
        }
    }

    pub fn jql(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorklogQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "project = \"{}\" and created <= \"{}\" and updated >= \"{}\" and timespent > 0",
            self.project.replace('"', "\\\""),
            self.created_before.format("%Y-%m-%d"),
            self.updated_after.format("%Y-%m-%d")
        )
    }
}
