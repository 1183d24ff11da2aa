//! Exact-window worklog aggregation.
//!
//! Takes the over-broad issue set produced by the coarse query and reduces it
//! to the worklogs that started strictly inside the window, grouped by author
//! and ordered in time. Both the on-screen view and every export consume the
//! same [`AggregationResult`].
//!
//! ## Guarantees
//!
//! - every kept entry satisfies `from < started_at < to`
//! - `ordered_entries` is sorted by `started_at`, ties keep fetch order
//! - `total_seconds` equals the sum of the per-author totals and of the entries
//! - authors without a kept entry do not appear anywhere
//!
//! A single unparseable timestamp aborts the whole aggregation.

use crate::libs::error::WorklogError;
use crate::libs::fetcher::FetchedIssue;
use crate::libs::window::DateWindow;
use crate::libs::worklog::{seconds_to_hours, Author, WorklogEntry};
use crate::msg_debug;
use std::collections::HashMap;

/// One author's entries in fetch order, with their running total.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorLog {
    pub author: Author,
    pub entries: Vec<WorklogEntry>,
    pub total_seconds: u64,
}

impl AuthorLog {
    pub fn total_hours(&self) -> f64 {
        seconds_to_hours(self.total_seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregationResult {
    ordered_entries: Vec<WorklogEntry>,
    authors: Vec<AuthorLog>,
    total_seconds: u64,
}

impl AggregationResult {
    /// All kept entries, ascending by start time.
    pub fn ordered_entries(&self) -> &[WorklogEntry] {
        &self.ordered_entries
    }

    /// Authors in the order they were first seen while fetching.
    pub fn entries_by_author(&self) -> &[AuthorLog] {
        &self.authors
    }

    pub fn author(&self, key: &str) -> Option<&AuthorLog> {
        self.authors.iter().find(|log| log.author.key == key)
    }

    pub fn total_seconds_by_author(&self) -> impl Iterator<Item = (&Author, u64)> {
        self.authors.iter().map(|log| (&log.author, log.total_seconds))
    }

    pub fn total_seconds_for(&self, key: &str) -> Option<u64> {
        self.author(key).map(|log| log.total_seconds)
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn total_hours(&self) -> f64 {
        seconds_to_hours(self.total_seconds)
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_entries.is_empty()
    }
}

pub fn aggregate(issues: &[FetchedIssue], window: &DateWindow) -> Result<AggregationResult, WorklogError> {
    let mut ordered_entries = Vec::new();
    let mut authors: Vec<AuthorLog> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut total_seconds = 0;
    let mut dropped = 0usize;

    for issue in issues {
        let Some(worklogs) = &issue.worklogs else {
            continue;
        };

        for raw in worklogs {
            let entry = WorklogEntry::parse(raw, &issue.key, &issue.summary)?;

            if !window.contains_strictly(&entry.started_at) {
                dropped += 1;
                continue;
            }

            let slot = *index.entry(entry.author.key.clone()).or_insert_with(|| {
                authors.push(AuthorLog {
                    author: entry.author.clone(),
                    entries: Vec::new(),
                    total_seconds: 0,
                });
                authors.len() - 1
            });

            let log = &mut authors[slot];
            log.total_seconds += entry.time_spent_seconds;
            log.entries.push(entry.clone());

            total_seconds += entry.time_spent_seconds;
            ordered_entries.push(entry);
        }
    }

    // Vec::sort_by_key is stable, equal start times keep fetch order.
    ordered_entries.sort_by_key(|entry| entry.started_at);

    msg_debug!(format!(
        "aggregated {} worklogs from {} authors, {} outside the window",
        ordered_entries.len(),
        authors.len(),
        dropped
    ));

    Ok(AggregationResult {
        ordered_entries,
        authors,
        total_seconds,
    })
}
