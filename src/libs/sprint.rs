//! Sprint lookups for report context.
//!
//! Sprints are display context only: they name the report and can supply its
//! date window. Nothing here is cached; every call hits the tracker.

use crate::api::jira::JiraSprint;
use crate::api::{Tracker, TrackerConfig};
use crate::libs::error::WorklogError;
use crate::libs::window::DateWindow;
use crate::libs::worklog::parse_timestamp;
use crate::msg_debug;
use chrono::{DateTime, FixedOffset};

/// How many sprints [`recent_sprints`] returns at most.
pub const RECENT_SPRINTS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Sprint {
    pub id: u64,
    pub name: String,
    pub state: String,
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
}

impl Sprint {
    /// Parses a tracker sprint. Returns `Ok(None)` for sprints without dates
    /// (planned but never started).
    pub fn parse(raw: &JiraSprint) -> Result<Option<Self>, WorklogError> {
        let (Some(start), Some(end)) = (&raw.start_date, &raw.end_date) else {
            return Ok(None);
        };

        Ok(Some(Self {
            id: raw.id,
            name: raw.name.clone(),
            state: raw.state.clone(),
            start_date: parse_timestamp(&format!("sprint {} startDate", raw.id), start)?,
            end_date: parse_timestamp(&format!("sprint {} endDate", raw.id), end)?,
        }))
    }

    /// Whole-day window from the sprint's first to its last day, in the sprint's offset.
    pub fn window(&self) -> Result<DateWindow, WorklogError> {
        DateWindow::from_days(self.start_date.date_naive(), self.end_date.date_naive(), *self.start_date.offset())
    }

    /// True when the sprint starts and ends on the window's first and last day.
    pub fn matches(&self, window: &DateWindow) -> bool {
        self.start_date.date_naive() == window.first_day() && self.end_date.date_naive() == window.last_day()
    }
}

/// The most recent sprints of a project's first board, newest end date first.
///
/// Fails with [`WorklogError::NotFound`] when the project has no board.
pub async fn recent_sprints<T: Tracker>(tracker: &T, config: &TrackerConfig, project: &str) -> Result<Vec<Sprint>, WorklogError> {
    let boards = tracker.boards_for_project(config, project).await?;
    let board = boards
        .first()
        .ok_or_else(|| WorklogError::NotFound(format!("board for project {}", project)))?;

    let mut sprints = Vec::new();
    for raw in tracker.sprints_for_board(config, board.id).await? {
        match Sprint::parse(&raw)? {
            Some(sprint) => sprints.push(sprint),
            None => msg_debug!(format!("skipping undated sprint {} ({})", raw.id, raw.name)),
        }
    }

    sprints.sort_by(|a, b| b.end_date.cmp(&a.end_date));
    sprints.truncate(RECENT_SPRINTS);
    Ok(sprints)
}

/// A single sprint by id. Undated sprints cannot provide a window and are reported as not found.
pub async fn sprint_by_id<T: Tracker>(tracker: &T, config: &TrackerConfig, sprint_id: u64) -> Result<Sprint, WorklogError> {
    let raw = tracker.sprint(config, sprint_id).await?;
    Sprint::parse(&raw)?.ok_or_else(|| WorklogError::NotFound(format!("dates of sprint {}", sprint_id)))
}

pub fn find_matching<'a>(sprints: &'a [Sprint], window: &DateWindow) -> Option<&'a Sprint> {
    sprints.iter().find(|sprint| sprint.matches(window))
}
