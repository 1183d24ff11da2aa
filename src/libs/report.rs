//! Worklog report service.
//!
//! Wires the pipeline together over one [`Tracker`] and one [`TrackerConfig`]:
//!
//! ```text
//! WorklogQuery ──▶ IssueFetcher ──▶ aggregate() ──┬──▶ on-screen view
//!                                                 └──▶ layout::render ──▶ export
//! ```
//!
//! Every call builds its result from live tracker data and keeps nothing
//! between calls.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jiralog::api::{jira::JiraClient, TrackerConfig};
//! use jiralog::libs::{export::ExportFormat, report::WorklogReport, window::DateWindow};
//!
//! let client = JiraClient::new();
//! let config = TrackerConfig::new("https://jira.example.com", "alice", "secret");
//! let report = WorklogReport::new(&client, &config);
//! let document = report.export("DEMO", &window, ExportFormat::Xlsx).await?;
//! ```

use crate::api::{Tracker, TrackerConfig};
use crate::libs::aggregate::{aggregate, AggregationResult};
use crate::libs::error::WorklogError;
use crate::libs::export::{export_grid, ExportFormat, ExportedDocument};
use crate::libs::fetcher::IssueFetcher;
use crate::libs::layout::{render, ReportInfo};
use crate::libs::query::WorklogQuery;
use crate::libs::sprint::{find_matching, recent_sprints, sprint_by_id, Sprint};
use crate::libs::window::DateWindow;
use crate::msg_debug;

pub struct WorklogReport<'a, T: Tracker> {
    tracker: &'a T,
    config: &'a TrackerConfig,
}

impl<'a, T: Tracker> WorklogReport<'a, T> {
    pub fn new(tracker: &'a T, config: &'a TrackerConfig) -> Self {
        Self { tracker, config }
    }

    /// Exact per-author worklogs of `project` inside `window`.
    pub async fn aggregate(&self, project: &str, window: &DateWindow) -> Result<AggregationResult, WorklogError> {
        let query = WorklogQuery::new(project, window);
        msg_debug!(format!("jql: {}", query));

        let issues = IssueFetcher::new(self.tracker, self.config).fetch(&query).await?;
        aggregate(&issues, window)
    }

    /// Renders the report for `project` and `window` as a document without sprint context.
    pub async fn export(&self, project: &str, window: &DateWindow, format: ExportFormat) -> Result<ExportedDocument, WorklogError> {
        self.export_with_sprint(project, window, format, None).await
    }

    pub async fn export_with_sprint(
        &self,
        project: &str,
        window: &DateWindow,
        format: ExportFormat,
        sprint: Option<&Sprint>,
    ) -> Result<ExportedDocument, WorklogError> {
        let result = self.aggregate(project, window).await?;
        self.document(&result, project, window, format, sprint)
    }

    /// Lays out and serialises an already aggregated result.
    pub fn document(
        &self,
        result: &AggregationResult,
        project: &str,
        window: &DateWindow,
        format: ExportFormat,
        sprint: Option<&Sprint>,
    ) -> Result<ExportedDocument, WorklogError> {
        let info = ReportInfo {
            project: project.to_string(),
            sprint: sprint.map(|sprint| sprint.name.clone()),
            window: *window,
        };
        let grid = render(result, &info, self.config.base_url());
        export_grid(&grid, window, format)
    }

    pub async fn recent_sprints(&self, project: &str) -> Result<Vec<Sprint>, WorklogError> {
        recent_sprints(self.tracker, self.config, project).await
    }

    /// The recent sprint spanning exactly the window's days, if any.
    ///
    /// Sprint context only decorates a report, so a project without boards or
    /// a failing agile API yields `None` instead of an error.
    pub async fn matching_sprint(&self, project: &str, window: &DateWindow) -> Option<Sprint> {
        match self.recent_sprints(project).await {
            Ok(sprints) => find_matching(&sprints, window).cloned(),
            Err(e) => {
                msg_debug!(format!("no sprint context for {}: {}", project, e));
                None
            }
        }
    }

    /// A sprint together with the whole-day window it spans.
    pub async fn sprint_window(&self, sprint_id: u64) -> Result<(Sprint, DateWindow), WorklogError> {
        let sprint = sprint_by_id(self.tracker, self.config, sprint_id).await?;
        let window = sprint.window()?;
        Ok((sprint, window))
    }
}
