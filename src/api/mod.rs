//! Tracker access for the worklog pipeline.
//!
//! The pipeline never talks HTTP directly. It consumes the [`Tracker`]
//! capability: a search that returns issues with their embedded worklog page,
//! a per-issue worklog refetch, and the board/sprint lookups used for sprint
//! context. [`jira::JiraClient`] is the production implementation; tests plug
//! in in-memory doubles.
//!
//! ## Connection parameters
//!
//! Every call receives the same [`TrackerConfig`] by reference. There is no
//! process-wide client or configuration singleton; a caller builds one config
//! per run and drops it afterwards.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jiralog::api::{jira::JiraClient, TrackerConfig};
//!
//! let config = TrackerConfig::new("https://jira.example.com", "alice", "secret");
//! let client = JiraClient::new();
//! ```

use crate::libs::error::WorklogError;
use crate::libs::query::WorklogQuery;
use std::fmt;

pub mod jira;

pub use jira::{JiraBoard, JiraConfig, JiraIssue, JiraProject, JiraSprint, JiraUser, JiraWorklog, SearchPage, WorklogPage};

/// Connection parameters for one tracker server.
///
/// The credential is kept out of `Debug` output and is never serialised.
#[derive(Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    base_url: String,
    user: String,
    credential: String,
}

impl TrackerConfig {
    pub fn new(base_url: &str, user: &str, credential: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user: user.to_string(),
            credential: credential.to_string(),
        }
    }

    /// Server root without a trailing slash, e.g. `https://jira.example.com`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .field("credential", &"<redacted>")
            .finish()
    }
}

/// Read-only capability the pipeline consumes from the issue tracker.
///
/// Implementations must map transport and authentication problems to
/// [`WorklogError::FetchFailed`] and unknown projects, boards or sprints to
/// [`WorklogError::NotFound`]. They must not retry; retry policy belongs to
/// whoever drives the pipeline.
#[allow(async_fn_in_trait)]
pub trait Tracker {
    /// One page of issues matching `query`, each with `summary` and its
    /// embedded (possibly truncated) worklog page.
    async fn search(
        &self,
        config: &TrackerConfig,
        query: &WorklogQuery,
        start_at: usize,
        max_results: usize,
    ) -> Result<SearchPage, WorklogError>;

    /// The complete worklog list of a single issue.
    async fn issue_worklogs(&self, config: &TrackerConfig, issue_key: &str) -> Result<WorklogPage, WorklogError>;

    /// Boards attached to a project key.
    async fn boards_for_project(&self, config: &TrackerConfig, project: &str) -> Result<Vec<JiraBoard>, WorklogError>;

    /// Every sprint of a board, in tracker order.
    async fn sprints_for_board(&self, config: &TrackerConfig, board_id: u64) -> Result<Vec<JiraSprint>, WorklogError>;

    /// A single sprint by id.
    async fn sprint(&self, config: &TrackerConfig, sprint_id: u64) -> Result<JiraSprint, WorklogError>;

    /// Projects visible to the configured user.
    async fn projects(&self, config: &TrackerConfig) -> Result<Vec<JiraProject>, WorklogError>;
}
