#![allow(dead_code)]

//! In-memory tracker double and fixture builders shared by the integration tests.

use chrono::{FixedOffset, NaiveDate};
use jiralog::api::{JiraBoard, JiraProject, JiraSprint, SearchPage, Tracker, TrackerConfig, WorklogPage};
use jiralog::libs::error::WorklogError;
use jiralog::libs::query::WorklogQuery;
use jiralog::libs::window::DateWindow;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;

pub const BASE_URL: &str = "https://jira.example.com";

/// Embedded worklog page size Jira uses in search results.
pub const EMBEDDED_MAX_RESULTS: usize = 20;

pub fn tracker_config() -> TrackerConfig {
    TrackerConfig::new(BASE_URL, "alice", "s3cret")
}

pub fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

/// Whole-day window in UTC.
pub fn window(from: &str, to: &str) -> DateWindow {
    DateWindow::from_days(day(from), day(to), FixedOffset::east_opt(0).unwrap()).unwrap()
}

pub fn worklog(id: &str, author: &str, started: &str, seconds: u64) -> Value {
    json!({
        "id": id,
        "author": { "key": author, "name": author, "displayName": display_name(author) },
        "started": started,
        "timeSpentSeconds": seconds,
    })
}

/// `alice` → `Alice`
pub fn display_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// An issue whose embedded worklog page is complete.
pub fn issue(key: &str, summary: &str, worklogs: Vec<Value>) -> Value {
    let total = worklogs.len();
    json!({
        "key": key,
        "fields": {
            "summary": summary,
            "worklog": { "startAt": 0, "maxResults": EMBEDDED_MAX_RESULTS, "total": total, "worklogs": worklogs },
        },
    })
}

/// An issue whose embedded page holds only `worklogs` of `total`.
pub fn truncated_issue(key: &str, summary: &str, worklogs: Vec<Value>, total: usize) -> Value {
    let max_results = worklogs.len();
    json!({
        "key": key,
        "fields": {
            "summary": summary,
            "worklog": { "startAt": 0, "maxResults": max_results, "total": total, "worklogs": worklogs },
        },
    })
}

pub fn issue_without_worklogs(key: &str, summary: &str) -> Value {
    json!({ "key": key, "fields": { "summary": summary } })
}

pub fn sprint(id: u64, name: &str, start: Option<&str>, end: Option<&str>) -> Value {
    json!({ "id": id, "name": name, "state": "closed", "startDate": start, "endDate": end })
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, WorklogError> {
    serde_json::from_value(value).map_err(|e| WorklogError::FetchFailed(e.to_string()))
}

/// Tracker double serving canned JSON and recording every call.
#[derive(Default)]
pub struct FakeTracker {
    pub issues: Vec<Value>,
    /// Complete worklog lists served by `issue_worklogs`, by issue key.
    pub full_worklogs: HashMap<String, Vec<Value>>,
    pub boards: Vec<Value>,
    pub sprints: HashMap<u64, Vec<Value>>,
    pub projects: Vec<Value>,
    /// Caps the issues returned per search page below the requested size.
    pub page_limit: Option<usize>,
    /// When set, every call fails with `FetchFailed` carrying this text.
    pub failure: Option<String>,

    pub search_calls: RefCell<Vec<(String, usize, usize)>>,
    pub worklog_calls: RefCell<Vec<String>>,
    pub board_calls: RefCell<Vec<String>>,
}

impl FakeTracker {
    pub fn with_issues(issues: Vec<Value>) -> Self {
        Self {
            issues,
            ..Self::default()
        }
    }

    pub fn worklog_calls_for(&self, key: &str) -> usize {
        self.worklog_calls.borrow().iter().filter(|called| called.as_str() == key).count()
    }

    fn check(&self) -> Result<(), WorklogError> {
        match &self.failure {
            Some(message) => Err(WorklogError::FetchFailed(message.clone())),
            None => Ok(()),
        }
    }
}

impl Tracker for FakeTracker {
    async fn search(
        &self,
        _config: &TrackerConfig,
        query: &WorklogQuery,
        start_at: usize,
        max_results: usize,
    ) -> Result<SearchPage, WorklogError> {
        self.search_calls.borrow_mut().push((query.jql(), start_at, max_results));
        self.check()?;

        let size = self.page_limit.map_or(max_results, |limit| limit.min(max_results));
        let page: Vec<Value> = self.issues.iter().skip(start_at).take(size).cloned().collect();
        decode(json!({
            "startAt": start_at,
            "maxResults": size,
            "total": self.issues.len(),
            "issues": page,
        }))
    }

    async fn issue_worklogs(&self, _config: &TrackerConfig, issue_key: &str) -> Result<WorklogPage, WorklogError> {
        self.worklog_calls.borrow_mut().push(issue_key.to_string());
        self.check()?;

        let worklogs = self
            .full_worklogs
            .get(issue_key)
            .ok_or_else(|| WorklogError::NotFound(format!("issue {}", issue_key)))?;
        decode(json!({
            "startAt": 0,
            "maxResults": worklogs.len(),
            "total": worklogs.len(),
            "worklogs": worklogs,
        }))
    }

    async fn boards_for_project(&self, _config: &TrackerConfig, project: &str) -> Result<Vec<JiraBoard>, WorklogError> {
        self.board_calls.borrow_mut().push(project.to_string());
        self.check()?;
        decode(Value::Array(self.boards.clone()))
    }

    async fn sprints_for_board(&self, _config: &TrackerConfig, board_id: u64) -> Result<Vec<JiraSprint>, WorklogError> {
        self.check()?;
        decode(Value::Array(self.sprints.get(&board_id).cloned().unwrap_or_default()))
    }

    async fn sprint(&self, _config: &TrackerConfig, sprint_id: u64) -> Result<JiraSprint, WorklogError> {
        self.check()?;
        let raw = self
            .sprints
            .values()
            .flatten()
            .find(|sprint| sprint["id"] == json!(sprint_id))
            .cloned()
            .ok_or_else(|| WorklogError::NotFound(format!("sprint {}", sprint_id)))?;
        decode(raw)
    }

    async fn projects(&self, _config: &TrackerConfig) -> Result<Vec<JiraProject>, WorklogError> {
        self.check()?;
        decode(Value::Array(self.projects.clone()))
    }
}
