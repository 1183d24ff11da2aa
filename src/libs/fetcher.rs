//! Issue fetching with worklog completion.
//!
//! Runs the coarse query page by page and hands back every matching issue with
//! a complete worklog list. Jira embeds only the first page of an issue's
//! worklogs in search results; when that page looks full the fetcher asks for
//! the issue's whole worklog collection and swaps it in, so aggregation never
//! silently loses entries on busy issues.
//!
//! All calls are made one after another. Failures are returned as-is; the
//! fetcher does not retry.

use crate::api::jira::{JiraIssue, JiraWorklog};
use crate::api::{Tracker, TrackerConfig};
use crate::libs::error::WorklogError;
use crate::libs::query::{WorklogQuery, PAGE_SIZE};
use crate::msg_debug;

/// An issue with its complete worklog list.
#[derive(Debug, Clone)]
pub struct FetchedIssue {
    pub key: String,
    pub summary: String,
    /// `None` when the tracker returned no worklog sub-collection at all.
    pub worklogs: Option<Vec<JiraWorklog>>,
}

pub struct IssueFetcher<'a, T: Tracker> {
    tracker: &'a T,
    config: &'a TrackerConfig,
}

impl<'a, T: Tracker> IssueFetcher<'a, T> {
    pub fn new(tracker: &'a T, config: &'a TrackerConfig) -> Self {
        Self { tracker, config }
    }

    pub async fn fetch(&self, query: &WorklogQuery) -> Result<Vec<FetchedIssue>, WorklogError> {
        let mut issues = Vec::new();

        loop {
            let page = self.tracker.search(self.config, query, issues.len(), PAGE_SIZE).await?;
            let received = page.issues.len();
            msg_debug!(format!("search page at {}: {} of {} issues", issues.len(), received, page.total));

            for issue in page.issues {
                issues.push(self.complete(issue).await?);
            }

            if received == 0 || issues.len() >= page.total {
                break;
            }
        }

        Ok(issues)
    }

    async fn complete(&self, issue: JiraIssue) -> Result<FetchedIssue, WorklogError> {
        let worklogs = match issue.fields.worklog {
            None => None,
            Some(page) if page.is_truncated() => {
                msg_debug!(format!(
                    "{}: embedded worklogs truncated ({} of {}), refetching",
                    issue.key,
                    page.worklogs.len(),
                    page.total
                ));
                Some(self.tracker.issue_worklogs(self.config, &issue.key).await?.worklogs)
            }
            Some(page) => Some(page.worklogs),
        };

        Ok(FetchedIssue {
            key: issue.key,
            summary: issue.fields.summary,
            worklogs,
        })
    }
}
