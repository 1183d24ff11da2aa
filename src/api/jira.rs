//! Jira REST client and wire types.
//!
//! Talks to the core REST API (`rest/api/2`) for issue search, worklogs and
//! projects, and to the agile API (`rest/agile/1.0`) for boards and sprints.
//! Authentication is HTTP basic auth with the login and credential from
//! [`TrackerConfig`].

use super::{Tracker, TrackerConfig};
use crate::libs::config::ConfigModule;
use crate::libs::error::WorklogError;
use crate::libs::messages::Message;
use crate::libs::query::{WorklogQuery, SEARCH_FIELDS};
use crate::{msg_debug, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

const SEARCH_URL: &str = "rest/api/2/search";
const ISSUE_URL: &str = "rest/api/2/issue";
const PROJECT_URL: &str = "rest/api/2/project";
const BOARD_URL: &str = "rest/agile/1.0/board";
const SPRINT_URL: &str = "rest/agile/1.0/sprint";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub start_at: usize,
    #[serde(default)]
    pub max_results: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraIssueFields,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JiraIssueFields {
    #[serde(default)]
    pub summary: String,
    pub worklog: Option<WorklogPage>,
}

/// Worklog collection as embedded in an issue or returned by the refetch.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPage {
    #[serde(default)]
    pub start_at: usize,
    #[serde(default)]
    pub max_results: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub worklogs: Vec<JiraWorklog>,
}

impl WorklogPage {
    /// Jira caps embedded worklogs; a page that is full may be missing entries.
    pub fn is_truncated(&self) -> bool {
        self.max_results <= self.total
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JiraWorklog {
    pub id: String,
    pub author: JiraUser,
    pub started: String,
    pub time_spent_seconds: u64,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    pub key: Option<String>,
    pub account_id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: String,
}

impl JiraUser {
    /// Stable identity: Server `key`, else Cloud `accountId`, else `name`.
    pub fn identity(&self) -> String {
        self.key
            .clone()
            .or_else(|| self.account_id.clone())
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| self.display_name.clone())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JiraBoard {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JiraSprint {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub state: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JiraProject {
    pub id: String,
    pub key: String,
    pub name: String,
}

#[derive(Deserialize, Debug)]
struct BoardPage {
    #[serde(default)]
    values: Vec<JiraBoard>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SprintPage {
    #[serde(default)]
    is_last: bool,
    #[serde(default)]
    values: Vec<JiraSprint>,
}

#[derive(Debug, Clone)]
pub struct JiraClient {
    client: Client,
}

impl Default for JiraClient {
    fn default() -> Self {
        Self::new()
    }
}

impl JiraClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION))
            .build()
            .unwrap_or_default();
        Self { client }
    }

    async fn send(&self, config: &TrackerConfig, path: &str, query: &[(&str, String)]) -> Result<Response, WorklogError> {
        let url = format!("{}/{}", config.base_url(), path);
        msg_debug!(format!("GET {}", url));

        Ok(self
            .client
            .get(&url)
            .basic_auth(config.user(), Some(config.credential()))
            .query(query)
            .send()
            .await?)
    }

    async fn read<R: DeserializeOwned>(path: &str, res: Response) -> Result<R, WorklogError> {
        match res.status() {
            StatusCode::NOT_FOUND => Err(WorklogError::NotFound(path.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(WorklogError::FetchFailed(format!("{} rejected the credentials ({})", path, res.status())))
            }
            status if !status.is_success() => Err(WorklogError::FetchFailed(format!("{} returned {}", path, status))),
            _ => Ok(res.json::<R>().await?),
        }
    }

    async fn get<R: DeserializeOwned>(&self, config: &TrackerConfig, path: &str, query: &[(&str, String)]) -> Result<R, WorklogError> {
        let res = self.send(config, path, query).await?;
        Self::read(path, res).await
    }
}

impl Tracker for JiraClient {
    async fn search(&self, config: &TrackerConfig, query: &WorklogQuery, start_at: usize, max_results: usize) -> Result<SearchPage, WorklogError> {
        let params = [
            ("jql", query.jql()),
            ("startAt", start_at.to_string()),
            ("maxResults", max_results.to_string()),
            ("fields", SEARCH_FIELDS.join(",")),
        ];

        let res = self.send(config, SEARCH_URL, &params).await?;

        // The query itself is well formed, so a 400 means Jira does not know the project.
        if res.status() == StatusCode::BAD_REQUEST {
            return Err(WorklogError::NotFound(format!("project {}", query.project)));
        }

        Self::read(SEARCH_URL, res).await
    }

    async fn issue_worklogs(&self, config: &TrackerConfig, issue_key: &str) -> Result<WorklogPage, WorklogError> {
        let path = format!("{}/{}/worklog", ISSUE_URL, issue_key);
        self.get(config, &path, &[]).await
    }

    async fn boards_for_project(&self, config: &TrackerConfig, project: &str) -> Result<Vec<JiraBoard>, WorklogError> {
        let page: BoardPage = self.get(config, BOARD_URL, &[("projectKeyOrId", project.to_string())]).await?;
        Ok(page.values)
    }

    async fn sprints_for_board(&self, config: &TrackerConfig, board_id: u64) -> Result<Vec<JiraSprint>, WorklogError> {
        let path = format!("{}/{}/sprint", BOARD_URL, board_id);
        let mut sprints = Vec::new();

        loop {
            let page: SprintPage = self.get(config, &path, &[("startAt", sprints.len().to_string())]).await?;
            let received = page.values.len();
            sprints.extend(page.values);

            if page.is_last || received == 0 {
                break;
            }
        }

        Ok(sprints)
    }

    async fn sprint(&self, config: &TrackerConfig, sprint_id: u64) -> Result<JiraSprint, WorklogError> {
        let path = format!("{}/{}", SPRINT_URL, sprint_id);
        self.get(config, &path, &[]).await
    }

    async fn projects(&self, config: &TrackerConfig) -> Result<Vec<JiraProject>, WorklogError> {
        self.get(config, PROJECT_URL, &[]).await
    }
}

/// Persisted part of the Jira connection. The credential is never stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JiraConfig {
    pub base_url: String,
    pub login: String,
}

impl JiraConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "jira".to_string(),
            name: "Jira".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            base_url: "".to_string(),
            login: "".to_string(),
        });

        msg_print!(Message::ConfigModuleJira);

        let base_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptJiraUrl.to_string())
            .default(config.base_url)
            .interact_text()?;

        Ok(Self {
            base_url: normalize_base_url(&base_url)?,
            login: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptJiraLogin.to_string())
                .default(config.login)
                .interact_text()?,
        })
    }

    /// Combines the stored settings with a credential obtained at runtime.
    pub fn tracker_config(&self, credential: &str) -> TrackerConfig {
        TrackerConfig::new(&self.base_url, &self.login, credential)
    }
}

/// Reduces a pasted Jira URL (often a browse link) to `scheme://host[:port]`.
pub fn normalize_base_url(input: &str) -> Result<String> {
    let url = reqwest::Url::parse(input.trim()).map_err(|e| anyhow::anyhow!("{}: {}", Message::InvalidBaseUrl(input.to_string()), e))?;
    let host = url
        .host_str()
        .ok_or_else(|| anyhow::anyhow!("{}", Message::InvalidBaseUrl(input.to_string())))?;

    Ok(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}
