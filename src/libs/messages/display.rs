//! Display implementation for jiralog messages.
//!
//! This is the single place where message text is defined. Variants that
//! carry parameters interpolate them here, so the wording of any line the
//! tool prints can be changed without touching the code that emits it.
//!
//! ```rust
//! use jiralog::libs::messages::Message;
//!
//! let text = Message::ExportCompleted("01-03-2024-31-03-2024.xlsx".to_string()).to_string();
//! assert_eq!(text, "Report saved to 01-03-2024-31-03-2024.xlsx");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::ConfigModuleJira => "Jira settings".to_string(),
            Message::JiraNotConfigured => "Jira is not configured. Run `jiralog init` first".to_string(),
            Message::InvalidBaseUrl(input) => format!("'{}' is not a valid Jira URL", input),

            // === CREDENTIAL MESSAGES ===
            Message::CredentialFromEnv => "Using Jira password from JIRALOG_PASSWORD".to_string(),
            Message::CredentialMissing => "A Jira password is required".to_string(),

            // === FETCH MESSAGES ===
            Message::FetchingWorklogs(project, from, to) => format!("Fetching worklogs of {} from {} to {}", project, from, to),
            Message::FetchingSprints(project) => format!("Fetching sprints of {}", project),
            Message::FetchingProjects => "Fetching projects".to_string(),
            Message::TrackerRequestFailed(details) => format!("Jira request failed ({}). Check the Jira URL and your credentials", details),
            Message::TrackerNotFound(what) => format!("Jira has no {}. Check the project key or sprint id", what),

            // === REPORT MESSAGES ===
            Message::ReportHeader(project, from, to) => format!("Worklogs of {} ({} - {})", project, from, to),
            Message::ReportSprint(name) => format!("Sprint: {}", name),
            Message::SprintMatchedWindow(name) => format!("Window matches sprint '{}'", name),
            Message::NoWorklogsFound => "No worklogs found for this period".to_string(),
            Message::TeamTotalHeader => "Team total".to_string(),
            Message::WorklogsHeader => "Worklogs in chronological order".to_string(),
            Message::InvalidDate(input) => format!("Invalid date '{}'. Use YYYY-MM-DD or 'today'", input),
            Message::InvalidDateRange(from, to) => format!("Start date {} is after end date {}", from, to),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Report saved to {}", path),
            Message::ExportFailed(details) => format!("Failed to export report: {}", details),

            // === SPRINT AND PROJECT MESSAGES ===
            Message::SprintsHeader(project) => format!("Recent sprints of {}", project),
            Message::NoSprintsFound(project) => format!("No dated sprints found for {}", project),
            Message::ProjectsHeader => "Jira projects".to_string(),
            Message::NoProjectsFound => "No projects visible to this account".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptJiraUrl => "Enter the Jira URL".to_string(),
            Message::PromptJiraLogin => "Enter your Jira login".to_string(),
            Message::PromptJiraPassword => "Enter your Jira password".to_string(),
        };

        write!(f, "{}", text)
    }
}
