//! Command-line interface of jiralog.
//!
//! ```text
//! jiralog init                       configure the Jira connection
//! jiralog projects                   list projects visible to the account
//! jiralog sprints DEMO               five most recent sprints of DEMO
//! jiralog report DEMO --from 2024-03-01 --to 2024-03-31 --format xlsx
//! ```

pub mod init;
pub mod projects;
pub mod report;
pub mod sprints;

use crate::libs::error::WorklogError;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List Jira projects")]
    Projects,
    #[command(about = "Show the most recent sprints of a project", arg_required_else_help = true)]
    Sprints(sprints::SprintsArgs),
    #[command(about = "Report worklogs of a project", arg_required_else_help = true)]
    Report(report::ReportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Projects => projects::cmd().await,
            Commands::Sprints(args) => sprints::cmd(args).await,
            Commands::Report(args) => report::cmd(args).await,
        }
    }
}

/// Turns tracker failures into the wording shown to users.
pub(crate) fn tracker_error(error: WorklogError) -> anyhow::Error {
    match error {
        WorklogError::FetchFailed(details) => msg_error_anyhow!(Message::TrackerRequestFailed(details)),
        WorklogError::NotFound(what) => msg_error_anyhow!(Message::TrackerNotFound(what)),
        WorklogError::ExportFailed(details) => msg_error_anyhow!(Message::ExportFailed(details)),
        other => anyhow::Error::new(other),
    }
}
