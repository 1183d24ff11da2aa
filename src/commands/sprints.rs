use super::tracker_error;
use crate::{
    api::jira::JiraClient,
    libs::{config::Config, messages::Message, report::WorklogReport, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SprintsArgs {
    /// Jira project key, e.g. DEMO
    project: String,
}

pub async fn cmd(args: SprintsArgs) -> Result<()> {
    let tracker_config = Config::read()?.tracker_config()?;
    let client = JiraClient::new();
    let report = WorklogReport::new(&client, &tracker_config);

    msg_info!(Message::FetchingSprints(args.project.clone()));
    let sprints = report.recent_sprints(&args.project).await.map_err(tracker_error)?;

    if sprints.is_empty() {
        msg_warning!(Message::NoSprintsFound(args.project));
        return Ok(());
    }

    msg_print!(Message::SprintsHeader(args.project), true);
    View::sprints(&sprints).printstd();

    Ok(())
}
