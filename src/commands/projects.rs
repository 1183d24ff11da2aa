use super::tracker_error;
use crate::{
    api::{jira::JiraClient, Tracker},
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let tracker_config = Config::read()?.tracker_config()?;
    let client = JiraClient::new();

    msg_info!(Message::FetchingProjects);
    let mut projects = client.projects(&tracker_config).await.map_err(tracker_error)?;

    if projects.is_empty() {
        msg_warning!(Message::NoProjectsFound);
        return Ok(());
    }

    projects.sort_by(|a, b| a.key.cmp(&b.key));
    msg_print!(Message::ProjectsHeader, true);
    View::projects(&projects).printstd();

    Ok(())
}
