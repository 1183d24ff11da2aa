use super::tracker_error;
use crate::{
    api::jira::JiraClient,
    libs::{
        config::Config,
        export::ExportFormat,
        formatter::format_day,
        messages::Message,
        report::WorklogReport,
        view::View,
        window::DateWindow,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Jira project key, e.g. DEMO
    project: String,

    /// First day of the window (YYYY-MM-DD or "today"); defaults to the first day of this month
    #[arg(short, long)]
    from: Option<String>,

    /// Last day of the window (YYYY-MM-DD or "today"); defaults to today
    #[arg(short, long)]
    to: Option<String>,

    /// Report the window of this sprint instead of --from/--to
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    sprint: Option<u64>,

    /// Write a csv, xls, xlsx or pdf document instead of printing tables
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Output path; defaults to DD-MM-YYYY-DD-MM-YYYY.<ext> in the current directory
    #[arg(short, long, requires = "format")]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let tracker_config = Config::read()?.tracker_config()?;
    let client = JiraClient::new();
    let report = WorklogReport::new(&client, &tracker_config);

    let (window, sprint) = match args.sprint {
        Some(sprint_id) => {
            let (sprint, window) = report.sprint_window(sprint_id).await.map_err(tracker_error)?;
            (window, Some(sprint))
        }
        None => (parse_window(args.from.as_deref(), args.to.as_deref())?, None),
    };

    msg_info!(Message::FetchingWorklogs(
        args.project.clone(),
        format_day(&window.from()),
        format_day(&window.to())
    ));
    let result = report.aggregate(&args.project, &window).await.map_err(tracker_error)?;

    let sprint = match sprint {
        Some(sprint) => Some(sprint),
        None => {
            let sprint = report.matching_sprint(&args.project, &window).await;
            if let Some(sprint) = &sprint {
                msg_info!(Message::SprintMatchedWindow(sprint.name.clone()));
            }
            sprint
        }
    };

    let Some(format) = args.format else {
        msg_print!(Message::ReportHeader(args.project.clone(), format_day(&window.from()), format_day(&window.to())), true);
        if let Some(sprint) = &sprint {
            msg_print!(Message::ReportSprint(sprint.name.clone()));
        }
        if result.is_empty() {
            msg_warning!(Message::NoWorklogsFound);
            return Ok(());
        }

        msg_print!(Message::TeamTotalHeader);
        View::totals(&result).printstd();
        msg_print!(Message::WorklogsHeader, true);
        View::log(&result).printstd();
        return Ok(());
    };

    let document = report
        .document(&result, &args.project, &window, format, sprint.as_ref())
        .map_err(tracker_error)?;
    let path = args.output.unwrap_or_else(|| PathBuf::from(&document.filename));
    document.save(&path).map_err(tracker_error)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}

fn parse_window(from: Option<&str>, to: Option<&str>) -> Result<DateWindow> {
    let today = Local::now().date_naive();
    let from = match from {
        Some(value) => parse_date(value)?,
        None => today.with_day(1).unwrap_or(today),
    };
    let to = match to {
        Some(value) => parse_date(value)?,
        None => today,
    };

    if from > to {
        msg_bail_anyhow!(Message::InvalidDateRange(from.to_string(), to.to_string()));
    }
    Ok(DateWindow::local_days(from, to)?)
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
    }
}
