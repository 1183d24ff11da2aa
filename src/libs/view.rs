use super::aggregate::AggregationResult;
use super::formatter::{format_day, format_hours, format_seconds, format_started};
use super::sprint::Sprint;
use crate::api::JiraProject;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Hours per author followed by the team total.
    pub fn totals(result: &AggregationResult) -> Table {
        let mut table = Table::new();

        table.add_row(row!["AUTHOR", "WORKLOGS", "TIME", "HOURS"]);
        for log in result.entries_by_author() {
            table.add_row(row![
                log.author.display_name,
                log.entries.len(),
                format_seconds(log.total_seconds),
                format_hours(log.total_hours())
            ]);
        }
        table.add_row(row![
            b->"TOTAL",
            b->result.ordered_entries().len(),
            b->format_seconds(result.total_seconds()),
            b->format_hours(result.total_hours())
        ]);

        table
    }

    /// Every worklog in chronological order.
    pub fn log(result: &AggregationResult) -> Table {
        let mut table = Table::new();

        table.add_row(row!["STARTED", "AUTHOR", "ISSUE", "SUMMARY", "HOURS"]);
        for entry in result.ordered_entries() {
            table.add_row(row![
                format_started(&entry.started_at),
                entry.author.display_name,
                entry.issue_key,
                entry.issue_summary,
                r->format_hours(entry.hours())
            ]);
        }

        table
    }

    pub fn sprints(sprints: &[Sprint]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "STATE", "START", "END"]);
        for sprint in sprints {
            table.add_row(row![
                sprint.id,
                sprint.name,
                sprint.state,
                format_day(&sprint.start_date),
                format_day(&sprint.end_date)
            ]);
        }

        table
    }

    pub fn projects(projects: &[JiraProject]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["KEY", "NAME"]);
        for project in projects {
            table.add_row(row![project.key, project.name]);
        }

        table
    }
}
