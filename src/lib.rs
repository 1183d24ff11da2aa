//! # jiralog - Jira worklog reports
//!
//! A command-line utility that collects the time a team logged against a
//! Jira project over a date window and renders it as a console table or as
//! a csv, xls, xlsx or pdf document.
//!
//! ## Features
//!
//! - **Exact windows**: worklogs are filtered by their start time, not by the
//!   dates of the issues they belong to
//! - **Complete data**: issues whose embedded worklogs were truncated are
//!   refetched
//! - **Sprint context**: reports can be taken for a sprint, or show the sprint
//!   matching the requested window
//! - **Spreadsheet export**: one block per author with linked worklogs and totals
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jiralog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
