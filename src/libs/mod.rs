//! Core library modules of jiralog.
//!
//! ## Pipeline
//!
//! - [`query`]: coarse tracker query for a project and date window
//! - [`fetcher`]: paginated issue search with per-issue worklog refetch
//! - [`aggregate`]: exact-window filtering and per-author accumulation
//! - [`sprint`]: recent sprints of a project and sprint windows
//! - [`layout`]: cursor-driven spreadsheet layout of a report
//! - [`export`]: csv, xls, xlsx and pdf serializers
//! - [`report`]: the service tying the steps together
//!
//! ## Infrastructure
//!
//! Configuration, credentials, messaging, formatting and console rendering.
//!
//! ```rust,ignore
//! use jiralog::libs::{report::WorklogReport, window::DateWindow};
//!
//! let report = WorklogReport::new(&client, &tracker_config);
//! let result = report.aggregate("DEMO", &window).await?;
//! println!("{:.2} h", result.total_hours());
//! ```

pub mod aggregate;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod formatter;
pub mod layout;
pub mod messages;
pub mod query;
pub mod report;
pub mod secret;
pub mod sprint;
pub mod view;
pub mod window;
pub mod worklog;
