//! Exact date window a report covers.
//!
//! Users pick whole days; the window stores instants. `from` is the start of
//! the first day and `to` is 23:59:59 of the last day. When the days are given
//! in a named zone each bound takes the offset in force on its own date, so a
//! January window built in July still starts at local midnight. All comparisons against worklog timestamps are done on
//! absolute instants, so worklogs recorded in another timezone still land on
//! the right side of the boundary.

use crate::libs::error::WorklogError;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    from: DateTime<FixedOffset>,
    to: DateTime<FixedOffset>,
}

impl DateWindow {
    pub fn new(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> Result<Self, WorklogError> {
        if from > to {
            return Err(WorklogError::InvalidWindow(format!("{} is after {}", from, to)));
        }
        Ok(Self { from, to })
    }

    /// Builds the window for the inclusive day range `from..=to` in `offset`.
    pub fn from_days(from: NaiveDate, to: NaiveDate, offset: FixedOffset) -> Result<Self, WorklogError> {
        Self::in_zone(from, to, &offset)
    }

    /// Builds the window for `from..=to` in `zone`, resolving each bound with
    /// the offset `zone` uses on that day.
    pub fn in_zone<Tz: TimeZone>(from: NaiveDate, to: NaiveDate, zone: &Tz) -> Result<Self, WorklogError> {
        let start = resolve(zone, from.and_time(NaiveTime::MIN))?;
        let end = to.and_hms_opt(23, 59, 59).ok_or_else(|| WorklogError::InvalidWindow(to.to_string()))?;
        let end = resolve(zone, end)?;

        Self::new(start, end)
    }

    /// Same as [`DateWindow::in_zone`] in the machine's timezone.
    pub fn local_days(from: NaiveDate, to: NaiveDate) -> Result<Self, WorklogError> {
        Self::in_zone(from, to, &Local)
    }

    pub fn from(&self) -> DateTime<FixedOffset> {
        self.from
    }

    pub fn to(&self) -> DateTime<FixedOffset> {
        self.to
    }

    pub fn first_day(&self) -> NaiveDate {
        self.from.date_naive()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.to.date_naive()
    }

    /// Strict containment: an instant equal to either bound is outside.
    pub fn contains_strictly(&self, instant: &DateTime<FixedOffset>) -> bool {
        self.from < *instant && *instant < self.to
    }
}

/// Wall-clock time in `zone`. A time repeated by a DST fold takes its first
/// occurrence; a time skipped by a DST gap is rejected.
fn resolve<Tz: TimeZone>(zone: &Tz, local: NaiveDateTime) -> Result<DateTime<FixedOffset>, WorklogError> {
    zone.from_local_datetime(&local)
        .earliest()
        .map(|instant| instant.fixed_offset())
        .ok_or_else(|| WorklogError::InvalidWindow(format!("{} does not exist in the local timezone", local)))
}
