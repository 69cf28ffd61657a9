use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Which week the report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekSelection {
    /// The week containing today
    ThisWeek,
    /// The week starting N weeks before the current one; 0 is the current week
    WeeksAgo(u32),
}

/// The date range selected for reporting, one calendar week.
///
/// Both bounds are inclusive in `contains`, matching the observed filter
/// behavior: an event starting exactly on the boundary shared by two adjacent
/// windows lands in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateWindow {
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

/// Start of the week containing `today`, for the given first day of week
fn start_of_week(today: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    let days_into_week = (today.weekday().num_days_from_monday() + 7
        - week_starts_on.num_days_from_monday())
        % 7;
    today - Duration::days(days_into_week as i64)
}

/// Compute the reporting window for the given selection, aligned to the
/// configured first day of the week. The window always spans exactly seven
/// days from midnight on its first day.
pub fn week_window(today: NaiveDate, selection: WeekSelection, week_starts_on: Weekday) -> DateWindow {
    let current_week_start = start_of_week(today, week_starts_on);
    let start = match selection {
        WeekSelection::ThisWeek => current_week_start,
        WeekSelection::WeeksAgo(weeks) => current_week_start - Duration::weeks(weeks as i64),
    };
    let start = start.and_time(NaiveTime::MIN);
    DateWindow {
        start,
        end: start + Duration::weeks(1),
    }
}
