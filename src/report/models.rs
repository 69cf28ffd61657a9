use serde::Deserialize;

/// A single item from the raw calendar payload.
///
/// Required fields are optional here so that one malformed item can be
/// skipped with a warning instead of failing the whole payload.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawCalendarItem {
    pub subject: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub is_all_day_event: bool,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// A filtered calendar event, formatted for both table rendering and
/// aggregation. Duration is kept at full precision; rounding to one decimal
/// happens only at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub name: String,
    /// Weekday and date label, e.g. "Mon 01 Jan"
    pub day: String,
    /// 12-hour start time, e.g. "09:00 am"
    pub start_label: String,
    /// 12-hour end time
    pub end_label: String,
    /// Duration in hours; may be zero or negative if the source data is bad
    pub duration_hours: f64,
    /// First category of the source item, empty string if none
    pub category: String,
}

/// Per-category totals, one row of the summary table
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals {
    pub category: String,
    pub event_count: usize,
    pub total_hours: f64,
}

/// Category totals in first-seen order plus the grand total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSummary {
    pub categories: Vec<CategoryTotals>,
    pub total_hours: f64,
}

/// The complete report for one week
#[derive(Debug, Clone)]
pub struct WeekReport {
    pub events: Vec<NormalizedEvent>,
    pub summary: ReportSummary,
}
