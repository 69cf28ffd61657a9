use super::ignore::IgnoreList;
use super::models::{NormalizedEvent, RawCalendarItem};
use super::window::DateWindow;
use chrono::{DateTime, NaiveDateTime};
use tracing::{debug, warn};

/// Timestamp formats accepted from the calendar payload. RFC 3339 values are
/// reduced to their local wall-clock time; the report works in naive local
/// datetimes throughout.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a calendar timestamp, trying RFC 3339 first
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// The validated core of a raw item
struct ParsedItem<'a> {
    subject: &'a str,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Validate the required fields of one raw item. A missing field or an
/// unparseable timestamp makes the item malformed.
fn parse_item(item: &RawCalendarItem) -> Result<ParsedItem<'_>, String> {
    let subject = item.subject.as_deref().ok_or("missing Subject")?;
    let start_raw = item.start.as_deref().ok_or("missing Start")?;
    let end_raw = item.end.as_deref().ok_or("missing End")?;
    let start =
        parse_timestamp(start_raw).ok_or_else(|| format!("unparseable Start '{}'", start_raw))?;
    let end = parse_timestamp(end_raw).ok_or_else(|| format!("unparseable End '{}'", end_raw))?;
    Ok(ParsedItem { subject, start, end })
}

/// Filter the raw items against the window and the ignore list, producing
/// normalized events in input order.
///
/// Malformed items are skipped with a warning rather than failing the whole
/// report. Every include/exclude decision is logged at debug level.
pub fn normalize_events(
    items: &[RawCalendarItem],
    window: &DateWindow,
    ignore: &IgnoreList,
) -> Vec<NormalizedEvent> {
    let mut events = Vec::new();

    for item in items {
        let parsed = match parse_item(item) {
            Ok(parsed) => parsed,
            Err(reason) => {
                warn!("Skipping malformed calendar item: {}", reason);
                continue;
            }
        };

        if !window.contains(parsed.start) {
            debug!("Excluded (outside window): {} {}", parsed.start, parsed.subject);
            continue;
        }
        if item.is_all_day_event {
            debug!("Excluded (all-day): {} {}", parsed.start, parsed.subject);
            continue;
        }
        if ignore.should_ignore(parsed.subject) {
            debug!("Excluded (ignore list): {} {}", parsed.start, parsed.subject);
            continue;
        }

        let duration_hours =
            parsed.end.signed_duration_since(parsed.start).num_seconds() as f64 / 3600.0;
        if duration_hours <= 0.0 {
            warn!(
                "Suspicious non-positive duration for '{}': {:.2}h",
                parsed.subject, duration_hours
            );
        }

        debug!("Included: {} {}", parsed.start, parsed.subject);
        events.push(NormalizedEvent {
            name: parsed.subject.to_string(),
            day: parsed.start.format("%a %d %b").to_string(),
            start_label: parsed.start.format("%I:%M %P").to_string(),
            end_label: parsed.end.format("%I:%M %P").to_string(),
            duration_hours,
            category: item.categories.first().cloned().unwrap_or_default(),
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::window::{week_window, WeekSelection};
    use chrono::{NaiveDate, Weekday};

    fn window_for_jan_2024() -> DateWindow {
        // Week of Monday 2024-01-01
        week_window(
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            WeekSelection::ThisWeek,
            Weekday::Mon,
        )
    }

    fn item(subject: &str, start: &str, end: &str) -> RawCalendarItem {
        RawCalendarItem {
            subject: Some(subject.to_string()),
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            is_all_day_event: false,
            categories: vec![],
        }
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2024-01-01T09:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01T09:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01T09:00:00+00:00"), Some(expected));
        assert_eq!(parse_timestamp("not a date"), None);
    }

    #[test]
    fn test_included_events_lie_within_window() {
        let window = window_for_jan_2024();
        let items = vec![
            item("In window", "2024-01-02T10:00", "2024-01-02T11:00"),
            item("Before window", "2023-12-29T10:00", "2023-12-29T11:00"),
            item("After window", "2024-01-09T10:00", "2024-01-09T11:00"),
        ];
        let events = normalize_events(&items, &window, &IgnoreList::default());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "In window");
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        let window = window_for_jan_2024();
        let items = vec![
            item("At start", "2024-01-01T00:00", "2024-01-01T01:00"),
            item("At end", "2024-01-08T00:00", "2024-01-08T01:00"),
        ];
        let events = normalize_events(&items, &window, &IgnoreList::default());
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_all_day_events_excluded() {
        let window = window_for_jan_2024();
        let mut all_day = item("Holiday", "2024-01-02T00:00", "2024-01-03T00:00");
        all_day.is_all_day_event = true;
        let events = normalize_events(&[all_day], &window, &IgnoreList::default());
        assert!(events.is_empty());
    }

    #[test]
    fn test_ignore_list_excludes() {
        let window = window_for_jan_2024();
        let ignore = IgnoreList::from_fragments(vec!["Standup".to_string()]);
        let items = vec![
            item("Daily Standup", "2024-01-02T09:00", "2024-01-02T09:15"),
            item("Planning", "2024-01-02T10:00", "2024-01-02T11:00"),
        ];
        let events = normalize_events(&items, &window, &ignore);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Planning");
    }

    #[test]
    fn test_malformed_items_skipped() {
        let window = window_for_jan_2024();
        let items = vec![
            RawCalendarItem {
                subject: None,
                start: Some("2024-01-02T10:00".to_string()),
                end: Some("2024-01-02T11:00".to_string()),
                ..Default::default()
            },
            item("Bad start", "garbage", "2024-01-02T11:00"),
            item("Good", "2024-01-02T10:00", "2024-01-02T11:00"),
        ];
        let events = normalize_events(&items, &window, &IgnoreList::default());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Good");
    }

    #[test]
    fn test_negative_duration_passes_through() {
        let window = window_for_jan_2024();
        let items = vec![item("Backwards", "2024-01-02T11:00", "2024-01-02T10:00")];
        let events = normalize_events(&items, &window, &IgnoreList::default());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].duration_hours, -1.0);
    }

    #[test]
    fn test_normalized_event_formatting() {
        let window = window_for_jan_2024();
        let mut raw = item("Standup", "2024-01-01T09:00", "2024-01-01T09:15");
        raw.categories = vec!["Meetings".to_string(), "Extra".to_string()];
        let events = normalize_events(&[raw], &window, &IgnoreList::default());
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.day, "Mon 01 Jan");
        assert_eq!(event.start_label, "09:00 am");
        assert_eq!(event.end_label, "09:15 am");
        assert_eq!(event.duration_hours, 0.25);
        // Only the first category is used
        assert_eq!(event.category, "Meetings");
    }

    #[test]
    fn test_no_categories_yields_empty_label() {
        let window = window_for_jan_2024();
        let items = vec![item("Standup", "2024-01-01T09:00", "2024-01-01T09:15")];
        let events = normalize_events(&items, &window, &IgnoreList::default());
        assert_eq!(events[0].category, "");
    }
}
