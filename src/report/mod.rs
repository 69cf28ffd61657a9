//! The core reporting pipeline: window selection, ignore list, event
//! filtering and category aggregation.

pub mod aggregate;
pub mod filter;
pub mod ignore;
pub mod models;
pub mod window;

use crate::report::models::{RawCalendarItem, WeekReport};

/// Run the full pipeline over an in-memory payload: filter and normalize the
/// raw items, then aggregate per category. Pure, single pass, no shared state.
pub fn build_report(
    items: &[RawCalendarItem],
    window: &window::DateWindow,
    ignore: &ignore::IgnoreList,
) -> WeekReport {
    let events = filter::normalize_events(items, window, ignore);
    let summary = aggregate::summarize(&events);
    WeekReport { events, summary }
}
