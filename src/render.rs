use crate::report::models::{NormalizedEvent, ReportSummary, WeekReport};
use comfy_table::{ColumnConstraint, Table, Width};

/// Round to one decimal, half away from zero (0.25 renders as "0.3")
fn round_to_tenth(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

/// Format a duration for display, e.g. "0.3h"
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}h", round_to_tenth(hours))
}

/// Build the per-event table
pub fn events_table(events: &[NormalizedEvent]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Day", "Start", "End", "Duration", "Category", "Name"]);
    table.set_constraints(vec![
        ColumnConstraint::Absolute(Width::Fixed(15)),
        ColumnConstraint::Absolute(Width::Fixed(10)),
        ColumnConstraint::Absolute(Width::Fixed(10)),
        ColumnConstraint::Absolute(Width::Fixed(10)),
        ColumnConstraint::Absolute(Width::Fixed(35)),
        ColumnConstraint::Absolute(Width::Fixed(35)),
    ]);

    for event in events {
        table.add_row(vec![
            event.day.clone(),
            event.start_label.clone(),
            event.end_label.clone(),
            format_hours(event.duration_hours),
            event.category.clone(),
            event.name.clone(),
        ]);
    }

    table
}

/// Build the per-category summary table
pub fn summary_table(summary: &ReportSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Total Events", "Total Duration"]);
    table.set_constraints(vec![
        ColumnConstraint::Absolute(Width::Fixed(35)),
        ColumnConstraint::Absolute(Width::Fixed(15)),
        ColumnConstraint::Absolute(Width::Fixed(20)),
    ]);

    for totals in &summary.categories {
        table.add_row(vec![
            totals.category.clone(),
            totals.event_count.to_string(),
            format_hours(totals.total_hours),
        ]);
    }

    table
}

/// Print both tables and the grand-total line to stdout
pub fn print_report(report: &WeekReport) {
    println!("{}", events_table(&report.events));
    println!("{}", summary_table(&report.summary));
    println!("Total hours: {:.1}", round_to_tenth(report.summary.total_hours));
}
