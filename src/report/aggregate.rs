use super::models::{CategoryTotals, NormalizedEvent, ReportSummary};

/// Fold the normalized events into per-category totals and a grand total.
///
/// Categories keep first-seen order. Durations are summed at full precision;
/// rounding to one decimal happens only in the renderer, so category totals
/// always add up exactly to the grand total.
pub fn summarize(events: &[NormalizedEvent]) -> ReportSummary {
    let mut summary = ReportSummary::default();

    for event in events {
        let index = match summary
            .categories
            .iter()
            .position(|totals| totals.category == event.category)
        {
            Some(index) => index,
            None => {
                summary.categories.push(CategoryTotals {
                    category: event.category.clone(),
                    event_count: 0,
                    total_hours: 0.0,
                });
                summary.categories.len() - 1
            }
        };
        let totals = &mut summary.categories[index];
        totals.event_count += 1;
        totals.total_hours += event.duration_hours;
        summary.total_hours += event.duration_hours;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(category: &str, duration_hours: f64) -> NormalizedEvent {
        NormalizedEvent {
            name: "Event".to_string(),
            day: "Mon 01 Jan".to_string(),
            start_label: "09:00 am".to_string(),
            end_label: "10:00 am".to_string(),
            duration_hours,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_summary() {
        let summary = summarize(&[]);
        assert!(summary.categories.is_empty());
        assert_eq!(summary.total_hours, 0.0);
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let events = vec![
            event("Meetings", 1.0),
            event("Focus", 2.0),
            event("Meetings", 0.5),
            event("", 1.0),
        ];
        let summary = summarize(&events);
        let order: Vec<&str> = summary
            .categories
            .iter()
            .map(|t| t.category.as_str())
            .collect();
        assert_eq!(order, vec!["Meetings", "Focus", ""]);
    }

    #[test]
    fn test_counts_and_totals() {
        let events = vec![
            event("Meetings", 1.0),
            event("Meetings", 0.25),
            event("Focus", 2.5),
        ];
        let summary = summarize(&events);
        assert_eq!(summary.categories[0].event_count, 2);
        assert_eq!(summary.categories[0].total_hours, 1.25);
        assert_eq!(summary.categories[1].event_count, 1);
        assert_eq!(summary.categories[1].total_hours, 2.5);
        assert_eq!(summary.total_hours, 3.75);
    }

    #[test]
    fn test_category_totals_sum_to_grand_total() {
        let events = vec![
            event("A", 0.1),
            event("B", 0.2),
            event("A", 0.3),
            event("C", 0.4),
        ];
        let summary = summarize(&events);
        let category_sum: f64 = summary.categories.iter().map(|t| t.total_hours).sum();
        assert!((category_sum - summary.total_hours).abs() < 1e-9);
        let count_sum: usize = summary.categories.iter().map(|t| t.event_count).sum();
        assert_eq!(count_sum, events.len());
    }

    #[test]
    fn test_empty_category_grouped_under_empty_key() {
        let events = vec![event("", 1.0), event("", 2.0)];
        let summary = summarize(&events);
        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.categories[0].category, "");
        assert_eq!(summary.categories[0].event_count, 2);
    }
}
