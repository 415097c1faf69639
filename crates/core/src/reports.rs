//! Aggregation over visit records.
//!
//! Pure functions: nothing here touches the store, the clock or the
//! filesystem. Grouped counts keep first-appearance order (an operator scans
//! the dashboard in the order categories showed up, not alphabetically);
//! month buckets are the one exception and come out chronologically sorted.

use crate::visit::{Visit, DATE_FORMAT};
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Counts visits per service, iteration order = first appearance.
pub fn counts_by_service(visits: &[Visit]) -> IndexMap<String, usize> {
    count_first_seen(visits.iter().map(|v| v.service().to_owned()))
}

/// Counts visits per responsible staff member, iteration order = first
/// appearance.
pub fn counts_by_responsible(visits: &[Visit]) -> IndexMap<String, usize> {
    count_first_seen(visits.iter().map(|v| v.responsible().to_owned()))
}

/// Counts visits per patient status, iteration order = first appearance.
pub fn counts_by_status(visits: &[Visit]) -> IndexMap<String, usize> {
    counts_by_status_labels(visits.iter().map(|v| Some(v.status().as_str())))
}

/// Counts raw status labels, bucketing missing or empty labels under
/// `"Unknown"`.
///
/// Typed [`Visit`] values always carry a status, so the `"Unknown"` bucket
/// cannot occur on that path; this variant exists for callers aggregating
/// imported row data that has not passed construction-time validation.
pub fn counts_by_status_labels<'a, I>(labels: I) -> IndexMap<String, usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    count_first_seen(labels.into_iter().map(|label| match label {
        Some(s) if !s.trim().is_empty() => s.trim().to_owned(),
        _ => "Unknown".to_owned(),
    }))
}

/// Counts visits per `YYYY-MM` month, keys in chronological order.
pub fn counts_by_month(visits: &[Visit]) -> BTreeMap<String, usize> {
    bucket_months(
        visits
            .iter()
            .map(|v| v.date().format(DATE_FORMAT).to_string()),
    )
}

/// Buckets raw `YYYY-MM-DD` date text by its `YYYY-MM` prefix.
///
/// Unparseable dates are skipped, not counted and not an error: dates are
/// validated at entry, but imported historical rows may carry junk and a
/// report over the rest is more useful than a refusal. The `BTreeMap` keeps
/// the keys lexicographically sorted, which for `YYYY-MM` is chronological
/// order.
pub fn bucket_months<I>(dates: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = BTreeMap::new();
    for date in dates {
        let Ok(parsed) = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT) else {
            tracing::warn!(date = date.trim(), "skipping unparseable date in month report");
            continue;
        };
        let key = parsed.format("%Y-%m").to_string();
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

fn count_first_seen<I>(categories: I) -> IndexMap<String, usize>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = IndexMap::new();
    for category in categories {
        *counts.entry(category).or_insert(0) += 1;
    }
    counts
}

/// The textual dashboard result.
///
/// Zero visits is a sentinel here, not an error. The chart path fails with
/// `ReportError::EmptyInput` instead; the two call sites report "nothing
/// yet" in different shapes, and each renders its own message.
#[derive(Debug, PartialEq, Eq)]
pub enum Dashboard {
    /// No visits registered yet
    NoVisits,
    Summary(DashboardSummary),
}

/// Aggregate counts for the dashboard view. Derived, never persisted.
#[derive(Debug, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total: usize,
    /// Visits dated `today` as passed to [`dashboard`]
    pub visits_today: usize,
    pub by_service: IndexMap<String, usize>,
    pub by_status: IndexMap<String, usize>,
    pub by_responsible: IndexMap<String, usize>,
}

/// Computes the dashboard summary over the given visits.
///
/// `today` is injected rather than read from the system clock so the
/// time-dependent `visits_today` count stays testable; it must be computed
/// fresh at every call, never cached.
pub fn dashboard(visits: &[Visit], today: NaiveDate) -> Dashboard {
    if visits.is_empty() {
        return Dashboard::NoVisits;
    }

    let visits_today = visits.iter().filter(|v| v.date() == today).count();

    Dashboard::Summary(DashboardSummary {
        total: visits.len(),
        visits_today,
        by_service: counts_by_service(visits),
        by_status: counts_by_status(visits),
        by_responsible: counts_by_responsible(visits),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit(name: &str, service: &str, responsible: &str, date: &str, status: &str) -> Visit {
        Visit::new(name, service, responsible, date, "Done", status)
            .expect("test visit should be valid")
    }

    fn entries(counts: &IndexMap<String, usize>) -> Vec<(&str, usize)> {
        counts.iter().map(|(k, v)| (k.as_str(), *v)).collect()
    }

    #[test]
    fn counts_by_service_uses_first_seen_order() {
        let visits: Vec<Visit> = ["A", "B", "A", "C", "B", "A"]
            .iter()
            .map(|s| visit("Ana", s, "Dr. Ruiz", "2025-01-05", "Good"))
            .collect();

        let counts = counts_by_service(&visits);
        assert_eq!(entries(&counts), vec![("A", 3), ("B", 2), ("C", 1)]);
    }

    #[test]
    fn counts_by_responsible_groups_staff() {
        let visits = vec![
            visit("Ana", "Dentistry", "Dr. Ruiz", "2025-01-05", "Good"),
            visit("Luis", "Radiology", "Dr. Vega", "2025-01-06", "Fair"),
            visit("Eva", "Dentistry", "Dr. Ruiz", "2025-01-07", "Poor"),
        ];

        let counts = counts_by_responsible(&visits);
        assert_eq!(entries(&counts), vec![("Dr. Ruiz", 2), ("Dr. Vega", 1)]);
    }

    #[test]
    fn counts_by_status_labels_buckets_missing_labels_as_unknown() {
        let counts =
            counts_by_status_labels(vec![Some("Good"), None, Some("  "), Some("Good")]);
        assert_eq!(entries(&counts), vec![("Good", 2), ("Unknown", 2)]);
    }

    #[test]
    fn bucket_months_sorts_keys_chronologically() {
        let counts = bucket_months(
            ["2025-03-01", "2025-01-15", "2025-03-20"]
                .iter()
                .map(|s| s.to_string()),
        );

        let keys: Vec<&str> = counts.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["2025-01", "2025-03"]);
        assert_eq!(counts["2025-01"], 1);
        assert_eq!(counts["2025-03"], 2);
    }

    #[test]
    fn bucket_months_silently_skips_unparseable_dates() {
        let counts = bucket_months(
            ["2025-03-01", "not-a-date", "2025-03-20"]
                .iter()
                .map(|s| s.to_string()),
        );

        assert_eq!(counts.len(), 1);
        assert_eq!(counts["2025-03"], 2);
    }

    #[test]
    fn dashboard_returns_the_sentinel_for_zero_visits() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date");
        assert_eq!(dashboard(&[], today), Dashboard::NoVisits);
    }

    #[test]
    fn dashboard_counts_only_visits_dated_today() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date");
        let visits = vec![
            visit("Ana", "Dentistry", "Dr. Ruiz", "2025-03-10", "Good"),
            visit("Luis", "Radiology", "Dr. Vega", "2025-03-09", "Fair"),
            visit("Eva", "Dentistry", "Dr. Ruiz", "2025-03-10", "Excellent"),
        ];

        let Dashboard::Summary(summary) = dashboard(&visits, today) else {
            panic!("expected a summary for non-empty input");
        };

        assert_eq!(summary.total, 3);
        assert_eq!(summary.visits_today, 2);
        assert_eq!(
            entries(&summary.by_service),
            vec![("Dentistry", 2), ("Radiology", 1)]
        );
        assert_eq!(
            entries(&summary.by_status),
            vec![("Good", 1), ("Fair", 1), ("Excellent", 1)]
        );
        assert_eq!(
            entries(&summary.by_responsible),
            vec![("Dr. Ruiz", 2), ("Dr. Vega", 1)]
        );
    }

    #[test]
    fn dashboard_today_count_tracks_the_injected_date() {
        let visits = vec![
            visit("Ana", "Dentistry", "Dr. Ruiz", "2025-03-10", "Good"),
            visit("Luis", "Radiology", "Dr. Vega", "2025-03-09", "Fair"),
        ];

        let on_the_ninth = NaiveDate::from_ymd_opt(2025, 3, 9).expect("valid date");
        let Dashboard::Summary(summary) = dashboard(&visits, on_the_ninth) else {
            panic!("expected a summary");
        };
        assert_eq!(summary.visits_today, 1);

        let much_later = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");
        let Dashboard::Summary(summary) = dashboard(&visits, much_later) else {
            panic!("expected a summary");
        };
        assert_eq!(summary.visits_today, 0);
    }
}
