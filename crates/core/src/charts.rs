//! Text bar charts over the aggregation results.
//!
//! The three standard aggregations (per service, per status, per month) are
//! rendered as plain-text bar charts suitable for a terminal. No image
//! output, no external viewer.

use crate::error::ReportError;
use crate::reports;
use crate::visit::Visit;

/// Widest a bar is allowed to grow, in characters.
const MAX_BAR_WIDTH: usize = 40;

/// Renders the three standard charts (service, status, month) as one text
/// block.
///
/// # Errors
///
/// Returns `ReportError::EmptyInput` when given zero visits. The charting
/// path is strict where the dashboard path returns a sentinel; see
/// [`crate::reports::Dashboard`].
pub fn render_charts(visits: &[Visit]) -> Result<String, ReportError> {
    if visits.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let service_counts: Vec<(String, usize)> = reports::counts_by_service(visits)
        .into_iter()
        .collect();
    let status_counts: Vec<(String, usize)> = reports::counts_by_status(visits)
        .into_iter()
        .collect();
    let month_counts: Vec<(String, usize)> = reports::counts_by_month(visits)
        .into_iter()
        .collect();

    let mut out = String::new();
    out.push_str(&render_bar_chart("Visits per service", &service_counts));
    out.push('\n');
    out.push_str(&render_bar_chart("Patient status distribution", &status_counts));
    out.push('\n');
    out.push_str(&render_bar_chart("Visits per month", &month_counts));
    Ok(out)
}

/// Renders one titled bar chart.
///
/// Labels are left-aligned in a common column; bars are scaled so the largest
/// count occupies [`MAX_BAR_WIDTH`] characters, with every non-zero count
/// drawing at least one character.
pub fn render_bar_chart(title: &str, counts: &[(String, usize)]) -> String {
    let mut out = format!("{title}\n");

    let label_width = counts.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let max_count = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);

    for (label, count) in counts {
        let bar_len = scaled_bar_len(*count, max_count);
        out.push_str(&format!(
            "  {label:<label_width$}  {} {count}\n",
            "#".repeat(bar_len)
        ));
    }
    out
}

fn scaled_bar_len(count: usize, max_count: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    // Integer scaling, but never flatten a non-zero count to nothing.
    ((count * MAX_BAR_WIDTH) / max_count).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit(service: &str, date: &str, status: &str) -> Visit {
        Visit::new("Ana", service, "Dr. Ruiz", date, "Done", status)
            .expect("test visit should be valid")
    }

    #[test]
    fn render_charts_fails_on_empty_input() {
        let err = render_charts(&[]).expect_err("zero visits should not chart");
        assert!(matches!(err, ReportError::EmptyInput));
    }

    #[test]
    fn render_charts_includes_all_three_sections() {
        let visits = vec![
            visit("Dentistry", "2025-01-05", "Good"),
            visit("Radiology", "2025-02-06", "Fair"),
        ];

        let text = render_charts(&visits).expect("charts should render");
        assert!(text.contains("Visits per service"));
        assert!(text.contains("Patient status distribution"));
        assert!(text.contains("Visits per month"));
        assert!(text.contains("Dentistry"));
        assert!(text.contains("2025-01"));
        assert!(text.contains("2025-02"));
    }

    #[test]
    fn bars_scale_to_the_largest_count() {
        let counts = vec![
            ("A".to_owned(), 4usize),
            ("B".to_owned(), 2usize),
            ("C".to_owned(), 1usize),
        ];

        let chart = render_bar_chart("Test", &counts);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "Test");

        let width = |line: &str| line.chars().filter(|c| *c == '#').count();
        assert_eq!(width(lines[1]), MAX_BAR_WIDTH);
        assert_eq!(width(lines[2]), MAX_BAR_WIDTH / 2);
        assert_eq!(width(lines[3]), MAX_BAR_WIDTH / 4);
    }

    #[test]
    fn tiny_counts_still_draw_a_visible_bar() {
        let counts = vec![("big".to_owned(), 100usize), ("small".to_owned(), 1usize)];
        let chart = render_bar_chart("Test", &counts);
        let small_line = chart
            .lines()
            .find(|l| l.contains("small"))
            .expect("small row should be present");
        assert!(small_line.contains('#'));
    }
}
