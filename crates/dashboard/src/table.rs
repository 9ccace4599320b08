//! Root cause table rendering
//!
//! Builds the `#rootCauseTable` body: one row per record in dataset
//! order. Rendering fully replaces previous content, so repeated calls
//! yield identical markup.

use std::fmt::Write;

use crate::data::RootCauseRecord;

/// Direction of a record's week-over-week trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Classify a signed percent delta.
    pub fn from_delta(delta: i32) -> Self {
        if delta > 0 {
            Trend::Up
        } else if delta < 0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    /// CSS class on the trend indicator.
    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "neutral",
        }
    }

    /// SVG path for the trend glyph.
    fn glyph_path(&self) -> &'static str {
        match self {
            Trend::Up => "M13 17h8m0 0V9m0 8l-8-8-4 4-6-6",
            Trend::Down => "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6",
            Trend::Flat => "M5 12h14",
        }
    }

    /// Display text: positive deltas gain a `+`, negative keep their
    /// sign, zero renders as `0%`.
    pub fn label(&self, delta: i32) -> String {
        match self {
            Trend::Up => format!("+{delta}%"),
            Trend::Down => format!("{delta}%"),
            Trend::Flat => "0%".to_string(),
        }
    }
}

/// Currency cost, always two decimal places.
pub fn format_cost(cost: f64) -> String {
    format!("${cost:.2}")
}

fn render_trend_indicator(delta: i32) -> String {
    let trend = Trend::from_delta(delta);
    format!(
        concat!(
            r#"<div class="trend-indicator {class}">"#,
            r#"<svg width="16" height="16" fill="none" stroke="currentColor" viewBox="0 0 24 24">"#,
            r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="{path}"/>"#,
            r#"</svg><span>{label}</span></div>"#,
        ),
        class = trend.css_class(),
        path = trend.glyph_path(),
        label = trend.label(delta),
    )
}

/// Render one `<tr>` for a record. The row carries its sequence index
/// in `data-index`; the embedded Analyze button stops propagation so
/// clicking it never reaches the row's selection handler.
pub fn render_row(index: usize, record: &RootCauseRecord) -> String {
    format!(
        concat!(
            r#"<tr data-index="{index}">"#,
            "<td>{cause}</td>",
            "<td><strong>{count}</strong></td>",
            "<td>{percent}%</td>",
            "<td>{trend}</td>",
            "<td><strong>{cost}</strong></td>",
            r#"<td><button class="btn-analyze" onclick="event.stopPropagation()">Analyze</button></td>"#,
            "</tr>",
        ),
        index = index,
        cause = record.cause,
        count = record.count,
        percent = record.percent,
        trend = render_trend_indicator(record.trend),
        cost = format_cost(record.cost),
    )
}

/// Render the full table body, one row per record in sequence order.
pub fn render_table(records: &[RootCauseRecord]) -> String {
    let mut body = String::new();
    for (index, record) in records.iter().enumerate() {
        let _ = write!(body, "{}", render_row(index, record));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::root_causes;
    use regex::Regex;

    #[test]
    fn renders_one_row_per_record_in_order() {
        let html = render_table(root_causes());
        assert_eq!(html.matches("<tr ").count(), 5);

        // Rows appear in dataset order.
        let first = html.find("Incomplete Customer Data").unwrap();
        let last = html.find("Address Validation Failed").unwrap();
        assert!(first < last);
        for i in 0..5 {
            assert!(html.contains(&format!(r#"data-index="{i}""#)));
        }
    }

    #[test]
    fn cost_always_has_two_decimals() {
        let html = render_table(root_causes());
        let cost_re = Regex::new(r"\$\d+\.\d{2}<").unwrap();
        assert_eq!(cost_re.find_iter(&html).count(), 5);
        assert!(html.contains("$8.20"));
        assert!(html.contains("$22.10"));
        assert!(html.contains("$6.50"));
    }

    #[test]
    fn trend_label_and_class_follow_sign() {
        assert_eq!(Trend::from_delta(12), Trend::Up);
        assert_eq!(Trend::from_delta(12).label(12), "+12%");
        assert_eq!(Trend::from_delta(12).css_class(), "up");

        assert_eq!(Trend::from_delta(-5), Trend::Down);
        assert_eq!(Trend::from_delta(-5).label(-5), "-5%");
        assert_eq!(Trend::from_delta(-5).css_class(), "down");

        assert_eq!(Trend::from_delta(0), Trend::Flat);
        assert_eq!(Trend::from_delta(0).label(0), "0%");
        assert_eq!(Trend::from_delta(0).css_class(), "neutral");
    }

    #[test]
    fn analyze_button_does_not_propagate() {
        let row = render_row(0, &root_causes()[0]);
        assert!(row.contains(r#"onclick="event.stopPropagation()""#));
        assert!(row.contains("btn-analyze"));
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render_table(root_causes()), render_table(root_causes()));
    }
}
