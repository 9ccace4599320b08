//! Row selection and drilldown rendering
//!
//! Selection is a single optional index into the record sequence. It
//! starts empty and only ever moves forward to a selected row: there is
//! no user action that returns to `NoSelection` (the panel stays open
//! once shown; a reload resets it). Re-selecting the same index renders
//! identical output.

use std::fmt::Write;

use crate::data::RootCauseRecord;
use crate::server::DashboardError;

/// Current row selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(usize),
}

impl Selection {
    /// Select row `index`, validating it against the record sequence.
    pub fn select(&mut self, index: usize, records: &[RootCauseRecord]) -> Result<(), DashboardError> {
        if index >= records.len() {
            return Err(DashboardError::RowOutOfRange { index, len: records.len() });
        }
        *self = Selection::Selected(index);
        Ok(())
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::NoSelection => None,
            Selection::Selected(i) => Some(*i),
        }
    }
}

fn render_breakdown_items(items: &[crate::data::Breakdown]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = write!(
            out,
            "<li>\u{2022} {}: {} ({}%)</li>",
            item.name, item.count, item.percent
        );
    }
    out
}

/// Drilldown title for a record.
pub fn drilldown_title(record: &RootCauseRecord) -> String {
    format!("Selected: {} ({} occurrences)", record.cause, record.count)
}

/// Render the drilldown panel contents for one record. Replaces the
/// subcategory and channel lists wholesale, in the record's stored
/// order.
pub fn render_drilldown(record: &RootCauseRecord) -> String {
    format!(
        concat!(
            r#"<h4 id="drilldownTitle">{title}</h4>"#,
            r#"<div class="drilldown-columns">"#,
            r#"<div><h5>By Subcategory</h5><ul id="subcategoriesList">{subs}</ul></div>"#,
            r#"<div><h5>By Channel</h5><ul id="channelsList">{chans}</ul></div>"#,
            "</div>",
        ),
        title = drilldown_title(record),
        subs = render_breakdown_items(&record.subcategories),
        chans = render_breakdown_items(&record.channels),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::root_causes;

    #[test]
    fn selection_starts_empty() {
        assert_eq!(Selection::default(), Selection::NoSelection);
        assert_eq!(Selection::default().index(), None);
    }

    #[test]
    fn select_moves_to_selected() {
        let mut selection = Selection::default();
        selection.select(2, root_causes()).unwrap();
        assert_eq!(selection, Selection::Selected(2));
        assert_eq!(selection.index(), Some(2));

        // Selecting another row replaces the previous selection.
        selection.select(4, root_causes()).unwrap();
        assert_eq!(selection.index(), Some(4));
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut selection = Selection::default();
        let err = selection.select(5, root_causes()).unwrap_err();
        assert!(matches!(err, DashboardError::RowOutOfRange { index: 5, len: 5 }));
        assert_eq!(selection, Selection::NoSelection);
    }

    #[test]
    fn title_contains_cause_and_count() {
        let record = &root_causes()[0];
        let title = drilldown_title(record);
        assert_eq!(title, "Selected: Incomplete Customer Data (156 occurrences)");
    }

    #[test]
    fn drilldown_lists_breakdowns_in_stored_order() {
        let record = &root_causes()[1];
        let html = render_drilldown(record);

        assert!(html.contains("\u{2022} New SKU not synced: 65 (46%)"));
        assert!(html.contains("\u{2022} Discontinued SKU ordered: 48 (34%)"));
        assert!(html.contains("\u{2022} Amazon: 78 (55%)"));

        // Stored order is preserved within each list.
        let first = html.find("New SKU not synced").unwrap();
        let second = html.find("Discontinued SKU ordered").unwrap();
        let third = html.find("SKU mismatch").unwrap();
        assert!(first < second && second < third);

        assert_eq!(html.matches("<li>").count(), 6);
    }

    #[test]
    fn reselecting_renders_identical_output() {
        let record = &root_causes()[3];
        assert_eq!(render_drilldown(record), render_drilldown(record));
    }
}
