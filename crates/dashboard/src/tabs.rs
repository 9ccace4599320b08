//! Tab bar state
//!
//! A fixed set of tab buttons with a single active marker. Activating
//! a tab clears the marker from every other tab; the content panels
//! themselves are outside this component.

use std::fmt::Write;

/// The dashboard's fixed tab set, in display order.
pub const TABS: &[(&str, &str)] = &[
    ("overview", "Overview"),
    ("root-causes", "Root Causes"),
    ("patterns", "Patterns"),
    ("recommendations", "Recommendations"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBar {
    active: &'static str,
}

impl Default for TabBar {
    fn default() -> Self {
        Self { active: TABS[0].0 }
    }
}

impl TabBar {
    /// Activate the tab with the given id. Unknown ids leave the bar
    /// unchanged and report `false`.
    pub fn activate(&mut self, id: &str) -> bool {
        match TABS.iter().find(|(tab_id, _)| *tab_id == id) {
            Some((tab_id, _)) => {
                self.active = tab_id;
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    /// Render the `.tab-button` row with the active class on exactly
    /// one button.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (id, label) in TABS {
            let class = if *id == self.active { "tab-button active" } else { "tab-button" };
            let _ = write!(
                out,
                r#"<button class="{class}" data-tab="{id}">{label}</button>"#
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tab_is_active_by_default() {
        let bar = TabBar::default();
        assert_eq!(bar.active(), "overview");
        let html = bar.render();
        assert_eq!(html.matches("tab-button active").count(), 1);
        assert!(html.contains(r#"data-tab="overview""#));
    }

    #[test]
    fn activate_moves_the_single_active_marker() {
        let mut bar = TabBar::default();
        assert!(bar.activate("patterns"));
        assert_eq!(bar.active(), "patterns");

        let html = bar.render();
        assert_eq!(html.matches("tab-button active").count(), 1);
        assert!(html.contains(r#"class="tab-button active" data-tab="patterns""#));
    }

    #[test]
    fn unknown_tab_is_ignored() {
        let mut bar = TabBar::default();
        assert!(!bar.activate("nope"));
        assert_eq!(bar.active(), "overview");
    }
}
