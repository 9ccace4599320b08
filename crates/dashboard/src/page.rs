//! Full document assembly
//!
//! Renders the dashboard page around the table, drilldown panel, tab
//! bar, and chart mounts. The chart configs are embedded as JSON and a
//! small bootstrap script wires row clicks to the drilldown endpoint;
//! everything else is rendered server-side.

use std::fmt::Write;

use crate::charts::{trend_chart_config, volume_chart_config};
use crate::data::RootCauseRecord;
use crate::drilldown::{render_drilldown, Selection};
use crate::table::render_table;
use crate::tabs::TabBar;

/// Client wiring: instantiate the two charts from their embedded
/// configs, fetch the drilldown fragment when a row is clicked, and
/// log the placeholder interactions.
const BOOTSTRAP_JS: &str = r#"
const volumeConfig = JSON.parse(document.getElementById('volumeChartConfig').textContent);
const trendConfig = JSON.parse(document.getElementById('trendChartConfig').textContent);
new Chart(document.getElementById('volumeChart').getContext('2d'), volumeConfig);
new Chart(document.getElementById('trendChart').getContext('2d'), trendConfig);

document.querySelectorAll('#rootCauseTable tr').forEach(row => {
    row.addEventListener('click', async () => {
        const index = row.dataset.index;
        const resp = await fetch(`/drilldown/${index}`);
        if (!resp.ok) return;
        document.querySelectorAll('#rootCauseTable tr').forEach(r => r.classList.remove('selected'));
        row.classList.add('selected');
        const panel = document.getElementById('drilldownPanel');
        panel.innerHTML = await resp.text();
        panel.style.display = 'block';
    });
});

document.getElementById('dateRange')?.addEventListener('change', e => {
    fetch('/api/date-range', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ range: e.target.value })
    });
});

document.querySelector('.btn-primary')?.addEventListener('click', () => {
    alert('Export functionality would download CSV/PDF report');
});
document.querySelector('.btn-secondary')?.addEventListener('click', () => {
    alert('Filter panel would open here');
});
document.querySelectorAll('.btn-investigate').forEach(button => {
    button.addEventListener('click', () => {
        alert('Investigation panel would open for: ' + button.previousElementSibling.textContent.substring(0, 50) + '...');
    });
});
"#;

/// Detected exception patterns, shown with an Investigate control.
const PATTERN_INSIGHTS: &[&str] = &[
    "57% of incomplete-customer-data exceptions arrive through WhatsApp orders",
    "New SKUs ordered on Amazon before catalog sync cause nearly half of SKU exceptions",
    "Thursday is the weekly exception peak at 61, well above the Wednesday low of 38",
];

fn render_patterns() -> String {
    let mut out = String::new();
    for insight in PATTERN_INSIGHTS {
        let _ = write!(
            out,
            concat!(
                r#"<div class="pattern-item"><p>{insight}</p>"#,
                r#"<button class="btn-investigate">Investigate</button></div>"#,
            ),
            insight = insight,
        );
    }
    out
}

/// Render the whole dashboard document.
pub fn render_page(records: &[RootCauseRecord], selection: Selection, tabs: &TabBar) -> String {
    let volume_config =
        serde_json::to_string(&volume_chart_config()).unwrap_or_else(|_| "{}".to_string());
    let trend_config =
        serde_json::to_string(&trend_chart_config()).unwrap_or_else(|_| "{}".to_string());

    // The panel stays hidden until the first selection.
    let (panel_style, panel_body) = match selection.index() {
        Some(index) => ("display: block", render_drilldown(&records[index])),
        None => ("display: none", String::new()),
    };

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            "<title>OrderSight - Exception Analytics</title>",
            r#"<script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>"#,
            "</head><body>",
            "<header><h1>Order Exception Analytics</h1>",
            r#"<select id="dateRange">"#,
            r#"<option value="7d">Last 7 days</option>"#,
            r#"<option value="30d">Last 30 days</option>"#,
            r#"<option value="90d">Last 90 days</option>"#,
            "</select>",
            r#"<button class="btn-primary">Export</button>"#,
            r#"<button class="btn-secondary">Filters</button>"#,
            "</header>",
            r#"<nav class="tabs">{tabs}</nav>"#,
            r#"<section class="charts">"#,
            r#"<canvas id="volumeChart"></canvas>"#,
            r#"<canvas id="trendChart"></canvas>"#,
            "</section>",
            "<section><table><thead><tr>",
            "<th>Root Cause</th><th>Count</th><th>Share</th><th>Trend</th><th>Avg Cost</th><th></th>",
            r#"</tr></thead><tbody id="rootCauseTable">{table}</tbody></table></section>"#,
            r#"<section id="drilldownPanel" style="{panel_style}">{panel_body}</section>"#,
            r#"<section class="patterns"><h3>Detected Patterns</h3>{patterns}</section>"#,
            r#"<script id="volumeChartConfig" type="application/json">{volume_config}</script>"#,
            r#"<script id="trendChartConfig" type="application/json">{trend_config}</script>"#,
            "<script>{bootstrap}</script>",
            "</body></html>",
        ),
        tabs = tabs.render(),
        table = render_table(records),
        panel_style = panel_style,
        panel_body = panel_body,
        patterns = render_patterns(),
        volume_config = volume_config,
        trend_config = trend_config,
        bootstrap = BOOTSTRAP_JS,
    )
}
