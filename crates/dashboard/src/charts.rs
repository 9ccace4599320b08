//! Chart configuration
//!
//! Builds the two chart configs (exception volume bar chart, daily
//! trend line chart) in the JSON shape the charting library consumes.
//! Configs are constructed once at page render; there is no update
//! path, a reload recreates the chart instances from scratch.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<&'static str>,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scales {
    pub y: YAxis,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub begin_at_zero: bool,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ticks {
    pub precision: u32,
}

/// Fixed axis behavior shared by both charts: linear zero-based y axis
/// with integer ticks, legend hidden.
fn default_options() -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: true,
        plugins: Plugins {
            legend: Legend { display: false },
        },
        scales: Scales {
            y: YAxis {
                begin_at_zero: true,
                ticks: Ticks { precision: 0 },
            },
        },
    }
}

/// Exception counts by category, as a bar chart.
pub fn volume_chart_config() -> ChartConfig {
    ChartConfig {
        chart_type: "bar",
        data: ChartData {
            labels: vec!["Missing Info", "SKU Issues", "Stock Mismatch", "Pricing", "Address"],
            datasets: vec![Dataset {
                label: "Exception Count",
                data: vec![156, 142, 128, 98, 87],
                background_color: Some("#3b82f6"),
                border_color: Some("#2563eb"),
                border_width: 1,
                fill: None,
                tension: None,
            }],
        },
        options: default_options(),
    }
}

/// Daily exception counts Mon-Sun, as a filled line chart.
pub fn trend_chart_config() -> ChartConfig {
    ChartConfig {
        chart_type: "line",
        data: ChartData {
            labels: vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            datasets: vec![Dataset {
                label: "Exceptions",
                data: vec![45, 52, 38, 61, 55, 48, 42],
                background_color: Some("rgba(16, 185, 129, 0.1)"),
                border_color: Some("#10b981"),
                border_width: 2,
                fill: Some(true),
                tension: Some(0.4),
            }],
        },
        options: default_options(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_chart_is_a_bar_chart_with_fixed_series() {
        let config = volume_chart_config();
        assert_eq!(config.chart_type, "bar");
        assert_eq!(config.data.labels.len(), 5);
        assert_eq!(config.data.datasets[0].data, vec![156, 142, 128, 98, 87]);
    }

    #[test]
    fn trend_chart_covers_the_week() {
        let config = trend_chart_config();
        assert_eq!(config.chart_type, "line");
        assert_eq!(config.data.labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(config.data.datasets[0].data, vec![45, 52, 38, 61, 55, 48, 42]);
        assert_eq!(config.data.datasets[0].fill, Some(true));
    }

    #[test]
    fn serialized_options_match_chart_library_shape() {
        let json = serde_json::to_value(volume_chart_config()).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(json["options"]["scales"]["y"]["ticks"]["precision"], 0);
        assert_eq!(json["options"]["maintainAspectRatio"], true);
        // Bar chart has no line-only styling.
        assert!(json["data"]["datasets"][0].get("fill").is_none());
    }
}
