//! Chart.js configuration builders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never touch Chart.js options directly. They build a config here as a
//! `serde_json::Value`, and `components::chart` hands it to the global `Chart`
//! constructor. Things JSON cannot carry (canvas gradients, tooltip label
//! callbacks) are described by [`ChartSpec`] and attached by the binding.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use serde_json::{Value, json};

use super::color::hex_to_rgba;

pub const PRIMARY: &str = "#ccff00";
pub const SECONDARY: &str = "#ff4400";
pub const BLUE: &str = "#00ccff";
pub const TEXT: &str = "#888888";
pub const GRID: &str = "rgba(255, 255, 255, 0.05)";
pub const BACKGROUND: &str = "#1a1a1a";
pub const TOOLTIP_BG: &str = "rgba(26, 26, 26, 0.9)";

pub const FONT_BODY: &str = "'Roboto', sans-serif";
pub const FONT_TITLE: &str = "'Oswald', sans-serif";

/// Vertical extent of the line-chart fill gradient, in canvas pixels.
pub const GRADIENT_HEIGHT: f64 = 400.0;

/// How the tooltip renders a data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipLabel {
    /// `"{series}: {y}"`
    SeriesValue,
    /// `"{y} min"`
    Minutes,
}

impl TooltipLabel {
    pub fn format(self, series: &str, y: f64) -> String {
        match self {
            Self::SeriesValue => format!("{series}: {y}"),
            Self::Minutes => format!("{y} min"),
        }
    }
}

/// A chart ready for the binding: JSON config plus the non-JSON extras.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub config: Value,
    /// Fill the first dataset with a vertical gradient of this color.
    pub gradient: Option<String>,
    pub tooltip: TooltipLabel,
}

/// Global `Chart.defaults` overrides applied once before the first chart.
pub fn chart_defaults() -> Value {
    json!({
        "font": { "family": FONT_BODY },
        "color": TEXT,
        "scale": { "grid": { "color": GRID } },
    })
}

/// Color stops of the line-chart fill: `color` at half opacity fading out.
pub fn gradient_stops(color: &str) -> [(f64, String); 2] {
    [(0.0, hex_to_rgba(color, 0.5)), (1.0, hex_to_rgba(color, 0.0))]
}

/// Line chart of a progress series (weight, max reps, ...).
pub fn progress_chart(labels: &[String], data: &[f64], label: &str, color: Option<&str>) -> ChartSpec {
    let color = color.unwrap_or(PRIMARY);
    let config = json!({
        "type": "line",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": label,
                "data": data,
                "borderColor": color,
                "backgroundColor": hex_to_rgba(color, 0.5),
                "borderWidth": 3,
                "pointBackgroundColor": BACKGROUND,
                "pointBorderColor": color,
                "pointBorderWidth": 2,
                "pointRadius": 4,
                "pointHoverRadius": 7,
                "pointHoverBackgroundColor": color,
                "pointHoverBorderColor": "#fff",
                "fill": true,
                "tension": 0.4,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "interaction": { "intersect": false, "mode": "index" },
            "plugins": {
                "legend": { "display": false },
                "tooltip": {
                    "backgroundColor": TOOLTIP_BG,
                    "titleColor": "#fff",
                    "titleFont": { "family": FONT_TITLE, "size": 14 },
                    "bodyColor": "#ccc",
                    "borderColor": "rgba(255,255,255,0.1)",
                    "borderWidth": 1,
                    "padding": 10,
                    "displayColors": false,
                },
            },
            "scales": {
                "y": {
                    "beginAtZero": false,
                    "grid": { "color": GRID, "drawBorder": false },
                    "ticks": { "color": TEXT, "font": { "size": 11 } },
                },
                "x": {
                    "grid": { "display": false, "drawBorder": false },
                    "ticks": { "color": TEXT, "font": { "size": 11 }, "maxRotation": 45, "minRotation": 0 },
                },
            },
        },
    });
    ChartSpec { config, gradient: Some(color.to_owned()), tooltip: TooltipLabel::SeriesValue }
}

/// Bar chart of weekly activity minutes.
pub fn activity_chart(labels: &[String], data: &[f64]) -> ChartSpec {
    let config = json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Activité",
                "data": data,
                "backgroundColor": PRIMARY,
                "borderRadius": 5,
                "borderSkipped": false,
                "barThickness": 20,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": false },
                "tooltip": {
                    "backgroundColor": TOOLTIP_BG,
                    "titleFont": { "family": FONT_TITLE },
                },
            },
            "scales": {
                "y": { "beginAtZero": true, "grid": { "color": GRID, "drawBorder": false } },
                "x": { "grid": { "display": false } },
            },
        },
    });
    ChartSpec { config, gradient: None, tooltip: TooltipLabel::Minutes }
}

/// Replace the first dataset's data in place, optionally relabelling and
/// recoloring it. A spec without datasets is left untouched.
pub fn update_chart_data(
    spec: &mut ChartSpec,
    labels: &[String],
    data: &[f64],
    label: Option<&str>,
    color: Option<&str>,
) {
    let Some(chart_data) = spec.config.get_mut("data").and_then(Value::as_object_mut) else {
        return;
    };
    let Some(dataset) = chart_data
        .get_mut("datasets")
        .and_then(Value::as_array_mut)
        .and_then(|sets| sets.first_mut())
        .and_then(Value::as_object_mut)
    else {
        return;
    };

    dataset.insert("data".into(), json!(data));
    if let Some(label) = label {
        dataset.insert("label".into(), json!(label));
    }
    if let Some(color) = color {
        dataset.insert("borderColor".into(), json!(color));
        dataset.insert("backgroundColor".into(), json!(hex_to_rgba(color, 0.5)));
        dataset.insert("pointBorderColor".into(), json!(color));
        dataset.insert("pointHoverBackgroundColor".into(), json!(color));
        spec.gradient = Some(color.to_owned());
    }
    chart_data.insert("labels".into(), json!(labels));
}
