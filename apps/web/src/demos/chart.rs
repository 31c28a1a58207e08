//! Technology-neutral chart configurations carried by the render tree.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub title: String,
    #[serde(flatten)]
    pub kind: ChartKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum ChartKind {
    Scatter {
        x_label: String,
        y_label: String,
        points: Vec<ScatterPoint>,
    },
    Line {
        x_label: String,
        y_label: String,
        /// Shared x axis, one entry per point in every series.
        x_values: Vec<String>,
        series: Vec<LineSeries>,
    },
    GroupedBar {
        categories: Vec<String>,
        groups: Vec<BarGroup>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Colour key.
    pub series: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: String,
    /// One value per x label; gaps are `None`.
    pub values: Vec<Option<f64>>,
}

/// One bar per category, e.g. accuracy for every model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGroup {
    pub name: String,
    pub values: Vec<f64>,
}

impl ChartKind {
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Scatter { .. } => "scatter",
            ChartKind::Line { .. } => "line",
            ChartKind::GroupedBar { .. } => "grouped_bar",
        }
    }
}
