// Sample datasets for the Projects page and the chart configuration each one renders with.
// Everything here is pure; the only randomness comes from the caller's RNG.

pub mod chart;
pub mod iris;
pub mod metrics;
pub mod sales;

use rand::Rng;
use serde::Serialize;

use chart::{BarGroup, ChartKind, ChartPanel, LineSeries, ScatterPoint};
use iris::{IrisRow, FEATURE_NAMES};
use metrics::ModelMetrics;
use sales::SalesPoint;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "demo", rename_all = "snake_case")]
pub enum ProjectDemo {
    IrisExploration { rows: Vec<IrisRow> },
    SalesForecast { series: Vec<SalesPoint> },
    ModelComparison { metrics: Vec<ModelMetrics> },
}

/// Generates the three demos in display order.
pub fn generate_project_demos<R: Rng + ?Sized>(rng: &mut R) -> Vec<ProjectDemo> {
    vec![
        ProjectDemo::IrisExploration {
            rows: iris::generate_iris_dataset(),
        },
        ProjectDemo::SalesForecast {
            series: sales::generate_sales_series(sales::DEFAULT_PERIODS, rng),
        },
        ProjectDemo::ModelComparison {
            metrics: metrics::generate_model_metrics(),
        },
    ]
}

impl ProjectDemo {
    pub fn title(&self) -> &'static str {
        match self {
            ProjectDemo::IrisExploration { .. } => "1) Iris Classification — Model Exploration",
            ProjectDemo::SalesForecast { .. } => "2) Sales Forecasting — Example",
            ProjectDemo::ModelComparison { .. } => "3) Model Comparison",
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        match self {
            ProjectDemo::IrisExploration { .. } => Some(
                "A quick interactive exploration and simple classifier demo built for demonstration.",
            ),
            _ => None,
        }
    }

    pub fn chart(&self) -> ChartPanel {
        match self {
            ProjectDemo::IrisExploration { rows } => iris_chart(rows),
            ProjectDemo::SalesForecast { series } => sales_chart(series),
            ProjectDemo::ModelComparison { metrics } => metrics_chart(metrics),
        }
    }
}

fn iris_chart(rows: &[IrisRow]) -> ChartPanel {
    ChartPanel {
        title: "Sepal dimensions by species".to_string(),
        kind: ChartKind::Scatter {
            x_label: FEATURE_NAMES[0].to_string(),
            y_label: FEATURE_NAMES[1].to_string(),
            points: rows
                .iter()
                .map(|r| ScatterPoint {
                    x: r.sepal_length,
                    y: r.sepal_width,
                    series: r.species.to_string(),
                })
                .collect(),
        },
    }
}

fn sales_chart(series: &[SalesPoint]) -> ChartPanel {
    ChartPanel {
        title: "Daily sales with 14-day rolling mean".to_string(),
        kind: ChartKind::Line {
            x_label: "date".to_string(),
            y_label: "sales".to_string(),
            x_values: series.iter().map(|p| p.date.to_string()).collect(),
            series: vec![
                LineSeries {
                    name: "sales".to_string(),
                    values: series.iter().map(|p| Some(p.value)).collect(),
                },
                LineSeries {
                    name: "rolling_14".to_string(),
                    values: series.iter().map(|p| p.rolling_mean_14).collect(),
                },
            ],
        },
    }
}

fn metrics_chart(metrics: &[ModelMetrics]) -> ChartPanel {
    ChartPanel {
        title: "Model metrics".to_string(),
        kind: ChartKind::GroupedBar {
            categories: metrics.iter().map(|m| m.model_name.to_string()).collect(),
            groups: vec![
                BarGroup {
                    name: "accuracy".to_string(),
                    values: metrics.iter().map(|m| m.accuracy).collect(),
                },
                BarGroup {
                    name: "f1".to_string(),
                    values: metrics.iter().map(|m| m.f1).collect(),
                },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn demos() -> Vec<ProjectDemo> {
        generate_project_demos(&mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_three_demos_in_display_order() {
        let demos = demos();
        assert_eq!(demos.len(), 3);
        assert!(matches!(demos[0], ProjectDemo::IrisExploration { .. }));
        assert!(matches!(demos[1], ProjectDemo::SalesForecast { .. }));
        assert!(matches!(demos[2], ProjectDemo::ModelComparison { .. }));
    }

    #[test]
    fn test_chart_kinds_match_demos() {
        let kinds: Vec<_> = demos().iter().map(|d| d.chart().kind.name()).collect();
        assert_eq!(kinds, ["scatter", "line", "grouped_bar"]);
    }

    #[test]
    fn test_iris_scatter_covers_every_row() {
        let chart = demos()[0].chart();
        match chart.kind {
            ChartKind::Scatter { points, x_label, .. } => {
                assert_eq!(points.len(), 150);
                assert_eq!(x_label, "sepal length (cm)");
            }
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    #[test]
    fn test_sales_chart_has_value_and_rolling_series() {
        match demos()[1].chart().kind {
            ChartKind::Line { x_values, series, .. } => {
                assert_eq!(x_values.len(), 200);
                assert_eq!(x_values[0], "2023-01-01");
                assert_eq!(series.len(), 2);
                assert_eq!(series[1].name, "rolling_14");
                assert!(series[1].values[12].is_none());
                assert!(series[1].values[13].is_some());
            }
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn test_metrics_chart_groups_accuracy_and_f1() {
        match demos()[2].chart().kind {
            ChartKind::GroupedBar { categories, groups } => {
                assert_eq!(categories.len(), 3);
                assert_eq!(groups[0].name, "accuracy");
                assert_eq!(groups[1].values, vec![0.84, 0.89, 0.91]);
            }
            other => panic!("expected grouped bar, got {other:?}"),
        }
    }
}
