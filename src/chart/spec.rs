//! Line chart specification for the two profit series

use crate::format::{format_currency, AxisScale};
use crate::params::Side;
use crate::projection::ProfitSeries;
use serde::Serialize;

/// Border color of the current-scenario line
pub const CURRENT_BORDER_COLOR: &str = "rgba(75, 192, 192, 1)";

/// Border color of the new-scenario line
pub const NEW_BORDER_COLOR: &str = "rgba(255, 99, 132, 1)";

/// Line smoothing applied to both datasets
pub const LINE_TENSION: f64 = 0.1;

/// Fraction of the value range added above and below the data
pub const Y_BUFFER_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub begin_at_zero: bool,
    pub suggested_min: f64,
    pub suggested_max: f64,
    pub title: &'static str,
    /// Tick format descriptor; every tick is rendered with [`AxisScale::tick_label`]
    pub ticks: AxisScale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub title: &'static str,
}

/// Everything a rendering surface needs to draw the comparison chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub y_axis: YAxis,
    pub x_axis: XAxis,
}

impl ChartSpec {
    /// Build the chart for a current and a new projection
    pub fn build(current: &ProfitSeries, new: &ProfitSeries) -> Self {
        let current_data = current.profits();
        let new_data = new.profits();

        let all = current_data.iter().chain(new_data.iter()).copied();
        let min_profit = all.clone().fold(f64::INFINITY, nan_min);
        let max_profit = all.fold(f64::NEG_INFINITY, nan_max);
        let buffer = (max_profit - min_profit) * Y_BUFFER_FRACTION;

        let scale = AxisScale::for_max(max_profit);
        let months = current_data.len().max(new_data.len());

        Self {
            chart_type: "line",
            labels: (1..=months).map(|m| format!("Month {}", m)).collect(),
            datasets: vec![
                Dataset {
                    label: Side::Current.dataset_label().to_string(),
                    data: current_data,
                    border_color: CURRENT_BORDER_COLOR,
                    tension: LINE_TENSION,
                },
                Dataset {
                    label: Side::New.dataset_label().to_string(),
                    data: new_data,
                    border_color: NEW_BORDER_COLOR,
                    tension: LINE_TENSION,
                },
            ],
            y_axis: YAxis {
                begin_at_zero: false,
                suggested_min: min_profit - buffer,
                suggested_max: max_profit + buffer,
                title: scale.title,
                ticks: scale,
            },
            x_axis: XAxis { title: "Months" },
        }
    }

    /// Format an axis tick value
    pub fn tick_label(&self, value: f64) -> String {
        self.y_axis.ticks.tick_label(value)
    }

    /// Tooltip text for one point, or None when the indices are out of range
    pub fn tooltip(&self, dataset: usize, point: usize) -> Option<String> {
        let ds = self.datasets.get(dataset)?;
        let value = *ds.data.get(point)?;
        Some(tooltip_label(&ds.label, value))
    }
}

/// "{label}: {currency}", or just the currency when the label is empty
pub fn tooltip_label(dataset_label: &str, value: f64) -> String {
    if dataset_label.is_empty() {
        format_currency(value)
    } else {
        format!("{}: {}", dataset_label, format_currency(value))
    }
}

// Min/max that let a NaN poison the result instead of skipping it
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ScenarioParameters;
    use crate::projection::project;
    use approx::assert_relative_eq;

    fn build_default() -> ChartSpec {
        let current = project(&ScenarioParameters::new(1000.0, 0.05, 20.0, 50.0, 0.02));
        let new = project(&ScenarioParameters::new(1000.0, 0.03, 20.0, 50.0, 0.04));
        ChartSpec::build(&current, &new)
    }

    #[test]
    fn test_labels_and_datasets() {
        let spec = build_default();
        assert_eq!(spec.chart_type, "line");
        assert_eq!(spec.labels.len(), 24);
        assert_eq!(spec.labels[0], "Month 1");
        assert_eq!(spec.labels[23], "Month 24");

        assert_eq!(spec.datasets.len(), 2);
        assert_eq!(spec.datasets[0].label, "Current Values");
        assert_eq!(spec.datasets[0].border_color, CURRENT_BORDER_COLOR);
        assert_eq!(spec.datasets[1].label, "New Values");
        assert_eq!(spec.datasets[1].border_color, NEW_BORDER_COLOR);
        assert!(spec.datasets.iter().all(|d| d.data.len() == 24 && d.tension == 0.1));
        assert_eq!(spec.datasets[0].data[0], 19000.0);
        assert_eq!(spec.x_axis.title, "Months");
        assert!(!spec.y_axis.begin_at_zero);
    }

    #[test]
    fn test_buffered_bounds() {
        let spec = build_default();
        let all: Vec<f64> = spec.datasets.iter().flat_map(|d| d.data.clone()).collect();
        let min = all.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = all.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        assert_relative_eq!(spec.y_axis.suggested_min, min - (max - min) * 0.1);
        assert_relative_eq!(spec.y_axis.suggested_max, max + (max - min) * 0.1);
        assert_eq!(spec.y_axis.title, "Profit (USD)");
    }

    #[test]
    fn test_axis_uses_combined_max() {
        let small = project(&ScenarioParameters::new(1000.0, 0.0, 1.0, 0.0, 0.0));
        let large = project(&ScenarioParameters::new(1e8, 0.0, 50.0, 0.0, 0.0));
        let spec = ChartSpec::build(&small, &large);

        assert_eq!(spec.y_axis.title, "Profit (Billions USD)");
        assert_eq!(spec.tick_label(5e9), "$5.0B");
        // Tooltips keep their own scale
        assert_eq!(spec.tooltip(0, 0).unwrap(), "Current Values: $1000.00");
        assert_eq!(spec.tooltip(1, 0).unwrap(), "New Values: $5.00 Billion");
        assert!(spec.tooltip(2, 0).is_none());
        assert!(spec.tooltip(0, 24).is_none());
    }

    #[test]
    fn test_tooltip_label_without_dataset_name() {
        assert_eq!(tooltip_label("", 12.0), "$12.00");
    }

    #[test]
    fn test_serializes_for_chart_widget() {
        let spec = build_default();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["datasets"][1]["label"], "New Values");
        assert_eq!(json["y_axis"]["ticks"]["unit"], "dollars");
        assert_eq!(json["y_axis"]["ticks"]["decimals"], 0);
    }
}
