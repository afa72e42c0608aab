//! Y-axis scale selection from the combined series maximum

use super::to_fixed;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisUnit {
    Billions,
    Millions,
    Dollars,
}

/// Axis title and tick format shared by every tick on the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisScale {
    pub unit: AxisUnit,
    pub title: &'static str,
    pub divisor: f64,
    pub decimals: usize,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl AxisScale {
    /// Pick the scale from the largest value across both series.
    ///
    /// The signed maximum is used, so an all-negative chart always lands on
    /// the plain dollar scale.
    pub fn for_max(max_value: f64) -> Self {
        if max_value >= 1e9 {
            Self {
                unit: AxisUnit::Billions,
                title: "Profit (Billions USD)",
                divisor: 1e9,
                decimals: 1,
                prefix: "$",
                suffix: "B",
            }
        } else if max_value >= 1e6 {
            Self {
                unit: AxisUnit::Millions,
                title: "Profit (Millions USD)",
                divisor: 1e6,
                decimals: 1,
                prefix: "$",
                suffix: "M",
            }
        } else {
            Self {
                unit: AxisUnit::Dollars,
                title: "Profit (USD)",
                divisor: 1.0,
                decimals: 0,
                prefix: "$",
                suffix: "",
            }
        }
    }

    /// Format one tick value on this axis
    pub fn tick_label(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            to_fixed(value / self.divisor, self.decimals),
            self.suffix
        )
    }
}
