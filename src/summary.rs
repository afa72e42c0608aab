//! Total-profit comparison between the two strategies

use crate::format::format_currency;
use crate::projection::ProfitSeries;
use serde::Serialize;
use std::fmt;

/// Whether the new strategy beats the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Gain,
    Loss,
}

impl Outcome {
    /// A zero difference counts as a gain
    pub fn from_difference(difference: f64) -> Self {
        if difference >= 0.0 {
            Outcome::Gain
        } else {
            Outcome::Loss
        }
    }

    /// Style class for the difference line
    pub fn css_class(self) -> &'static str {
        match self {
            Outcome::Gain => "positive",
            Outcome::Loss => "negative",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Gain => write!(f, "Gain"),
            Outcome::Loss => write!(f, "Loss"),
        }
    }
}

/// 24-month totals for both strategies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitSummary {
    pub current_total: f64,
    pub new_total: f64,
    /// New minus current
    pub difference: f64,
    pub outcome: Outcome,
}

impl ProfitSummary {
    pub fn from_series(current: &ProfitSeries, new: &ProfitSeries) -> Self {
        Self::from_totals(current.total_profit(), new.total_profit())
    }

    pub fn from_totals(current_total: f64, new_total: f64) -> Self {
        let difference = new_total - current_total;
        Self {
            current_total,
            new_total,
            difference,
            outcome: Outcome::from_difference(difference),
        }
    }

    /// Summary block as display lines
    pub fn lines(&self) -> [String; 4] {
        [
            "Total Profit Summary (24 Months)".to_string(),
            format!("Current Strategy: {}", format_currency(self.current_total)),
            format!("New Strategy: {}", format_currency(self.new_total)),
            format!(
                "Difference: {} ({})",
                format_currency(self.difference),
                self.outcome
            ),
        ]
    }
}

impl fmt::Display for ProfitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
