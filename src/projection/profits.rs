//! Profit output structures for projections

use serde::{Deserialize, Serialize};

/// Number of months every projection covers
pub const PROJECTION_MONTHS: usize = 24;

/// A single row of projection output for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRow {
    /// Projection month (1-indexed)
    pub month: u32,

    /// Subscribers at beginning of month
    pub bop_users: f64,

    /// Subscribers lost this month (rounded)
    pub churned_users: f64,

    /// Subscribers acquired this month (rounded)
    pub new_users: f64,

    pub revenue: f64,
    pub acquisition_cost: f64,
    pub profit: f64,

    /// Subscribers carried into next month
    pub eop_users: f64,
}

/// Complete 24-month projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitSeries {
    /// Monthly rows, always [`PROJECTION_MONTHS`] long
    pub rows: Vec<MonthRow>,
}

impl ProfitSeries {
    pub(crate) fn new() -> Self {
        Self {
            rows: Vec::with_capacity(PROJECTION_MONTHS),
        }
    }

    pub(crate) fn add_row(&mut self, row: MonthRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Monthly profit values in month order
    pub fn profits(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.profit).collect()
    }

    /// Sum of monthly profit, accumulated in month order
    pub fn total_profit(&self) -> f64 {
        self.rows.iter().fold(0.0, |sum, r| sum + r.profit)
    }

    /// Subscribers at the end of the last month
    pub fn final_users(&self) -> f64 {
        self.rows.last().map(|r| r.eop_users).unwrap_or(0.0)
    }

    /// Write monthly rows as CSV
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
