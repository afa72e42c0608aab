//! Scenario runner for batch projections and sensitivity sweeps
//!
//! Holds a baseline scenario pair and projects many variations of the new
//! scenario against the same current baseline. Variations are independent,
//! so they are projected in parallel.

use crate::error::{SimResult, SimulatorError};
use crate::params::{ScenarioPair, ScenarioParameters};
use crate::projection::{project, ProfitSeries};
use crate::summary::ProfitSummary;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Input varied by a sweep. Churn and growth are given in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    TotalUsers,
    ChurnRatePct,
    Arpu,
    Cac,
    GrowthRatePct,
}

impl SweepParameter {
    /// Copy of `base` with this parameter set to `value`
    pub fn apply(self, base: &ScenarioParameters, value: f64) -> ScenarioParameters {
        let mut params = *base;
        match self {
            SweepParameter::TotalUsers => params.total_users = value,
            SweepParameter::ChurnRatePct => params.churn_rate = value / 100.0,
            SweepParameter::Arpu => params.arpu = value,
            SweepParameter::Cac => params.cac = value,
            SweepParameter::GrowthRatePct => params.growth_rate = value / 100.0,
        }
        params
    }
}

impl FromStr for SweepParameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "total_users" | "users" => Ok(SweepParameter::TotalUsers),
            "churn" | "churn_rate" => Ok(SweepParameter::ChurnRatePct),
            "arpu" => Ok(SweepParameter::Arpu),
            "cac" => Ok(SweepParameter::Cac),
            "growth" | "growth_rate" => Ok(SweepParameter::GrowthRatePct),
            other => Err(format!("Unknown sweep parameter: {}", other)),
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SweepParameter::TotalUsers => "total_users",
            SweepParameter::ChurnRatePct => "churn_rate",
            SweepParameter::Arpu => "arpu",
            SweepParameter::Cac => "cac",
            SweepParameter::GrowthRatePct => "growth_rate",
        };
        write!(f, "{}", name)
    }
}

/// One variation of the new scenario and how it compares to the baseline
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub value: f64,
    pub params: ScenarioParameters,
    pub summary: ProfitSummary,
}

/// Pre-validated baseline for running many projections
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    baseline: ScenarioPair,
    current_series: ProfitSeries,
}

impl ScenarioRunner {
    /// Create a runner from a baseline pair. Both sides must be valid.
    pub fn new(baseline: ScenarioPair) -> SimResult<Self> {
        if !baseline.validate() {
            return Err(SimulatorError::InvalidInput);
        }
        let current_series = project(&baseline.current);
        Ok(Self {
            baseline,
            current_series,
        })
    }

    pub fn baseline(&self) -> &ScenarioPair {
        &self.baseline
    }

    /// Projection of the current (baseline) scenario
    pub fn current_series(&self) -> &ProfitSeries {
        &self.current_series
    }

    /// Run a single projection
    pub fn run(&self, params: &ScenarioParameters) -> ProfitSeries {
        project(params)
    }

    /// Run projections for many parameter sets, keeping input order.
    /// Invalid entries come back as `None`.
    pub fn run_batch(&self, batch: &[ScenarioParameters]) -> Vec<Option<ProfitSeries>> {
        batch
            .par_iter()
            .map(|params| params.validate().then(|| project(params)))
            .collect()
    }

    /// Vary one parameter of the new scenario and compare each variation
    /// against the current baseline. Non-finite sweep values are skipped.
    pub fn sweep(&self, parameter: SweepParameter, values: &[f64]) -> Vec<SweepPoint> {
        let current_total = self.current_series.total_profit();

        let points: Vec<SweepPoint> = values
            .par_iter()
            .filter(|v| v.is_finite())
            .map(|&value| {
                let params = parameter.apply(&self.baseline.new, value);
                let new_total = project(&params).total_profit();
                SweepPoint {
                    value,
                    params,
                    summary: ProfitSummary::from_totals(current_total, new_total),
                }
            })
            .collect();

        log::debug!("swept {} over {} values", parameter, points.len());
        points
    }
}

/// Evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
