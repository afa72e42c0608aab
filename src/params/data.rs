//! Scenario parameter value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two compared scenarios a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Current,
    New,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Current, Side::New];

    /// Dataset label used on the chart and in tooltips
    pub fn dataset_label(self) -> &'static str {
        match self {
            Side::Current => "Current Values",
            Side::New => "New Values",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Current => write!(f, "current"),
            Side::New => write!(f, "new"),
        }
    }
}

/// Inputs to a single 24-month projection
///
/// Churn and growth are stored as fractions. User-facing inputs supply them
/// as percentages; use [`ScenarioParameters::from_percentages`] for those.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Starting subscriber count
    pub total_users: f64,

    /// Monthly churn as a fraction (0.05 = 5%)
    pub churn_rate: f64,

    /// Average revenue per user per month
    pub arpu: f64,

    /// Customer acquisition cost per new user
    pub cac: f64,

    /// Monthly new-user growth as a fraction
    pub growth_rate: f64,
}

impl ScenarioParameters {
    pub fn new(total_users: f64, churn_rate: f64, arpu: f64, cac: f64, growth_rate: f64) -> Self {
        Self {
            total_users,
            churn_rate,
            arpu,
            cac,
            growth_rate,
        }
    }

    /// Build parameters from percentage churn and growth (5.0 = 5%)
    pub fn from_percentages(
        total_users: f64,
        churn_pct: f64,
        arpu: f64,
        cac: f64,
        growth_pct: f64,
    ) -> Self {
        Self::new(total_users, churn_pct / 100.0, arpu, cac, growth_pct / 100.0)
    }

    /// Default values the simulator opens with
    pub fn default_pricing() -> Self {
        Self::from_percentages(1000.0, 5.0, 20.0, 50.0, 2.0)
    }

    /// All five fields in declaration order
    pub fn fields(&self) -> [f64; 5] {
        [
            self.total_users,
            self.churn_rate,
            self.arpu,
            self.cac,
            self.growth_rate,
        ]
    }

    /// True when every field is a finite number
    pub fn validate(&self) -> bool {
        self.fields().iter().all(|v| v.is_finite())
    }
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self::default_pricing()
    }
}

/// Free-function form of [`ScenarioParameters::validate`]
pub fn validate(params: &ScenarioParameters) -> bool {
    params.validate()
}

/// The two scenarios being compared
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPair {
    pub current: ScenarioParameters,
    pub new: ScenarioParameters,
}

impl ScenarioPair {
    pub fn new(current: ScenarioParameters, new: ScenarioParameters) -> Self {
        Self { current, new }
    }

    pub fn get(&self, side: Side) -> &ScenarioParameters {
        match side {
            Side::Current => &self.current,
            Side::New => &self.new,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut ScenarioParameters {
        match side {
            Side::Current => &mut self.current,
            Side::New => &mut self.new,
        }
    }

    /// Both scenarios must pass validation
    pub fn validate(&self) -> bool {
        self.current.validate() && self.new.validate()
    }
}
