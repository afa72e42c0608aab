//! Subscriber base tracking for a single projection

use crate::params::ScenarioParameters;

/// Round to the nearest integer, ties toward positive infinity
///
/// Matches the rounding the simulator has always used for subscriber deltas:
/// `round_half_up(2.5) == 3.0` and `round_half_up(-2.5) == -2.0`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// State of the subscriber base at the start of a month
#[derive(Debug, Clone)]
pub struct SubscriberState {
    /// Current projection month (1-indexed, 0 before the first advance)
    pub month: u32,

    /// Subscribers at beginning of month
    pub users: f64,
}

impl SubscriberState {
    /// Initialize state from scenario parameters at projection start
    pub fn from_params(params: &ScenarioParameters) -> Self {
        Self {
            month: 0,
            users: params.total_users,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    /// Apply this month's deltas, churn first then growth.
    /// The base is not clamped and can go negative.
    pub fn apply_deltas(&mut self, churned: f64, new_users: f64) {
        self.users = self.users - churned + new_users;
    }
}
