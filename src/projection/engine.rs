//! Core projection engine for monthly subscriber profit projections

use super::profits::{MonthRow, ProfitSeries, PROJECTION_MONTHS};
use super::state::{round_half_up, SubscriberState};
use crate::error::{SimResult, SimulatorError};
use crate::params::ScenarioParameters;

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: ScenarioParameters,
}

impl ProjectionEngine {
    /// Create a new projection engine for the given scenario
    pub fn new(params: ScenarioParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ScenarioParameters {
        &self.params
    }

    /// Run the 24-month projection.
    ///
    /// Does not validate; callers gate on [`ScenarioParameters::validate`]
    /// (see [`try_project`]).
    pub fn project(&self) -> ProfitSeries {
        let mut result = ProfitSeries::new();
        let mut state = SubscriberState::from_params(&self.params);

        for _month in 0..PROJECTION_MONTHS {
            state.advance_month();
            let row = self.calculate_month(&mut state);
            result.add_row(row);
        }

        log::debug!(
            "projected {} months from {} users: total profit {}, final users {}",
            result.len(),
            self.params.total_users,
            result.total_profit(),
            result.final_users(),
        );

        result
    }

    /// Calculate profit for a single month and roll the subscriber base forward
    fn calculate_month(&self, state: &mut SubscriberState) -> MonthRow {
        let users = state.users;

        // Both deltas are rounded from the beginning-of-month base
        let churned_users = round_half_up(users * self.params.churn_rate);
        let new_users = round_half_up(users * self.params.growth_rate);

        let revenue = users * self.params.arpu;
        let acquisition_cost = new_users * self.params.cac;
        let profit = revenue - acquisition_cost;

        state.apply_deltas(churned_users, new_users);

        MonthRow {
            month: state.month,
            bop_users: users,
            churned_users,
            new_users,
            revenue,
            acquisition_cost,
            profit,
            eop_users: state.users,
        }
    }
}

/// Project a scenario without validation
pub fn project(params: &ScenarioParameters) -> ProfitSeries {
    ProjectionEngine::new(*params).project()
}

/// Project a scenario, refusing to run on non-finite input
pub fn try_project(params: &ScenarioParameters) -> SimResult<ProfitSeries> {
    if !params.validate() {
        return Err(SimulatorError::InvalidInput);
    }
    Ok(project(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_params() -> ScenarioParameters {
        ScenarioParameters::new(1000.0, 0.05, 20.0, 50.0, 0.02)
    }

    #[test]
    fn test_first_month() {
        let series = project(&reference_params());
        let m1 = &series.rows[0];

        assert_eq!(m1.month, 1);
        assert_eq!(m1.bop_users, 1000.0);
        assert_eq!(m1.churned_users, 50.0);
        assert_eq!(m1.new_users, 20.0);
        assert_eq!(m1.revenue, 20000.0);
        assert_eq!(m1.acquisition_cost, 1000.0);
        assert_eq!(m1.profit, 19000.0);
        assert_eq!(m1.eop_users, 970.0);
        assert_eq!(series.rows[1].bop_users, 970.0);
    }

    #[test]
    fn test_second_month_uses_rolled_base() {
        let series = project(&reference_params());
        let m2 = &series.rows[1];

        // 970 * 0.05 = 48.5 rounds up, 970 * 0.02 = 19.4 rounds down
        assert_eq!(m2.churned_users, 49.0);
        assert_eq!(m2.new_users, 19.0);
        assert_relative_eq!(m2.profit, 970.0 * 20.0 - 19.0 * 50.0);
        assert_eq!(m2.eop_users, 940.0);
    }

    #[test]
    fn test_always_24_months() {
        let cases = [
            reference_params(),
            ScenarioParameters::new(0.0, 0.0, 0.0, 0.0, 0.0),
            ScenarioParameters::new(1e12, 0.9, 100.0, 1000.0, 0.5),
            ScenarioParameters::new(-50.0, 1.0, 10.0, 10.0, 0.0),
        ];
        for params in &cases {
            let series = project(params);
            assert_eq!(series.len(), PROJECTION_MONTHS);
            let months: Vec<u32> = series.rows.iter().map(|r| r.month).collect();
            assert_eq!(months, (1..=24).collect::<Vec<u32>>());
        }
    }

    #[test]
    fn test_projection_is_pure() {
        let params = ScenarioParameters::new(12345.6, 0.031, 17.25, 80.0, 0.027);
        let a = project(&params);
        let b = project(&params);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fractional_start_carries_through() {
        let series = project(&ScenarioParameters::new(100.5, 0.1, 1.0, 0.0, 0.0));
        // 100.5 * 0.1 = 10.05 rounds to 10; fractional part survives
        assert_eq!(series.rows[0].churned_users, 10.0);
        assert_relative_eq!(series.rows[1].bop_users, 90.5);
    }

    #[test]
    fn test_users_can_go_negative() {
        // Churn above 100% drives the base negative and keeps going
        let series = project(&ScenarioParameters::new(100.0, 1.5, 10.0, 0.0, 0.0));
        assert_eq!(series.rows[0].eop_users, -50.0);
        assert_eq!(series.rows[1].bop_users, -50.0);
        assert_eq!(series.rows[1].profit, -500.0);
        // -50 * 1.5 = -75 exactly; base becomes 25
        assert_eq!(series.rows[1].eop_users, 25.0);
    }

    #[test]
    fn test_negative_tie_rounds_up() {
        // -5 * 0.5 = -2.5 rounds toward +inf to -2
        let series = project(&ScenarioParameters::new(-5.0, 0.5, 0.0, 0.0, 0.0));
        assert_eq!(series.rows[0].churned_users, -2.0);
        assert_eq!(series.rows[0].eop_users, -3.0);
    }

    #[test]
    fn test_zero_rates_hold_base_flat() {
        let series = project(&ScenarioParameters::new(500.0, 0.0, 10.0, 99.0, 0.0));
        assert!(series.rows.iter().all(|r| r.bop_users == 500.0 && r.profit == 5000.0));
        assert_eq!(series.total_profit(), 120_000.0);
    }

    #[test]
    fn test_try_project_rejects_invalid() {
        let mut params = reference_params();
        assert!(try_project(&params).is_ok());

        params.cac = f64::INFINITY;
        assert!(matches!(try_project(&params), Err(SimulatorError::InvalidInput)));
    }
}
