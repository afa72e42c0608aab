//! One full regeneration: validate, project both scenarios, chart and summarize

use crate::chart::{redraw, ChartHandle, ChartSpec, ChartSurface};
use crate::error::{SimResult, SimulatorError};
use crate::form::ScenarioForm;
use crate::params::ScenarioPair;
use crate::projection::{project, ProfitSeries};
use crate::summary::ProfitSummary;
use serde::Serialize;

/// Everything produced by one regeneration
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    pub scenarios: ScenarioPair,
    pub current: ProfitSeries,
    pub new: ProfitSeries,
    pub chart: ChartSpec,
    pub summary: ProfitSummary,
}

impl Report {
    /// Project both scenarios. Fails with [`SimulatorError::InvalidInput`]
    /// before any projection runs if either scenario has a non-finite field.
    pub fn from_pair(title: &str, scenarios: ScenarioPair) -> SimResult<Self> {
        if !scenarios.validate() {
            log::warn!("rejected scenario input: {:?}", scenarios);
            return Err(SimulatorError::InvalidInput);
        }

        let current = project(&scenarios.current);
        let new = project(&scenarios.new);
        let chart = ChartSpec::build(&current, &new);
        let summary = ProfitSummary::from_series(&current, &new);

        Ok(Self {
            title: title.to_string(),
            scenarios,
            current,
            new,
            chart,
            summary,
        })
    }

    pub fn from_form(form: &ScenarioForm) -> SimResult<Self> {
        Self::from_pair(&form.title(), form.read_pair())
    }
}

/// Holds the form, the rendering surface and the chart on display
#[derive(Debug)]
pub struct Simulator<S: ChartSurface> {
    form: ScenarioForm,
    surface: S,
    chart: Option<ChartHandle>,
}

impl<S: ChartSurface> Simulator<S> {
    pub fn new(form: ScenarioForm, surface: S) -> Self {
        Self {
            form,
            surface,
            chart: None,
        }
    }

    pub fn form(&self) -> &ScenarioForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ScenarioForm {
        &mut self.form
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handle of the chart currently on display
    pub fn chart(&self) -> Option<&ChartHandle> {
        self.chart.as_ref()
    }

    /// Re-run both projections and replace the chart.
    ///
    /// On invalid input nothing is projected and the chart on display is left
    /// as it was.
    pub fn generate(&mut self) -> SimResult<Report> {
        let report = Report::from_form(&self.form)?;
        let handle = redraw(&mut self.surface, self.chart.take(), &report.chart)?;
        self.chart = Some(handle);
        Ok(report)
    }

    /// Give back the surface and the live chart handle
    pub fn into_parts(self) -> (S, Option<ChartHandle>) {
        (self.surface, self.chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::MemorySurface;
    use crate::form::Field;
    use crate::params::Side;
    use crate::summary::Outcome;

    #[test]
    fn test_generate_default_form() {
        let mut sim = Simulator::new(ScenarioForm::default_pricing(), MemorySurface::new());
        let report = sim.generate().unwrap();

        assert_eq!(report.title, "Telecom Economics Simulator");
        assert_eq!(report.current.len(), 24);
        assert_eq!(report.current.rows[0].profit, 19000.0);
        // Identical scenarios: zero difference counts as a gain
        assert_eq!(report.summary.difference, 0.0);
        assert_eq!(report.summary.outcome, Outcome::Gain);
        assert_eq!(sim.surface().live_count(), 1);
    }

    #[test]
    fn test_regenerate_replaces_chart() {
        let mut sim = Simulator::new(ScenarioForm::default_pricing(), MemorySurface::new());
        sim.generate().unwrap();
        sim.form_mut().set_new(Field::GrowthRatePct, "4");
        let report = sim.generate().unwrap();

        assert_eq!(sim.surface().live_count(), 1);
        assert_eq!(sim.surface().destroyed_count(), 1);
        assert_eq!(sim.chart().map(|h| h.id()), Some(2));
        assert!(report.new.rows[0].new_users > report.current.rows[0].new_users);
    }

    #[test]
    fn test_invalid_input_keeps_previous_chart() {
        let mut sim = Simulator::new(ScenarioForm::default_pricing(), MemorySurface::new());
        sim.generate().unwrap();

        sim.form_mut().set_new(Field::Arpu, "");
        let err = sim.generate().unwrap_err();
        assert!(matches!(err, SimulatorError::InvalidInput));
        assert_eq!(err.to_string(), "Please fill in all fields with valid numbers.");

        assert_eq!(sim.chart().map(|h| h.id()), Some(1));
        assert_eq!(sim.surface().live_count(), 1);
        assert_eq!(sim.surface().destroyed_count(), 0);
    }

    #[test]
    fn test_either_side_invalid_blocks() {
        let mut form = ScenarioForm::default_pricing();
        form.set_new(Field::TotalUsers, "1000");
        form.set_current(Field::TotalUsers, "Infinity");
        assert!(form.read(Side::New).validate());
        assert!(Report::from_form(&form).is_err());
    }

    #[test]
    fn test_report_title_uses_operator() {
        let mut form = ScenarioForm::default_pricing();
        form.set_operator_name("Acme");
        let report = Report::from_form(&form).unwrap();
        assert_eq!(report.title, "Acme Telecom Economics Simulator");
    }
}
