//! Telecom Economics Simulator - subscriber profit projections for two scenarios
//!
//! This library provides:
//! - A 24-month subscriber profit projection (churn, growth, ARPU, CAC)
//! - Input validation and lenient parsing of form and CSV text
//! - Magnitude-aware axis and currency formatting
//! - Chart specifications with pluggable rendering surfaces
//! - Total-profit comparison and parallel sensitivity sweeps

pub mod error;
pub mod params;
pub mod projection;
pub mod format;
pub mod chart;
pub mod form;
pub mod summary;
pub mod simulator;
pub mod scenario;

// Re-export commonly used types
pub use error::{SimResult, SimulatorError};
pub use params::{validate, ScenarioPair, ScenarioParameters, Side};
pub use projection::{project, ProfitSeries, ProjectionEngine, PROJECTION_MONTHS};
pub use format::{format_currency, AxisScale};
pub use chart::{ChartHandle, ChartSpec, ChartSurface};
pub use form::{Field, ScenarioForm};
pub use summary::{Outcome, ProfitSummary};
pub use simulator::{Report, Simulator};
pub use scenario::{ScenarioRunner, SweepParameter};
