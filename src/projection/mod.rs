//! Projection engine for subscriber profit projections

mod state;
mod engine;
mod profits;

pub use state::{round_half_up, SubscriberState};
pub use engine::{project, try_project, ProjectionEngine};
pub use profits::{MonthRow, ProfitSeries, PROJECTION_MONTHS};
