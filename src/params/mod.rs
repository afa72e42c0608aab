//! Scenario parameters, validation and loading

mod data;
mod parse;
pub mod loader;

pub use data::{validate, ScenarioPair, ScenarioParameters, Side};
pub use parse::parse_float;
pub use loader::{load_scenarios, load_scenarios_from_reader};
