//! Error types for the simulator library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulatorError {
    /// A required numeric field was missing, NaN or infinite
    #[error("Please fill in all fields with valid numbers.")]
    InvalidInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown scenario '{name}' (expected 'current' or 'new')")]
    UnknownScenario { name: String },

    #[error("Scenario file has no '{side}' row")]
    MissingScenario { side: String },
}

pub type SimResult<T> = Result<T, SimulatorError>;
