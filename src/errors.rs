use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Integration failure: {0}")]
    IntegrationFailure(String),

    #[error("No burnout in range: burn time {burn_time_s} s is beyond the last simulated sample at {last_time_s} s")]
    NoBurnoutInRange { burn_time_s: f64, last_time_s: f64 },

    #[error("Trajectory series is empty")]
    EmptySeries,
}
