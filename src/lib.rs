pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::dynamics::RocketParameters;
pub use trajectory_system::events::{find_apogee_sample, find_burnout_sample};
pub use trajectory_system::integrator::{
    integrate, integrate_with_tolerances, Tolerances, TrajectorySample,
};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::record::{SimulationRecord, SimulationSummary, TrajectoryData};
pub use telemetry_system::store::{EventLog, StoredRecord};

// Re-export the emergency subsystem
pub use control::emergency::{protocol_for, EmergencyNotice, EmergencyProtocol};

// Re-export commonly used utilities
pub use utils::state_vector::StateVector;
