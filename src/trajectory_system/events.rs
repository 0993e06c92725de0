use crate::errors::SimulationError;
use crate::trajectory_system::integrator::TrajectorySample;

/// First sample at or after engine cutoff.
///
/// Fails with `NoBurnoutInRange` when the burn outlasts the simulated span,
/// so callers never index past the series.
pub fn find_burnout_sample(
    series: &[TrajectorySample],
    burn_time_s: f64,
) -> Result<TrajectorySample, SimulationError> {
    series
        .iter()
        .copied()
        .find(|sample| sample.time_s >= burn_time_s)
        .ok_or(SimulationError::NoBurnoutInRange {
            burn_time_s,
            last_time_s: series.last().map(|sample| sample.time_s).unwrap_or(0.0),
        })
}

/// Sample of maximum altitude; the earliest one on ties.
pub fn find_apogee_sample(
    series: &[TrajectorySample],
) -> Result<TrajectorySample, SimulationError> {
    let mut best = *series.first().ok_or(SimulationError::EmptySeries)?;
    for sample in &series[1..] {
        if sample.altitude_m > best.altitude_m {
            best = *sample;
        }
    }
    Ok(best)
}
