use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;
use crate::trajectory_system::dynamics::RocketParameters;
use crate::utils::state_vector::StateVector;

/// One evaluation point of the trajectory on the fixed reporting grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub altitude_m: f64,
    pub velocity_mps: f64,
}

/// Error tolerances for the adaptive step-size controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub relative: f64,
    pub absolute: f64,
}

impl Tolerances {
    pub fn new(relative: f64, absolute: f64) -> Self {
        Tolerances { relative, absolute }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances::new(1e-6, 1e-9)
    }
}

// Dormand-Prince 5(4) embedded pair. The fifth-order solution propagates;
// the difference against the fourth-order solution drives step control.
const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// Fifth-order minus fourth-order weights.
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 5.0;
const MIN_STEP: f64 = 1e-12;
// Resource guard against pathological configurations driving the adaptive
// controller into an effectively unbounded number of substeps.
const MAX_SUBSTEPS: usize = 1_000_000;
// Upper bound on the reporting grid itself. A span/step ratio past this is
// a resource-exhaustion condition, not a simulation.
const MAX_SAMPLES: usize = 10_000_000;

struct StepAttempt {
    state: StateVector,
    error_norm: f64,
}

fn dormand_prince_step(
    params: &RocketParameters,
    t: f64,
    state: StateVector,
    h: f64,
    tolerances: Tolerances,
) -> StepAttempt {
    let k1 = params.derivative(t, state);
    let k2 = params.derivative(t + C2 * h, state + k1 * (A21 * h));
    let k3 = params.derivative(t + C3 * h, state + (k1 * A31 + k2 * A32) * h);
    let k4 = params.derivative(t + C4 * h, state + (k1 * A41 + k2 * A42 + k3 * A43) * h);
    let k5 = params.derivative(
        t + C5 * h,
        state + (k1 * A51 + k2 * A52 + k3 * A53 + k4 * A54) * h,
    );
    let k6 = params.derivative(
        t + h,
        state + (k1 * A61 + k2 * A62 + k3 * A63 + k4 * A64 + k5 * A65) * h,
    );

    let next = state + (k1 * B1 + k3 * B3 + k4 * B4 + k5 * B5 + k6 * B6) * h;
    let k7 = params.derivative(t + h, next);

    let error = (k1 * E1 + k3 * E3 + k4 * E4 + k5 * E5 + k6 * E6 + k7 * E7) * h;

    let scale_altitude = tolerances.absolute
        + tolerances.relative * state.altitude_m.abs().max(next.altitude_m.abs());
    let scale_velocity = tolerances.absolute
        + tolerances.relative * state.velocity_mps.abs().max(next.velocity_mps.abs());
    let error_norm = (((error.altitude_m / scale_altitude).powi(2)
        + (error.velocity_mps / scale_velocity).powi(2))
        / 2.0)
        .sqrt();

    StepAttempt {
        state: next,
        error_norm,
    }
}

/// Integrates the ascent with the default tolerances of the model
/// (relative 1e-6, absolute 1e-9).
pub fn integrate(params: &RocketParameters) -> Result<Vec<TrajectorySample>, SimulationError> {
    integrate_with_tolerances(params, Tolerances::default())
}

/// Integrates the equations of motion from `t = 0` to `max_sim_time_s`,
/// reporting samples on the fixed grid `t_k = k * time_step_s`.
///
/// The grid is half-open: samples cover `[0, max_sim_time_s)`, so the series
/// length is `ceil(max_sim_time_s / time_step_s)` and always at least one.
/// Internal substeps are adaptive and land exactly on each grid time.
pub fn integrate_with_tolerances(
    params: &RocketParameters,
    tolerances: Tolerances,
) -> Result<Vec<TrajectorySample>, SimulationError> {
    params.validate()?;

    let grid_ratio = (params.max_sim_time_s / params.time_step_s).ceil();
    if !grid_ratio.is_finite() || grid_ratio > MAX_SAMPLES as f64 {
        return Err(SimulationError::IntegrationFailure(format!(
            "reporting grid of {:.0} samples exceeds the limit of {}",
            grid_ratio, MAX_SAMPLES
        )));
    }
    let sample_count = grid_ratio as usize;
    let mut series = Vec::with_capacity(sample_count);

    let mut state = StateVector::new(params.initial_altitude_m, params.initial_velocity_mps);
    let mut t = 0.0;
    let mut h = params.time_step_s;
    let mut substeps = 0usize;

    series.push(TrajectorySample {
        time_s: 0.0,
        altitude_m: state.altitude_m,
        velocity_mps: state.velocity_mps,
    });

    for k in 1..sample_count {
        let t_target = k as f64 * params.time_step_s;

        while t < t_target {
            if substeps >= MAX_SUBSTEPS {
                return Err(SimulationError::IntegrationFailure(format!(
                    "substep limit of {} exhausted at t = {:.6} s",
                    MAX_SUBSTEPS, t
                )));
            }
            substeps += 1;

            let remaining = t_target - t;
            let truncated = h >= remaining;
            let h_try = if truncated { remaining } else { h };

            let attempt = dormand_prince_step(params, t, state, h_try, tolerances);
            let accepted = attempt.error_norm.is_finite() && attempt.error_norm <= 1.0;

            // Standard fifth-order step-size update, clamped so a single
            // rejection cannot collapse the step and a single cheap step
            // cannot blow it up.
            let factor = if attempt.error_norm > 0.0 && attempt.error_norm.is_finite() {
                (SAFETY * attempt.error_norm.powf(-0.2)).clamp(MIN_FACTOR, MAX_FACTOR)
            } else if attempt.error_norm == 0.0 {
                MAX_FACTOR
            } else {
                MIN_FACTOR
            };

            if accepted {
                if !attempt.state.is_finite() {
                    return Err(SimulationError::IntegrationFailure(format!(
                        "non-finite state at t = {:.6} s",
                        t + h_try
                    )));
                }
                state = attempt.state;
                t = if truncated { t_target } else { t + h_try };
                // A truncated substep onto a grid time may be arbitrarily
                // short; never carry a degenerate step size forward.
                h = (h_try * factor).max(MIN_STEP);
            } else {
                h = h_try * factor;
                if h < MIN_STEP {
                    return Err(SimulationError::IntegrationFailure(format!(
                        "step size underflow ({:.3e} s) at t = {:.6} s",
                        h, t
                    )));
                }
            }
        }

        series.push(TrajectorySample {
            time_s: t_target,
            altitude_m: state.altitude_m,
            velocity_mps: state.velocity_mps,
        });
    }

    Ok(series)
}
