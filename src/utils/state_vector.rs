use std::ops::{Add, Mul, Neg, Sub};

/// The ODE integration variable for a vertical ascent: altitude and the
/// signed vertical velocity. Arithmetic is component-wise so Runge-Kutta
/// stage combinations read like the textbook formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub altitude_m: f64,
    pub velocity_mps: f64,
}

impl StateVector {
    pub fn new(altitude_m: f64, velocity_mps: f64) -> Self {
        StateVector {
            altitude_m,
            velocity_mps,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.altitude_m.is_finite() && self.velocity_mps.is_finite()
    }
}

impl Add for StateVector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        StateVector::new(
            self.altitude_m + other.altitude_m,
            self.velocity_mps + other.velocity_mps,
        )
    }
}

impl Sub for StateVector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        StateVector::new(
            self.altitude_m - other.altitude_m,
            self.velocity_mps - other.velocity_mps,
        )
    }
}

impl Mul<f64> for StateVector {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        StateVector::new(self.altitude_m * scalar, self.velocity_mps * scalar)
    }
}

impl Mul<StateVector> for f64 {
    type Output = StateVector;

    fn mul(self, state: StateVector) -> StateVector {
        StateVector::new(self * state.altitude_m, self * state.velocity_mps)
    }
}

impl Neg for StateVector {
    type Output = Self;

    fn neg(self) -> Self {
        StateVector::new(-self.altitude_m, -self.velocity_mps)
    }
}
