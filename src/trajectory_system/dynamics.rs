use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, ATMOSPHERE_CEILING, ATMOSPHERE_SCALE_HEIGHT, DEFAULT_BURN_TIME,
    DEFAULT_DRAG_COEFFICIENT, DEFAULT_EXHAUST_VELOCITY, DEFAULT_INITIAL_MASS, DEFAULT_MAX_SIM_TIME,
    DEFAULT_MAX_THRUST, DEFAULT_PROPELLANT_MASS, DEFAULT_REFERENCE_AREA, DEFAULT_TIME_STEP,
    EARTH_MASS, EARTH_RADIUS, GRAVITATIONAL_CONSTANT,
};
use crate::errors::SimulationError;
use crate::utils::state_vector::StateVector;

/// Physical and numerical configuration for a single ascent run.
///
/// Immutable once handed to the integrator; each run is a pure function of
/// one of these values.
#[derive(Debug, Clone, PartialEq)]
pub struct RocketParameters {
    pub initial_mass_kg: f64,
    pub propellant_mass_kg: f64,
    pub max_thrust_n: f64,
    pub burn_time_s: f64,
    /// Retained as vehicle metadata; the dynamics do not use it.
    pub exhaust_velocity_mps: f64,
    pub drag_coefficient: f64,
    pub reference_area_m2: f64,
    pub initial_altitude_m: f64,
    pub initial_velocity_mps: f64,
    pub max_sim_time_s: f64,
    pub time_step_s: f64,
}

impl Default for RocketParameters {
    fn default() -> Self {
        RocketParameters {
            initial_mass_kg: DEFAULT_INITIAL_MASS,
            propellant_mass_kg: DEFAULT_PROPELLANT_MASS,
            max_thrust_n: DEFAULT_MAX_THRUST,
            burn_time_s: DEFAULT_BURN_TIME,
            exhaust_velocity_mps: DEFAULT_EXHAUST_VELOCITY,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            reference_area_m2: DEFAULT_REFERENCE_AREA,
            initial_altitude_m: 0.0,
            initial_velocity_mps: 0.0,
            max_sim_time_s: DEFAULT_MAX_SIM_TIME,
            time_step_s: DEFAULT_TIME_STEP,
        }
    }
}

impl RocketParameters {
    /// Rejects configurations the model cannot run, before integration begins.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            self.initial_mass_kg,
            self.propellant_mass_kg,
            self.max_thrust_n,
            self.burn_time_s,
            self.exhaust_velocity_mps,
            self.drag_coefficient,
            self.reference_area_m2,
            self.initial_altitude_m,
            self.initial_velocity_mps,
            self.max_sim_time_s,
            self.time_step_s,
        ];
        if fields.iter().any(|f| !f.is_finite()) {
            return Err(SimulationError::InvalidParameters(
                "all parameters must be finite".to_string(),
            ));
        }
        if self.initial_mass_kg <= 0.0 {
            return Err(SimulationError::InvalidParameters(format!(
                "initial mass must be positive, got {} kg",
                self.initial_mass_kg
            )));
        }
        if self.propellant_mass_kg < 0.0 || self.propellant_mass_kg > self.initial_mass_kg {
            return Err(SimulationError::InvalidParameters(format!(
                "propellant mass {} kg must lie within [0, initial mass {} kg]",
                self.propellant_mass_kg, self.initial_mass_kg
            )));
        }
        if self.burn_time_s <= 0.0 {
            return Err(SimulationError::InvalidParameters(format!(
                "burn time must be positive, got {} s",
                self.burn_time_s
            )));
        }
        if self.max_thrust_n < 0.0 {
            return Err(SimulationError::InvalidParameters(format!(
                "thrust must be non-negative, got {} N",
                self.max_thrust_n
            )));
        }
        if self.max_sim_time_s <= 0.0 || self.time_step_s <= 0.0 {
            return Err(SimulationError::InvalidParameters(format!(
                "simulation span ({} s) and time step ({} s) must be positive",
                self.max_sim_time_s, self.time_step_s
            )));
        }
        Ok(())
    }

    pub fn dry_mass_kg(&self) -> f64 {
        self.initial_mass_kg - self.propellant_mass_kg
    }

    /// Vehicle mass at elapsed time `t`. Propellant depletes linearly over
    /// the burn and reaches the dry mass exactly at burnout.
    pub fn mass_at(&self, t: f64) -> f64 {
        if t < self.burn_time_s {
            let burn_rate = self.propellant_mass_kg / self.burn_time_s;
            self.initial_mass_kg - burn_rate * t
        } else {
            self.dry_mass_kg()
        }
    }

    /// Step thrust profile: full thrust during the burn, nothing after.
    pub fn thrust_at(&self, t: f64) -> f64 {
        if t < self.burn_time_s {
            self.max_thrust_n
        } else {
            0.0
        }
    }

    /// Inverse-square gravitational force on the vehicle.
    ///
    /// Uses the launch mass `mass_at(0)` rather than the current mass. This
    /// is a deliberate simplification of the model and is kept so that the
    /// numbers match the reference outputs.
    pub fn gravity_force(&self, altitude_m: f64) -> f64 {
        let r = EARTH_RADIUS + altitude_m;
        GRAVITATIONAL_CONSTANT * EARTH_MASS * self.mass_at(0.0) / (r * r)
    }

    /// Exponential atmosphere, cut to hard vacuum above the ceiling.
    pub fn air_density(&self, altitude_m: f64) -> f64 {
        if altitude_m > ATMOSPHERE_CEILING {
            return 0.0;
        }
        AIR_DENSITY_SEA_LEVEL * (-altitude_m / ATMOSPHERE_SCALE_HEIGHT).exp()
    }

    /// Signed quadratic drag: `v * |v|` makes the force oppose motion.
    pub fn drag_force(&self, velocity_mps: f64, altitude_m: f64) -> f64 {
        let rho = self.air_density(altitude_m);
        0.5 * rho * velocity_mps * velocity_mps.abs() * self.drag_coefficient
            * self.reference_area_m2
    }

    /// Right-hand side of the equations of motion.
    ///
    /// Ground-contact boundary condition: while the vehicle sits at or below
    /// ground level and the net force points downward, the state is held
    /// frozen. No bounce, no penetration handling beyond that.
    pub fn derivative(&self, t: f64, state: StateVector) -> StateVector {
        let m = self.mass_at(t);
        let thrust = self.thrust_at(t);
        let gravity = self.gravity_force(state.altitude_m);
        let drag = self.drag_force(state.velocity_mps, state.altitude_m);
        let net_force = thrust - gravity - drag;

        if state.altitude_m <= 0.0 && net_force < 0.0 {
            return StateVector::new(0.0, 0.0);
        }

        StateVector::new(state.velocity_mps, net_force / m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_mass_depletes_linearly_to_dry_mass() {
        let params = RocketParameters::default();

        assert_eq!(params.mass_at(0.0), params.initial_mass_kg);
        assert_relative_eq!(
            params.mass_at(params.burn_time_s / 2.0),
            params.initial_mass_kg - params.propellant_mass_kg / 2.0,
            epsilon = 1e-6
        );
        assert_eq!(params.mass_at(params.burn_time_s), params.dry_mass_kg());
        assert_eq!(params.mass_at(params.burn_time_s + 100.0), params.dry_mass_kg());
    }

    #[test]
    fn test_mass_is_monotonically_non_increasing() {
        let params = RocketParameters::default();
        let mut previous = params.mass_at(0.0);
        let mut t = 0.0;
        while t < params.max_sim_time_s {
            let current = params.mass_at(t);
            assert!(current <= previous);
            assert!(current >= params.dry_mass_kg());
            previous = current;
            t += 1.0;
        }
    }

    #[test]
    fn test_mass_constant_without_propellant() {
        let params = RocketParameters {
            propellant_mass_kg: 0.0,
            ..RocketParameters::default()
        };

        for t in [0.0, 10.0, params.burn_time_s, params.burn_time_s * 2.0] {
            assert_eq!(params.mass_at(t), params.initial_mass_kg);
        }
        // Thrust is still a function of time only, not of remaining propellant.
        assert_eq!(params.thrust_at(1.0), params.max_thrust_n);
    }

    #[test]
    fn test_thrust_steps_to_zero_at_burnout() {
        let params = RocketParameters::default();

        assert_eq!(params.thrust_at(0.0), params.max_thrust_n);
        assert_eq!(params.thrust_at(params.burn_time_s - 1e-9), params.max_thrust_n);
        assert_eq!(params.thrust_at(params.burn_time_s), 0.0);
        assert_eq!(params.thrust_at(params.burn_time_s + 50.0), 0.0);
    }

    #[test]
    fn test_gravity_force_at_sea_level() {
        let params = RocketParameters::default();
        let expected = GRAVITATIONAL_CONSTANT * EARTH_MASS * params.initial_mass_kg
            / (EARTH_RADIUS * EARTH_RADIUS);

        assert_relative_eq!(params.gravity_force(0.0), expected, epsilon = 1e-9);
        // ~9.82 m/s² at the surface times launch mass
        assert_relative_eq!(
            params.gravity_force(0.0) / params.initial_mass_kg,
            9.82,
            epsilon = 1e-2
        );
    }

    #[test]
    fn test_gravity_force_uses_launch_mass_after_burnout() {
        let params = RocketParameters::default();
        // Same altitude, time past burnout: force is unchanged because the
        // model keeps the launch mass in this term.
        let before = params.gravity_force(1_000.0);
        assert!(params.mass_at(params.max_sim_time_s) < params.initial_mass_kg);
        assert_eq!(params.gravity_force(1_000.0), before);
    }

    #[test]
    fn test_gravity_weakens_with_altitude() {
        let params = RocketParameters::default();
        assert!(params.gravity_force(100_000.0) < params.gravity_force(0.0));
        assert!(params.gravity_force(500_000.0) < params.gravity_force(100_000.0));
    }

    #[test]
    fn test_air_density_profile() {
        let params = RocketParameters::default();

        assert_abs_diff_eq!(params.air_density(0.0), AIR_DENSITY_SEA_LEVEL, epsilon = 1e-12);
        assert_relative_eq!(
            params.air_density(ATMOSPHERE_SCALE_HEIGHT),
            AIR_DENSITY_SEA_LEVEL * (-1.0f64).exp(),
            epsilon = 1e-9
        );
        // Density is still the exponential value at the ceiling itself, and
        // exactly zero beyond it.
        assert!(params.air_density(ATMOSPHERE_CEILING) > 0.0);
        assert_eq!(params.air_density(ATMOSPHERE_CEILING + 1.0), 0.0);
    }

    #[test]
    fn test_drag_opposes_motion_direction() {
        let params = RocketParameters::default();

        let ascending = params.drag_force(100.0, 0.0);
        let descending = params.drag_force(-100.0, 0.0);

        assert!(ascending > 0.0);
        assert!(descending < 0.0);
        assert_abs_diff_eq!(ascending, -descending, epsilon = 1e-9);
        assert_eq!(params.drag_force(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_drag_vanishes_above_atmosphere() {
        let params = RocketParameters::default();
        assert_eq!(params.drag_force(1_000.0, ATMOSPHERE_CEILING + 1.0), 0.0);
    }

    #[test]
    fn test_derivative_clamps_on_pad_without_thrust() {
        let params = RocketParameters {
            max_thrust_n: 0.0,
            ..RocketParameters::default()
        };

        let grounded = StateVector::new(0.0, 0.0);
        assert_eq!(params.derivative(0.0, grounded), StateVector::new(0.0, 0.0));
        assert_eq!(params.derivative(300.0, grounded), StateVector::new(0.0, 0.0));
    }

    #[test]
    fn test_derivative_during_powered_ascent() {
        let params = RocketParameters::default();
        let state = StateVector::new(0.0, 0.0);

        let derivative = params.derivative(0.0, state);
        let expected_acceleration =
            (params.max_thrust_n - params.gravity_force(0.0)) / params.initial_mass_kg;

        assert_eq!(derivative.altitude_m, 0.0);
        assert_relative_eq!(derivative.velocity_mps, expected_acceleration, epsilon = 1e-9);
        assert!(derivative.velocity_mps > 0.0);
    }

    #[test]
    fn test_derivative_in_free_coast() {
        let params = RocketParameters::default();
        let state = StateVector::new(90_000.0, 1_500.0);
        let t = params.burn_time_s + 10.0;

        let derivative = params.derivative(t, state);

        assert_eq!(derivative.altitude_m, 1_500.0);
        // Above the atmosphere with no thrust: pure gravity deceleration.
        assert_relative_eq!(
            derivative.velocity_mps,
            -params.gravity_force(90_000.0) / params.dry_mass_kg(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_validation_rejects_bad_configurations() {
        let too_much_propellant = RocketParameters {
            propellant_mass_kg: DEFAULT_INITIAL_MASS + 1.0,
            ..RocketParameters::default()
        };
        assert!(matches!(
            too_much_propellant.validate(),
            Err(SimulationError::InvalidParameters(_))
        ));

        let zero_burn = RocketParameters {
            burn_time_s: 0.0,
            ..RocketParameters::default()
        };
        assert!(zero_burn.validate().is_err());

        let negative_thrust = RocketParameters {
            max_thrust_n: -1.0,
            ..RocketParameters::default()
        };
        assert!(negative_thrust.validate().is_err());

        let nan_step = RocketParameters {
            time_step_s: f64::NAN,
            ..RocketParameters::default()
        };
        assert!(nan_step.validate().is_err());

        assert!(RocketParameters::default().validate().is_ok());
    }
}
