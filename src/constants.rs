// Physical Constants
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11; // N⋅m²/kg²
pub const EARTH_MASS: f64 = 5.972e24; // kg
pub const EARTH_RADIUS: f64 = 6_371_000.0; // meters

// Atmosphere Model (simplified exponential profile)
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const ATMOSPHERE_SCALE_HEIGHT: f64 = 8_500.0; // meters
pub const ATMOSPHERE_CEILING: f64 = 80_000.0; // meters, vacuum above

// Reference Vehicle (single-stage heavy lifter)
pub const DEFAULT_INITIAL_MASS: f64 = 549_000.0; // kg
pub const DEFAULT_PROPELLANT_MASS: f64 = 507_000.0; // kg
pub const DEFAULT_MAX_THRUST: f64 = 7_607_000.0; // N
pub const DEFAULT_BURN_TIME: f64 = 162.0; // s
pub const DEFAULT_EXHAUST_VELOCITY: f64 = 3_000.0; // m/s
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.5;
pub const DEFAULT_REFERENCE_AREA: f64 = 10.0; // m²

// Simulation Parameters
pub const DEFAULT_MAX_SIM_TIME: f64 = 600.0; // s
pub const DEFAULT_TIME_STEP: f64 = 0.1; // s
