pub mod dynamics;
pub mod events;
pub mod integrator;
