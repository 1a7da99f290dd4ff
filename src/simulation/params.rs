//! Numerical parameters for a simulation run
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size and end time,
//! - wall restitution for the solid boundary,
//! - random seed for the scatter spawner

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub dt: f64, // fixed step size
    pub restitution: f64, // solid-wall velocity retention, in (0, 1]
    pub seed: u64, // deterministic seed for scatter spawning
}
