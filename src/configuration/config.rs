//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – boundary selection and wall restitution
//! - [`ParametersConfig`] – timestep, end time, spawn seed
//! - [`DomainConfig`]     – axis-aligned domain box
//! - [`ParticleConfig`]   – explicit initial state for one particle
//! - [`SpawnConfig`]      – seeded uniform scatter placement
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   boundary: "solid"       # or "periodic"
//!   restitution: 0.5        # solid-wall velocity retention, (0, 1]
//!
//! parameters:
//!   t_end: 2.0              # total simulation time
//!   dt: 0.01                # fixed step size
//!   seed: 42                # deterministic spawn seed
//!
//! domain:
//!   min: [ 0.0, 0.0, 0.0 ]
//!   max: [ 1.0, 1.0, 1.0 ]
//!
//! forces: [ "gravity", "viscosity" ]
//!
//! particles:
//!   - variant: "water"
//!     x: [ 0.5, 0.5, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//! ```
//!
//! Instead of an explicit `particles:` list, a scenario may scatter a
//! population uniformly over the domain:
//!
//! ```yaml
//! spawn:
//!   count: 1000
//!   variant: "water"
//! ```
//!
//! The scenario builder then maps this configuration into the runtime
//! simulation representation.

use serde::Deserialize;

use crate::simulation::boundary::BoundaryKind;
use crate::simulation::forces::ForceKind;
use crate::simulation::states::ParticleVariant;

/// Boundary selection and wall behavior
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub boundary: BoundaryKind, // "solid" or "periodic"
    pub restitution: Option<f64>, // solid-wall velocity retention; 1.0 when omitted
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub dt: f64,    // fixed step size
    pub seed: Option<u64>, // spawn seed; 0 when omitted
}

/// Axis-aligned domain box
#[derive(Deserialize, Debug)]
pub struct DomainConfig {
    pub min: [f64; 3], // lower corner
    pub max: [f64; 3], // upper corner
}

/// Explicit initial state for a single particle
#[derive(Deserialize, Debug)]
pub struct ParticleConfig {
    pub variant: ParticleVariant, // material preset ("water", "oil")
    pub x: [f64; 3], // initial position
    pub v: [f64; 3], // initial velocity
}

/// Scatter a population uniformly over the domain at zero velocity
#[derive(Deserialize, Debug)]
pub struct SpawnConfig {
    pub count: usize, // number of particles
    pub variant: ParticleVariant, // shared material preset
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // boundary selection and wall behavior
    pub parameters: ParametersConfig, // numerical parameters
    pub domain: DomainConfig, // domain box
    pub forces: Vec<ForceKind>, // active force models, in evaluation order
    #[serde(default)]
    pub particles: Vec<ParticleConfig>, // explicit initial particle states
    pub spawn: Option<SpawnConfig>, // alternative to `particles`
}
