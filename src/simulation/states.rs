//! Core state types for the particle fluid simulation.
//!
//! Defines the particle record and the registry that owns it:
//! - `ParticleVariant` material presets selected by name at setup
//! - `Particle` with position, velocity, and material attributes
//! - `System` holding the particle list and the current simulation time `t`

use nalgebra::Vector3;
use serde::Deserialize;

use crate::error::SetupError;

pub type NVec3 = Vector3<f64>;

/// Material preset for a particle
/// Fixes the initial density/pressure pair; there is no behavioral
/// divergence between variants beyond those initial values
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleVariant {
    #[serde(rename = "water")] // density 1000.0, pressure 0.0
    Water,

    #[serde(rename = "oil")] // density 800.0, pressure 0.0
    Oil,
}

impl ParticleVariant {
    /// Resolve a symbolic variant name ("water", "oil")
    /// Unknown names are a recoverable setup error carrying the offending name
    pub fn from_name(name: &str) -> Result<Self, SetupError> {
        match name {
            "water" => Ok(Self::Water),
            "oil" => Ok(Self::Oil),
            other => Err(SetupError::UnknownVariant(other.to_string())),
        }
    }

    /// Rest density of this material
    pub fn density(self) -> f64 {
        match self {
            Self::Water => 1000.0,
            Self::Oil => 800.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub density: f64, // material density, fixed at creation
    pub pressure: f64, // material pressure, starts at zero
    pub variant: ParticleVariant, // material preset tag
}

impl Particle {
    /// Build a particle from its material preset
    /// Position and velocity start at zero; placement is the caller's job
    pub fn from_variant(variant: ParticleVariant) -> Self {
        Self {
            x: NVec3::zeros(),
            v: NVec3::zeros(),
            density: variant.density(),
            pressure: 0.0,
            variant,
        }
    }

    /// Build a particle from its material preset at an explicit state
    pub fn new(variant: ParticleVariant, x: NVec3, v: NVec3) -> Self {
        Self {
            x,
            v,
            ..Self::from_variant(variant)
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub particles: Vec<Particle>, // ordered particle registry
    pub t: f64, // time
}
