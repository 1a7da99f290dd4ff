//! Force contributors for the particle engine
//!
//! Defines the per-particle force model trait, the concrete gravity and
//! viscosity models, and the `ForceSet` that sums their contributions
//! into a single acceleration vector per particle

use serde::Deserialize;

use crate::error::SetupError;
use crate::simulation::states::{NVec3, Particle, System};

/// Collection of force terms (gravity, viscosity, etc)
/// Each term implements [`ForceModel`] and their contributions are summed
/// into a single acceleration vector per particle
pub struct ForceSet {
    terms: Vec<Box<dyn ForceModel + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with(mut self, term: impl ForceModel + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Add an already-boxed force term (what the factory hands out)
    pub fn with_boxed(mut self, term: Box<dyn ForceModel + Send + Sync>) -> Self {
        self.terms.push(term);
        self
    }

    /// Number of registered terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations for all particles in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    ///
    /// Terms are evaluated in registration order, so the floating-point
    /// summation order is fixed and runs are reproducible
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all force contributors
        for term in &self.terms {
            for (p, a) in sys.particles.iter().zip(out.iter_mut()) {
                *a += term.accel(p);
            }
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for per-particle acceleration sources
/// `accel` is a pure function of the particle's current state and must not
/// mutate it; all mutation belongs to the integrator
pub trait ForceModel {
    fn accel(&self, p: &Particle) -> NVec3;
}

/// Symbolic force model names accepted by the factory
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceKind {
    #[serde(rename = "gravity")] // uniform gravitational field
    Gravity,

    #[serde(rename = "viscosity")] // inert drag placeholder
    Viscosity,
}

impl ForceKind {
    /// Resolve a symbolic force name ("gravity", "viscosity")
    /// Unknown names are a recoverable setup error carrying the offending name
    pub fn from_name(name: &str) -> Result<Self, SetupError> {
        match name {
            "gravity" => Ok(Self::Gravity),
            "viscosity" => Ok(Self::Viscosity),
            other => Err(SetupError::UnknownForceKind(other.to_string())),
        }
    }
}

/// Map a force kind to a concrete model
pub fn create_force(kind: ForceKind) -> Box<dyn ForceModel + Send + Sync> {
    match kind {
        ForceKind::Gravity => Box::new(Gravity::default()),
        ForceKind::Viscosity => Box::new(Viscosity),
    }
}

/// Uniform gravitational field
/// Contributes a constant downward acceleration regardless of particle state
pub struct Gravity {
    pub g: NVec3, // field acceleration, (0, -9.8, 0) by default
}

impl Default for Gravity {
    fn default() -> Self {
        Self {
            g: NVec3::new(0.0, -9.8, 0.0),
        }
    }
}

impl ForceModel for Gravity {
    fn accel(&self, _p: &Particle) -> NVec3 {
        self.g
    }
}

/// Viscous drag placeholder
///
/// Always contributes zero acceleration. Kept inert on purpose so that
/// activating it never perturbs a run.
/// TODO: velocity-proportional drag law (-c * v) with a configurable
/// coefficient, once drag is wanted in scenarios
pub struct Viscosity;

impl ForceModel for Viscosity {
    fn accel(&self, _p: &Particle) -> NVec3 {
        NVec3::zeros()
    }
}
