//! Boundary conditions for domain containment
//!
//! After integration each particle is corrected exactly once per tick to
//! keep it inside the simulation domain:
//! - `SolidWall` clamps to the domain faces and reflects velocity
//! - `PeriodicWrap` folds positions around to the opposite face

use serde::Deserialize;

use crate::error::SetupError;
use crate::simulation::states::{NVec3, Particle};

/// Axis-aligned simulation domain box
#[derive(Debug, Clone, Copy)]
pub struct Domain {
    pub min: NVec3, // lower corner
    pub max: NVec3, // upper corner
}

impl Domain {
    /// Validate and build a domain box
    /// Components must be finite with min < max on every axis
    pub fn new(min: NVec3, max: NVec3) -> Result<Self, SetupError> {
        if !min.iter().all(|c| c.is_finite()) || !max.iter().all(|c| c.is_finite()) {
            return Err(SetupError::InvalidParam(
                "domain bounds must be finite".into(),
            ));
        }
        for k in 0..3 {
            if min[k] >= max[k] {
                return Err(SetupError::InvalidParam(format!(
                    "domain min must be below max on axis {k}: {} >= {}",
                    min[k], max[k]
                )));
            }
        }
        Ok(Self { min, max })
    }

    /// The unit cube [0,1] on every axis
    pub fn unit() -> Self {
        Self {
            min: NVec3::zeros(),
            max: NVec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Edge length on axis `k`
    pub fn extent(&self, k: usize) -> f64 {
        self.max[k] - self.min[k]
    }

    /// Whether `x` lies inside or on the boundary of the box
    pub fn contains(&self, x: &NVec3) -> bool {
        (0..3).all(|k| x[k] >= self.min[k] && x[k] <= self.max[k])
    }
}

/// Trait for post-integration containment rules
/// `apply` runs once per particle per tick, after the position update, and
/// must leave the particle within or at the domain boundary
pub trait Boundary {
    fn apply(&self, domain: &Domain, p: &mut Particle);
}

/// Symbolic boundary names accepted by the factory
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    #[serde(rename = "solid")] // reflective walls
    Solid,

    #[serde(rename = "periodic")] // wrap-around
    Periodic,
}

impl BoundaryKind {
    /// Resolve a symbolic boundary name ("solid", "periodic")
    /// Unknown names are a recoverable setup error carrying the offending name
    pub fn from_name(name: &str) -> Result<Self, SetupError> {
        match name {
            "solid" => Ok(Self::Solid),
            "periodic" => Ok(Self::Periodic),
            other => Err(SetupError::UnknownBoundaryKind(other.to_string())),
        }
    }
}

/// Map a boundary kind to a concrete rule
/// `restitution` only affects solid walls; 1.0 is a lossless reflection
pub fn create_boundary(
    kind: BoundaryKind,
    restitution: f64,
) -> Result<Box<dyn Boundary + Send + Sync>, SetupError> {
    match kind {
        BoundaryKind::Solid => Ok(Box::new(SolidWall::new(restitution)?)),
        BoundaryKind::Periodic => Ok(Box::new(PeriodicWrap)),
    }
}

/// Reflective wall on every face of the domain box
///
/// A particle pushed past a bound is clamped onto it and the velocity
/// component on that axis is turned back inward, scaled by `restitution`.
/// Applying the rule to an already-contained particle changes nothing
pub struct SolidWall {
    restitution: f64, // velocity retained per bounce, in (0, 1]
}

impl SolidWall {
    /// Build a solid wall rule; `restitution` must be finite and in (0, 1]
    pub fn new(restitution: f64) -> Result<Self, SetupError> {
        if !restitution.is_finite() || restitution <= 0.0 || restitution > 1.0 {
            return Err(SetupError::InvalidParam(format!(
                "restitution must be in (0, 1], got {restitution}"
            )));
        }
        Ok(Self { restitution })
    }
}

impl Boundary for SolidWall {
    fn apply(&self, domain: &Domain, p: &mut Particle) {
        for k in 0..3 {
            if p.x[k] < domain.min[k] {
                // Clamp onto the lower face, velocity points up the axis
                p.x[k] = domain.min[k];
                p.v[k] = p.v[k].abs() * self.restitution;
            } else if p.x[k] > domain.max[k] {
                // Clamp onto the upper face, velocity points down the axis
                p.x[k] = domain.max[k];
                p.v[k] = -p.v[k].abs() * self.restitution;
            }
        }
    }
}

/// Wrap-around boundary
///
/// Positions are folded back into the domain by the Euclidean remainder of
/// their offset from the lower corner, so an overshoot of several whole
/// domain extents in one tick still lands inside. Velocity is untouched
pub struct PeriodicWrap;

impl Boundary for PeriodicWrap {
    fn apply(&self, domain: &Domain, p: &mut Particle) {
        for k in 0..3 {
            let extent = domain.extent(k);
            let offset = p.x[k] - domain.min[k];
            if offset < 0.0 || offset > extent {
                p.x[k] = domain.min[k] + offset.rem_euclid(extent);
            }
        }
    }
}
