//! The simulation engine
//!
//! `Simulation` owns the particle registry, the active force set, and the
//! boundary rule, and advances them tick by tick. It is either uninitialized
//! (nothing bound yet; stepping fails) or ready (fixed particle count, force
//! list, boundary, and timestep). The render collaborator only ever reads
//! positions between completed steps through the `&self` views

use crate::error::{SetupError, StepError};
use crate::simulation::boundary::{create_boundary, Boundary, BoundaryKind, Domain};
use crate::simulation::forces::{create_force, ForceKind, ForceSet};
use crate::simulation::integrator::euler_step;
use crate::simulation::states::{NVec3, Particle, ParticleVariant, System};

/// Everything a running simulation needs, bound once at setup
struct Ready {
    system: System,
    forces: ForceSet,
    boundary: Box<dyn Boundary + Send + Sync>,
    domain: Domain,
    dt: f64,
}

enum State {
    Uninitialized,
    Ready(Ready),
}

pub struct Simulation {
    state: State,
}

impl Simulation {
    /// A simulation with nothing bound yet
    /// `step()` on this state fails with [`StepError::NotReady`]
    pub fn uninitialized() -> Self {
        Self {
            state: State::Uninitialized,
        }
    }

    /// Build a ready simulation
    ///
    /// All particles share `variant` and start at the origin with zero
    /// velocity; use [`Simulation::set_positions`] and
    /// [`Simulation::set_velocities`] to place them. Forces are registered
    /// in the order given and duplicates are legal. The solid wall (when
    /// selected) reflects losslessly; build through
    /// [`Simulation::from_parts`] for a damped wall
    ///
    /// Nothing is constructed on failure
    pub fn new(
        particle_count: usize,
        variant: ParticleVariant,
        force_kinds: &[ForceKind],
        boundary_kind: BoundaryKind,
        dt: f64,
        domain: Domain,
    ) -> Result<Self, SetupError> {
        let particles = vec![Particle::from_variant(variant); particle_count];

        let mut forces = ForceSet::new();
        for &kind in force_kinds {
            forces = forces.with_boxed(create_force(kind));
        }

        let boundary = create_boundary(boundary_kind, 1.0)?;

        Self::from_parts(particles, forces, boundary, domain, dt)
    }

    /// Build a ready simulation from already-constructed parts
    ///
    /// This is the constructor the scenario builder uses; it validates the
    /// particle count, the timestep, and every particle's state
    pub fn from_parts(
        particles: Vec<Particle>,
        forces: ForceSet,
        boundary: Box<dyn Boundary + Send + Sync>,
        domain: Domain,
        dt: f64,
    ) -> Result<Self, SetupError> {
        if particles.is_empty() {
            return Err(SetupError::InvalidParam(
                "particle count must be > 0".into(),
            ));
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SetupError::InvalidParam(format!(
                "dt must be finite and > 0, got {dt}"
            )));
        }
        for (i, p) in particles.iter().enumerate() {
            if !p.x.iter().all(|c| c.is_finite()) || !p.v.iter().all(|c| c.is_finite()) {
                return Err(SetupError::InvalidParam(format!(
                    "particle {i} has a non-finite position or velocity"
                )));
            }
            if !p.density.is_finite() || p.density <= 0.0 {
                return Err(SetupError::InvalidParam(format!(
                    "particle {i} has a non-positive density"
                )));
            }
        }

        Ok(Self {
            state: State::Ready(Ready {
                system: System {
                    particles,
                    t: 0.0,
                },
                forces,
                boundary,
                domain,
                dt,
            }),
        })
    }

    /// Whether particles, forces, and boundary are bound
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Current simulation time (0.0 while uninitialized)
    pub fn time(&self) -> f64 {
        match &self.state {
            State::Uninitialized => 0.0,
            State::Ready(r) => r.system.t,
        }
    }

    /// Number of particles
    pub fn num_particles(&self) -> usize {
        self.particles().len()
    }

    /// Read-only ordered view of the particle registry
    /// Empty while uninitialized
    pub fn particles(&self) -> &[Particle] {
        match &self.state {
            State::Uninitialized => &[],
            State::Ready(r) => &r.system.particles,
        }
    }

    /// Positions as a Vec of vectors (what a renderer reads each frame)
    pub fn positions(&self) -> Vec<NVec3> {
        self.particles().iter().map(|p| p.x).collect()
    }

    /// Velocities as a Vec of vectors
    pub fn velocities(&self) -> Vec<NVec3> {
        self.particles().iter().map(|p| p.v).collect()
    }

    /// Overwrite all particle positions (validated as finite, exact length)
    /// Containment inside the domain stays the caller's responsibility; the
    /// boundary rule will correct stragglers on the next step
    pub fn set_positions(&mut self, xs: &[NVec3]) -> Result<(), SetupError> {
        let r = self.ready_mut()?;
        if xs.len() != r.system.particles.len() {
            return Err(SetupError::InvalidParam(format!(
                "expected {} positions, got {}",
                r.system.particles.len(),
                xs.len()
            )));
        }
        if !xs.iter().all(|x| x.iter().all(|c| c.is_finite())) {
            return Err(SetupError::InvalidParam(
                "positions must be finite".into(),
            ));
        }
        for (p, x) in r.system.particles.iter_mut().zip(xs.iter()) {
            p.x = *x;
        }
        Ok(())
    }

    /// Overwrite all particle velocities (validated as finite, exact length)
    pub fn set_velocities(&mut self, vs: &[NVec3]) -> Result<(), SetupError> {
        let r = self.ready_mut()?;
        if vs.len() != r.system.particles.len() {
            return Err(SetupError::InvalidParam(format!(
                "expected {} velocities, got {}",
                r.system.particles.len(),
                vs.len()
            )));
        }
        if !vs.iter().all(|v| v.iter().all(|c| c.is_finite())) {
            return Err(SetupError::InvalidParam(
                "velocities must be finite".into(),
            ));
        }
        for (p, v) in r.system.particles.iter_mut().zip(vs.iter()) {
            p.v = *v;
        }
        Ok(())
    }

    /// Advance the simulation by one tick
    ///
    /// Sums the active forces into a per-particle acceleration, integrates
    /// with semi-implicit Euler, and applies the boundary rule. Fails with
    /// [`StepError::NotReady`] on an uninitialized simulation, in which case
    /// no particle state is touched
    pub fn step(&mut self) -> Result<(), StepError> {
        match &mut self.state {
            State::Uninitialized => Err(StepError::NotReady),
            State::Ready(r) => {
                euler_step(&mut r.system, &r.forces, r.boundary.as_ref(), &r.domain, r.dt);
                Ok(())
            }
        }
    }

    fn ready_mut(&mut self) -> Result<&mut Ready, SetupError> {
        match &mut self.state {
            State::Uninitialized => Err(SetupError::InvalidParam(
                "simulation has no particles bound".into(),
            )),
            State::Ready(r) => Ok(r),
        }
    }
}
