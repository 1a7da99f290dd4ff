//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - a ready `Simulation` with particles placed, forces registered in the
//!   configured order, and the boundary rule bound
//!
//! The driver consumes the bundle and steps the simulation to `t_end`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{ScenarioConfig, SpawnConfig};
use crate::error::SetupError;
use crate::simulation::boundary::{create_boundary, Domain};
use crate::simulation::engine::Simulation;
use crate::simulation::forces::{create_force, ForceSet};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Particle};

/// A fully-initialized simulation run
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the numerical parameters and the ready simulation. The
/// external presentation layer reads positions from `simulation` between
/// steps; it never mutates simulation state
pub struct Scenario {
    pub parameters: Parameters,
    pub simulation: Simulation,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SetupError> {
        // Domain: validated axis-aligned box
        let domain = Domain::new(NVec3::from(cfg.domain.min), NVec3::from(cfg.domain.max))?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if !p_cfg.t_end.is_finite() || p_cfg.t_end < 0.0 {
            return Err(SetupError::InvalidParam(format!(
                "t_end must be finite and >= 0, got {}",
                p_cfg.t_end
            )));
        }
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            dt: p_cfg.dt,
            restitution: cfg.engine.restitution.unwrap_or(1.0),
            seed: p_cfg.seed.unwrap_or(0),
        };

        // Particles: explicit list, or scatter spawn over the domain
        let particles: Vec<Particle> = match (&cfg.particles[..], &cfg.spawn) {
            ([], None) => {
                return Err(SetupError::InvalidParam(
                    "scenario needs a particle list or a spawn block".into(),
                ))
            }
            ([], Some(spawn)) => scatter(spawn, &domain, parameters.seed),
            (_, Some(_)) => {
                return Err(SetupError::InvalidParam(
                    "give either a particle list or a spawn block, not both".into(),
                ))
            }
            (listed, None) => listed
                .iter()
                .map(|pc| Particle::new(pc.variant, NVec3::from(pc.x), NVec3::from(pc.v)))
                .collect(),
        };

        // Forces: register in the configured order
        let mut forces = ForceSet::new();
        for &kind in &cfg.forces {
            forces = forces.with_boxed(create_force(kind));
        }

        // Boundary rule, then the validated simulation itself
        let boundary = create_boundary(cfg.engine.boundary, parameters.restitution)?;
        let simulation = Simulation::from_parts(particles, forces, boundary, domain, parameters.dt)?;

        Ok(Self {
            parameters,
            simulation,
        })
    }
}

/// Scatter `count` particles uniformly over the domain with zero velocity
/// Deterministic for a given seed
fn scatter(spawn: &SpawnConfig, domain: &Domain, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..spawn.count)
        .map(|_| {
            let mut p = Particle::from_variant(spawn.variant);
            for k in 0..3 {
                p.x[k] = rng.random_range(domain.min[k]..domain.max[k]);
            }
            p
        })
        .collect()
}
