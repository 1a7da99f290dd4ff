//! Fixed-step time integration for the particle system
//!
//! Semi-implicit (symplectic) Euler driven by a `ForceSet` and finished by
//! a boundary pass, updating positions, velocities, and `sys.t` in place

use super::boundary::{Boundary, Domain};
use super::forces::ForceSet;
use super::states::{NVec3, System};

/// Advance the system by one step of semi-implicit Euler
///
/// The velocity update comes first and the position update uses the
/// already-updated velocity:
/// v_n+1 = v_n + dt * a_n
/// x_n+1 = x_n + dt * v_n+1
/// The boundary rule then corrects every particle exactly once
pub fn euler_step(
    sys: &mut System,
    forces: &ForceSet,
    boundary: &dyn Boundary,
    domain: &Domain,
    dt: f64,
) {
    let n = sys.particles.len();
    if n == 0 { // no particles, just advance time
        sys.t += dt;
        return;
    }

    // a[i] holds the summed acceleration for particle i at the current state
    let mut a = vec![NVec3::zeros(); n];
    forces.accumulate_accels(&*sys, &mut a);

    // Kick: v_n+1 = v_n + dt * a_n
    for (p, ai) in sys.particles.iter_mut().zip(a.iter()) {
        p.v += dt * *ai;
    }

    // Drift with the updated velocity: x_n+1 = x_n + dt * v_n+1
    for p in sys.particles.iter_mut() {
        p.x += dt * p.v;
    }

    // Containment: one boundary application per particle
    for p in sys.particles.iter_mut() {
        boundary.apply(domain, p);
    }

    // Increment the system time by one full step
    sys.t += dt;
}
