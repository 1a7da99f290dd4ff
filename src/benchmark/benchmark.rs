use std::time::Instant;
use crate::simulation::boundary::{BoundaryKind, Domain, create_boundary};
use crate::simulation::engine::Simulation;
use crate::simulation::forces::{ForceSet, ForceKind, Gravity, Viscosity, create_force};
use crate::simulation::states::{NVec3, Particle, ParticleVariant, System};
use crate::simulation::integrator::euler_step;

/// Build a deterministic scattered system of `n` water particles
fn scattered_system(n: usize, domain: &Domain) -> System {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let mut p = Particle::from_variant(ParticleVariant::Water);
        for k in 0..3 {
            let u = 0.5 + 0.5 * (i_f * (0.37 + 0.13 * k as f64)).sin();
            p.x[k] = domain.min[k] + u * domain.extent(k);
        }
        p.v = NVec3::zeros();
        particles.push(p);
    }

    System { particles, t: 0.0 }
}

pub fn bench_accumulate() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400]; //, 12800, 25600, 51200];
    let domain = Domain::unit();

    for n in ns {
        let sys = scattered_system(n, &domain);
        let mut out = vec![NVec3::zeros(); n];

        // Set up the full force roster
        let forces = ForceSet::new().with(Gravity::default()).with(Viscosity);

        // Warm up
        forces.accumulate_accels(&sys, &mut out);

        // Time accumulation over all particles
        let t0 = Instant::now();
        forces.accumulate_accels(&sys, &mut out);
        let dt_accum = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, accumulate = {:8.6} s", dt_accum);
    }
}

pub fn bench_step() {
    // Test different N values
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let domain = Domain::unit();
    let steps = 1000;
    let dt = 0.01;

    for n in ns {
        let mut sys = scattered_system(n, &domain);
        let forces = ForceSet::new().with_boxed(create_force(ForceKind::Gravity));
        let boundary = create_boundary(BoundaryKind::Solid, 0.5)
            .expect("restitution 0.5 is valid");

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &forces, boundary.as_ref(), &domain, dt);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, {steps} steps = {:8.6} s ({:8.1} steps/s)",
            elapsed,
            steps as f64 / elapsed
        );
    }
}

pub fn bench_engine_step() {
    // Full Simulation-level stepping, boundary and state machine included
    let ns = [1000usize, 10_000];
    let steps = 1000;

    for n in ns {
        let mut sim = Simulation::new(
            n,
            ParticleVariant::Water,
            &[ForceKind::Gravity, ForceKind::Viscosity],
            BoundaryKind::Periodic,
            0.01,
            Domain::unit(),
        )
        .expect("benchmark parameters are valid");

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step().expect("simulation is ready");
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, {steps} engine steps = {:8.6} s", elapsed);
    }
}
