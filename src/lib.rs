pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Particle, ParticleVariant, System, NVec3};
pub use simulation::forces::{ForceModel, ForceSet, ForceKind, Gravity, Viscosity, create_force};
pub use simulation::boundary::{Boundary, BoundaryKind, Domain, SolidWall, PeriodicWrap, create_boundary};
pub use simulation::integrator::euler_step;
pub use simulation::engine::Simulation;
pub use simulation::scenario::Scenario;
pub use simulation::params::Parameters;

pub use configuration::config::{EngineConfig, ParametersConfig, DomainConfig, ParticleConfig, SpawnConfig, ScenarioConfig};

pub use error::{SetupError, StepError};

pub use benchmark::benchmark::{bench_accumulate, bench_step, bench_engine_step};
