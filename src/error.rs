//! Typed errors for the simulation core
//!
//! Setup failures are recoverable and construct nothing; per-tick failures
//! leave all particle state untouched. The binary driver wraps both in
//! `anyhow` at the top level.

use thiserror::Error;

/// Errors surfaced while constructing a simulation:
/// factory lookups with unrecognized names and invalid parameters
#[derive(Debug, Error)]
pub enum SetupError {
    /// Unrecognized particle material name
    #[error("unknown particle variant: {0}")]
    UnknownVariant(String),

    /// Unrecognized force model name
    #[error("unknown force kind: {0}")]
    UnknownForceKind(String),

    /// Unrecognized boundary condition name
    #[error("unknown boundary kind: {0}")]
    UnknownBoundaryKind(String),

    /// Invalid numeric or structural parameter
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}

/// Errors surfaced while advancing a simulation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    /// `step()` called before particles, forces, and boundary were bound
    #[error("simulation is not ready: particles, forces, and boundary must be bound first")]
    NotReady,
}
