//! Simulation Error Module
//!
//! The [`SimulationError`] enum covers the failure points of driving a reaction system
//! through an ODE integrator:
//! - Invalid simulation setups (time range, step size)
//! - Buffers that do not fit the system
//! - Failures reported by the integrator itself

use thiserror::Error;

use crate::system::ReactionSystemError;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid simulation setup: {0}")]
    InvalidSetup(String),
    #[error("Reaction system error: {0}")]
    SystemError(#[from] ReactionSystemError),
    #[error("Error during integration: {0}")]
    IntegrationError(String),
    #[error("Integration produced no output")]
    EmptyOutput,
}
