//! Reactor: mass-action reaction networks
//!
//! This library models a chemical reaction network under the law of mass action and
//! provides the rate-of-change function an ODE integrator evaluates:
//! - Species as shared handles holding a concentration
//! - Reactions with repeated entries as stoichiometric coefficients
//! - Reaction systems with a canonical species order, concentration vector and
//!   rates of change, including the `F(state, derivative, time)` callback
//! - Network definitions loaded from JSON
//! - Integration through peroxide (feature `simulation`)

#![warn(unused_imports)]

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::io::*;
    pub use crate::network::*;
    pub use crate::reaction;
    pub use crate::reaction::Reaction;
    pub use crate::species::Species;
    pub use crate::system::*;

    #[cfg(feature = "simulation")]
    pub use crate::simulation::error::*;
    #[cfg(feature = "simulation")]
    pub use crate::simulation::init_cond::*;
    #[cfg(feature = "simulation")]
    pub use crate::simulation::output::*;
    #[cfg(feature = "simulation")]
    pub use crate::simulation::result::*;
    #[cfg(feature = "simulation")]
    pub use crate::simulation::setup::*;
}

/// Named species and their concentrations
pub mod species;

/// Mass-action reactions
pub mod reaction;

/// Reaction systems and the rate-of-change function
pub mod system;

/// Stoichiometry matrix of a reaction system
mod stoich;

/// Serializable network definitions
pub mod network;

/// Integration of reaction systems through peroxide
#[cfg(feature = "simulation")]
pub mod simulation {
    pub use crate::simulation::setup::SimulationSetup;
    pub use peroxide::fuga::{
        ODEIntegrator, ODEProblem, BS23, DP45, GL4, RALS3, RALS4, RK4, RK5, RKF45, TSIT45,
    };

    /// Error types for simulation failures
    pub mod error;
    /// Initial condition handling for simulations
    pub mod init_cond;
    /// Output formats for simulation results
    pub mod output;
    /// Simulation result data structures
    pub mod result;
    /// Integration entry points
    mod runner;
    /// Simulation setup and configuration
    pub mod setup;
    /// ODE problem implementation for reaction systems
    pub mod system;
}

/// Procedural and helper macros
pub mod macros {
    /// Macros for reaction specifications
    #[macro_use]
    pub mod reaction_macro;
}

/// Table rendering of systems and results
pub mod info;

/// IO functionality
pub mod io;
