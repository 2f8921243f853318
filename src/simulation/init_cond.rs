//! Initial Conditions Module for ODE Simulations
//!
//! Initial conditions are given by species name and written onto the species of a
//! [`ReactionSystem`] before integration starts.

use std::collections::HashMap;

use crate::system::{ReactionSystem, ReactionSystemError};

pub type InitialCondition = HashMap<String, f64>;

impl ReactionSystem {
    /// Writes initial concentrations by species name.
    ///
    /// Species that are not mentioned keep their current concentration. All names are
    /// resolved before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionSystemError::UnknownSpecies`] if a name does not belong to any
    /// species of the system.
    pub fn apply_initial_condition(
        &self,
        initial_condition: &InitialCondition,
    ) -> Result<(), ReactionSystemError> {
        let resolved = initial_condition
            .iter()
            .map(|(name, &value)| {
                self.find_species(name)
                    .map(|species| (species, value))
                    .ok_or_else(|| ReactionSystemError::UnknownSpecies(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (species, value) in resolved {
            species.set_concentration(value);
        }

        Ok(())
    }
}
