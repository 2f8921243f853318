//! Network Definition Module
//!
//! A [`NetworkDefinition`] is the serializable description of a reaction network:
//! declared species with their initial concentrations, reactions referring to species
//! by name and, optionally, the simulation setup to run it with.
//!
//! ```json
//! {
//!   "species": [
//!     { "name": "Ca", "concentration": 2.0 },
//!     { "name": "CaCO3" }
//!   ],
//!   "reactions": [
//!     { "rate_constant": 9.0, "reactants": ["Ca"], "products": ["CaCO3"] }
//!   ]
//! }
//! ```
//!
//! Converting a definition into a [`ReactionSystem`] creates one [`Species`] per
//! declaration. Declaration order defines the canonical species order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "simulation")]
use crate::simulation::setup::SimulationSetup;
use crate::{reaction::Reaction, species::Species, system::ReactionSystem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDefinition {
    pub name: String,
    #[serde(default)]
    pub concentration: f64,
}

/// A reaction whose participants are species names. Repeat a name to raise its
/// stoichiometric coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionDefinition {
    pub rate_constant: f64,
    #[serde(default)]
    pub reactants: Vec<String>,
    #[serde(default)]
    pub products: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkDefinition {
    #[serde(default)]
    pub species: Vec<SpeciesDefinition>,
    #[serde(default)]
    pub reactions: Vec<ReactionDefinition>,
    #[cfg(feature = "simulation")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationSetup>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Species '{0}' is declared more than once")]
    DuplicateSpecies(String),
    #[error("Reaction {reaction} refers to undeclared species '{species}'")]
    UndeclaredSpecies { reaction: usize, species: String },
}

impl TryFrom<&NetworkDefinition> for ReactionSystem {
    type Error = NetworkError;

    fn try_from(definition: &NetworkDefinition) -> Result<Self, Self::Error> {
        let mut system = ReactionSystem::new();
        let mut declared: HashMap<&str, Species> =
            HashMap::with_capacity(definition.species.len());

        for entry in &definition.species {
            if declared.contains_key(entry.name.as_str()) {
                return Err(NetworkError::DuplicateSpecies(entry.name.clone()));
            }

            let species = Species::with_concentration(entry.name.as_str(), entry.concentration);
            system.add_species(&species);
            declared.insert(entry.name.as_str(), species);
        }

        for (i, entry) in definition.reactions.iter().enumerate() {
            let lookup = |name: &String| {
                declared
                    .get(name.as_str())
                    .ok_or_else(|| NetworkError::UndeclaredSpecies {
                        reaction: i,
                        species: name.clone(),
                    })
            };

            let mut reaction = Reaction::new(entry.rate_constant);
            for name in &entry.reactants {
                reaction.add_reactant(lookup(name)?);
            }
            for name in &entry.products {
                reaction.add_product(lookup(name)?);
            }

            system.add_reaction(reaction);
        }

        Ok(system)
    }
}

impl TryFrom<NetworkDefinition> for ReactionSystem {
    type Error = NetworkError;

    fn try_from(definition: NetworkDefinition) -> Result<Self, Self::Error> {
        ReactionSystem::try_from(&definition)
    }
}
