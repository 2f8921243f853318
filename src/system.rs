//! Reaction System Module
//!
//! This module provides [`ReactionSystem`], the aggregate that turns a set of mass-action
//! reactions into a rate-of-change function over species concentrations.
//!
//! The main components include:
//! - Registering reactions and bare species
//! - Deriving the canonical species order (first seen, duplicate free)
//! - Reading and writing the concentration vector
//! - Computing the net rate of change per species
//! - The integrator callback `F(state, derivative, time)` used by ODE drivers
//!
//! # Canonical order
//!
//! Species are ordered by first appearance. Species added with
//! [`ReactionSystem::add_species`] enter at the time of the call; species reached through
//! [`ReactionSystem::add_reaction`] enter in reactant-then-product order of that reaction.
//! A species that is already known keeps its position.

use indexmap::IndexSet;
use log::{debug, trace};
use thiserror::Error;

use crate::{reaction::Reaction, species::Species};

/// Errors raised when a caller-provided vector does not fit the system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReactionSystemError {
    #[error("Expected {expected} concentrations, got {actual}")]
    ConcentrationLengthMismatch { expected: usize, actual: usize },
    #[error("Expected a derivative buffer of length {expected}, got {actual}")]
    DerivativeLengthMismatch { expected: usize, actual: usize },
    #[error("Species '{0}' is not part of the reaction system")]
    UnknownSpecies(String),
}

/// A set of reactions over a shared, canonically ordered set of species.
///
/// # Examples
///
/// ```
/// use reactor::prelude::*;
///
/// let a = Species::with_concentration("A", 2.0);
/// let b = Species::new("B");
///
/// let mut system = ReactionSystem::new();
/// system.add_reaction(Reaction::new(0.5).with_reactant(&a).with_product(&b));
///
/// assert_eq!(system.concentrations(), vec![2.0, 0.0]);
/// assert_eq!(system.rates_of_change(), vec![-1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReactionSystem {
    reactions: Vec<Reaction>,
    species: IndexSet<Species>,
}

impl ReactionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a reaction and folds its reactants, then its products, into the
    /// species set.
    ///
    /// The system takes ownership of the reaction. Its species handles still share
    /// state with the caller's, so concentrations set on either side are visible to
    /// both; clone the reaction first to keep a copy for comparison.
    pub fn add_reaction(&mut self, reaction: Reaction) {
        for species in reaction.participants() {
            self.add_species(species);
        }

        debug!(
            "Registered reaction '{}' (k = {}), {} species known",
            reaction,
            reaction.rate_constant(),
            self.species.len()
        );

        self.reactions.push(reaction);
    }

    /// Adds a species independently of any reaction. Known species are ignored.
    pub fn add_species(&mut self, species: &Species) {
        if !self.species.contains(species) {
            trace!("Adding species '{}' at {}", species.name(), self.species.len());
            self.species.insert(species.clone());
        }
    }

    /// Registered reactions in registration order.
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// Known species in canonical order.
    pub fn species(&self) -> &IndexSet<Species> {
        &self.species
    }

    pub fn n_species(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty() && self.reactions.is_empty()
    }

    /// Position of the species in the canonical order.
    pub fn species_index(&self, species: &Species) -> Option<usize> {
        self.species.get_index_of(species)
    }

    /// Returns the first species in canonical order with the given name.
    pub fn find_species(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|species| species.name() == name)
    }

    /// Current concentrations in canonical order.
    pub fn concentrations(&self) -> Vec<f64> {
        self.species.iter().map(Species::concentration).collect()
    }

    /// Writes one value per species, by canonical position.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionSystemError::ConcentrationLengthMismatch`] if `values` does not
    /// hold exactly one entry per species. Nothing is written in that case.
    pub fn set_concentrations(&self, values: &[f64]) -> Result<(), ReactionSystemError> {
        if values.len() != self.species.len() {
            return Err(ReactionSystemError::ConcentrationLengthMismatch {
                expected: self.species.len(),
                actual: values.len(),
            });
        }

        for (species, &value) in self.species.iter().zip(values) {
            species.set_concentration(value);
        }

        Ok(())
    }

    /// Mass-action rate of every reaction, in registration order.
    pub fn reaction_rates(&self) -> Vec<f64> {
        self.reactions.iter().map(Reaction::rate).collect()
    }

    /// Net rate of change per species in canonical order.
    ///
    /// Species that take part in no reaction have a rate of change of zero.
    pub fn rates_of_change(&self) -> Vec<f64> {
        let mut rates = vec![0.0; self.species.len()];
        self.accumulate_rates(&mut rates);
        rates
    }

    /// Fills a caller-owned buffer with the rates of change.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionSystemError::DerivativeLengthMismatch`] if the buffer does not
    /// hold exactly one entry per species.
    pub fn write_rates_of_change(&self, out: &mut [f64]) -> Result<(), ReactionSystemError> {
        if out.len() != self.species.len() {
            return Err(ReactionSystemError::DerivativeLengthMismatch {
                expected: self.species.len(),
                actual: out.len(),
            });
        }

        out.fill(0.0);
        self.accumulate_rates(out);
        Ok(())
    }

    /// Integrator callback `F(state, derivative, time)`.
    ///
    /// Writes `state` into the species, then fills `derivative` with the rates of
    /// change. The system is autonomous, so `time` is ignored. Both buffers are checked
    /// before anything is written.
    pub fn evaluate(
        &self,
        state: &[f64],
        derivative: &mut [f64],
        _time: f64,
    ) -> Result<(), ReactionSystemError> {
        if derivative.len() != self.species.len() {
            return Err(ReactionSystemError::DerivativeLengthMismatch {
                expected: self.species.len(),
                actual: derivative.len(),
            });
        }

        self.set_concentrations(state)?;
        self.write_rates_of_change(derivative)
    }

    /// Closure form of [`ReactionSystem::evaluate`] for drivers that take a plain
    /// function value.
    pub fn as_callback(
        &self,
    ) -> impl Fn(&[f64], &mut [f64], f64) -> Result<(), ReactionSystemError> + '_ {
        move |state, derivative, time| self.evaluate(state, derivative, time)
    }

    fn accumulate_rates(&self, out: &mut [f64]) {
        for reaction in &self.reactions {
            for (species, delta) in reaction.contributions() {
                // Every participant was folded in by add_reaction
                if let Some(i) = self.species.get_index_of(species) {
                    out[i] += delta;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn abcd() -> (Species, Species, Species, Species) {
        (
            Species::with_concentration("A", 2.0),
            Species::with_concentration("B", 3.0),
            Species::with_concentration("C", 5.0),
            Species::with_concentration("D", 7.0),
        )
    }

    #[test]
    fn test_single_reaction_rates_of_change() {
        let (a, b, c, d) = abcd();
        let k = 0.25;
        let mut system = ReactionSystem::new();
        system.add_reaction(
            Reaction::new(k)
                .with_reactant(&a)
                .with_reactant(&b)
                .with_reactant(&c)
                .with_product(&d),
        );

        let rate = k * 2.0 * 3.0 * 5.0;
        assert_eq!(system.rates_of_change(), vec![-rate, -rate, -rate, rate]);
    }

    #[test]
    fn test_direct_species_precede_reaction_species() {
        let (a, b, c, d) = abcd();
        let mut system = ReactionSystem::new();
        system.add_species(&d);
        system.add_reaction(Reaction::new(1.0).with_reactant(&a).with_product(&d));
        system.add_species(&c);
        system.add_reaction(Reaction::new(1.0).with_reactant(&b).with_product(&a));

        let names: Vec<&str> = system.species().iter().map(Species::name).collect();
        assert_eq!(names, vec!["D", "A", "C", "B"]);
    }

    #[test]
    fn test_uninvolved_species_has_zero_rate() {
        let (a, b, c, _) = abcd();
        let mut system = ReactionSystem::new();
        system.add_species(&c);
        system.add_reaction(Reaction::new(1.0).with_reactant(&a).with_product(&b));

        assert_eq!(system.rates_of_change(), vec![0.0, -2.0, 2.0]);
    }

    #[test]
    fn test_set_concentrations_rejects_wrong_length() {
        let (a, b, _, _) = abcd();
        let mut system = ReactionSystem::new();
        system.add_reaction(Reaction::new(1.0).with_reactant(&a).with_product(&b));

        let result = system.set_concentrations(&[1.0, 2.0, 3.0]);
        assert_eq!(
            result,
            Err(ReactionSystemError::ConcentrationLengthMismatch {
                expected: 2,
                actual: 3
            })
        );
        // Nothing was written
        assert_eq!(system.concentrations(), vec![2.0, 3.0]);
    }

    #[test]
    fn test_evaluate_checks_derivative_before_writing_state() {
        let (a, b, _, _) = abcd();
        let mut system = ReactionSystem::new();
        system.add_reaction(Reaction::new(1.0).with_reactant(&a).with_product(&b));

        let mut derivative = vec![0.0; 1];
        let result = system.evaluate(&[10.0, 20.0], &mut derivative, 0.0);

        assert_eq!(
            result,
            Err(ReactionSystemError::DerivativeLengthMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(system.concentrations(), vec![2.0, 3.0]);
    }

    #[test]
    fn test_write_rates_of_change_overwrites_buffer() {
        let (a, b, _, _) = abcd();
        let mut system = ReactionSystem::new();
        system.add_reaction(Reaction::new(1.0).with_reactant(&a).with_product(&b));

        let mut out = vec![100.0, 100.0];
        system.write_rates_of_change(&mut out).unwrap();
        assert_eq!(out, vec![-2.0, 2.0]);
    }

    #[test]
    fn test_callback_ignores_time() {
        let (a, b, _, _) = abcd();
        let mut system = ReactionSystem::new();
        system.add_reaction(Reaction::new(1.0).with_reactant(&a).with_product(&b));

        let callback = system.as_callback();
        let mut early = vec![0.0; 2];
        let mut late = vec![0.0; 2];
        callback(&[4.0, 1.0], &mut early, 0.0).unwrap();
        callback(&[4.0, 1.0], &mut late, 1e6).unwrap();

        assert_eq!(early, late);
        assert_eq!(early, vec![-4.0, 4.0]);
    }

    #[test]
    fn test_find_species_and_index() {
        let (a, b, _, d) = abcd();
        let mut system = ReactionSystem::new();
        system.add_reaction(Reaction::new(1.0).with_reactant(&a).with_product(&b));

        assert_eq!(system.find_species("B"), Some(&b));
        assert_eq!(system.find_species("Z"), None);
        assert_eq!(system.species_index(&b), Some(1));
        assert_eq!(system.species_index(&d), None);
    }

    #[test]
    fn test_empty_system() {
        let system = ReactionSystem::new();
        assert!(system.is_empty());
        assert!(system.concentrations().is_empty());
        assert!(system.rates_of_change().is_empty());
        assert_eq!(system.set_concentrations(&[]), Ok(()));
    }
}
