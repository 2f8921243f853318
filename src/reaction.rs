//! Reaction Module
//!
//! A [`Reaction`] pairs a rate constant with an ordered list of reactant and product
//! species. Stoichiometric coefficients are expressed by repetition: a species added
//! twice as a reactant takes part twice in the rate law and is consumed twice.
//!
//! # Rate law
//!
//! The instantaneous rate follows mass action:
//!
//! ```text
//! rate = k * c(r_1) * c(r_2) * ... * c(r_n)
//! ```
//!
//! where `r_i` runs over every reactant entry. A reaction without reactants proceeds
//! at rate `k`.

use std::fmt::{self, Display};

use crate::species::Species;

#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    rate_constant: f64,
    reactants: Vec<Species>,
    products: Vec<Species>,
}

impl Reaction {
    /// Creates a reaction without reactants or products.
    ///
    /// The rate constant is not validated.
    pub fn new(rate_constant: f64) -> Self {
        Self {
            rate_constant,
            reactants: Vec::new(),
            products: Vec::new(),
        }
    }

    /// Appends a reactant entry. Repeated species are kept as separate entries.
    pub fn add_reactant(&mut self, species: &Species) {
        self.reactants.push(species.clone());
    }

    /// Appends a product entry. Repeated species are kept as separate entries.
    pub fn add_product(&mut self, species: &Species) {
        self.products.push(species.clone());
    }

    pub fn with_reactant(mut self, species: &Species) -> Self {
        self.add_reactant(species);
        self
    }

    pub fn with_product(mut self, species: &Species) -> Self {
        self.add_product(species);
        self
    }

    pub fn rate_constant(&self) -> f64 {
        self.rate_constant
    }

    pub fn reactants(&self) -> &[Species] {
        &self.reactants
    }

    pub fn products(&self) -> &[Species] {
        &self.products
    }

    /// All entries of the reaction, reactants first, then products.
    pub fn participants(&self) -> impl Iterator<Item = &Species> {
        self.reactants.iter().chain(self.products.iter())
    }

    /// Computes the mass-action rate from the current reactant concentrations.
    pub fn rate(&self) -> f64 {
        self.rate_constant
            * self
                .reactants
                .iter()
                .map(Species::concentration)
                .product::<f64>()
    }

    /// Signed contribution of this reaction to each of its entries.
    ///
    /// Yields `(species, -rate)` for every reactant entry followed by `(species, +rate)`
    /// for every product entry. The rate is evaluated once per call.
    pub fn contributions(&self) -> impl Iterator<Item = (&Species, f64)> {
        let rate = self.rate();
        self.reactants
            .iter()
            .map(move |species| (species, -rate))
            .chain(self.products.iter().map(move |species| (species, rate)))
    }
}

impl Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            format_side(&self.reactants),
            format_side(&self.products)
        )
    }
}

fn format_side(side: &[Species]) -> String {
    if side.is_empty() {
        return "∅".to_string();
    }

    side.iter()
        .map(Species::name)
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rate_is_product_of_reactant_concentrations() {
        let a = Species::with_concentration("A", 2.0);
        let b = Species::with_concentration("B", 3.0);
        let c = Species::with_concentration("C", 5.0);
        let d = Species::with_concentration("D", 7.0);

        let reaction = Reaction::new(0.5)
            .with_reactant(&a)
            .with_reactant(&b)
            .with_reactant(&c)
            .with_product(&d);

        assert_relative_eq!(reaction.rate(), 0.5 * 2.0 * 3.0 * 5.0);
    }

    #[test]
    fn test_rate_without_reactants_is_rate_constant() {
        let product = Species::new("P");
        let reaction = Reaction::new(4.0).with_product(&product);
        assert_eq!(reaction.rate(), 4.0);
    }

    #[test]
    fn test_repeated_reactant_raises_power() {
        let a = Species::with_concentration("A", 3.0);
        let dimer = Species::new("A2");
        let reaction = Reaction::new(2.0)
            .with_reactant(&a)
            .with_reactant(&a)
            .with_product(&dimer);

        assert_eq!(reaction.reactants().len(), 2);
        assert_relative_eq!(reaction.rate(), 2.0 * 9.0);

        let consumed: f64 = reaction
            .contributions()
            .filter(|(species, _)| **species == a)
            .map(|(_, delta)| delta)
            .sum();
        assert_relative_eq!(consumed, -2.0 * 18.0);
    }

    #[test]
    fn test_contributions_are_signed() {
        let a = Species::with_concentration("A", 2.0);
        let b = Species::new("B");
        let reaction = Reaction::new(3.0).with_reactant(&a).with_product(&b);

        let contributions: Vec<(String, f64)> = reaction
            .contributions()
            .map(|(species, delta)| (species.name().to_string(), delta))
            .collect();

        assert_eq!(
            contributions,
            vec![("A".to_string(), -6.0), ("B".to_string(), 6.0)]
        );
    }

    #[test]
    fn test_non_positive_rate_constants_are_accepted() {
        let a = Species::with_concentration("A", 2.0);
        let b = Species::with_concentration("B", 3.0);

        let negative = Reaction::new(-1.5).with_reactant(&a).with_product(&b);
        assert_eq!(negative.rate(), -3.0);
        let deltas: Vec<f64> = negative.contributions().map(|(_, delta)| delta).collect();
        assert_eq!(deltas, vec![3.0, -3.0]);

        let zero = Reaction::new(0.0).with_reactant(&a).with_product(&b);
        assert_eq!(zero.rate(), 0.0);
        assert!(zero.contributions().all(|(_, delta)| delta == 0.0));
    }

    #[test]
    fn test_rate_follows_concentration_updates() {
        let a = Species::with_concentration("A", 1.0);
        let reaction = Reaction::new(1.0).with_reactant(&a);
        a.set_concentration(-4.0);
        assert_eq!(reaction.rate(), -4.0);
    }

    #[test]
    fn test_display() {
        let ca = Species::new("Ca");
        let c = Species::new("C");
        let o = Species::new("O");
        let caco3 = Species::new("CaCO3");

        let forward = Reaction::new(9.0)
            .with_reactant(&ca)
            .with_reactant(&c)
            .with_reactant(&o)
            .with_product(&caco3);

        assert_eq!(forward.to_string(), "Ca + C + O -> CaCO3");
        assert_eq!(Reaction::new(1.0).with_product(&ca).to_string(), "∅ -> Ca");
    }
}
