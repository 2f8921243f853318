use ndarray::{Array1, Array2};

use crate::system::ReactionSystem;

impl ReactionSystem {
    /// Derives the stoichiometry matrix of the system.
    ///
    /// Each row corresponds to a species in canonical order and each column to a
    /// reaction in registration order. An entry is the number of times the species
    /// appears as a product minus the number of times it appears as a reactant, so
    /// reactants are negative and products positive.
    ///
    /// The rates of change are the product of this matrix with the reaction rates:
    ///
    /// ```
    /// use reactor::prelude::*;
    ///
    /// let a = Species::with_concentration("A", 3.0);
    /// let b = Species::new("B");
    ///
    /// let mut system = ReactionSystem::new();
    /// system.add_reaction(reaction!(2.0; a, a => b));
    ///
    /// let matrix = system.stoichiometry_matrix();
    /// assert_eq!(matrix[(0, 0)], -2.0);
    /// assert_eq!(matrix[(1, 0)], 1.0);
    /// assert_eq!(system.net_rates().to_vec(), system.rates_of_change());
    /// ```
    pub fn stoichiometry_matrix(&self) -> Array2<f64> {
        let n_species = self.n_species();
        let n_reactions = self.reactions().len();

        // Species as rows, reactions as columns
        let mut stoichiometry_matrix = Array2::zeros((n_species, n_reactions));

        for (j, reaction) in self.reactions().iter().enumerate() {
            for reactant in reaction.reactants() {
                if let Some(i) = self.species_index(reactant) {
                    stoichiometry_matrix[(i, j)] -= 1.0;
                }
            }

            for product in reaction.products() {
                if let Some(i) = self.species_index(product) {
                    stoichiometry_matrix[(i, j)] += 1.0;
                }
            }
        }

        stoichiometry_matrix
    }

    /// Rates of change computed as `S · v` from the stoichiometry matrix `S` and the
    /// reaction rates `v`.
    pub fn net_rates(&self) -> Array1<f64> {
        let rates = Array1::from_vec(self.reaction_rates());
        self.stoichiometry_matrix().dot(&rates)
    }
}
