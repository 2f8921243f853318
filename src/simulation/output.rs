//! Output Module for ODE Simulation Results
//!
//! This module turns the raw trajectory returned by the integrator into structured
//! results. It defines the [`OutputFormat`] trait and implements it for
//! [`SimulationResult`] (named time series) and [`MatrixResult`] (ndarray matrices).

use ndarray::{Array1, Array2};

use crate::system::ReactionSystem;

use super::{
    result::{SimulationResult, TimeSeriesMapping},
    system::StepperOutput,
};

/// Trait to specify the output format and structure
pub trait OutputFormat {
    /// The type of output this format produces
    type Output;

    /// Creates the output from the recorded times and states. Each row of `y_out` holds
    /// one concentration per species in canonical order.
    fn create_output(times: Vec<f64>, y_out: StepperOutput, system: &ReactionSystem)
        -> Self::Output;
}

/// Matrix representation of a trajectory: one row per time point, one column per species
#[derive(Debug, Clone)]
pub struct MatrixResult {
    pub times: Array1<f64>,
    pub species: Array2<f64>,
}

impl OutputFormat for MatrixResult {
    type Output = MatrixResult;

    fn create_output(
        times: Vec<f64>,
        y_out: StepperOutput,
        system: &ReactionSystem,
    ) -> Self::Output {
        let n_species = system.n_species();
        let species = Array2::from_shape_fn((y_out.len(), n_species), |(i, j)| y_out[i][j]);

        MatrixResult {
            times: Array1::from_vec(times),
            species,
        }
    }
}

impl OutputFormat for SimulationResult {
    type Output = SimulationResult;

    fn create_output(
        times: Vec<f64>,
        y_out: StepperOutput,
        system: &ReactionSystem,
    ) -> Self::Output {
        let mut species = TimeSeriesMapping::with_capacity(system.n_species());

        for (i, entry) in system.species().iter().enumerate() {
            let values = y_out.iter().map(|row| row[i]).collect();
            species.insert(series_key(&species, entry.name(), i), values);
        }

        SimulationResult {
            time: times,
            species,
        }
    }
}

/// Key of the `index`-th species. A name already taken by an earlier species is
/// suffixed with the canonical index, e.g. `X#2`, so every species keeps a column.
fn series_key(species: &TimeSeriesMapping, name: &str, index: usize) -> String {
    let mut key = name.to_string();
    while species.contains_key(&key) {
        key = format!("{key}#{index}");
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn system() -> ReactionSystem {
        let a = Species::new("A");
        let b = Species::new("B");
        let mut system = ReactionSystem::new();
        system.add_reaction(reaction!(1.0; a => b));
        system
    }

    fn trajectory() -> (Vec<f64>, StepperOutput) {
        (
            vec![0.0, 0.5, 1.0],
            vec![vec![1.0, 0.0], vec![0.6, 0.4], vec![0.4, 0.6]],
        )
    }

    #[test]
    fn test_matrix_result() {
        let (times, y_out) = trajectory();
        let result = MatrixResult::create_output(times, y_out, &system());

        assert_eq!(result.times.to_vec(), vec![0.0, 0.5, 1.0]);
        assert_eq!(result.species.dim(), (3, 2));
        assert_eq!(result.species.column(1).to_vec(), vec![0.0, 0.4, 0.6]);
    }

    #[test]
    fn test_simulation_result() {
        let (times, y_out) = trajectory();
        let result = SimulationResult::create_output(times, y_out, &system());

        assert_eq!(result.time, vec![0.0, 0.5, 1.0]);
        assert_eq!(
            result.species.keys().collect::<Vec<_>>(),
            vec!["A", "B"]
        );
        assert_eq!(result.get("A"), Some([1.0, 0.6, 0.4].as_slice()));
    }

    #[test]
    fn test_simulation_result_keeps_species_with_shared_names() {
        let first = Species::new("X");
        let second = Species::new("X");
        let mut system = ReactionSystem::new();
        system.add_reaction(reaction!(1.0; first => second));

        let (times, y_out) = trajectory();
        let result = SimulationResult::create_output(times, y_out, &system);

        assert_eq!(
            result.species.keys().collect::<Vec<_>>(),
            vec!["X", "X#1"]
        );
        assert_eq!(result.get("X#1"), Some([0.0, 0.4, 0.6].as_slice()));
        assert_eq!(result.final_state(), vec![0.4, 0.6]);
    }
}
