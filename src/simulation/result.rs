//! Simulation Result Module
//!
//! This module provides data structures for representing the results of integrating a
//! reaction system.
//!
//! # Key Components
//!
//! - [`SimulationResult`]: Stores the time points and a trajectory per species
//! - [`TimeSeriesMapping`]: An ordered map from species name to values over time

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Species trajectories keyed by species name, in canonical species order. Species
/// whose name is already taken are keyed as `name#index`.
pub type TimeSeriesMapping = IndexMap<String, Vec<f64>>;

/// Represents the result of a simulation.
///
/// # Fields
///
/// * `time` - Time points at which the state was recorded
/// * `species` - Species names mapped to their concentrations over time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub time: Vec<f64>,
    pub species: TimeSeriesMapping,
}

impl SimulationResult {
    /// Trajectory of a single species.
    pub fn get(&self, species: &str) -> Option<&[f64]> {
        self.species.get(species).map(Vec::as_slice)
    }

    /// Concentrations at the last recorded time point, in canonical species order.
    pub fn final_state(&self) -> Vec<f64> {
        self.species
            .values()
            .filter_map(|values| values.last().copied())
            .collect()
    }

    /// Number of recorded time points.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}
