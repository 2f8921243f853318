//! Setup module for configuring ODE simulations.
//!
//! This module provides the [`SimulationSetup`] struct and its builder for configuring
//! the time grid on which a reaction system is integrated:
//!
//! - Time range specification (start and end times)
//! - Integration step size
//!
//! Step control beyond the fixed `dt` is left to the chosen integrator.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::error::SimulationError;

/// Configuration for numerical integration of a reaction system
///
/// # Fields
///
/// * `t0` - Start time of the simulation (default: 0.0)
/// * `t1` - End time of the simulation (default: 10.0)
/// * `dt` - Time step size (default: 1.0)
///
/// # Examples
///
/// ```
/// use reactor::prelude::SimulationSetupBuilder;
///
/// let setup = SimulationSetupBuilder::default()
///     .t0(0.0)
///     .t1(100.0)
///     .dt(0.1)
///     .build()
///     .unwrap();
///
/// assert!(setup.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct SimulationSetup {
    #[builder(default = "0.0")]
    #[serde(default)]
    pub t0: f64,
    #[builder(default = "10.0")]
    #[serde(default = "default_t1")]
    pub t1: f64,
    #[builder(default = "1.0")]
    #[serde(default = "default_dt")]
    pub dt: f64,
}

fn default_t1() -> f64 {
    10.0
}

fn default_dt() -> f64 {
    1.0
}

impl Default for SimulationSetup {
    fn default() -> Self {
        Self {
            t0: 0.0,
            t1: default_t1(),
            dt: default_dt(),
        }
    }
}

impl SimulationSetup {
    /// Checks that the time grid can be integrated.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidSetup`] if any value is not finite, if
    /// `dt` is not positive or if `t1` does not lie after `t0`.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.t0.is_finite() && self.t1.is_finite() && self.dt.is_finite()) {
            return Err(SimulationError::InvalidSetup(format!(
                "time range and step must be finite (t0 = {}, t1 = {}, dt = {})",
                self.t0, self.t1, self.dt
            )));
        }

        if self.dt <= 0.0 {
            return Err(SimulationError::InvalidSetup(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }

        if self.t1 <= self.t0 {
            return Err(SimulationError::InvalidSetup(format!(
                "t1 ({}) must be greater than t0 ({})",
                self.t1, self.t0
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let setup = SimulationSetupBuilder::default().build().unwrap();
        assert_eq!(setup, SimulationSetup::default());
    }

    #[test]
    fn test_validate_rejects_bad_setups() {
        let zero_step = SimulationSetupBuilder::default().dt(0.0).build().unwrap();
        assert!(matches!(
            zero_step.validate(),
            Err(SimulationError::InvalidSetup(_))
        ));

        let reversed = SimulationSetupBuilder::default()
            .t0(5.0)
            .t1(1.0)
            .build()
            .unwrap();
        assert!(matches!(
            reversed.validate(),
            Err(SimulationError::InvalidSetup(_))
        ));

        let infinite = SimulationSetupBuilder::default()
            .t1(f64::INFINITY)
            .build()
            .unwrap();
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let setup: SimulationSetup = serde_json::from_str(r#"{"t1": 2.5}"#).unwrap();
        assert_eq!(setup.t0, 0.0);
        assert_eq!(setup.t1, 2.5);
        assert_eq!(setup.dt, 1.0);
    }
}
