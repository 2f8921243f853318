use log::trace;
use peroxide::fuga::ODEProblem;

use crate::system::ReactionSystem;

/// Type alias for the trajectory produced by the ODE solver, one row per time point
pub type StepperOutput = Vec<Vec<f64>>;

impl ODEProblem for ReactionSystem {
    /// Right-hand side of the ODE system.
    ///
    /// Delegates to [`ReactionSystem::evaluate`]: the state is written into the species
    /// and the rates of change are written into `dy`. Mismatched buffer lengths are
    /// reported to the integrator as an error.
    fn rhs(&self, t: f64, y: &[f64], dy: &mut [f64]) -> anyhow::Result<()> {
        trace!("Evaluating rates of change at t = {t}");
        self.evaluate(y, dy, t)?;
        Ok(())
    }
}
