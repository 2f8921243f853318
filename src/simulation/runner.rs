use log::debug;
use peroxide::fuga::{BasicODESolver, ODEIntegrator, ODESolver};

use crate::system::ReactionSystem;

use super::{
    error::SimulationError, init_cond::InitialCondition, output::OutputFormat,
    setup::SimulationSetup, system::StepperOutput,
};

impl ReactionSystem {
    /// Integrates the system from its current concentrations.
    ///
    /// The system is handed to the integrator as an ODE problem; the integrator owns all
    /// step control. After a successful run the species hold the state at the last
    /// recorded time point. When the integrator fails, the species are reset to the
    /// concentrations they had before the call.
    ///
    /// # Arguments
    ///
    /// * `setup` - Time range and step size
    /// * `solver` - The peroxide integrator, e.g. `RK4` or `RK5::default()`
    ///
    /// # Returns
    ///
    /// The trajectory formatted through `T`, e.g. [`SimulationResult`](super::result::SimulationResult)
    /// or [`MatrixResult`](super::output::MatrixResult).
    ///
    /// # Examples
    ///
    /// ```
    /// use reactor::prelude::*;
    /// use reactor::simulation::RK4;
    ///
    /// let a = Species::with_concentration("A", 1.0);
    /// let b = Species::new("B");
    ///
    /// let mut system = ReactionSystem::new();
    /// system.add_reaction(reaction!(0.5; a => b));
    ///
    /// let setup = SimulationSetupBuilder::default().t1(1.0).dt(0.01).build().unwrap();
    /// let result = system.integrate::<SimulationResult, _>(&setup, RK4).unwrap();
    ///
    /// assert_eq!(result.time.len(), result.get("A").unwrap().len());
    /// assert!(a.concentration() < 1.0);
    /// ```
    pub fn integrate<T, S>(
        &self,
        setup: &SimulationSetup,
        solver: S,
    ) -> Result<T::Output, SimulationError>
    where
        T: OutputFormat,
        S: ODEIntegrator,
    {
        setup.validate()?;

        let initial_state = self.concentrations();
        debug!(
            "Integrating {} species over [{}, {}] with dt = {}",
            initial_state.len(),
            setup.t0,
            setup.t1,
            setup.dt
        );

        let solver = BasicODESolver::new(solver);
        let outcome = solver.solve(self, (setup.t0, setup.t1), setup.dt, &initial_state);
        let (times, y_out) = self.settle(&initial_state, outcome)?;

        debug!("Integration finished after {} time points", times.len());

        Ok(T::create_output(times, y_out, self))
    }

    /// Leaves the species at the last recorded state, or at `initial_state` if the
    /// integrator failed or recorded nothing. Stage evaluations inside the integrator
    /// write intermediate states into the species either way.
    fn settle(
        &self,
        initial_state: &[f64],
        outcome: anyhow::Result<(Vec<f64>, StepperOutput)>,
    ) -> Result<(Vec<f64>, StepperOutput), SimulationError> {
        let restore = |error: SimulationError| match self.set_concentrations(initial_state) {
            Ok(()) => error,
            Err(e) => e.into(),
        };

        let (times, y_out) = outcome
            .map_err(|e| restore(SimulationError::IntegrationError(e.to_string())))?;

        match y_out.last() {
            Some(final_state) => self.set_concentrations(final_state)?,
            None => return Err(restore(SimulationError::EmptyOutput)),
        }

        Ok((times, y_out))
    }

    /// Applies an initial condition by species name and integrates the system.
    ///
    /// See [`ReactionSystem::apply_initial_condition`] and [`ReactionSystem::integrate`].
    pub fn simulate<T, S>(
        &self,
        initial_condition: &InitialCondition,
        setup: &SimulationSetup,
        solver: S,
    ) -> Result<T::Output, SimulationError>
    where
        T: OutputFormat,
        S: ODEIntegrator,
    {
        self.apply_initial_condition(initial_condition)?;
        self.integrate::<T, S>(setup, solver)
    }
}
