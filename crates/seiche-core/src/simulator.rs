//! The [`Simulator`] trait.
//!
//! Both Seiche simulators share one architectural shape: grid-resident
//! state, a local spatial operator, a modulation derived from current
//! field energy or time, explicit integration with a fixed `dt`, and
//! per-step recording. This trait captures the shared time loop; the
//! concrete state and per-step algorithm live with each implementor.

use crate::error::StepError;

/// A fixed-length explicit-time-stepping simulation.
///
/// # Contract
///
/// - `advance()` MUST be deterministic: the same configuration produces
///   an identical state and record sequence on every run.
/// - Each successful `advance()` increments `steps_completed()` by one
///   and appends exactly one entry to the simulator's record.
/// - After `steps_completed() == steps_planned()`, further `advance()`
///   calls fail with [`StepError::RunComplete`] and state is frozen.
pub trait Simulator {
    /// Human-readable name for error reporting.
    fn name(&self) -> &str;

    /// Total number of steps this simulation will execute.
    fn steps_planned(&self) -> u32;

    /// Number of steps executed so far.
    fn steps_completed(&self) -> u32;

    /// Execute one time step.
    fn advance(&mut self) -> Result<(), StepError>;

    /// Whether the configured step count has completed.
    fn is_complete(&self) -> bool {
        self.steps_completed() >= self.steps_planned()
    }

    /// Run the remaining steps to completion.
    ///
    /// The only exit is loop completion or a step error; there is no
    /// cancellation mid-run.
    fn run(&mut self) -> Result<(), StepError> {
        while !self.is_complete() {
            self.advance()?;
        }
        Ok(())
    }
}
