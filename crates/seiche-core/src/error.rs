//! Step-time error taxonomy.
//!
//! Construction-time errors live with the configuration types that
//! produce them (`seiche-grid` and `seiche-sim`); this module covers
//! only errors raised while a simulation is advancing.

use crate::cell::Cell;
use std::error::Error;
use std::fmt;

/// Errors raised by [`Simulator::advance`](crate::Simulator::advance).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A non-finite value (NaN or infinity) was detected in simulator
    /// state after a step. Explicit integration is conditionally stable;
    /// this sentinel turns divergence into a fatal error instead of
    /// letting NaNs propagate into recorded frames.
    NonFinite {
        /// Name of the field containing the non-finite value.
        field: &'static str,
        /// Grid cell where the value was first observed.
        cell: Cell,
        /// Step index (0-based) during which it appeared.
        step: u32,
    },
    /// `advance()` was called after the configured step count completed.
    /// A finished simulator is read-only.
    RunComplete {
        /// The configured number of steps, all of which have executed.
        steps: u32,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, cell, step } => {
                write!(
                    f,
                    "non-finite value in field '{field}' at cell {cell} during step {step}"
                )
            }
            Self::RunComplete { steps } => {
                write!(f, "simulation already complete after {steps} steps")
            }
        }
    }
}

impl Error for StepError {}
