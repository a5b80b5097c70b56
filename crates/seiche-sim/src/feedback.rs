//! Global feedback modulation.

use crate::config::FeedbackConfig;
use seiche_grid::Grid;

/// Derives the per-step modulation factor from the velocity field.
///
/// The factor is `clamp(mean(|velocity|) * gain, floor, ceiling)` —
/// global feedback reacting to the average kinetic energy of the whole
/// field, not per-cell. It scales the material coefficient map each
/// step before the force is assembled.
#[derive(Debug, Clone)]
pub struct FeedbackModulator {
    gain: f64,
    floor: f64,
    ceiling: f64,
}

impl FeedbackModulator {
    /// Build a modulator from validated configuration.
    ///
    /// `floor <= ceiling` is enforced by
    /// [`FeedbackConfig::validate`]; the clamp below relies on it.
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            gain: config.gain,
            floor: config.floor,
            ceiling: config.ceiling,
        }
    }

    /// The modulation factor for the current velocity field.
    pub fn modulation(&self, velocity: &Grid) -> f64 {
        (velocity.mean_abs() * self.gain).clamp(self.floor, self.ceiling)
    }
}
