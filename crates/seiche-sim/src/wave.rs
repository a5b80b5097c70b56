//! The scalar wave simulator.
//!
//! Propagates a height field under a banded material coefficient that
//! is rescaled each step by global velocity feedback. Integration is
//! semi-implicit (symplectic) Euler: the velocity update precedes the
//! height update within the same step, and the height update uses the
//! freshly updated velocity. The ordering is load-bearing: swapping it
//! changes the scheme's stability and the recorded frames.

use crate::config::{ConfigError, WaveConfig};
use crate::feedback::FeedbackModulator;
use crate::material::MaterialMap;
use seiche_core::{Simulator, StepError};
use seiche_grid::{laplacian, Grid, GridError};
use seiche_trace::{ColorScale, PlaybackSpec, Trace};

/// A scalar wave simulation on an `n x n` periodic grid.
///
/// Owns a height field, a velocity field of the same shape, a static
/// [`MaterialMap`], and the recorded frame sequence. Constructed in the
/// *Initialized* state (fields built, pulse written); driven to
/// completion with [`Simulator::run`], after which the frame trace is
/// frozen and the simulator is read-only.
///
/// # Per-step algorithm
///
/// ```text
/// modulation = clamp(mean(|velocity|) * gain, floor, ceiling)
/// force      = material * modulation * laplacian(height) - damping * height
/// velocity  += dt * force / density
/// height    += dt * velocity          // updated velocity
/// record(height)
/// ```
///
/// # Examples
///
/// ```
/// use seiche_core::Simulator;
/// use seiche_sim::{SimConfig, WaveConfig, WaveSimulator};
///
/// let config = WaveConfig {
///     sim: SimConfig { n: 16, steps: 10, ..SimConfig::default() },
///     ..WaveConfig::default()
/// };
/// let mut sim = WaveSimulator::new(config).unwrap();
/// sim.run().unwrap();
/// assert_eq!(sim.frames().len(), 10);
/// ```
#[derive(Debug)]
pub struct WaveSimulator {
    config: WaveConfig,
    height: Grid,
    velocity: Grid,
    material: MaterialMap,
    modulator: FeedbackModulator,
    frames: Trace<Grid>,
    completed: u32,
}

impl WaveSimulator {
    /// Frame interval handed to the renderer, in milliseconds.
    pub const FRAME_INTERVAL_MS: u32 = 30;
    /// Symmetric color-scale limit handed to the renderer.
    pub const COLOR_LIMIT: f32 = 0.01;

    /// Create a simulator with the standard initial condition: zero
    /// height except a diamond-shaped pulse around the grid center,
    /// zero velocity everywhere.
    pub fn new(config: WaveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut height = Grid::square(config.sim.n)?;
        seed_pulse(&mut height, config.pulse_radius, config.pulse_amplitude);
        Self::from_height(config, height)
    }

    /// Create a simulator with an explicit initial height field.
    ///
    /// The field must be `n x n` for the configured `n`; velocity still
    /// starts at zero. Useful for impulse-response experiments.
    pub fn with_initial_height(config: WaveConfig, height: Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        let n = config.sim.n;
        if height.rows() != n || height.cols() != n {
            return Err(GridError::ShapeMismatch {
                expected: (n, n),
                got: (height.rows(), height.cols()),
            }
            .into());
        }
        Self::from_height(config, height)
    }

    fn from_height(config: WaveConfig, height: Grid) -> Result<Self, ConfigError> {
        let n = config.sim.n;
        let velocity = Grid::square(n)?;
        let material = MaterialMap::banded(n, config.bands)?;
        let modulator = FeedbackModulator::new(&config.feedback);
        let frames = Trace::with_capacity(config.sim.steps as usize);
        Ok(Self {
            config,
            height,
            velocity,
            material,
            modulator,
            frames,
            completed: 0,
        })
    }

    /// The recorded height frames, one per completed step.
    pub fn frames(&self) -> &Trace<Grid> {
        &self.frames
    }

    /// Current height field.
    pub fn height(&self) -> &Grid {
        &self.height
    }

    /// Current velocity field.
    pub fn velocity(&self) -> &Grid {
        &self.velocity
    }

    /// The static material coefficient map.
    pub fn material(&self) -> &MaterialMap {
        &self.material
    }

    /// The configuration this simulator was built with.
    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Render hand-off: fixed interval, fixed symmetric color scale.
    pub fn playback(&self) -> PlaybackSpec {
        PlaybackSpec {
            frame_interval_ms: Self::FRAME_INTERVAL_MS,
            color_scale: Some(ColorScale::symmetric(Self::COLOR_LIMIT)),
        }
    }

    fn check_finite(&self) -> Result<(), StepError> {
        for (field, grid) in [("height", &self.height), ("velocity", &self.velocity)] {
            if let Some(flat) = grid.first_non_finite() {
                return Err(StepError::NonFinite {
                    field,
                    cell: grid.cell_at(flat),
                    step: self.completed,
                });
            }
        }
        Ok(())
    }
}

/// Write the diamond pulse into a zeroed height field: cells within
/// Manhattan distance `radius` of the center take
/// `amplitude * sin(euclidean_distance_from_center)`.
fn seed_pulse(height: &mut Grid, radius: u32, amplitude: f64) {
    let n = height.rows() as i32;
    let center = n / 2;
    for r in 0..n {
        for c in 0..n {
            let dr = r - center;
            let dc = c - center;
            if dr.abs() + dc.abs() < radius as i32 {
                let dist = f64::from(dr * dr + dc * dc).sqrt();
                height.set(r as u32, c as u32, (amplitude * dist.sin()) as f32);
            }
        }
    }
}

impl Simulator for WaveSimulator {
    fn name(&self) -> &str {
        "wave"
    }

    fn steps_planned(&self) -> u32 {
        self.config.sim.steps
    }

    fn steps_completed(&self) -> u32 {
        self.completed
    }

    fn advance(&mut self) -> Result<(), StepError> {
        if self.completed >= self.config.sim.steps {
            return Err(StepError::RunComplete {
                steps: self.config.sim.steps,
            });
        }

        // Global feedback from the pre-step velocity field.
        let modulation = self.modulator.modulation(&self.velocity) as f32;

        // Spatial operator over a frozen snapshot of the height field.
        let lap = laplacian(&self.height, self.config.sim.dx);

        let damping = self.config.damping() as f32;
        let vel_scale = (self.config.sim.dt / self.config.density) as f32;
        let dt = self.config.sim.dt as f32;

        let material = self.material.as_slice();
        let lap = lap.as_slice();
        let height = self.height.as_mut_slice();
        let velocity = self.velocity.as_mut_slice();
        for i in 0..height.len() {
            let force = material[i] * modulation * lap[i] - damping * height[i];
            velocity[i] += vel_scale * force;
            height[i] += dt * velocity[i];
        }

        if self.config.sim.check_non_finite {
            self.check_finite()?;
        }

        self.frames.record(&self.height);
        self.completed += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FeedbackConfig, SimConfig};
    use seiche_test_utils::assert_all_close;

    fn small_config(n: u32, steps: u32) -> WaveConfig {
        WaveConfig {
            sim: SimConfig {
                n,
                steps,
                ..SimConfig::default()
            },
            ..WaveConfig::default()
        }
    }

    // ── Initial condition ───────────────────────────────────────

    #[test]
    fn pulse_is_diamond_shaped() {
        let sim = WaveSimulator::new(small_config(40, 1)).unwrap();
        let h = sim.height();
        let center = 20i32;
        for r in 0..40i32 {
            for c in 0..40i32 {
                let manhattan = (r - center).abs() + (c - center).abs();
                let v = h.get(r as u32, c as u32);
                if manhattan >= 15 {
                    assert_eq!(v, 0.0, "cell ({r}, {c}) outside the diamond is non-zero");
                } else {
                    let dist = f64::from((r - center).pow(2) + (c - center).pow(2)).sqrt();
                    let expect = (0.005 * dist.sin()) as f32;
                    assert_eq!(v, expect, "cell ({r}, {c})");
                }
            }
        }
    }

    #[test]
    fn velocity_starts_at_zero() {
        let sim = WaveSimulator::new(small_config(20, 1)).unwrap();
        assert!(sim.velocity().as_slice().iter().all(|&v| v == 0.0));
    }

    // ── Recording ───────────────────────────────────────────────

    #[test]
    fn trace_length_matches_step_count() {
        let mut sim = WaveSimulator::new(small_config(16, 12)).unwrap();
        sim.run().unwrap();
        assert_eq!(sim.frames().len(), 12);
        for frame in sim.frames() {
            assert_eq!(frame.rows(), 16);
            assert_eq!(frame.cols(), 16);
        }
    }

    #[test]
    fn frames_are_copies_not_views() {
        let mut sim = WaveSimulator::new(small_config(16, 3)).unwrap();
        sim.run().unwrap();
        // Earlier frames must not reflect later state.
        let first = sim.frames().get(0).unwrap();
        let last = sim.frames().get(2).unwrap();
        assert_ne!(first.as_slice(), last.as_slice());
    }

    #[test]
    fn advance_after_completion_fails() {
        let mut sim = WaveSimulator::new(small_config(8, 2)).unwrap();
        sim.run().unwrap();
        assert_eq!(sim.advance(), Err(StepError::RunComplete { steps: 2 }));
        assert_eq!(sim.frames().len(), 2);
    }

    // ── Dynamics ────────────────────────────────────────────────

    #[test]
    fn zero_material_zero_damping_freezes_the_field() {
        // With material = 0 and damping = 0 the force path is a no-op
        // and the initial pulse must persist bit-for-bit.
        let config = WaveConfig {
            bands: [0.0, 0.0, 0.0],
            gravity: 0.0,
            ..small_config(24, 20)
        };
        let mut sim = WaveSimulator::new(config).unwrap();
        let initial = sim.height().clone();
        sim.run().unwrap();
        assert_all_close(sim.height(), &initial, 0.0);
        for frame in sim.frames() {
            assert_all_close(frame, &initial, 0.0);
        }
    }

    #[test]
    fn symplectic_ordering_uses_updated_velocity() {
        // One step from a pure impulse with modulation pinned to 1:
        // height must move by dt * (new) velocity, not stay at the old
        // zero-velocity value.
        let config = WaveConfig {
            sim: SimConfig {
                n: 4,
                dx: 1.0,
                dt: 1.0,
                steps: 1,
                check_non_finite: true,
            },
            density: 1.0,
            gravity: 0.0,
            bands: [1.0, 1.0, 1.0],
            feedback: FeedbackConfig {
                gain: 10.0,
                floor: 1.0,
                ceiling: 1.0,
            },
            ..WaveConfig::default()
        };
        let mut height = Grid::square(4).unwrap();
        height.set(2, 2, 1.0);
        let mut sim = WaveSimulator::with_initial_height(config, height).unwrap();
        sim.advance().unwrap();
        // velocity = laplacian: -4 at center, +1 at neighbours.
        assert_eq!(sim.velocity().get(2, 2), -4.0);
        assert_eq!(sim.velocity().get(1, 2), 1.0);
        // height = old + dt * new velocity: 1 - 4 = -3 and 0 + 1 = 1.
        assert_eq!(sim.height().get(2, 2), -3.0);
        assert_eq!(sim.height().get(1, 2), 1.0);
    }

    #[test]
    fn with_initial_height_rejects_shape_mismatch() {
        let config = small_config(8, 1);
        let wrong = Grid::square(9).unwrap();
        assert!(matches!(
            WaveSimulator::with_initial_height(config, wrong),
            Err(ConfigError::Grid(GridError::ShapeMismatch { .. }))
        ));
    }

    // ── Divergence detection ────────────────────────────────────

    #[test]
    fn non_finite_state_is_a_fatal_step_error() {
        let config = small_config(8, 4);
        let mut height = Grid::square(8).unwrap();
        height.set(3, 3, f32::NAN);
        let mut sim = WaveSimulator::with_initial_height(config, height).unwrap();
        let err = sim.run().unwrap_err();
        assert!(matches!(err, StepError::NonFinite { field: "height", .. }));
        // The failing step records no frame.
        assert!(sim.frames().is_empty());
    }

    #[test]
    fn non_finite_check_can_be_disabled() {
        let mut config = small_config(8, 4);
        config.sim.check_non_finite = false;
        let mut height = Grid::square(8).unwrap();
        height.set(3, 3, f32::NAN);
        let mut sim = WaveSimulator::with_initial_height(config, height).unwrap();
        // With the check off, NaNs propagate silently into frames.
        sim.run().unwrap();
        assert_eq!(sim.frames().len(), 4);
    }

    // ── Playback hand-off ───────────────────────────────────────

    #[test]
    fn playback_spec_is_fixed_symmetric() {
        let sim = WaveSimulator::new(small_config(8, 1)).unwrap();
        let spec = sim.playback();
        assert_eq!(spec.frame_interval_ms, 30);
        assert_eq!(spec.color_scale, Some(ColorScale::symmetric(0.01)));
    }
}
