//! The flow advection simulator.
//!
//! A tracked point rides a 2D vector flow field that it perturbs as it
//! goes: each step a steering-biased radial kernel injects a localized
//! delta around the point's current cell, then the point advances by
//! the flow sampled at that cell. The field is never reset — the base
//! pattern is computed once and perturbations accumulate across the
//! whole run.

use crate::config::{ConfigError, FlowConfig};
use seiche_core::{Cell, Simulator, StepError};
use seiche_grid::{radial_kernel, Grid, GridError, Steering};
use seiche_trace::{PlaybackSpec, Trace};

/// A 2D floating-point position on the grid.
///
/// Axis convention follows row-major grid order: `x` indexes rows
/// (axis 0) and `y` indexes columns (axis 1). Sampling floors each
/// component to a cell index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedPoint {
    /// Position along axis 0 (rows).
    pub x: f64,
    /// Position along axis 1 (columns).
    pub y: f64,
}

impl TrackedPoint {
    /// Create a point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The floor-rounded cell under this point.
    ///
    /// May be out of the grid; sampling through
    /// [`Grid::sample`] handles that case by returning nothing.
    pub fn cell(&self) -> Cell {
        Cell::new(self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// A 2D vector field stored as one grid per component.
///
/// The `x` component advects the row coordinate and the `y` component
/// the column coordinate (see [`TrackedPoint`]). Both grids always
/// share a shape.
#[derive(Debug, Clone)]
pub struct FlowField {
    x: Grid,
    y: Grid,
}

impl FlowField {
    /// Build a field from explicit component grids of equal shape.
    pub fn new(x: Grid, y: Grid) -> Result<Self, GridError> {
        x.ensure_same_shape(&y)?;
        Ok(Self { x, y })
    }

    /// An `n x n` field with both components zero.
    pub fn zero(n: u32) -> Result<Self, GridError> {
        Ok(Self {
            x: Grid::square(n)?,
            y: Grid::square(n)?,
        })
    }

    /// The base flow pattern: column-uniform stripes
    /// `x[:, c] = drift_x * sin(πc/n)`, `y[:, c] = drift_y * cos(πc/n)`.
    ///
    /// The value depends only on the column and is broadcast across
    /// all rows — a river-like drift with minor cross-current.
    pub fn base(n: u32, drift_x: f64, drift_y: f64) -> Result<Self, GridError> {
        let mut x = Grid::square(n)?;
        let mut y = Grid::square(n)?;
        for c in 0..n {
            let phase = std::f64::consts::PI * f64::from(c) / f64::from(n);
            let vx = (drift_x * phase.sin()) as f32;
            let vy = (drift_y * phase.cos()) as f32;
            for r in 0..n {
                x.set(r, c, vx);
                y.set(r, c, vy);
            }
        }
        Ok(Self { x, y })
    }

    /// The x-component (row-advection) grid.
    pub fn x(&self) -> &Grid {
        &self.x
    }

    /// The y-component (column-advection) grid.
    pub fn y(&self) -> &Grid {
        &self.y
    }

    /// Sample both components at a cell, or `None` out of bounds.
    pub fn sample(&self, cell: Cell) -> Option<(f32, f32)> {
        Some((self.x.sample(cell)?, self.y.sample(cell)?))
    }
}

/// A point-advection simulation through a self-modifying flow field.
///
/// Owns the [`FlowField`], the [`TrackedPoint`], and the recorded path.
/// The path holds `steps + 1` entries after a full run: the initial
/// position plus one entry per step.
///
/// # Per-step algorithm (step index `t`)
///
/// ```text
/// angle       = sin(t / steering.period) * steering.amplitude
/// inject radial kernel at point's cell:  x += delta, y += delta/2
/// sample (x, y) at floored cell          // out of bounds: no movement
/// position   += sample * advection_gain
/// record(position)
/// ```
///
/// # Examples
///
/// ```
/// use seiche_core::Simulator;
/// use seiche_sim::{FlowConfig, FlowSimulator, SimConfig};
///
/// let config = FlowConfig {
///     sim: SimConfig { n: 32, steps: 20, ..SimConfig::default() },
///     ..FlowConfig::default()
/// };
/// let mut sim = FlowSimulator::new(config).unwrap();
/// sim.run().unwrap();
/// assert_eq!(sim.path().len(), 21);
/// ```
#[derive(Debug)]
pub struct FlowSimulator {
    config: FlowConfig,
    field: FlowField,
    point: TrackedPoint,
    path: Trace<TrackedPoint>,
    completed: u32,
}

impl FlowSimulator {
    /// Frame interval handed to the renderer, in milliseconds.
    pub const FRAME_INTERVAL_MS: u32 = 30;

    /// Create a simulator with the standard base flow pattern.
    pub fn new(config: FlowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = FlowField::base(config.sim.n, config.drift_x, config.drift_y)?;
        Ok(Self::from_field(config, field))
    }

    /// Create a simulator with an explicit initial flow field.
    ///
    /// The field must be `n x n` for the configured `n`.
    pub fn with_field(config: FlowConfig, field: FlowField) -> Result<Self, ConfigError> {
        config.validate()?;
        let n = config.sim.n;
        if field.x.rows() != n || field.x.cols() != n {
            return Err(GridError::ShapeMismatch {
                expected: (n, n),
                got: (field.x.rows(), field.x.cols()),
            }
            .into());
        }
        Ok(Self::from_field(config, field))
    }

    fn from_field(config: FlowConfig, field: FlowField) -> Self {
        let (x, y) = config.start_position();
        let point = TrackedPoint::new(x, y);
        let mut path = Trace::with_capacity(config.sim.steps as usize + 1);
        path.record(&point);
        Self {
            config,
            field,
            point,
            path,
            completed: 0,
        }
    }

    /// The recorded path: initial position plus one entry per step.
    pub fn path(&self) -> &Trace<TrackedPoint> {
        &self.path
    }

    /// Current point position.
    pub fn point(&self) -> TrackedPoint {
        self.point
    }

    /// Current flow field (base pattern plus accumulated injections).
    pub fn field(&self) -> &FlowField {
        &self.field
    }

    /// The configuration this simulator was built with.
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Render hand-off: fixed interval, no color scale (polyline).
    pub fn playback(&self) -> PlaybackSpec {
        PlaybackSpec {
            frame_interval_ms: Self::FRAME_INTERVAL_MS,
            color_scale: None,
        }
    }
}

impl Simulator for FlowSimulator {
    fn name(&self) -> &str {
        "flow"
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
        let t = f64::from(self.completed);
        let n = self.config.sim.n;

        let injection = &self.config.injection;
        if injection.enabled {
            let angle = (t / self.config.steering.period).sin() * self.config.steering.amplitude;
            let oscillation = (t / injection.oscillation_period).sin();
            let cross = injection.cross_coupling as f32;
            let contributions = radial_kernel(
                self.point.cell(),
                injection.radius,
                Steering::from_angle(angle),
                oscillation,
                injection.strength,
                n,
                n,
            );
            for kc in contributions {
                self.field.x.add(kc.cell, kc.delta);
                self.field.y.add(kc.cell, kc.delta * cross);
            }
        }

        // Sample at the *current* floored cell; out of bounds means no
        // movement this step.
        if let Some((vx, vy)) = self.field.sample(self.point.cell()) {
            self.point.x += f64::from(vx) * self.config.advection_gain;
            self.point.y += f64::from(vy) * self.config.advection_gain;
        }

        if self.config.sim.check_non_finite
            && !(self.point.x.is_finite() && self.point.y.is_finite())
        {
            return Err(StepError::NonFinite {
                field: "position",
                cell: self.point.cell(),
                step: self.completed,
            });
        }

        self.path.record(&self.point);
        self.completed += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InjectionConfig, SimConfig};

    fn small_config(n: u32, steps: u32) -> FlowConfig {
        FlowConfig {
            sim: SimConfig {
                n,
                steps,
                ..SimConfig::default()
            },
            ..FlowConfig::default()
        }
    }

    // ── Base field ──────────────────────────────────────────────

    #[test]
    fn base_field_is_column_uniform() {
        let field = FlowField::base(16, 0.02, 0.005).unwrap();
        for c in 0..16 {
            let x0 = field.x().get(0, c);
            let y0 = field.y().get(0, c);
            for r in 1..16 {
                assert_eq!(field.x().get(r, c), x0, "x stripe broken at ({r}, {c})");
                assert_eq!(field.y().get(r, c), y0, "y stripe broken at ({r}, {c})");
            }
        }
    }

    #[test]
    fn base_field_matches_closed_form() {
        let n = 16u32;
        let field = FlowField::base(n, 0.02, 0.005).unwrap();
        for c in 0..n {
            let phase = std::f64::consts::PI * f64::from(c) / f64::from(n);
            assert_eq!(field.x().get(3, c), (0.02 * phase.sin()) as f32);
            assert_eq!(field.y().get(3, c), (0.005 * phase.cos()) as f32);
        }
    }

    #[test]
    fn flow_field_rejects_mismatched_components() {
        let x = Grid::square(4).unwrap();
        let y = Grid::square(5).unwrap();
        assert!(matches!(
            FlowField::new(x, y),
            Err(GridError::ShapeMismatch { .. })
        ));
    }

    // ── Path recording ──────────────────────────────────────────

    #[test]
    fn path_starts_at_default_position() {
        let sim = FlowSimulator::new(small_config(100, 10)).unwrap();
        assert_eq!(sim.path().len(), 1);
        assert_eq!(sim.path().get(0), Some(&TrackedPoint::new(50.0, 33.0)));
    }

    #[test]
    fn path_length_is_steps_plus_one() {
        let mut sim = FlowSimulator::new(small_config(32, 25)).unwrap();
        sim.run().unwrap();
        assert_eq!(sim.path().len(), 26);
    }

    // ── Stationarity ────────────────────────────────────────────

    #[test]
    fn zero_field_and_disabled_injection_never_moves() {
        let config = FlowConfig {
            drift_x: 0.0,
            drift_y: 0.0,
            injection: InjectionConfig {
                enabled: false,
                ..InjectionConfig::default()
            },
            ..small_config(32, 40)
        };
        let mut sim = FlowSimulator::new(config).unwrap();
        let start = sim.point();
        sim.run().unwrap();
        assert_eq!(sim.path().len(), 41);
        for p in sim.path() {
            assert_eq!(*p, start, "point moved with zero flow and no injection");
        }
    }

    #[test]
    fn out_of_bounds_point_stops_moving() {
        // A field that ejects the point off the top edge in one step:
        // after that, sampling fails and the position freezes.
        let n = 8u32;
        let mut x = Grid::square(n).unwrap();
        for c in 0..n {
            for r in 0..n {
                x.set(r, c, -1.0);
            }
        }
        let y = Grid::square(n).unwrap();
        let config = FlowConfig {
            injection: InjectionConfig {
                enabled: false,
                ..InjectionConfig::default()
            },
            advection_gain: 50.0,
            start: Some((4.0, 4.0)),
            ..small_config(n, 5)
        };
        let mut sim = FlowSimulator::with_field(config, FlowField::new(x, y).unwrap()).unwrap();
        sim.run().unwrap();
        // Step 1 moves to x = 4 - 50 = -46; steps 2..5 cannot sample.
        let frozen = TrackedPoint::new(-46.0, 4.0);
        assert_eq!(sim.path().get(1), Some(&frozen));
        for i in 2..=5 {
            assert_eq!(sim.path().get(i), Some(&frozen), "entry {i} moved");
        }
    }

    // ── Injection ───────────────────────────────────────────────

    #[test]
    fn injection_accumulates_across_steps() {
        // Pin the point (zero gain) and slow the oscillation so every
        // step injects with the same sign: the field must grow
        // monotonically ahead of the steering direction, because the
        // base pattern is never re-derived.
        let config = FlowConfig {
            drift_x: 0.0,
            drift_y: 0.0,
            advection_gain: 0.0,
            steering: crate::config::SteeringConfig {
                period: 1.0e9,
                amplitude: 0.5,
            },
            injection: InjectionConfig {
                oscillation_period: 2.0,
                ..InjectionConfig::default()
            },
            start: Some((16.0, 16.0)),
            ..small_config(32, 3)
        };
        let mut sim = FlowSimulator::new(config).unwrap();
        // Cell two rows ahead of the pinned point.
        let probe = Cell::new(18, 16);

        sim.advance().unwrap(); // t = 0: sin(0) = 0, injects nothing
        let after_first = sim.field().x().sample(probe).unwrap();
        assert_eq!(after_first, 0.0);

        sim.advance().unwrap(); // t = 1: sin(0.5) > 0
        let after_second = sim.field().x().sample(probe).unwrap();
        assert!(after_second > 0.0);

        sim.advance().unwrap(); // t = 2: sin(1.0) > 0, adds on top
        let after_third = sim.field().x().sample(probe).unwrap();
        assert!(
            after_third > after_second,
            "perturbations must accumulate: {after_third} vs {after_second}"
        );
    }

    #[test]
    fn cross_coupling_is_exactly_half() {
        // With the steering near zero heading, deltas land in x; y must
        // receive exactly half of each, so at any probe cell
        // y == 0.5 * x after a run from a zero base field.
        let config = FlowConfig {
            drift_x: 0.0,
            drift_y: 0.0,
            advection_gain: 0.0,
            start: Some((16.0, 16.0)),
            ..small_config(32, 7)
        };
        let mut sim = FlowSimulator::new(config).unwrap();
        sim.run().unwrap();
        let x = sim.field().x().as_slice();
        let y = sim.field().y().as_slice();
        for i in 0..x.len() {
            assert_eq!(y[i], x[i] * 0.5, "cell {i} broke the 1:2 coupling");
        }
    }

    #[test]
    fn disabled_injection_leaves_the_field_at_base() {
        let config = FlowConfig {
            injection: InjectionConfig {
                enabled: false,
                ..InjectionConfig::default()
            },
            ..small_config(16, 10)
        };
        let mut sim = FlowSimulator::new(config).unwrap();
        let base = FlowField::base(16, 0.02, 0.005).unwrap();
        sim.run().unwrap();
        assert_eq!(sim.field().x().as_slice(), base.x().as_slice());
        assert_eq!(sim.field().y().as_slice(), base.y().as_slice());
    }

    // ── Completion ──────────────────────────────────────────────

    #[test]
    fn advance_after_completion_fails() {
        let mut sim = FlowSimulator::new(small_config(8, 2)).unwrap();
        sim.run().unwrap();
        assert_eq!(sim.advance(), Err(StepError::RunComplete { steps: 2 }));
        assert_eq!(sim.path().len(), 3);
    }

    #[test]
    fn with_field_rejects_shape_mismatch() {
        let config = small_config(8, 1);
        let field = FlowField::zero(9).unwrap();
        assert!(matches!(
            FlowSimulator::with_field(config, field),
            Err(ConfigError::Grid(GridError::ShapeMismatch { .. }))
        ));
    }

    // ── Playback hand-off ───────────────────────────────────────

    #[test]
    fn playback_spec_is_polyline() {
        let sim = FlowSimulator::new(small_config(8, 1)).unwrap();
        let spec = sim.playback();
        assert_eq!(spec.frame_interval_ms, 30);
        assert!(spec.color_scale.is_none());
    }
}
