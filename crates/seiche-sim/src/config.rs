//! Simulation configuration, validation, and error types.
//!
//! Every parameter the simulators depend on is a documented field
//! with a documented default — no hidden literals. One shared
//! [`SimConfig`] carries the grid and stepping constants consumed by
//! both simulators, so the two default parameter sets cannot silently
//! diverge. `validate()` fails fast at construction; configuration
//! mistakes never surface as numeric garbage mid-run.

use std::error::Error;
use std::fmt;

use seiche_grid::{Grid, GridError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid construction or shape validation failed.
    Grid(GridError),
    /// Spatial step `dx` is NaN, infinite, zero, or negative.
    InvalidSpacing {
        /// The invalid value.
        value: f64,
    },
    /// Time step `dt` is NaN, infinite, zero, or negative.
    InvalidTimeStep {
        /// The invalid value.
        value: f64,
    },
    /// A parameter that must be finite is NaN or infinite.
    NonFinite {
        /// Name of the offending parameter.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// A parameter that must be strictly positive is not.
    NonPositive {
        /// Name of the offending parameter.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// A parameter that must be non-negative is negative.
    Negative {
        /// Name of the offending parameter.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// Feedback clamp bounds are inverted or non-finite.
    InvalidFeedbackBounds {
        /// Lower clamp bound.
        floor: f64,
        /// Upper clamp bound.
        ceiling: f64,
    },
    /// Injection radius is zero; the kernel footprint would be empty.
    ZeroInjectionRadius,
    /// An explicit start position falls outside the grid.
    StartOutOfBounds {
        /// Requested row coordinate.
        row: f64,
        /// Requested column coordinate.
        col: f64,
        /// Grid dimension.
        n: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidSpacing { value } => {
                write!(f, "dx must be finite and positive, got {value}")
            }
            Self::InvalidTimeStep { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::NonFinite { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::NonPositive { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::Negative { name, value } => {
                write!(f, "{name} must be non-negative, got {value}")
            }
            Self::InvalidFeedbackBounds { floor, ceiling } => {
                write!(
                    f,
                    "feedback bounds must be finite with floor <= ceiling, got [{floor}, {ceiling}]"
                )
            }
            Self::ZeroInjectionRadius => {
                write!(f, "injection radius must be at least 1")
            }
            Self::StartOutOfBounds { row, col, n } => {
                write!(
                    f,
                    "start position ({row}, {col}) outside [0, {n}) x [0, {n})"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Grid and stepping constants shared by both simulators.
///
/// The explicit scheme is conditionally stable and no CFL check is
/// performed: the defaults are known-stable constants, and other
/// values may diverge.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid dimension; all grids are `n x n`. Default: 100.
    pub n: u32,
    /// Spatial step shared by all grids in a simulator. Default: 0.01.
    pub dx: f64,
    /// Integration time step. Default: 0.001.
    pub dt: f64,
    /// Number of simulation steps. Default: 500.
    pub steps: u32,
    /// Scan simulator state for NaN/infinity after each step and fail
    /// with [`StepError::NonFinite`](seiche_core::StepError::NonFinite)
    /// instead of recording diverged frames. Default: true. Disable to
    /// let divergence propagate into the record unchecked.
    pub check_non_finite: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            n: 100,
            dx: 0.01,
            dt: 0.001,
            steps: 500,
            check_non_finite: true,
        }
    }
}

impl SimConfig {
    /// Validate the shared constants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid must be non-empty and index arithmetic must fit i32.
        if self.n == 0 {
            return Err(GridError::EmptyGrid.into());
        }
        if self.n > Grid::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "n",
                value: self.n,
                max: Grid::MAX_DIM,
            }
            .into());
        }
        // 2. Spatial step divides the Laplacian; zero is meaningless.
        if !(self.dx.is_finite() && self.dx > 0.0) {
            return Err(ConfigError::InvalidSpacing { value: self.dx });
        }
        // 3. Time step drives explicit integration.
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep { value: self.dt });
        }
        Ok(())
    }
}

// ── FeedbackConfig ─────────────────────────────────────────────────

/// Configuration for the global feedback modulator.
///
/// Each step, the material coefficient map is scaled by
/// `clamp(mean(|velocity|) * gain, floor, ceiling)`.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackConfig {
    /// Gain applied to the mean absolute velocity. Default: 10.
    pub gain: f64,
    /// Lower clamp bound for the modulation factor. Default: 0.5.
    pub floor: f64,
    /// Upper clamp bound for the modulation factor. Default: 1.5.
    pub ceiling: f64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            gain: 10.0,
            floor: 0.5,
            ceiling: 1.5,
        }
    }
}

impl FeedbackConfig {
    /// Validate gain and clamp bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("feedback gain", self.gain)?;
        if !(self.floor.is_finite() && self.ceiling.is_finite() && self.floor <= self.ceiling) {
            return Err(ConfigError::InvalidFeedbackBounds {
                floor: self.floor,
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }
}

// ── WaveConfig ─────────────────────────────────────────────────────

/// Complete configuration for the scalar wave simulator.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
    /// Shared grid and stepping constants.
    pub sim: SimConfig,
    /// Medium density; divides the force in the velocity update.
    /// Default: 1000 (water, kg/m³).
    pub density: f64,
    /// Gravitational constant; `density * gravity` is the flat linear
    /// restoring coefficient applied to the height field — see
    /// [`WaveConfig::damping`]. Default: 9.81.
    pub gravity: f64,
    /// Material coefficients for the three horizontal bands (top,
    /// middle, bottom thirds). Default: `[0.05, 0.072, 0.09]`.
    pub bands: [f64; 3],
    /// Manhattan radius of the initial diamond pulse. Default: 15.
    pub pulse_radius: u32,
    /// Amplitude of the initial pulse. Default: 0.005.
    pub pulse_amplitude: f64,
    /// Feedback modulation parameters.
    pub feedback: FeedbackConfig,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            density: 1000.0,
            gravity: 9.81,
            bands: [0.05, 0.072, 0.09],
            pulse_radius: 15,
            pulse_amplitude: 0.005,
            feedback: FeedbackConfig::default(),
        }
    }
}

impl WaveConfig {
    /// The damping constant `density * gravity`.
    ///
    /// A flat linear restoring coefficient on the height field, not a
    /// wavenumber-dependent gravity-wave restoring force. The coupling
    /// is a deliberate simplification kept for its visually plausible
    /// resonance, not a physical law.
    pub fn damping(&self) -> f64 {
        self.density * self.gravity
    }

    /// Validate all wave parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sim.validate()?;
        check_positive("density", self.density)?;
        check_non_negative("gravity", self.gravity)?;
        check_non_negative("band coefficient", self.bands[0])?;
        check_non_negative("band coefficient", self.bands[1])?;
        check_non_negative("band coefficient", self.bands[2])?;
        check_finite("pulse amplitude", self.pulse_amplitude)?;
        self.feedback.validate()
    }
}

// ── SteeringConfig ─────────────────────────────────────────────────

/// Configuration for the oscillating steering heading.
///
/// The heading at step `t` is `sin(t / period) * amplitude` radians.
#[derive(Clone, Debug, PartialEq)]
pub struct SteeringConfig {
    /// Oscillation period divisor in steps. Default: 50.
    pub period: f64,
    /// Heading amplitude in radians. Default: 0.5.
    pub amplitude: f64,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            period: 50.0,
            amplitude: 0.5,
        }
    }
}

impl SteeringConfig {
    /// Validate period and amplitude.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("steering period", self.period)?;
        check_finite("steering amplitude", self.amplitude)
    }
}

// ── InjectionConfig ────────────────────────────────────────────────

/// Configuration for the localized flow-field injection.
#[derive(Clone, Debug, PartialEq)]
pub struct InjectionConfig {
    /// Whether injection runs at all. Default: true.
    pub enabled: bool,
    /// Kernel radius in cells (strict Euclidean cutoff). Default: 5.
    pub radius: u32,
    /// Perturbation strength. Default: 0.002.
    pub strength: f64,
    /// Oscillation period divisor in steps; the time-varying term is
    /// `sin(t / period)`. Default: 10.
    pub oscillation_period: f64,
    /// Fraction of the x-component delta added to the y component —
    /// the components are coupled asymmetrically at exactly one half.
    /// Default: 0.5.
    pub cross_coupling: f64,
}

impl Default for InjectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 5,
            strength: 0.002,
            oscillation_period: 10.0,
            cross_coupling: 0.5,
        }
    }
}

impl InjectionConfig {
    /// Validate radius, strength, and coupling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius == 0 {
            return Err(ConfigError::ZeroInjectionRadius);
        }
        check_finite("injection strength", self.strength)?;
        check_positive("injection oscillation period", self.oscillation_period)?;
        check_finite("injection cross coupling", self.cross_coupling)
    }
}

// ── FlowConfig ─────────────────────────────────────────────────────

/// Complete configuration for the flow advection simulator.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowConfig {
    /// Shared grid and stepping constants.
    pub sim: SimConfig,
    /// Amplitude of the base x-component stripes
    /// (`x[:, c] = drift_x * sin(πc/n)`; the x component advects the
    /// row coordinate). Default: 0.02.
    pub drift_x: f64,
    /// Amplitude of the base y-component stripes
    /// (`y[:, c] = drift_y * cos(πc/n)`). Default: 0.005.
    pub drift_y: f64,
    /// Localized injection parameters.
    pub injection: InjectionConfig,
    /// Steering heading parameters.
    pub steering: SteeringConfig,
    /// Gain applied to the sampled flow when advancing the point.
    /// Default: 50.
    pub advection_gain: f64,
    /// Explicit start position; `None` uses the default
    /// `(n / 2, n / 3)` with integer division.
    pub start: Option<(f64, f64)>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            drift_x: 0.02,
            drift_y: 0.005,
            injection: InjectionConfig::default(),
            steering: SteeringConfig::default(),
            advection_gain: 50.0,
            start: None,
        }
    }
}

impl FlowConfig {
    /// The tracked point's initial position.
    pub fn start_position(&self) -> (f64, f64) {
        self.start
            .unwrap_or((f64::from(self.n() / 2), f64::from(self.n() / 3)))
    }

    fn n(&self) -> u32 {
        self.sim.n
    }

    /// Validate all flow parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sim.validate()?;
        check_finite("drift_x", self.drift_x)?;
        check_finite("drift_y", self.drift_y)?;
        self.injection.validate()?;
        self.steering.validate()?;
        check_finite("advection gain", self.advection_gain)?;
        if let Some((row, col)) = self.start {
            let n = f64::from(self.n());
            if !(row.is_finite() && col.is_finite())
                || row < 0.0
                || row >= n
                || col < 0.0
                || col >= n
            {
                return Err(ConfigError::StartOutOfBounds {
                    row,
                    col,
                    n: self.n(),
                });
            }
        }
        Ok(())
    }
}
