//! Seiche: explicit-time-stepping wave and flow simulation on fixed 2D
//! grids.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Seiche sub-crates. For most users, adding `seiche` as a
//! single dependency is sufficient.
//!
//! Two simulators share one architectural shape — grid-resident state,
//! a local spatial operator, a modulation derived from field energy or
//! time, explicit integration with a fixed `dt`, and per-step recording:
//!
//! - [`sim::WaveSimulator`] propagates a scalar height field under a
//!   banded, feedback-modulated material coefficient and records one
//!   height frame per step.
//! - [`sim::FlowSimulator`] advects a tracked point through a vector
//!   flow field perturbed by a steering-biased radial injection and
//!   records the trajectory.
//!
//! # Quick start
//!
//! ```rust
//! use seiche::prelude::*;
//!
//! // Shrink the default constants for a fast run.
//! let config = WaveConfig {
//!     sim: SimConfig { n: 16, steps: 10, ..SimConfig::default() },
//!     ..WaveConfig::default()
//! };
//!
//! let mut sim = WaveSimulator::new(config).unwrap();
//! sim.run().unwrap();
//!
//! // One frame per step, handed off to a renderer with a fixed pace
//! // and symmetric color scale.
//! assert_eq!(sim.frames().len(), 10);
//! let playback = sim.playback();
//! assert_eq!(playback.frame_interval_ms, 30);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `seiche-core` | Cell coordinates, step errors, the `Simulator` trait |
//! | [`grid`] | `seiche-grid` | Grid storage, boundary policies, Laplacian and radial kernel |
//! | [`sim`] | `seiche-sim` | The wave and flow simulators and their configuration |
//! | [`trace`] | `seiche-trace` | Append-only recording and playback descriptors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell coordinates, step errors, and the `Simulator` trait
/// (`seiche-core`).
pub use seiche_core as types;

/// Grid storage, boundary policies, and spatial operators
/// (`seiche-grid`).
///
/// Provides [`grid::Grid`], [`grid::Boundary`], the periodic
/// [`grid::laplacian`], and the clamped [`grid::radial_kernel`].
pub use seiche_grid as grid;

/// The wave and flow simulators and their configuration (`seiche-sim`).
pub use seiche_sim as sim;

/// Append-only recording and playback descriptors (`seiche-trace`).
///
/// [`trace::Trace`] is the ordered, immutable record each simulator
/// fills; [`trace::PlaybackSpec`] is the render hand-off.
pub use seiche_trace as trace;

/// Common imports for typical Seiche usage.
///
/// ```rust
/// use seiche::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use seiche_core::{Cell, Simulator, StepError};

    // Grid and operators
    pub use seiche_grid::{laplacian, radial_kernel, Boundary, Grid, GridError, Steering};

    // Simulators and configuration
    pub use seiche_sim::{
        ConfigError, FeedbackConfig, FlowConfig, FlowField, FlowSimulator, InjectionConfig,
        MaterialMap, SimConfig, SteeringConfig, TrackedPoint, WaveConfig, WaveSimulator,
    };

    // Recording
    pub use seiche_trace::{ColorScale, PlaybackSpec, Trace};
}
