//! The two Seiche simulators and their configuration.
//!
//! Both simulators are instances of one shape — grid-resident state, a
//! local spatial operator, a modulation derived from field energy or
//! time, explicit integration with a fixed `dt`, and per-step recording:
//!
//! 1. [`WaveSimulator`] — propagates a scalar height field under a
//!    banded material coefficient scaled by global velocity feedback.
//! 2. [`FlowSimulator`] — advects a tracked point through a vector flow
//!    field perturbed each step by a steering-biased radial injection.
//!
//! The simulators never communicate; each owns its grids exclusively
//! and runs its own fixed-count loop via
//! [`Simulator::run`](seiche_core::Simulator::run).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod feedback;
pub mod flow;
pub mod material;
pub mod wave;

pub use config::{
    ConfigError, FeedbackConfig, FlowConfig, InjectionConfig, SimConfig, SteeringConfig,
    WaveConfig,
};
pub use feedback::FeedbackModulator;
pub use flow::{FlowField, FlowSimulator, TrackedPoint};
pub use material::MaterialMap;
pub use wave::WaveSimulator;
