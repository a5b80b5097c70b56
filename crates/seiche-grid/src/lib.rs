//! Grid storage, boundary policies, and spatial operators for Seiche.
//!
//! The [`Grid`] is a dense row-major `f32` array with fallible
//! construction. Two boundary policies cover everything the operators
//! need: [`Boundary::Wrap`] (periodic; the discrete Laplacian) and
//! [`Boundary::Absorb`] (out-of-range cells skipped; localized kernels
//! and point sampling). The policies are per-operator, never merged:
//! the Laplacian always wraps and the radial kernel always clamps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod grid;
pub mod operator;

pub use boundary::{resolve_axis, Boundary};
pub use error::GridError;
pub use grid::Grid;
pub use operator::{laplacian, radial_kernel, KernelContribution, Steering};
