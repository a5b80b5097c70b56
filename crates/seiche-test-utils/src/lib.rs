//! Test fixtures for Seiche development.
//!
//! Small grid constructors and comparison helpers shared by unit and
//! integration tests across the workspace.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{assert_all_close, impulse, uniform};
