//! Append-only state recording and playback descriptors for Seiche.
//!
//! Simulations are consumed in batch, not streamed: each simulator
//! records one immutable copy of its observable state per step into a
//! [`Trace`], and an external renderer replays the finished sequence
//! using a [`PlaybackSpec`]. Nothing here performs I/O — the record is
//! the in-memory sequence itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod playback;
pub mod trace;

pub use playback::{ColorScale, PlaybackSpec};
pub use trace::Trace;
