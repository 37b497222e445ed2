//! Test fixtures for polyline-overlap.
//!
//! Provides:
//! - Encoded polylines with known decodings (published vectors and a real
//!   Carlisle -> Harrisburg, PA route)
//! - Named polygon rings

pub mod polygons;

pub use polygons::*;
pub use vectors::*;
