//! Utility Module
//!
//! - [`Transform`]: 2D pose (position, scale, z-order, rotation) producing a
//!   column-major model matrix for rendering

pub mod transform;

pub use transform::Transform;
