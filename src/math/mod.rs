//! Geometry primitives.
//!
//! Submodules overview:
//! - [`vector2`] – 2D vector with polar (length/angle) accessors
//! - [`rectangle`] – axis-aligned rectangle with overlap and
//!   minimum-translation-vector helpers

pub mod rectangle;
pub mod vector2;
