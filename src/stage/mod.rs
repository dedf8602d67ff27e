//! The scene tree.
//!
//! Everything that participates in the per-frame update/render traversal
//! is a [`node::Node`]: a closed set of variants dispatched by match.
//!
//! Submodules overview:
//! - [`node`] – the variant set and common update/render dispatch
//! - [`group`] – ordered, mutable container of nodes; itself a node
//! - [`sprite`] – renderable entity integrating physics, animation, and
//!   actions every frame
//! - [`label`] – positioned text

pub mod group;
pub mod label;
pub mod node;
pub mod sprite;
