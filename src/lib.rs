//! Tesserae library.
//!
//! A lightweight 2D game framework: a scene tree of groups, sprites,
//! labels, and tile maps, driven by per-frame `update`/`render` traversal,
//! with kinematic physics, time-driven actions, and tile collision
//! resolution. Rendering, input, and windowing are raylib-backed and kept
//! behind the [`render::Renderer`] trait and the [`input::Input`] snapshot.

pub mod actions;
pub mod animation;
pub mod demos;
pub mod game;
pub mod input;
pub mod math;
pub mod physics;
pub mod render;
pub mod stage;
pub mod texture;
pub mod tilemap;
