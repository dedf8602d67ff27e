//! Small playable games exercising the framework end to end.
//!
//! - [`starfish`] — top-down collector: physics, actions, overlap tests
//! - [`platformer`] — platform physics against a tile map
//! - [`explorer`] — map markers, mouse picking, animated pickups

pub mod explorer;
pub mod platformer;
pub mod starfish;
