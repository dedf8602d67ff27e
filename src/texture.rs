//! Texture handles.
//!
//! A [`Texture`] names an image loaded into the
//! [`TextureStore`](crate::render::TextureStore) by key and selects a
//! rectangular region of it. Handles are cheap to clone and many sprites
//! may reference the same image; the pixel data itself lives with the
//! rendering backend.

use crate::math::rectangle::Rectangle;

/// A rectangular region of a loaded image, identified by store key.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// Key of the image in the texture store.
    pub key: String,
    /// Source region within the image, in pixels.
    pub region: Rectangle,
}

impl Texture {
    /// Reference a region of the image stored under `key`.
    pub fn new(key: impl Into<String>, region: Rectangle) -> Self {
        Self {
            key: key.into(),
            region,
        }
    }
}
