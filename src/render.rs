//! Drawing boundary between the scene graph and raylib.
//!
//! Scene nodes draw through the [`Renderer`] trait and never touch raylib
//! directly; [`RaylibRenderer`] is the production implementation, built
//! around a per-frame draw handle and a [`TextureStore`].

use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::math;
use crate::stage::label::TextAlign;
use crate::texture;

/// What the scene graph needs from a drawing backend.
pub trait Renderer {
    /// Draw a texture region centered at `(x, y)`, scaled to
    /// `width`×`height`, rotated by `angle` degrees, optionally reversed
    /// along either axis, tinted by `opacity` in `[0, 1]`.
    #[allow(clippy::too_many_arguments)]
    fn draw_region(
        &mut self,
        texture: &texture::Texture,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        angle: f32,
        mirrored: bool,
        flipped: bool,
        opacity: f32,
    );

    /// Draw a texture region as an unrotated cell with `(x, y)` at its
    /// top-left corner.
    fn draw_tile(&mut self, texture: &texture::Texture, x: f32, y: f32, width: f32, height: f32);

    /// Draw a line of text anchored at `(x, y)` according to `align`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: i32, color: [u8; 4], align: TextAlign);
}

/// Loaded raylib textures, keyed by the string in [`texture::Texture`].
#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an image file into GPU memory under `key`.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: &str,
        path: &str,
    ) -> Result<(), String> {
        let tex = rl
            .load_texture(thread, path)
            .map_err(|e| format!("failed to load texture {path}: {e}"))?;
        log::debug!("loaded texture '{key}' from {path} ({}x{})", tex.width, tex.height);
        self.map.insert(key.to_string(), tex);
        Ok(())
    }

    pub fn texture(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    /// A region handle covering the whole image under `key`.
    pub fn full_region(&self, key: &str) -> Result<texture::Texture, String> {
        let tex = self
            .map
            .get(key)
            .ok_or_else(|| format!("no texture loaded under key '{key}'"))?;
        Ok(texture::Texture::new(
            key,
            math::rectangle::Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32),
        ))
    }

    /// Slice the image under `key` into a `rows`×`cols` grid of equal
    /// cells, returned in row-major order. Used for tilesets and
    /// spritesheets.
    pub fn grid_regions(
        &self,
        key: &str,
        rows: usize,
        cols: usize,
    ) -> Result<Vec<texture::Texture>, String> {
        let tex = self
            .map
            .get(key)
            .ok_or_else(|| format!("no texture loaded under key '{key}'"))?;
        let cell_w = tex.width as f32 / cols as f32;
        let cell_h = tex.height as f32 / rows as f32;
        let mut regions = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                regions.push(texture::Texture::new(
                    key,
                    math::rectangle::Rectangle::new(
                        c as f32 * cell_w,
                        r as f32 * cell_h,
                        cell_w,
                        cell_h,
                    ),
                ));
            }
        }
        Ok(regions)
    }
}

/// [`Renderer`] backed by a raylib draw handle for the current frame.
pub struct RaylibRenderer<'a, 'd> {
    pub d: &'a mut RaylibDrawHandle<'d>,
    pub textures: &'a TextureStore,
}

impl RaylibRenderer<'_, '_> {
    fn tint(opacity: f32) -> Color {
        Color::new(255, 255, 255, (opacity.clamp(0.0, 1.0) * 255.0) as u8)
    }
}

impl Renderer for RaylibRenderer<'_, '_> {
    fn draw_region(
        &mut self,
        texture: &texture::Texture,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        angle: f32,
        mirrored: bool,
        flipped: bool,
        opacity: f32,
    ) {
        let Some(tex) = self.textures.texture(&texture.key) else {
            log::warn!("missing texture '{}'", texture.key);
            return;
        };
        // negative source dimensions reverse the sampled region
        let mut src = Rectangle {
            x: texture.region.left,
            y: texture.region.top,
            width: texture.region.width,
            height: texture.region.height,
        };
        if mirrored {
            src.width = -src.width;
        }
        if flipped {
            src.height = -src.height;
        }
        let dest = Rectangle {
            x,
            y,
            width,
            height,
        };
        // origin at the center so rotation pivots around (x, y)
        let origin = Vector2 {
            x: width / 2.0,
            y: height / 2.0,
        };
        self.d
            .draw_texture_pro(tex, src, dest, origin, angle, Self::tint(opacity));
    }

    fn draw_tile(&mut self, texture: &texture::Texture, x: f32, y: f32, width: f32, height: f32) {
        let Some(tex) = self.textures.texture(&texture.key) else {
            log::warn!("missing texture '{}'", texture.key);
            return;
        };
        let src = Rectangle {
            x: texture.region.left,
            y: texture.region.top,
            width: texture.region.width,
            height: texture.region.height,
        };
        let dest = Rectangle {
            x,
            y,
            width,
            height,
        };
        self.d
            .draw_texture_pro(tex, src, dest, Vector2 { x: 0.0, y: 0.0 }, 0.0, Color::WHITE);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: i32, color: [u8; 4], align: TextAlign) {
        let width = self.d.measure_text(text, font_size);
        let x = match align {
            TextAlign::Left => x as i32,
            TextAlign::Center => x as i32 - width / 2,
            TextAlign::Right => x as i32 - width,
        };
        let [r, g, b, a] = color;
        self.d
            .draw_text(text, x, y as i32, font_size, Color::new(r, g, b, a));
    }
}
