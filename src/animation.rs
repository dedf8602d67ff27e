//! Frame-timed texture sequences.
//!
//! An [`Animation`] cycles through a list of textures, one per
//! `frame_duration` seconds. Multiple sprites must not share a single
//! animation instance, because each sprite needs its own elapsed-time
//! state; load an animation once as a template and give each sprite a
//! [`Clone`] of it (the frame list is shared handles, the playback state
//! is fresh per clone).

use crate::math::rectangle::Rectangle;
use crate::texture::Texture;

/// A sequence of textures displayed in rapid succession.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Texture>,
    frame_duration: f32,
    looping: bool,
    elapsed: f32,
    /// Set to stop this animation from advancing.
    pub paused: bool,
}

impl Animation {
    /// Create an animation from an explicit frame list.
    ///
    /// An empty frame list is a caller error.
    pub fn new(frames: Vec<Texture>, frame_duration: f32, looping: bool) -> Self {
        assert!(!frames.is_empty(), "animation requires at least one frame");
        Self {
            frames,
            frame_duration,
            looping,
            elapsed: 0.0,
            paused: false,
        }
    }

    /// Create an animation from a sprite sheet stored under `key`, sliced
    /// into a `rows` x `cols` grid of equally sized frames, ordered
    /// left-to-right then top-to-bottom.
    pub fn from_grid(
        key: impl Into<String>,
        sheet_width: f32,
        sheet_height: f32,
        rows: usize,
        cols: usize,
        frame_duration: f32,
        looping: bool,
    ) -> Self {
        let key = key.into();
        let frame_width = sheet_width / cols as f32;
        let frame_height = sheet_height / rows as f32;
        let mut frames = Vec::with_capacity(rows * cols);
        for y in 0..rows {
            for x in 0..cols {
                frames.push(Texture::new(
                    key.clone(),
                    Rectangle::new(
                        x as f32 * frame_width,
                        y as f32 * frame_height,
                        frame_width,
                        frame_height,
                    ),
                ));
            }
        }
        Self::new(frames, frame_duration, looping)
    }

    /// Advance playback by `dt` seconds. No-op while paused.
    pub fn update(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        self.elapsed += dt;
        if self.looping && self.elapsed > self.total_duration() {
            self.elapsed -= self.total_duration();
        }
    }

    /// The texture that should currently be displayed. A finished
    /// non-looping animation stays on its last frame.
    pub fn current_frame(&self) -> &Texture {
        let mut index = (self.elapsed / self.frame_duration).floor() as usize;
        if index >= self.frames.len() {
            index = self.frames.len() - 1;
        }
        &self.frames[index]
    }

    /// True once a non-looping animation has displayed every frame for its
    /// full duration. A looping animation never finishes.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total_duration() && !self.looping
    }

    /// Time to display every frame once.
    pub fn total_duration(&self) -> f32 {
        self.frame_duration * self.frames.len() as f32
    }

    /// Playback time since the animation started (or last wrapped).
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
