//! On-screen text.

use crate::render::Renderer;

/// Horizontal anchoring of a label's text around its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A text node for scores, messages, and debug readouts.
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: i32,
    /// RGBA color of the text.
    pub color: [u8; 4],
    pub align: TextAlign,
    pub visible: bool,
    removed: bool,
}

impl Label {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size: 20,
            color: [255, 255, 255, 255],
            align: TextAlign::Left,
            visible: true,
            removed: false,
        }
    }

    pub fn with_font_size(mut self, font_size: i32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: [u8; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Mark this label for removal from its containing group.
    pub fn remove(&mut self) {
        self.removed = true;
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        if !self.visible {
            return;
        }
        renderer.draw_text(&self.text, self.x, self.y, self.font_size, self.color, self.align);
    }
}
