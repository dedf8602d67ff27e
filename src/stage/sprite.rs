//! Renderable game-world entities.
//!
//! A [`Sprite`] owns its transform plus, optionally, a [`Physics`] object,
//! an [`Animation`], and a list of [`Action`]s. Every frame
//! [`Sprite::act`] integrates physics into position, advances the
//! animation, and runs the actions.

use crate::actions::Action;
use crate::animation::Animation;
use crate::math::rectangle::Rectangle;
use crate::math::vector2::Vector2;
use crate::physics::Physics;
use crate::render::Renderer;
use crate::texture::Texture;

/// A game-world entity: character, item, obstacle, projectile.
pub struct Sprite {
    /// x-coordinate of the sprite's center.
    pub x: f32,
    /// y-coordinate of the sprite's center.
    pub y: f32,
    /// Width used for the boundary and for drawing.
    pub width: f32,
    /// Height used for the boundary and for drawing.
    pub height: f32,
    /// Rotation of the texture in degrees. Does not affect the boundary.
    pub angle: f32,
    /// Transparency, from 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f32,
    /// Reverse the texture along the x direction.
    pub mirrored: bool,
    /// Reverse the texture along the y direction.
    pub flipped: bool,
    /// Whether this sprite is drawn at all.
    pub visible: bool,
    /// Physics state, if this sprite moves kinematically.
    pub physics: Option<Physics>,
    texture: Option<Texture>,
    animation: Option<Animation>,
    actions: Vec<Action>,
    removed: bool,
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new()
    }
}

impl Sprite {
    /// Create a sprite at the origin with no texture, physics, animation,
    /// or actions.
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            angle: 0.0,
            opacity: 1.0,
            mirrored: false,
            flipped: false,
            visible: true,
            physics: None,
            texture: None,
            animation: None,
            actions: Vec::new(),
            removed: false,
        }
    }

    // ==================== transform ====================

    /// Set the coordinates of the center of this sprite.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Move this sprite by the specified amounts.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotate this sprite by the specified angle in degrees.
    pub fn rotate_by(&mut self, delta_angle: f32) {
        self.angle += delta_angle;
    }

    /// Move by `distance` along the direction `angle_degrees`.
    pub fn move_at_angle(&mut self, distance: f32, angle_degrees: f32) {
        let radians = angle_degrees.to_radians();
        self.x += distance * radians.cos();
        self.y += distance * radians.sin();
    }

    /// Move forward by `distance` along the sprite's current angle.
    pub fn move_forward(&mut self, distance: f32) {
        self.move_at_angle(distance, self.angle);
    }

    /// Set the size used for the boundary and for drawing.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    // ==================== texture / animation ====================

    /// Set the texture displayed by this sprite. Also adopts the texture
    /// region's size.
    pub fn set_texture(&mut self, texture: Texture) {
        self.width = texture.region.width;
        self.height = texture.region.height;
        self.texture = Some(texture);
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Set the animation used by this sprite. Also adopts the current
    /// frame as texture and its size. Pass a fresh clone of a template
    /// animation; sharing playback state across sprites is not possible
    /// by construction.
    pub fn set_animation(&mut self, animation: Animation) {
        let frame = animation.current_frame().clone();
        self.width = frame.region.width;
        self.height = frame.region.height;
        self.texture = Some(frame);
        self.animation = Some(animation);
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn animation_mut(&mut self) -> Option<&mut Animation> {
        self.animation.as_mut()
    }

    // ==================== physics ====================

    /// Attach top-down physics with the given parameters.
    pub fn set_physics(&mut self, acceleration: f32, max_speed: f32, deceleration: f32) {
        self.physics = Some(Physics::top_down(acceleration, max_speed, deceleration));
    }

    // ==================== actions ====================

    /// Attach an [`Action`]. Attached actions run automatically, in
    /// parallel, in attachment order.
    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Number of actions currently attached.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Drop all attached actions (the explicit cancellation primitive).
    pub fn clear_actions(&mut self) {
        self.actions.clear();
    }

    // ==================== per-frame update ====================

    /// Advance this sprite one frame, in this fixed order:
    ///
    /// 1. If physics is attached: copy position in, update, copy back out.
    /// 2. If an animation is attached: advance it and adopt its current
    ///    frame as the active texture.
    /// 3. Run every attached action on the list as of the start of this
    ///    step, dropping those that report completion. An action that
    ///    attaches further actions never corrupts the iteration; the new
    ///    actions first run next frame.
    pub fn act(&mut self, dt: f32) {
        if let Some(physics) = self.physics.as_mut() {
            physics.position.set_values(self.x, self.y);
            physics.update(dt);
            self.x = physics.position.x;
            self.y = physics.position.y;
        }

        if let Some(animation) = self.animation.as_mut() {
            animation.update(dt);
            self.texture = Some(animation.current_frame().clone());
        }

        let mut running = std::mem::take(&mut self.actions);
        running.retain_mut(|action| !action.apply(self, dt));
        // keep any actions attached during this frame, after the survivors
        running.append(&mut self.actions);
        self.actions = running;
    }

    // ==================== collision ====================

    /// Boundary rectangle at the current position, recomputed on every
    /// call. Rotation has no effect on the boundary.
    pub fn boundary(&self) -> Rectangle {
        Rectangle::new(
            self.x - self.width / 2.0,
            self.y - self.height / 2.0,
            self.width,
            self.height,
        )
    }

    /// Check if this sprite overlaps another sprite.
    pub fn overlaps(&self, other: &Sprite) -> bool {
        self.boundary().overlaps(&other.boundary())
    }

    /// If overlapping `other`, translate this sprite by the minimum
    /// translation vector so the two no longer overlap. Velocity is not
    /// changed.
    pub fn prevent_overlap(&mut self, other: &Sprite) {
        if self.overlaps(other) {
            let mtv = self.boundary().min_translation_vector(&other.boundary());
            self.move_by(mtv.x, mtv.y);
        }
    }

    /// Simulate bouncing off `other`: push out along the minimum
    /// translation vector, then reflect velocity against a surface
    /// perpendicular to that push. Requires physics to be attached.
    pub fn bounce_against(&mut self, other: &Sprite) {
        if self.overlaps(other) {
            let mtv = self.boundary().min_translation_vector(&other.boundary());
            self.move_by(mtv.x, mtv.y);

            // treat the push-out direction as the surface normal
            let surface_angle = mtv.angle() + 90.0;
            match self.physics.as_mut() {
                Some(physics) => physics.bounce_against(surface_angle),
                None => log::warn!("Sprite::bounce_against without physics; overlap resolved only"),
            }
        }
    }

    // ==================== screen helpers ====================

    /// Keep this sprite completely within the screen by clamping its
    /// position.
    pub fn bound_to_screen(&mut self, screen_width: f32, screen_height: f32) {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        if self.x - half_w < 0.0 {
            self.x = half_w;
        }
        if self.x + half_w > screen_width {
            self.x = screen_width - half_w;
        }
        if self.y - half_h < 0.0 {
            self.y = half_h;
        }
        if self.y + half_h > screen_height {
            self.y = screen_height - half_h;
        }
    }

    /// If this sprite has moved completely past a screen edge, reappear at
    /// the opposite edge.
    pub fn wrap_to_screen(&mut self, screen_width: f32, screen_height: f32) {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        if self.x + half_w < 0.0 {
            self.x = screen_width + half_w;
        }
        if self.x - half_w > screen_width {
            self.x = -half_w;
        }
        if self.y + half_h < 0.0 {
            self.y = screen_height + half_h;
        }
        if self.y - half_h > screen_height {
            self.y = -half_h;
        }
    }

    /// Whether any part of this sprite's boundary remains on screen.
    pub fn is_on_screen(&self, screen_width: f32, screen_height: f32) -> bool {
        let off_screen = self.x + self.width / 2.0 < 0.0
            || self.x - self.width / 2.0 > screen_width
            || self.y + self.height / 2.0 < 0.0
            || self.y - self.height / 2.0 > screen_height;
        !off_screen
    }

    // ==================== lifecycle / rendering ====================

    /// Mark this sprite for removal from its containing group.
    pub fn remove(&mut self) {
        self.removed = true;
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Draw this sprite through the renderer, if visible and textured.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        if !self.visible {
            return;
        }
        if let Some(texture) = &self.texture {
            renderer.draw_region(
                texture,
                self.x,
                self.y,
                self.width,
                self.height,
                self.angle,
                self.mirrored,
                self.flipped,
                self.opacity,
            );
        }
    }

    /// Position as a vector, convenient with
    /// [`crate::tilemap::TileMap::symbol_positions`].
    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}
