//! 2D vector with polar accessors.
//!
//! [`Vector2`] is used for positions, velocities, and accelerations
//! (see [`crate::physics`]), and for minimum translation vectors in
//! collision resolution (see [`crate::math::rectangle`] and
//! [`crate::tilemap`]). Angles are measured in degrees from the
//! positive x-axis.

use std::cmp::Ordering;

/// A 2D vector (x, y).
///
/// Callers mutate vectors in place; a vector is always owned exclusively
/// by whichever object holds it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    /// Create a vector with the given coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Set both coordinates.
    pub fn set_values(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Add the coordinates of another vector to this one.
    pub fn add_vector(&mut self, other: Vector2) {
        self.x += other.x;
        self.y += other.y;
    }

    /// Add values to the coordinates of this vector.
    pub fn add_values(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Multiply both coordinates by a scalar.
    pub fn multiply(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }

    /// Length (magnitude) of this vector.
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Angle (in degrees) between this vector and the x-axis, in the
    /// range -180 to 180. Returns 0 for the zero vector.
    pub fn angle(&self) -> f32 {
        if self.length() == 0.0 {
            0.0
        } else {
            self.y.atan2(self.x).to_degrees()
        }
    }

    /// Change the length of this vector while preserving its angle.
    ///
    /// The angle of the zero vector is 0, so setting the length of a zero
    /// vector produces a vector along the positive x-axis.
    pub fn set_length(&mut self, length: f32) {
        let angle = self.angle().to_radians();
        self.x = length * angle.cos();
        self.y = length * angle.sin();
    }

    /// Change the angle (in degrees) of this vector while preserving its
    /// length. A zero vector stays zero regardless of the requested angle.
    pub fn set_angle(&mut self, angle_degrees: f32) {
        let length = self.length();
        let angle = angle_degrees.to_radians();
        self.x = length * angle.cos();
        self.y = length * angle.sin();
    }

    /// Order vectors by length. Used with a stable sort to pick the
    /// minimum translation vector among displacement candidates; equal
    /// lengths keep their original (candidate enumeration) order.
    pub fn cmp_by_length(&self, other: &Vector2) -> Ordering {
        self.length().total_cmp(&other.length())
    }
}
