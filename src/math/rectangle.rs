//! Axis-aligned rectangle.
//!
//! Rectangles are the collision shape for sprites and tiles, and describe
//! source regions of textures. Rectangles with width or height equal to 0
//! are valid and represent edges (see [`crate::tilemap::Tile`]).

use smallvec::SmallVec;

use crate::math::vector2::Vector2;

/// An axis-aligned rectangle, defined by its top-left corner and size.
///
/// Width and height are never negative; `right >= left` and
/// `bottom >= top` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    /// Create a rectangle from its top-left corner and size.
    ///
    /// Negative sizes are a caller error.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rectangle size");
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Update all rectangle data. Useful for entities that move.
    pub fn set_values(&mut self, left: f32, top: f32, width: f32, height: f32) {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rectangle size");
        self.left = left;
        self.top = top;
        self.width = width;
        self.height = height;
    }

    /// x-coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// y-coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Determine if this rectangle overlaps another rectangle.
    ///
    /// Overlap is strict: rectangles touching only along a boundary do
    /// not overlap.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        let no_overlap = other.right() <= self.left
            || self.right() <= other.left
            || other.bottom() <= self.top
            || self.bottom() <= other.top;
        !no_overlap
    }

    /// Assuming this rectangle and `other` overlap, calculate the minimum
    /// length vector required to translate this rectangle so that the two
    /// no longer overlap.
    ///
    /// The result is chosen from four single-axis candidates (push right,
    /// push left, push up, push down); exact ties keep that enumeration
    /// order. This is only correct for shallow single-sided overlap, which
    /// is the situation it is invoked in.
    pub fn min_translation_vector(&self, other: &Rectangle) -> Vector2 {
        let mut candidates: SmallVec<[Vector2; 4]> = SmallVec::new();
        candidates.push(Vector2::new(other.right() - self.left, 0.0)); // flush right of other
        candidates.push(Vector2::new(other.left - self.right(), 0.0)); // flush left of other
        candidates.push(Vector2::new(0.0, other.bottom() - self.top)); // flush below other
        candidates.push(Vector2::new(0.0, other.top - self.bottom())); // flush above other
        candidates.sort_by(Vector2::cmp_by_length);
        candidates[0]
    }

    /// Determine if this rectangle contains the point (x, y).
    /// The boundary is inclusive.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.left <= x && x <= self.right() && self.top <= y && y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== OVERLAP TESTS ====================

    #[test]
    fn test_overlaps_basic() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_is_symmetric() {
        let a = Rectangle::new(-3.0, 2.0, 4.0, 6.0);
        let b = Rectangle::new(0.0, 0.0, 2.0, 3.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn test_separated_rectangles_do_not_overlap() {
        let a = Rectangle::new(0.0, 0.0, 5.0, 5.0);
        let b = Rectangle::new(20.0, 20.0, 5.0, 5.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_edge_touching_counts_as_no_overlap() {
        let a = Rectangle::new(0.0, 0.0, 5.0, 5.0);
        let right = Rectangle::new(5.0, 0.0, 5.0, 5.0);
        let below = Rectangle::new(0.0, 5.0, 5.0, 5.0);
        assert!(!a.overlaps(&right));
        assert!(!right.overlaps(&a));
        assert!(!a.overlaps(&below));
        assert!(!below.overlaps(&a));
    }

    #[test]
    fn test_degenerate_rectangle_overlap() {
        // A zero-width rectangle is a vertical edge; it overlaps a
        // rectangle that straddles it.
        let edge = Rectangle::new(5.0, 0.0, 0.0, 10.0);
        let body = Rectangle::new(3.0, 2.0, 4.0, 4.0);
        assert!(body.overlaps(&edge));
        // But not one that merely touches it.
        let touching = Rectangle::new(5.0, 0.0, 4.0, 4.0);
        assert!(!touching.overlaps(&edge));
    }

    // ==================== MTV TESTS ====================

    #[test]
    fn test_mtv_pushes_along_shallow_axis() {
        // `a` overlaps the left side of `b` by 2 units.
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(8.0, -20.0, 10.0, 50.0);
        let mtv = a.min_translation_vector(&b);
        assert!(approx_eq(mtv.x, -2.0));
        assert!(approx_eq(mtv.y, 0.0));
    }

    #[test]
    fn test_mtv_vertical_push() {
        // `a` overlaps the top side of `b` by 1 unit.
        let a = Rectangle::new(-20.0, 0.0, 50.0, 10.0);
        let b = Rectangle::new(0.0, 9.0, 10.0, 10.0);
        let mtv = a.min_translation_vector(&b);
        assert!(approx_eq(mtv.x, 0.0));
        assert!(approx_eq(mtv.y, -1.0));
    }

    #[test]
    fn test_mtv_tie_break_uses_candidate_order() {
        // Perfectly concentric same-size squares: all four candidates tie.
        // The first listed candidate (push right) must win.
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let mtv = a.min_translation_vector(&b);
        assert!(approx_eq(mtv.x, 10.0));
        assert!(approx_eq(mtv.y, 0.0));
    }

    // ==================== CONTAINS TESTS ====================

    #[test]
    fn test_contains_interior_point() {
        let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(5.0, 5.0));
        assert!(!r.contains(15.0, 5.0));
        assert!(!r.contains(5.0, -1.0));
    }

    #[test]
    fn test_contains_boundary_is_inclusive() {
        let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(10.0, 0.0));
    }

    #[test]
    fn test_derived_edges() {
        let r = Rectangle::new(2.0, 3.0, 4.0, 5.0);
        assert!(approx_eq(r.right(), 6.0));
        assert!(approx_eq(r.bottom(), 8.0));
    }
}
