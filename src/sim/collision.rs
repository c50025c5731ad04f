//! Collision predicates for axis-aligned rectangles
//!
//! All comparisons are strict: rectangles that merely share an edge do not
//! collide, and an entity sitting exactly on a field edge has not crossed it.

use super::rect::Rect;

/// True if the two rectangles overlap with positive area
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Top edge is above the field
#[inline]
pub fn crosses_top(r: &Rect) -> bool {
    r.top() < 0.0
}

/// Bottom edge is below the field
#[inline]
pub fn crosses_bottom(r: &Rect, field_height: f32) -> bool {
    r.bottom() > field_height
}

/// Left edge is past the left goal line
#[inline]
pub fn crosses_left(r: &Rect) -> bool {
    r.left() < 0.0
}

/// Right edge is past the right goal line
#[inline]
pub fn crosses_right(r: &Rect, field_width: f32) -> bool {
    r.right() > field_width
}
