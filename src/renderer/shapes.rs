//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::{PlayfieldBounds, Rect};

/// Two triangles covering `rect`
pub fn rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let tl = rect.origin();
    let br = rect.far_corner();

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Convert field coordinates (top-left origin, y down) to normalized device
/// coordinates (-1..1, y up)
#[inline]
pub fn field_to_ndc(bounds: &PlayfieldBounds, p: Vec2) -> Vec2 {
    Vec2::new(
        p.x / bounds.width * 2.0 - 1.0,
        1.0 - p.y / bounds.height * 2.0,
    )
}
