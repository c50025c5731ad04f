//! Moving rectangles (ball and paddles)

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::vector::Vector1D;

/// Independent per-axis velocity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub x: Vector1D,
    pub y: Vector1D,
}

impl Velocity {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x: Vector1D::new(x),
            y: Vector1D::new(y),
        }
    }

    /// Replace both components at once
    pub fn set(&mut self, x: f32, y: f32) {
        self.x.set(x);
        self.y.set(y);
    }
}

/// A sized rectangle with a velocity.
///
/// The size is fixed at construction; only the position can change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    rect: Rect,
    pub velocity: Velocity,
}

impl Entity {
    pub fn new(rect: Rect, velocity: Velocity) -> Self {
        Self { rect, velocity }
    }

    /// An entity that never moves on its own (paddles)
    pub fn stationary(rect: Rect) -> Self {
        Self::new(rect, Velocity::default())
    }

    /// Live bounding rectangle
    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Advance position by one tick of velocity
    pub fn integrate(&mut self) {
        self.rect.x += self.velocity.x.value;
        self.rect.y += self.velocity.y.value;
    }

    /// Teleport the top-left corner
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_moves_by_velocity() {
        let mut e = Entity::new(Rect::new(100.0, 50.0, 10.0, 10.0), Velocity::new(3.0, -1.5));
        e.integrate();
        assert_eq!(e.rect().x, 103.0);
        assert_eq!(e.rect().y, 48.5);

        e.integrate();
        assert_eq!(e.rect().x, 106.0);
        assert_eq!(e.rect().y, 47.0);
    }

    #[test]
    fn test_size_survives_moves() {
        let mut e = Entity::stationary(Rect::new(10.0, 160.0, 10.0, 80.0));
        e.integrate();
        assert_eq!(e.rect().origin(), glam::Vec2::new(10.0, 160.0));

        e.set_position(42.0, 7.0);
        assert_eq!(*e.rect(), Rect::new(42.0, 7.0, 10.0, 80.0));
    }
}
