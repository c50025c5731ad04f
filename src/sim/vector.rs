//! Single-axis velocity component

use serde::{Deserialize, Serialize};

/// One scalar velocity component (units per tick)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector1D {
    pub value: f32,
}

impl Vector1D {
    pub const fn new(value: f32) -> Self {
        Self { value }
    }

    /// Replace the value unconditionally
    #[inline]
    pub fn set(&mut self, value: f32) {
        self.value = value;
    }

    /// Accumulate a delta
    #[inline]
    pub fn add(&mut self, delta: f32) {
        self.value += delta;
    }

    /// Reverse direction in place
    #[inline]
    pub fn bounce(&mut self) {
        self.value = -self.value;
    }
}
