//! Deterministic simulation module
//!
//! All gameplay rules live here. This module must stay pure:
//! - One fixed step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{crosses_bottom, crosses_left, crosses_right, crosses_top, intersects};
pub use entity::{Entity, Velocity};
pub use rect::Rect;
pub use score::{ScoreTracker, Side};
pub use state::{GameEvent, PlayfieldBounds, Simulation};
pub use tick::tick;
pub use vector::Vector1D;
