//! Rendering module
//!
//! The simulation draws itself through the `RenderSurface` trait. `Frame`
//! collects a frame's geometry on the CPU; `RenderState` uploads it to WebGPU.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, TextLabel};
pub use pipeline::RenderState;
pub use vertex::{Vertex, colors};

use crate::consts::SCORE_BASELINE_Y;
use crate::sim::{Rect, Simulation};

/// Draw target for one frame
pub trait RenderSurface {
    /// Discard everything drawn so far
    fn clear(&mut self);
    /// Fill an axis-aligned rectangle (field coordinates)
    fn draw_rect(&mut self, rect: &Rect, color: [f32; 4]);
    /// Draw a line of text horizontally centered on `center_x`
    fn draw_text(&mut self, text: &str, center_x: f32, baseline_y: f32);
}

/// Draw the whole playfield: ball, both paddles, and the score line
pub fn draw_frame<S: RenderSurface + ?Sized>(sim: &Simulation, surface: &mut S) {
    surface.clear();
    surface.draw_rect(sim.ball.rect(), colors::BALL);
    surface.draw_rect(sim.left_paddle.rect(), colors::PADDLE);
    surface.draw_rect(sim.right_paddle.rect(), colors::PADDLE);

    let score = sim.score.to_string();
    surface.draw_text(&score, sim.bounds.width / 2.0, SCORE_BASELINE_Y);
}
