//! CPU-side frame recording

use super::RenderSurface;
use super::shapes;
use super::vertex::Vertex;
use crate::consts::SCORE_FONT_PX;
use crate::sim::Rect;

/// A line of text to be drawn by the host (DOM overlay in the browser)
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub center_x: f32,
    pub baseline_y: f32,
    pub size_px: f32,
}

/// Geometry and text for one frame, in field coordinates
#[derive(Debug, Default)]
pub struct Frame {
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangle list, six vertices per rectangle
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }
}

impl RenderSurface for Frame {
    fn clear(&mut self) {
        self.vertices.clear();
        self.labels.clear();
    }

    fn draw_rect(&mut self, rect: &Rect, color: [f32; 4]) {
        self.vertices.extend_from_slice(&shapes::rect(rect, color));
    }

    fn draw_text(&mut self, text: &str, center_x: f32, baseline_y: f32) {
        self.labels.push(TextLabel {
            text: text.to_owned(),
            center_x,
            baseline_y,
            size_px: SCORE_FONT_PX,
        });
    }
}
