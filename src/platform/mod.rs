//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling
//! - Keyboard input

pub mod input;

pub use input::{Direction, InputAdapter, KeyBindings, PaddleCommand};

/// "Run again next frame" primitive supplied by the host.
///
/// In the browser this is `requestAnimationFrame`; natively it is a plain loop.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Scheduler for hosts that poll: remembers whether another frame was asked for.
#[derive(Debug, Default)]
pub struct PendingFrame {
    pending: bool,
}

impl PendingFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending request, if any
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for PendingFrame {
    fn request_frame(&mut self) {
        self.pending = true;
    }
}
