//! Frame driver
//!
//! One `run_frame` call is one trip around the game loop: tick the
//! simulation, redraw, and ask the host for the next frame. The tick itself
//! never yields, so every frame sees a fully updated simulation.

use crate::platform::{FrameScheduler, InputAdapter, PaddleCommand};
use crate::renderer::{RenderSurface, draw_frame};
use crate::sim::{GameEvent, Simulation, tick};

/// Owns the simulation and advances it once per host frame
#[derive(Debug, Clone)]
pub struct SimulationClock {
    sim: Simulation,
    frames: u64,
}

impl SimulationClock {
    pub fn new(sim: Simulation) -> Self {
        Self { sim, frames: 0 }
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Forward a key press to the simulation between frames
    pub fn apply_key(&mut self, input: &InputAdapter, key: &str) -> Option<PaddleCommand> {
        input.handle_key(&mut self.sim, key)
    }

    /// Tick, draw, then schedule the next frame
    pub fn run_frame<R, S>(&mut self, surface: &mut R, scheduler: &mut S) -> Vec<GameEvent>
    where
        R: RenderSurface + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        let events = tick(&mut self.sim);
        self.frames += 1;

        for event in &events {
            match event {
                GameEvent::Goal { scorer } => {
                    log::info!(
                        "Point to {} player, score {} (tick {})",
                        scorer.as_str(),
                        self.sim.score,
                        self.sim.time_ticks
                    );
                }
                GameEvent::PaddleHit(side) => {
                    log::debug!("Ball hit {} paddle", side.as_str());
                }
                GameEvent::WallBounce => {
                    log::debug!("Ball bounced off wall");
                }
            }
        }

        draw_frame(&self.sim, surface);
        scheduler.request_frame();

        events
    }
}
