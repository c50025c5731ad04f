//! Paddle Pong - classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Simulation state machine (integration, collisions, scoring)
//! - `clock`: Frame driver tying the simulation to a render surface and scheduler
//! - `renderer`: Render surface abstraction and WebGPU rectangle pipeline
//! - `platform`: Frame scheduling and keyboard input adapter
//! - `settings`: Persisted user configuration

pub mod clock;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use clock::SimulationClock;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Ball is a square
    pub const BALL_SIZE: f32 = 10.0;
    /// Velocity of the very first serve (units per tick)
    pub const BALL_START_VELOCITY: (f32, f32) = (3.0, 0.0);
    /// Serve speeds after a goal; signs are chosen by the scoring side
    pub const SERVE_SPEED_X: f32 = 3.0;
    pub const SERVE_SPEED_Y: f32 = 1.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_INSET: f32 = 10.0;
    /// Distance moved per key press
    pub const PADDLE_STEP: f32 = 10.0;

    /// Smallest field the fixed layout fits in: both paddles with their
    /// insets plus a ball-width gap, and one full paddle height
    pub const MIN_FIELD_WIDTH: f32 = 2.0 * (PADDLE_INSET + PADDLE_WIDTH) + BALL_SIZE;
    pub const MIN_FIELD_HEIGHT: f32 = PADDLE_HEIGHT;

    /// Half-width of the uniform perturbation added on bounces and serves
    pub const PERTURBATION: f32 = 0.5;

    /// Score label placement
    pub const SCORE_FONT_PX: f32 = 24.0;
    pub const SCORE_BASELINE_Y: f32 = 48.0;
}
