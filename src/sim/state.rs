//! Simulation state
//!
//! `Simulation` is the single owner of every piece of mutable game state.
//! Render and input collaborators borrow it; nothing lives in globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Velocity};
use super::rect::Rect;
use super::score::{ScoreTracker, Side};
use crate::consts::*;
use crate::settings::Settings;

/// Arena size, fixed for the lifetime of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayfieldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayfieldBounds {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

impl PlayfieldBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Events produced by a single tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball crossed the top or bottom edge
    WallBounce,
    /// Ball overlapped a paddle
    PaddleHit(Side),
    /// Ball left the field; `scorer` gets the point
    Goal { scorer: Side },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    pub bounds: PlayfieldBounds,
    pub ball: Entity,
    pub left_paddle: Entity,
    pub right_paddle: Entity,
    pub score: ScoreTracker,
    /// Seed the RNG was created from
    pub seed: u64,
    /// Ticks run so far
    pub time_ticks: u64,
    rng: Pcg32,
}

impl Simulation {
    /// Create a simulation with the standard layout for the given field
    pub fn new(bounds: PlayfieldBounds, seed: u64) -> Self {
        let center = bounds.center();
        let paddle_y = center.y - PADDLE_HEIGHT / 2.0;

        let ball = Entity::new(
            Rect::new(center.x, center.y, BALL_SIZE, BALL_SIZE),
            Velocity::new(BALL_START_VELOCITY.0, BALL_START_VELOCITY.1),
        );
        let left_paddle = Entity::stationary(Rect::new(
            PADDLE_INSET,
            paddle_y,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        ));
        let right_paddle = Entity::stationary(Rect::new(
            bounds.width - PADDLE_INSET - PADDLE_WIDTH,
            paddle_y,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        ));

        Self {
            bounds,
            ball,
            left_paddle,
            right_paddle,
            score: ScoreTracker::new(),
            seed,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create a simulation from user settings, drawing a fresh seed if none is pinned
    pub fn from_settings(settings: &Settings) -> Self {
        let bounds = PlayfieldBounds::new(settings.field_width, settings.field_height);
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::new(bounds, seed)
    }

    pub fn paddle(&self, side: Side) -> &Entity {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    fn paddle_mut(&mut self, side: Side) -> &mut Entity {
        match side {
            Side::Left => &mut self.left_paddle,
            Side::Right => &mut self.right_paddle,
        }
    }

    /// Move a paddle vertically by `dy`.
    ///
    /// A move that would push the paddle past the top or bottom of the field
    /// is dropped entirely rather than clamped. Returns whether it was applied.
    pub fn move_paddle(&mut self, side: Side, dy: f32) -> bool {
        let height = self.bounds.height;
        let paddle = self.paddle_mut(side);
        let rect = *paddle.rect();
        let new_top = rect.top() + dy;

        if new_top < 0.0 || new_top + rect.h > height {
            return false;
        }

        paddle.set_position(rect.x, new_top);
        true
    }

    /// Uniform noise in `[-PERTURBATION, PERTURBATION)`
    pub fn perturbation(&mut self) -> f32 {
        self.rng.random_range(-PERTURBATION..PERTURBATION)
    }

    /// Put the ball back at the field center after `scorer` won a point
    pub fn reset_ball(&mut self, scorer: Side) {
        let center = self.bounds.center();
        let (vx, vy) = match scorer {
            Side::Right => (SERVE_SPEED_X, -SERVE_SPEED_Y),
            Side::Left => (-SERVE_SPEED_X, SERVE_SPEED_Y),
        };
        let noise = self.perturbation();

        self.ball.set_position(center.x, center.y);
        self.ball.velocity.set(vx, vy);
        self.ball.velocity.y.add(noise);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_layout() {
        let sim = Simulation::new(PlayfieldBounds::new(800.0, 400.0), 1);

        assert_eq!(*sim.ball.rect(), Rect::new(400.0, 200.0, 10.0, 10.0));
        assert_eq!(sim.ball.velocity, Velocity::new(3.0, 0.0));
        assert_eq!(*sim.left_paddle.rect(), Rect::new(10.0, 160.0, 10.0, 80.0));
        assert_eq!(*sim.right_paddle.rect(), Rect::new(780.0, 160.0, 10.0, 80.0));
        assert_eq!(sim.score, ScoreTracker::new());
        assert_eq!(sim.time_ticks, 0);
    }

    #[test]
    fn test_paddle_move_accepted() {
        let mut sim = Simulation::new(PlayfieldBounds::default(), 1);
        assert!(sim.move_paddle(Side::Left, -PADDLE_STEP));
        assert_eq!(sim.left_paddle.rect().top(), 150.0);
        // Right paddle untouched
        assert_eq!(sim.right_paddle.rect().top(), 160.0);
    }

    #[test]
    fn test_paddle_at_top_rejects_up() {
        let mut sim = Simulation::new(PlayfieldBounds::default(), 1);
        sim.left_paddle.set_position(PADDLE_INSET, 0.0);

        assert!(!sim.move_paddle(Side::Left, -PADDLE_STEP));
        assert_eq!(sim.left_paddle.rect().top(), 0.0);
    }

    #[test]
    fn test_partial_overflow_is_dropped_not_clamped() {
        let mut sim = Simulation::new(PlayfieldBounds::default(), 1);
        let bottom_gap = 4.0;
        let y = sim.bounds.height - PADDLE_HEIGHT - bottom_gap;
        sim.right_paddle.set_position(780.0, y);

        assert!(!sim.move_paddle(Side::Right, PADDLE_STEP));
        assert_eq!(sim.right_paddle.rect().top(), y);
    }

    #[test]
    fn test_move_landing_exactly_on_edge_is_allowed() {
        let mut sim = Simulation::new(PlayfieldBounds::default(), 1);
        sim.left_paddle.set_position(PADDLE_INSET, PADDLE_STEP);
        assert!(sim.move_paddle(Side::Left, -PADDLE_STEP));
        assert_eq!(sim.left_paddle.rect().top(), 0.0);
    }

    #[test]
    fn test_reset_ball_velocity_by_scorer() {
        let mut sim = Simulation::new(PlayfieldBounds::new(400.0, 300.0), 7);
        sim.ball.set_position(-5.0, 12.0);

        sim.reset_ball(Side::Right);
        assert_eq!(sim.ball.rect().origin(), Vec2::new(200.0, 150.0));
        assert_eq!(sim.ball.velocity.x.value, 3.0);
        let vy = sim.ball.velocity.y.value;
        assert!((-1.5..-0.5).contains(&vy), "vy = {vy}");

        sim.reset_ball(Side::Left);
        assert_eq!(sim.ball.velocity.x.value, -3.0);
        let vy = sim.ball.velocity.y.value;
        assert!((0.5..1.5).contains(&vy), "vy = {vy}");
    }

    #[test]
    fn test_same_seed_same_noise() {
        let mut a = Simulation::new(PlayfieldBounds::default(), 42);
        let mut b = Simulation::new(PlayfieldBounds::default(), 42);
        for _ in 0..16 {
            assert_eq!(a.perturbation(), b.perturbation());
        }
    }

    proptest! {
        #[test]
        fn perturbation_stays_in_range(seed in any::<u64>()) {
            let mut sim = Simulation::new(PlayfieldBounds::default(), seed);
            for _ in 0..32 {
                let p = sim.perturbation();
                prop_assert!((-PERTURBATION..PERTURBATION).contains(&p));
            }
        }

        #[test]
        fn paddle_never_leaves_field(moves in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut sim = Simulation::new(PlayfieldBounds::default(), 3);
            for up in moves {
                let dy = if up { -PADDLE_STEP } else { PADDLE_STEP };
                sim.move_paddle(Side::Right, dy);
                let r = sim.right_paddle.rect();
                prop_assert!(r.top() >= 0.0);
                prop_assert!(r.bottom() <= sim.bounds.height);
            }
        }
    }
}
