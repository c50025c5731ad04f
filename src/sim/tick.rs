//! Fixed-step simulation tick
//!
//! Core game loop step. Every call runs the same fixed sequence:
//! integrate, wall bounce, paddle bounce, scoring.

use super::collision::{crosses_bottom, crosses_left, crosses_right, crosses_top, intersects};
use super::score::Side;
use super::state::{GameEvent, Simulation};

/// Advance the simulation by one step and report what happened
pub fn tick(sim: &mut Simulation) -> Vec<GameEvent> {
    let mut events = Vec::new();

    sim.ball.integrate();

    // Top/bottom walls reflect vertically and nudge the horizontal speed
    let ball = *sim.ball.rect();
    if crosses_top(&ball) || crosses_bottom(&ball, sim.bounds.height) {
        let noise = sim.perturbation();
        sim.ball.velocity.y.bounce();
        sim.ball.velocity.x.add(noise);
        events.push(GameEvent::WallBounce);
    }

    // Both paddles are checked; overlapping both bounces twice
    for side in Side::ALL {
        if intersects(sim.ball.rect(), sim.paddle(side).rect()) {
            let noise = sim.perturbation();
            sim.ball.velocity.x.bounce();
            sim.ball.velocity.y.add(noise);
            events.push(GameEvent::PaddleHit(side));
        }
    }

    if crosses_left(sim.ball.rect()) {
        sim.score.point_scored(Side::Right);
        sim.reset_ball(Side::Right);
        events.push(GameEvent::Goal { scorer: Side::Right });
    }

    if crosses_right(sim.ball.rect(), sim.bounds.width) {
        sim.score.point_scored(Side::Left);
        sim.reset_ball(Side::Left);
        events.push(GameEvent::Goal { scorer: Side::Left });
    }

    sim.time_ticks += 1;
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PlayfieldBounds;
    use glam::Vec2;
    use proptest::prelude::*;

    fn sim_with_ball(bounds: PlayfieldBounds, x: f32, y: f32, vx: f32, vy: f32) -> Simulation {
        let mut sim = Simulation::new(bounds, 12345);
        sim.ball.set_position(x, y);
        sim.ball.velocity.set(vx, vy);
        sim
    }

    #[test]
    fn test_free_flight() {
        let mut sim = sim_with_ball(PlayfieldBounds::default(), 300.0, 100.0, 3.0, -1.0);
        let events = tick(&mut sim);

        assert!(events.is_empty());
        assert_eq!(sim.ball.rect().origin(), Vec2::new(303.0, 99.0));
        assert_eq!(sim.ball.velocity.x.value, 3.0);
        assert_eq!(sim.ball.velocity.y.value, -1.0);
        assert_eq!(sim.time_ticks, 1);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut sim = sim_with_ball(PlayfieldBounds::default(), 300.0, 0.5, 3.0, -1.0);
        let events = tick(&mut sim);

        assert_eq!(events, vec![GameEvent::WallBounce]);
        assert_eq!(sim.ball.velocity.y.value, 1.0);
        let vx = sim.ball.velocity.x.value;
        assert!((2.5..3.5).contains(&vx), "vx = {vx}");
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut sim = sim_with_ball(PlayfieldBounds::default(), 300.0, 390.0, -3.0, 2.0);
        let events = tick(&mut sim);

        assert_eq!(events, vec![GameEvent::WallBounce]);
        assert_eq!(sim.ball.velocity.y.value, -2.0);
    }

    #[test]
    fn test_left_paddle_bounce() {
        // Left paddle spans x 10..20, y 160..240
        let mut sim = sim_with_ball(PlayfieldBounds::default(), 22.0, 195.0, -3.0, 0.0);
        let events = tick(&mut sim);

        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Left)]);
        assert_eq!(sim.ball.velocity.x.value, 3.0);
        let vy = sim.ball.velocity.y.value;
        assert!((-0.5..0.5).contains(&vy), "vy = {vy}");
    }

    #[test]
    fn test_touching_paddle_does_not_bounce() {
        // After integration the ball's left edge sits exactly on the paddle's right edge
        let mut sim = sim_with_ball(PlayfieldBounds::default(), 23.0, 195.0, -3.0, 0.0);
        let events = tick(&mut sim);

        assert!(events.is_empty());
        assert_eq!(sim.ball.rect().left(), sim.left_paddle.rect().right());
        assert_eq!(sim.ball.velocity.x.value, -3.0);
        assert_eq!(sim.ball.velocity.y.value, 0.0);
    }

    #[test]
    fn test_double_paddle_overlap_bounces_twice() {
        // Narrow field: left paddle 10..20, right paddle 20..30
        let bounds = PlayfieldBounds::new(40.0, 400.0);
        let mut sim = sim_with_ball(bounds, 13.0, 195.0, 2.0, 0.0);
        let events = tick(&mut sim);

        assert_eq!(
            events,
            vec![
                GameEvent::PaddleHit(Side::Left),
                GameEvent::PaddleHit(Side::Right)
            ]
        );
        // Two negations cancel out
        assert_eq!(sim.ball.velocity.x.value, 2.0);
        let vy = sim.ball.velocity.y.value;
        assert!((-1.0..1.0).contains(&vy), "vy = {vy}");
    }

    #[test]
    fn test_goal_on_left_awards_right() {
        let bounds = PlayfieldBounds::new(400.0, 300.0);
        let mut sim = sim_with_ball(bounds, -1.0, 100.0, 0.0, 0.0);
        let events = tick(&mut sim);

        assert_eq!(events, vec![GameEvent::Goal { scorer: Side::Right }]);
        assert_eq!(sim.score.right(), 1);
        assert_eq!(sim.score.left(), 0);
        assert_eq!(sim.ball.rect().origin(), Vec2::new(200.0, 150.0));
        assert_eq!(sim.ball.velocity.x.value, 3.0);
        let vy = sim.ball.velocity.y.value;
        assert!((-1.5..-0.5).contains(&vy), "vy = {vy}");
    }

    #[test]
    fn test_goal_on_right_awards_left() {
        let bounds = PlayfieldBounds::new(400.0, 300.0);
        let mut sim = sim_with_ball(bounds, 388.0, 20.0, 3.0, 0.0);
        let events = tick(&mut sim);

        assert_eq!(events, vec![GameEvent::Goal { scorer: Side::Left }]);
        assert_eq!(sim.score.left(), 1);
        assert_eq!(sim.ball.rect().origin(), Vec2::new(200.0, 150.0));
        assert_eq!(sim.ball.velocity.x.value, -3.0);
        let vy = sim.ball.velocity.y.value;
        assert!((0.5..1.5).contains(&vy), "vy = {vy}");
    }

    #[test]
    fn test_wall_perturbation_repeats_while_outside() {
        // Ball stuck above the field with no vertical speed: every tick re-bounces
        let mut sim = sim_with_ball(PlayfieldBounds::default(), 300.0, -20.0, 0.0, 0.0);
        let mut bounces = 0;
        for _ in 0..5 {
            let events = tick(&mut sim);
            bounces += events.iter().filter(|e| **e == GameEvent::WallBounce).count();
        }
        assert_eq!(bounces, 5);
    }

    #[test]
    fn test_determinism() {
        let mut a = Simulation::new(PlayfieldBounds::default(), 99999);
        let mut b = Simulation::new(PlayfieldBounds::default(), 99999);

        for i in 0..2000 {
            if i % 7 == 0 {
                a.move_paddle(Side::Left, 10.0);
                b.move_paddle(Side::Left, 10.0);
            }
            assert_eq!(tick(&mut a), tick(&mut b));
        }

        assert_eq!(a.ball.rect(), b.ball.rect());
        assert_eq!(a.ball.velocity, b.ball.velocity);
        assert_eq!(a.score, b.score);
    }

    proptest! {
        #[test]
        fn wall_crossing_flips_vertical_velocity(
            x in 100.0f32..600.0,
            depth in 0.1f32..20.0,
            vx in -5.0f32..5.0,
            vy in 0.1f32..5.0,
            top in any::<bool>(),
        ) {
            let h = 400.0;
            let (y, vy) = if top {
                // Ends the integration step above the field
                (vy - depth, -vy)
            } else {
                (h - 10.0 + depth - vy, vy)
            };
            let mut sim = sim_with_ball(PlayfieldBounds::new(800.0, h), x, y, vx, vy);
            let before = sim.ball.velocity.y.value;
            tick(&mut sim);
            prop_assert_eq!(sim.ball.velocity.y.value, -before);
        }

        #[test]
        fn reset_lands_on_center(y in 0.0f32..290.0, overshoot in 0.1f32..50.0, left in any::<bool>()) {
            let bounds = PlayfieldBounds::new(400.0, 300.0);
            let x = if left { -overshoot } else { 390.0 + overshoot };
            let mut sim = sim_with_ball(bounds, x, y, 0.0, 0.0);
            tick(&mut sim);
            prop_assert_eq!(sim.ball.rect().origin(), bounds.center());
        }

        #[test]
        fn score_moves_only_on_goal_ticks(seed in any::<u64>()) {
            let mut sim = Simulation::new(PlayfieldBounds::default(), seed);
            for _ in 0..3000 {
                let before = sim.score;
                let events = tick(&mut sim);

                for side in Side::ALL {
                    let goals = events
                        .iter()
                        .filter(|e| **e == GameEvent::Goal { scorer: side })
                        .count() as u32;
                    prop_assert!(goals <= 1);
                    prop_assert_eq!(sim.score.get(side), before.get(side) + goals);
                }
            }
        }
    }
}
