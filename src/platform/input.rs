//! Keyboard input → paddle commands

use serde::{Deserialize, Serialize};

use crate::consts::PADDLE_STEP;
use crate::sim::{Side, Simulation};

/// Vertical move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A single discrete paddle move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleCommand {
    pub side: Side,
    pub direction: Direction,
}

/// Key names (as reported by `KeyboardEvent.key`) for each control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "w".into(),
            left_down: "s".into(),
            right_up: "ArrowUp".into(),
            right_down: "ArrowDown".into(),
        }
    }
}

impl KeyBindings {
    /// Look up the command bound to `key`. Matching ignores ASCII case so
    /// letter bindings still work with caps lock on.
    pub fn command_for(&self, key: &str) -> Option<PaddleCommand> {
        let table = [
            (&self.left_up, Side::Left, Direction::Up),
            (&self.left_down, Side::Left, Direction::Down),
            (&self.right_up, Side::Right, Direction::Up),
            (&self.right_down, Side::Right, Direction::Down),
        ];
        table
            .into_iter()
            .find(|(binding, _, _)| binding.eq_ignore_ascii_case(key))
            .map(|(_, side, direction)| PaddleCommand { side, direction })
    }

    /// Key name bound to `command`
    pub fn key_for(&self, command: PaddleCommand) -> &str {
        match (command.side, command.direction) {
            (Side::Left, Direction::Up) => &self.left_up,
            (Side::Left, Direction::Down) => &self.left_down,
            (Side::Right, Direction::Up) => &self.right_up,
            (Side::Right, Direction::Down) => &self.right_down,
        }
    }
}

/// Translates key presses into paddle moves on a simulation
#[derive(Debug, Clone)]
pub struct InputAdapter {
    pub bindings: KeyBindings,
    /// Units moved per key press
    pub step: f32,
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new(KeyBindings::default(), PADDLE_STEP)
    }
}

impl InputAdapter {
    pub fn new(bindings: KeyBindings, step: f32) -> Self {
        Self { bindings, step }
    }

    /// Apply a command. Returns false if the move was rejected at a field edge.
    pub fn apply(&self, sim: &mut Simulation, command: PaddleCommand) -> bool {
        let dy = match command.direction {
            Direction::Up => -self.step,
            Direction::Down => self.step,
        };
        sim.move_paddle(command.side, dy)
    }

    /// Handle a key press. Returns the command if the key is bound, whether or
    /// not the move itself was accepted.
    pub fn handle_key(&self, sim: &mut Simulation, key: &str) -> Option<PaddleCommand> {
        let command = self.bindings.command_for(key)?;
        if !self.apply(sim, command) {
            log::trace!(
                "{} paddle {:?} rejected at field edge",
                command.side.as_str(),
                command.direction
            );
        }
        Some(command)
    }
}
