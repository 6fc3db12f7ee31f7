//! Per-run simulation context: score, input snapshot, wall clock.
//!
//! Created when the game starts, reset on restart, passed by `&mut` into
//! every tick so nothing in the core reaches for global state.

use crate::consts::MAX_SCORE;

/// The keys the simulation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Restart,
}

/// Which keys are held during this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub restart: bool,
}

impl InputSnapshot {
    pub fn set(&mut self, key: Key, down: bool) {
        match key {
            Key::Left => self.left = down,
            Key::Right => self.right = down,
            Key::Up => self.up = down,
            Key::Down => self.down = down,
            Key::Fire => self.fire = down,
            Key::Restart => self.restart = down,
        }
    }

    /// Builder-style helper, mostly for tests and demos.
    pub fn with(mut self, key: Key) -> Self {
        self.set(key, true);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimulationContext {
    score: u32,
    /// Keyboard state for the current tick.
    pub input: InputSnapshot,
    /// Monotonic wall clock in milliseconds.
    pub now_ms: u64,
    /// Set when restart is pressed while the player is down; consumed by
    /// the game-over scene.
    pub restart_requested: bool,
}

impl SimulationContext {
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add points, saturating at `MAX_SCORE`.
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points).min(MAX_SCORE);
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
