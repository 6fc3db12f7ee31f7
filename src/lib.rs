//! Simulation core of a fixed-viewport vertical shooter.
//!
//! Core modules:
//! - `entities`: pooled game objects, pure data plus small accessors
//! - `projectile`, `enemy`, `player`, `explosion`: per-tick behavior
//! - `registry`: owns every pool and updates them in a fixed order
//! - `scene`: the mission timeline as a state machine
//! - `game`: the driver-facing facade (`Game::update_tick`)
//! - `render`: the drawing surface the core talks to

pub mod config;
pub mod context;
pub mod enemy;
pub mod entities;
pub mod error;
pub mod explosion;
pub mod game;
pub mod player;
pub mod pool;
pub mod projectile;
pub mod registry;
pub mod render;
pub mod scene;
pub mod starfield;
pub mod vector;

pub use config::{Config, Viewport};
pub use context::{InputSnapshot, Key, SimulationContext};
pub use error::{ConfigError, GameError};
pub use game::Game;
pub use registry::EntityRegistry;
pub use scene::{SceneManager, SceneState};

/// Gameplay rules that are not meant to be tuned.
pub mod consts {
    /// Upper bound of the score counter.
    pub const MAX_SCORE: u32 = 99_999;
    /// Ticks during which a homing shot keeps steering.
    pub const HOMING_WINDOW_TICKS: u32 = 100;
    /// Altitude at which the boss stops invading and starts floating.
    pub const BOSS_FLOAT_Y: f32 = 100.0;
    /// Seconds the intro scene lasts before the first wave.
    pub const INTRO_SECONDS: f32 = 3.0;
}
