//! Game configuration.
//!
//! Every field has a default equal to the classic arcade tuning, so a JSON
//! file only needs to name what it overrides.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Playfield size in world units. The origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 640.0,
        }
    }
}

impl Viewport {
    /// True when a box centred on `pos` with the given size has left the
    /// playfield entirely on some side.
    pub fn is_fully_outside(&self, pos: Vec2, width: f32, height: f32) -> bool {
        let (hw, hh) = (width / 2.0, height / 2.0);
        pos.x + hw < 0.0
            || pos.x - hw > self.width
            || pos.y + hh < 0.0
            || pos.y - hh > self.height
    }

    /// Clamp a point into `[0, width] x [0, height]`.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        pos.clamp(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

/// Fixed pool capacities. Pools never grow during play.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolSizes {
    pub player_shots: usize,
    /// Twin single shots are claimed in adjacent pairs, so this must be even.
    pub twin_shots: usize,
    pub enemy_shots: usize,
    pub homing_shots: usize,
    pub small_enemies: usize,
    pub large_enemies: usize,
    pub explosions: usize,
}

impl Default for PoolSizes {
    fn default() -> Self {
        Self {
            player_shots: 10,
            twin_shots: 20,
            enemy_shots: 50,
            homing_shots: 50,
            small_enemies: 20,
            large_enemies: 5,
            explosions: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Movement per tick per held direction.
    pub speed: f32,
    /// Ticks between volleys while fire is held.
    pub fire_interval: i32,
    /// Entrance climb rate in units per second.
    pub entrance_rate: f32,
    pub size: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 3.0,
            fire_interval: 10,
            entrance_rate: 50.0,
            size: 64.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionTuning {
    pub radius: f32,
    pub sparks: usize,
    pub spark_size: f32,
    pub lifetime_secs: f32,
}

impl Default for ExplosionTuning {
    fn default() -> Self {
        Self {
            radius: 100.0,
            sparks: 15,
            spark_size: 40.0,
            lifetime_secs: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldTuning {
    pub count: usize,
    pub max_size: f32,
    pub max_speed: f32,
}

impl Default for StarfieldTuning {
    fn default() -> Self {
        Self {
            count: 100,
            max_size: 3.0,
            max_speed: 4.0,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub viewport: Viewport,
    pub pools: PoolSizes,
    pub player: PlayerTuning,
    pub explosion: ExplosionTuning,
    pub starfield: StarfieldTuning,
}

impl Config {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let vp = &self.viewport;
        if !(vp.width > 0.0 && vp.height > 0.0) {
            return Err(ConfigError::InvalidViewport {
                width: vp.width,
                height: vp.height,
            });
        }

        let pools = &self.pools;
        let named = [
            ("player_shots", pools.player_shots),
            ("twin_shots", pools.twin_shots),
            ("enemy_shots", pools.enemy_shots),
            ("homing_shots", pools.homing_shots),
            ("small_enemies", pools.small_enemies),
            ("large_enemies", pools.large_enemies),
            ("explosions", pools.explosions),
        ];
        if let Some(&(name, _)) = named.iter().find(|(_, size)| *size == 0) {
            return Err(ConfigError::EmptyPool(name));
        }
        if pools.twin_shots % 2 != 0 {
            return Err(ConfigError::OddTwinPool(pools.twin_shots));
        }

        if self.player.fire_interval < 0 {
            return Err(ConfigError::NegativeFireInterval(self.player.fire_interval));
        }
        if self.explosion.lifetime_secs <= 0.0 {
            return Err(ConfigError::InvalidExplosionLifetime(
                self.explosion.lifetime_secs,
            ));
        }
        if self.starfield.max_size < 1.0 || self.starfield.max_speed < 1.0 {
            return Err(ConfigError::InvalidStarfield);
        }
        Ok(())
    }
}
