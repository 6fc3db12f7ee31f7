//! Error types for startup and configuration.
//!
//! Per-tick simulation never fails; errors only surface while building the
//! game or bringing up the drawing surface.

use thiserror::Error;

/// Errors raised while loading or validating a `Config`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("pool `{0}` must hold at least one slot")]
    EmptyPool(&'static str),
    #[error("twin shot pool must be even, got {0}")]
    OddTwinPool(usize),
    #[error("fire interval must not be negative, got {0}")]
    NegativeFireInterval(i32),
    #[error("explosion lifetime must be positive, got {0}")]
    InvalidExplosionLifetime(f32),
    #[error("starfield size and speed limits must be at least 1")]
    InvalidStarfield,
}

/// Top-level error for bringing the game up
#[derive(Debug, Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The drawing surface is missing or too small to play on.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
}
