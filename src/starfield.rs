//! Background stars drifting down the playfield.

use glam::Vec2;
use rand::Rng;

use crate::config::{StarfieldTuning, Viewport};
use crate::render::{Color, Surface};

#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `tuning.count` stars with random size and speed in
    /// `[1, max)` across the viewport.
    pub fn new<R: Rng + ?Sized>(tuning: &StarfieldTuning, viewport: &Viewport, rng: &mut R) -> Self {
        let stars = (0..tuning.count)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.gen::<f32>() * viewport.width,
                    rng.gen::<f32>() * viewport.height,
                ),
                size: 1.0 + rng.gen::<f32>() * (tuning.max_size - 1.0),
                speed: 1.0 + rng.gen::<f32>() * (tuning.max_speed - 1.0),
            })
            .collect();
        Self { stars }
    }

    /// Move every star down, wrapping to just above the top edge.
    pub fn update(&mut self, viewport: &Viewport) {
        for star in &mut self.stars {
            star.pos.y += star.speed;
            if star.pos.y + star.size > viewport.height {
                star.pos.y = -star.size;
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for star in &self.stars {
            let size = Vec2::splat(star.size);
            surface.fill_rect(star.pos - size / 2.0, size, Color::WHITE);
        }
    }
}
