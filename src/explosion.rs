//! Particle burst played where something dies.

use glam::Vec2;
use rand::Rng;

use crate::entities::{Explosion, Spark};
use crate::render::{Color, Surface};

/// Ease-in curve `t^4` over `t` clamped to `[0, 1]`.
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * t
}

impl Explosion {
    /// Seed a fresh set of sparks at `origin` and start the clock.
    pub fn trigger<R: Rng + ?Sized>(&mut self, origin: Vec2, now_ms: u64, rng: &mut R) {
        self.origin = origin;
        self.sparks.clear();
        for _ in 0..self.spark_count {
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            let magnitude = rng.gen::<f32>();
            let size = (rng.gen::<f32>() * 0.5 + 0.5) * self.base_spark_size;
            self.sparks.push(Spark {
                size: Vec2::splat(size),
                direction: Vec2::new(theta.cos(), theta.sin()) * magnitude,
            });
        }
        self.alive = true;
        self.started_ms = now_ms;
        self.progress = 0.0;
    }

    /// Fraction of the fade completed at `now_ms`.
    pub fn progress_at(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.started_ms) as f32 / 1000.0;
        1.0 - ease_in(1.0 - (elapsed / self.lifetime_secs).min(1.0))
    }

    pub fn update(&mut self, now_ms: u64) {
        if !self.alive {
            return;
        }
        self.progress = self.progress_at(now_ms);
        if self.progress >= 1.0 {
            self.alive = false;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if !self.alive {
            return;
        }
        surface.set_alpha(0.5);
        let reach = self.radius * self.progress;
        let shrink = 1.0 - self.progress;
        for spark in &self.sparks {
            let center = self.origin + spark.direction * reach;
            surface.fill_rect(center - spark.size / 2.0, spark.size * shrink, Color::SPARK);
        }
        surface.set_alpha(1.0);
    }
}
