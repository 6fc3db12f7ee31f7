#![allow(dead_code)]

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use viper_shooter::entities::SpriteId;
use viper_shooter::render::{Color, SpriteSource, Surface};

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
    Alpha(f32),
    Rect { pos: Vec2, size: Vec2, color: Color },
    Image { sprite: SpriteId, center: Vec2, rotation: Option<f32> },
    Text { text: String, pos: Vec2, color: Color },
}

/// Surface double that remembers everything drawn on it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<Draw>,
}

impl RecordingSurface {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Draw::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn images_of(&self, sprite: SpriteId) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Draw::Image { sprite: s, .. } if *s == sprite))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn set_alpha(&mut self, alpha: f32) {
        self.calls.push(Draw::Alpha(alpha));
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.calls.push(Draw::Rect { pos, size, color });
    }

    fn draw_image(&mut self, sprite: SpriteId, center: Vec2, _size: Vec2, rotation: Option<f32>) {
        self.calls.push(Draw::Image {
            sprite,
            center,
            rotation,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color, _max_width: f32) {
        self.calls.push(Draw::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }
}

/// Sprite source where everything except the listed sprites has loaded.
pub struct PartialSprites(pub Vec<SpriteId>);

impl SpriteSource for PartialSprites {
    fn is_loaded(&self, sprite: SpriteId) -> bool {
        !self.0.contains(&sprite)
    }
}

pub fn assert_close(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "{a} != {b} (eps {eps})");
}
