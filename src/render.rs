//! Drawing surface abstraction.
//!
//! The core never rasterizes anything itself. Each tick it issues a short
//! list of draw calls against a `Surface`; the driver decides what a sprite
//! looks like and where the pixels (or terminal cells) go.

use glam::Vec2;

use crate::entities::{Entity, SpriteId};

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    /// Explosion sparks.
    pub const SPARK: Color = Color::rgb(0xff, 0x11, 0x66);
    /// Playfield background.
    pub const BACKDROP: Color = Color::rgb(0x11, 0x11, 0x22);
}

/// What the core draws on.
///
/// Positions are world units. `draw_image` receives the sprite's centre;
/// `fill_rect` and `draw_text` receive their top-left corner.
pub trait Surface {
    /// Global alpha applied to subsequent draw calls.
    fn set_alpha(&mut self, alpha: f32);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn draw_image(&mut self, sprite: SpriteId, center: Vec2, size: Vec2, rotation: Option<f32>);
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color, max_width: f32);
}

/// Reports whether each sprite's image has finished loading.
pub trait SpriteSource {
    fn is_loaded(&self, sprite: SpriteId) -> bool;
}

/// A surface that drops every call, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn set_alpha(&mut self, _alpha: f32) {}
    fn fill_rect(&mut self, _pos: Vec2, _size: Vec2, _color: Color) {}
    fn draw_image(&mut self, _sprite: SpriteId, _center: Vec2, _size: Vec2, _rotation: Option<f32>) {}
    fn draw_text(&mut self, _text: &str, _pos: Vec2, _color: Color, _max_width: f32) {}
}

impl Entity {
    /// Upright sprite draw.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_image(self.sprite, self.pos, self.size(), None);
    }

    /// Sprite rotated to the facing angle. Sprites are authored pointing
    /// up, which is 270° (1.5π) in screen space.
    pub fn draw_rotated(&self, surface: &mut dyn Surface) {
        let rotation = self.angle - std::f32::consts::PI * 1.5;
        surface.draw_image(self.sprite, self.pos, self.size(), Some(rotation));
    }
}
