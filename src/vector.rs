//! 2D vector helpers on top of `glam::Vec2`.
//!
//! `glam` already provides length, distance and normalization; this module
//! adds the handful of operations the simulation leans on (rotation by an
//! angle, the 2D cross product used for steering, heading from an angle) and
//! a checked normalization that treats a zero vector as a caller defect.

use glam::Vec2;

/// One degree in radians, the homing turn rate per tick.
pub const ONE_DEGREE: f32 = std::f32::consts::PI / 180.0;

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Unit vector pointing along `radians` (screen space, y grows downward).
#[inline]
pub fn heading_from_angle(radians: f32) -> Vec2 {
    Vec2::new(radians.cos(), radians.sin())
}

/// Extra vector operations used by steering and aiming.
pub trait VectorExt {
    /// Rotate by `radians` using the standard rotation matrix.
    fn rotated(self, radians: f32) -> Self;
    /// `x * other.y - y * other.x`. Positive means `other` lies clockwise
    /// (to the right) of `self` on screen.
    fn cross(self, other: Self) -> f32;
    /// Normalize, panicking on a zero-length vector.
    fn unit(self) -> Self;
}

impl VectorExt for Vec2 {
    #[inline]
    fn rotated(self, radians: f32) -> Vec2 {
        let (s, c) = radians.sin_cos();
        Vec2::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    #[inline]
    fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    fn unit(self) -> Vec2 {
        let len = self.length();
        assert!(len > 0.0, "cannot normalize a zero-length vector");
        self / len
    }
}

/// Unit vector from `from` toward `to`, or `fallback` when they coincide.
pub fn aim(from: Vec2, to: Vec2, fallback: Vec2) -> Vec2 {
    (to - from).try_normalize().unwrap_or(fallback)
}
