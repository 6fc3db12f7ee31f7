//! Projectile flight, homing steering and hit resolution.

use glam::Vec2;
use rand::Rng;

use crate::config::Viewport;
use crate::consts::HOMING_WINDOW_TICKS;
use crate::context::SimulationContext;
use crate::entities::{Entity, Explosion, Guidance, Projectile};
use crate::pool::claim;
use crate::render::Surface;
use crate::vector::{VectorExt, ONE_DEGREE};

/// Outcome of a tick in which a projectile struck something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Impact {
    /// Index into the target slice that was hit.
    pub target: usize,
    /// Whether the hit brought the target's life to zero or below.
    pub killed: bool,
}

/// True when two centres are close enough to count as a hit.
///
/// The threshold is a quarter of the summed widths, so sprites overlap
/// noticeably before anything registers.
#[inline]
pub fn within_hit_range(a: Vec2, a_width: f32, b: Vec2, b_width: f32) -> bool {
    a.distance(b) <= (a_width + b_width) / 4.0
}

/// One homing step: turn `heading` one degree toward `target`.
///
/// Returns the heading unchanged when the two positions coincide, since the
/// direction to the target is undefined there.
pub fn steer_toward(heading: Vec2, from: Vec2, target: Vec2) -> Vec2 {
    let to_target = target - from;
    if to_target == Vec2::ZERO {
        return heading;
    }
    let direction = to_target.unit();
    let heading = heading.unit();
    let cross = heading.cross(direction);
    if cross > 0.0 {
        heading.rotated(ONE_DEGREE)
    } else if cross < 0.0 {
        heading.rotated(-ONE_DEGREE)
    } else {
        heading
    }
}

impl Projectile {
    /// Advance one tick and resolve hits against `targets` in order.
    ///
    /// A projectile hits at most one target per tick: it goes inactive on the
    /// first hit and every later target is skipped. Kills trigger the first
    /// idle explosion and award the target's score value.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        targets: &mut [&mut Entity],
        explosions: &mut [Explosion],
        viewport: &Viewport,
        ctx: &mut SimulationContext,
        rng: &mut R,
    ) -> Option<Impact> {
        if !self.is_active() {
            return None;
        }

        if viewport.is_fully_outside(self.body.pos, self.body.width, self.body.height) {
            self.body.life = 0;
            return None;
        }

        let homing = match self.guidance {
            Guidance::Homing { ticks_alive } => Some(ticks_alive),
            Guidance::Straight => None,
        };

        if let Some(ticks_alive) = homing {
            if ticks_alive < HOMING_WINDOW_TICKS {
                if let Some(target) = targets.first() {
                    self.body.heading = steer_toward(self.body.heading, self.body.pos, target.pos);
                }
            }
        }

        self.body.pos += self.body.heading * self.speed;

        if homing.is_some() {
            self.body.angle = self.body.heading.y.atan2(self.body.heading.x);
        }

        let impact = self.strike(targets, explosions, ctx, rng);

        if let Guidance::Homing { ticks_alive } = &mut self.guidance {
            *ticks_alive += 1;
        }

        impact
    }

    fn strike<R: Rng + ?Sized>(
        &mut self,
        targets: &mut [&mut Entity],
        explosions: &mut [Explosion],
        ctx: &mut SimulationContext,
        rng: &mut R,
    ) -> Option<Impact> {
        let mut impact = None;
        for (index, target) in targets.iter_mut().enumerate() {
            if !self.is_active() || !target.is_alive() || target.invulnerable {
                continue;
            }
            if !within_hit_range(self.body.pos, self.body.width, target.pos, target.width) {
                continue;
            }

            target.life -= self.power;
            let killed = !target.is_alive();
            if killed {
                if let Some(explosion) = claim(explosions) {
                    explosion.trigger(target.pos, ctx.now_ms, rng);
                }
                ctx.award(target.kind.score_value());
            }
            self.body.life = 0;
            impact = Some(Impact {
                target: index,
                killed,
            });
        }
        impact
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if self.is_active() {
            self.body.draw_rotated(surface);
        }
    }
}
