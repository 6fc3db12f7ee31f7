//! Enemy and boss behavior.
//!
//! Enemies never own projectiles. They claim slots from the shared shot
//! pools the registry lends them for the duration of an update.

use glam::Vec2;

use crate::config::Viewport;
use crate::consts::BOSS_FLOAT_Y;
use crate::entities::{Boss, BossMode, Enemy, EnemyBehavior, Projectile};
use crate::pool::claim;
use crate::render::Surface;
use crate::vector::{aim, deg_to_rad, heading_from_angle};

/// Straight down in screen space.
pub const DOWN: Vec2 = Vec2::new(0.0, 1.0);

/// Claim the first idle shot and launch it from `origin`.
///
/// Returns false when the pool is exhausted and the shot was dropped.
pub fn fire(shots: &mut [Projectile], origin: Vec2, heading: Vec2, speed: f32) -> bool {
    match claim(shots) {
        Some(shot) => {
            shot.activate(origin, Projectile::DEFAULT_POWER, speed);
            shot.body.heading = heading;
            shot.body.angle = heading.y.atan2(heading.x);
            true
        }
        None => false,
    }
}

impl Enemy {
    /// Tick at which a default enemy drops its single shot.
    pub const DEFAULT_FIRE_TICK: u32 = 100;

    /// Advance one tick. `target` is the attack target's position.
    ///
    /// Wave and large patterns read the counter before it advances, so both
    /// open fire on the first update after `place`. A default enemy fires on
    /// its 100th update.
    pub fn update(&mut self, shots: &mut [Projectile], target: Vec2, viewport: &Viewport) {
        if !self.body.is_alive() {
            return;
        }
        let t = self.ticks_alive;
        self.ticks_alive += 1;
        let pos = self.body.pos;

        match self.behavior {
            EnemyBehavior::Default => {
                if self.ticks_alive == Self::DEFAULT_FIRE_TICK {
                    fire(shots, pos, DOWN, 5.0);
                }
                self.body.pos += self.body.heading * self.speed;
            }
            EnemyBehavior::Wave => {
                if t % 60 == 0 {
                    fire(shots, pos, aim(pos, target, DOWN), 4.0);
                }
                self.body.pos += Vec2::new((t as f32 / 10.0).sin(), 2.0);
            }
            EnemyBehavior::Large => {
                if t % 50 == 0 {
                    for degrees in (0..360).step_by(45) {
                        fire(shots, pos, heading_from_angle(deg_to_rad(degrees as f32)), 3.0);
                    }
                }
                self.body.pos += Vec2::new(((t as f32 + 90.0) / 50.0).sin() * 2.0, 1.0);
            }
        }

        if self.body.pos.y - self.body.height > viewport.height {
            self.body.life = 0;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if self.body.is_alive() {
            self.body.draw(surface);
        }
    }
}

impl Boss {
    /// Advance one tick.
    ///
    /// `shots` receives aimed shots, `homing` the slow guided ones. The boss
    /// never decides on its own that it was defeated; the scene layer reads
    /// `life` for that.
    pub fn update(
        &mut self,
        shots: &mut [Projectile],
        homing: &mut [Projectile],
        target: Vec2,
    ) {
        if !self.body.is_alive() {
            return;
        }
        self.ticks_alive += 1;

        match self.mode {
            BossMode::Invade => {
                self.body.pos.y += self.speed;
                if self.body.pos.y > BOSS_FLOAT_Y {
                    self.body.pos.y = BOSS_FLOAT_Y;
                    self.set_mode(BossMode::Floating);
                    self.ticks_alive = 0;
                }
            }
            BossMode::Escape => {
                self.body.pos.y -= self.speed;
                if self.body.pos.y < -self.body.height {
                    self.body.life = 0;
                }
            }
            BossMode::Floating => {
                let t = self.ticks_alive;
                let pos = self.body.pos;
                if t % 1000 < 500 {
                    if t % 200 > 140 && t % 10 == 0 {
                        fire(shots, pos, aim(pos, target, DOWN), 3.0);
                    }
                } else if t % 50 == 0 {
                    fire(homing, pos, DOWN, 3.5);
                }
                self.body.pos.x += (t as f32 / 100.0).cos() * 2.0;
            }
            BossMode::Idle => {}
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if self.body.is_alive() {
            self.body.draw(surface);
        }
    }
}
