//! Player craft: entrance animation, movement and firing.

use glam::Vec2;

use crate::config::Viewport;
use crate::context::InputSnapshot;
use crate::entities::{Player, Projectile};
use crate::pool::{claim, claim_pair};
use crate::render::Surface;
use crate::vector::deg_to_rad;

/// Twin shot angles, ten degrees either side of straight up.
const TWIN_ANGLES_DEG: (f32, f32) = (280.0, 260.0);
const TWIN_POWER: i32 = 4;

/// What the fire key produced this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Volley {
    pub spread: bool,
    pub twin: bool,
}

impl Volley {
    pub fn fired(&self) -> bool {
        self.spread || self.twin
    }
}

impl Player {
    /// Advance one tick.
    ///
    /// While entering, the craft glides up on the wall clock and ignores
    /// input. Afterwards it moves, clamps to the viewport and fires from the
    /// spread and twin pools when the cooldown allows.
    pub fn update(
        &mut self,
        input: &InputSnapshot,
        now_ms: u64,
        spread_shots: &mut [Projectile],
        twin_shots: &mut [Projectile],
        viewport: &Viewport,
    ) -> Volley {
        if !self.body.is_alive() {
            return Volley::default();
        }

        if self.entering {
            self.advance_entrance(now_ms);
            return Volley::default();
        }

        let mut step = Vec2::ZERO;
        if input.left {
            step.x -= self.speed;
        }
        if input.right {
            step.x += self.speed;
        }
        if input.up {
            step.y -= self.speed;
        }
        if input.down {
            step.y += self.speed;
        }
        self.body.pos = viewport.clamp(self.body.pos + step);

        let mut volley = Volley::default();
        if input.fire && self.fire_cooldown >= 0 {
            volley = self.fire(spread_shots, twin_shots);
        }
        self.fire_cooldown += 1;
        volley
    }

    fn advance_entrance(&mut self, now_ms: u64) {
        let elapsed = now_ms.saturating_sub(self.entrance_started_ms) as f32 / 1000.0;
        let mut y = self.entrance_start.y - elapsed * self.entrance_rate;
        if y <= self.entrance_end.y {
            y = self.entrance_end.y;
            self.entering = false;
            self.body.invulnerable = false;
        }
        self.body.pos.y = y;
    }

    fn fire(&mut self, spread_shots: &mut [Projectile], twin_shots: &mut [Projectile]) -> Volley {
        let origin = self.body.pos;
        let mut volley = Volley::default();

        if let Some(shot) = claim(spread_shots) {
            shot.activate(origin, Projectile::DEFAULT_POWER, Projectile::DEFAULT_SPEED);
            shot.body.set_heading_from_angle(deg_to_rad(270.0));
            volley.spread = true;
        }

        if let Some((cw, ccw)) = claim_pair(twin_shots) {
            cw.activate(origin, TWIN_POWER, Projectile::DEFAULT_SPEED);
            cw.body.set_heading_from_angle(deg_to_rad(TWIN_ANGLES_DEG.0));
            ccw.activate(origin, TWIN_POWER, Projectile::DEFAULT_SPEED);
            ccw.body.set_heading_from_angle(deg_to_rad(TWIN_ANGLES_DEG.1));
            volley.twin = true;
        }

        if volley.fired() {
            self.fire_cooldown = -self.fire_interval;
        }
        volley
    }

    /// Draw the craft, flickering on the wall clock while it enters.
    pub fn draw(&self, surface: &mut dyn Surface, now_ms: u64) {
        if !self.body.is_alive() {
            return;
        }
        if self.entering && now_ms % 100 < 50 {
            surface.set_alpha(0.5);
        }
        self.body.draw(surface);
        surface.set_alpha(1.0);
    }
}
