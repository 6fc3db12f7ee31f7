//! The entity registry: owner of every pool.
//!
//! All pools are allocated once in `EntityRegistry::new` at their configured
//! capacity and never grow. Cross-pool relationships (who shoots into which
//! pool, who can be hit by what) are fixed here and realized by lending the
//! right slices to each updater, in a fixed order, once per tick.

use glam::Vec2;
use rand::Rng;

use crate::config::{Config, Viewport};
use crate::context::SimulationContext;
use crate::entities::{
    Boss, BossMode, Enemy, EnemyBehavior, Entity, Explosion, Player, Projectile, SpriteId,
};
use crate::pool::claim;
use crate::render::{SpriteSource, Surface};

/// Which enemy pool a spawn draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyClass {
    Small,
    Large,
}

#[derive(Debug, Clone)]
pub struct EntityRegistry {
    pub player: Player,
    pub boss: Boss,
    /// Small enemies first, then large ones.
    pub enemies: Vec<Enemy>,
    small_count: usize,
    /// Player spread shots.
    pub shots: Vec<Projectile>,
    /// Player twin shots, claimed in adjacent pairs.
    pub single_shots: Vec<Projectile>,
    pub enemy_shots: Vec<Projectile>,
    pub homing_shots: Vec<Projectile>,
    pub explosions: Vec<Explosion>,
    viewport: Viewport,
}

impl EntityRegistry {
    pub fn new(config: &Config, now_ms: u64) -> Self {
        let pools = &config.pools;
        let viewport = config.viewport;
        let tuning = &config.player;
        let blast = &config.explosion;

        let mut player = Player::new(
            tuning.size,
            tuning.speed,
            tuning.fire_interval,
            tuning.entrance_rate,
        );
        let (start, end) = Self::entrance_path(&viewport);
        player.set_coming(start, end, now_ms);

        let enemies = (0..pools.small_enemies)
            .map(|_| Enemy::small())
            .chain((0..pools.large_enemies).map(|_| Enemy::large()))
            .collect();

        let straight = |count: usize, sprite: SpriteId| -> Vec<Projectile> {
            (0..count).map(|_| Projectile::new(sprite)).collect()
        };

        Self {
            player,
            boss: Boss::new(),
            enemies,
            small_count: pools.small_enemies,
            shots: straight(pools.player_shots, SpriteId::ViperShot),
            single_shots: straight(pools.twin_shots, SpriteId::ViperSingleShot),
            enemy_shots: straight(pools.enemy_shots, SpriteId::EnemyShot),
            homing_shots: (0..pools.homing_shots)
                .map(|_| Projectile::homing(SpriteId::HomingShot))
                .collect(),
            explosions: (0..pools.explosions)
                .map(|_| {
                    Explosion::new(
                        blast.radius,
                        blast.sparks,
                        blast.spark_size,
                        blast.lifetime_secs,
                    )
                })
                .collect(),
            viewport,
        }
    }

    /// Where the player's entrance starts and ends: from just below the
    /// bottom edge up to 100 units above it, centred horizontally.
    pub fn entrance_path(viewport: &Viewport) -> (Vec2, Vec2) {
        let x = viewport.center_x();
        (
            Vec2::new(x, viewport.height + 50.0),
            Vec2::new(x, viewport.height - 100.0),
        )
    }

    /// Restart the player's entrance sequence.
    pub fn restart_player(&mut self, now_ms: u64) {
        let (start, end) = Self::entrance_path(&self.viewport);
        self.player.set_coming(start, end, now_ms);
    }

    pub fn small_enemies(&self) -> &[Enemy] {
        &self.enemies[..self.small_count]
    }

    pub fn large_enemies(&self) -> &[Enemy] {
        &self.enemies[self.small_count..]
    }

    fn enemy_pool_mut(&mut self, class: EnemyClass) -> &mut [Enemy] {
        match class {
            EnemyClass::Small => &mut self.enemies[..self.small_count],
            EnemyClass::Large => &mut self.enemies[self.small_count..],
        }
    }

    /// Place an enemy in the first idle slot of `class`.
    ///
    /// `heading_angle` overrides the travel direction when given. Returns false
    /// when the pool is exhausted; nothing is modified in that case.
    pub fn spawn_enemy(
        &mut self,
        class: EnemyClass,
        pos: Vec2,
        life: i32,
        behavior: EnemyBehavior,
        heading_angle: Option<f32>,
    ) -> bool {
        match claim(self.enemy_pool_mut(class)) {
            Some(enemy) => {
                enemy.place(pos, life, behavior);
                if let Some(angle) = heading_angle {
                    enemy.body.set_heading_from_angle(angle);
                }
                true
            }
            None => false,
        }
    }

    pub fn spawn_boss(&mut self, pos: Vec2, life: i32) {
        self.boss.place(pos, life);
        self.boss.set_mode(BossMode::Invade);
    }

    /// Every pooled body, for readiness checks.
    fn bodies_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        std::iter::once(&mut self.player.body)
            .chain(std::iter::once(&mut self.boss.body))
            .chain(self.enemies.iter_mut().map(|e| &mut e.body))
            .chain(self.shots.iter_mut().map(|s| &mut s.body))
            .chain(self.single_shots.iter_mut().map(|s| &mut s.body))
            .chain(self.enemy_shots.iter_mut().map(|s| &mut s.body))
            .chain(self.homing_shots.iter_mut().map(|s| &mut s.body))
    }

    /// Copy sprite load state onto every body.
    pub fn load_sprites(&mut self, source: &dyn SpriteSource) {
        for body in self.bodies_mut() {
            if !body.ready {
                body.ready = source.is_loaded(body.sprite);
            }
        }
    }

    /// True once every pooled entity's sprite has loaded.
    pub fn all_ready(&self) -> bool {
        self.player.body.ready
            && self.boss.body.ready
            && self.enemies.iter().all(|e| e.body.ready)
            && self.shots.iter().all(|s| s.body.ready)
            && self.single_shots.iter().all(|s| s.body.ready)
            && self.enemy_shots.iter().all(|s| s.body.ready)
            && self.homing_shots.iter().all(|s| s.body.ready)
    }

    /// Advance every pool one tick: player, boss, enemies, player shots,
    /// enemy shots, homing shots, explosions.
    pub fn update<R: Rng + ?Sized>(&mut self, ctx: &mut SimulationContext, rng: &mut R) {
        let Self {
            player,
            boss,
            enemies,
            shots,
            single_shots,
            enemy_shots,
            homing_shots,
            explosions,
            viewport,
            ..
        } = self;

        player.update(&ctx.input, ctx.now_ms, shots, single_shots, viewport);

        let attack_target = player.body.pos;
        boss.update(enemy_shots, homing_shots, attack_target);
        for enemy in enemies.iter_mut() {
            enemy.update(enemy_shots, attack_target, viewport);
        }

        {
            let mut targets: Vec<&mut Entity> = enemies
                .iter_mut()
                .map(|e| &mut e.body)
                .chain(std::iter::once(&mut boss.body))
                .collect();
            for shot in shots.iter_mut().chain(single_shots.iter_mut()) {
                shot.update(&mut targets, explosions, viewport, ctx, rng);
            }
        }

        let mut player_target = [&mut player.body];
        for shot in enemy_shots.iter_mut().chain(homing_shots.iter_mut()) {
            shot.update(&mut player_target, explosions, viewport, ctx, rng);
        }

        for explosion in explosions.iter_mut() {
            explosion.update(ctx.now_ms);
        }
    }

    /// Issue draw calls for every live entity, in update order.
    pub fn draw(&self, surface: &mut dyn Surface, now_ms: u64) {
        self.player.draw(surface, now_ms);
        self.boss.draw(surface);
        for enemy in &self.enemies {
            enemy.draw(surface);
        }
        for shot in self
            .shots
            .iter()
            .chain(&self.single_shots)
            .chain(&self.enemy_shots)
            .chain(&self.homing_shots)
        {
            shot.draw(surface);
        }
        for explosion in &self.explosions {
            explosion.draw(surface);
        }
    }
}
