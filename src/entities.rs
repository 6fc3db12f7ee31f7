//! All game entity types: mostly data, with only the small state resets
//! each type needs when a pool slot is reused. Per-tick behavior lives in
//! `projectile`, `enemy`, `player` and `explosion`.

use glam::Vec2;

use crate::vector::{deg_to_rad, heading_from_angle};

// ── Tags ──────────────────────────────────────────────────────────────────────

/// Movement / fire pattern of a regular enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EnemyBehavior {
    /// Flies along its heading and drops one shot after 100 ticks.
    #[default]
    Default,
    /// Weaves sideways while drifting down, aiming at the player.
    Wave,
    /// Slow heavy craft firing radial bursts.
    Large,
}

/// Boss phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BossMode {
    /// Not yet placed.
    #[default]
    Idle,
    Invade,
    Floating,
    Escape,
}

/// What an entity is. Collision resolution and scoring dispatch on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy(EnemyBehavior),
    Boss,
    Shot,
    HomingShot,
}

impl EntityKind {
    /// Points awarded when a projectile destroys an entity of this kind.
    pub fn score_value(&self) -> u32 {
        match self {
            EntityKind::Enemy(EnemyBehavior::Large) => 1000,
            EntityKind::Enemy(_) => 100,
            // Boss kills carry no bonus.
            EntityKind::Boss => 0,
            EntityKind::Player | EntityKind::Shot | EntityKind::HomingShot => 0,
        }
    }
}

/// Image handle. The driver decides what each sprite looks like and reports
/// when it has loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Viper,
    Boss,
    ViperShot,
    ViperSingleShot,
    EnemyShot,
    EnemySmall,
    EnemyLarge,
    HomingShot,
}

// ── Entity body ───────────────────────────────────────────────────────────────

/// State shared by everything that moves and can be hit.
#[derive(Clone, Debug)]
pub struct Entity {
    pub kind: EntityKind,
    /// Centre of the bounding box.
    pub pos: Vec2,
    /// Per-tick direction of travel (unit or near-unit).
    pub heading: Vec2,
    /// Facing angle in radians, used for rotated drawing.
    pub angle: f32,
    pub width: f32,
    pub height: f32,
    /// `<= 0` means the slot is free.
    pub life: i32,
    /// Becomes true once the sprite has loaded.
    pub ready: bool,
    pub sprite: SpriteId,
    /// Projectiles pass through while set (player entrance).
    pub invulnerable: bool,
}

impl Entity {
    pub fn new(kind: EntityKind, sprite: SpriteId, width: f32, height: f32, life: i32) -> Self {
        Self {
            kind,
            pos: Vec2::ZERO,
            heading: Vec2::new(0.0, -1.0),
            angle: deg_to_rad(270.0),
            width,
            height,
            life,
            ready: false,
            sprite,
            invulnerable: false,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Point the heading along `radians` and face that way.
    pub fn set_heading_from_angle(&mut self, radians: f32) {
        self.angle = radians;
        self.heading = heading_from_angle(radians);
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// How a projectile chooses its heading while in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guidance {
    Straight,
    /// Turns toward the first target for a limited number of ticks.
    Homing { ticks_alive: u32 },
}

#[derive(Clone, Debug)]
pub struct Projectile {
    pub body: Entity,
    pub speed: f32,
    pub power: i32,
    pub guidance: Guidance,
}

impl Projectile {
    pub const DEFAULT_SPEED: f32 = 7.0;
    pub const DEFAULT_POWER: i32 = 1;
    pub const SIZE: f32 = 32.0;

    pub fn new(sprite: SpriteId) -> Self {
        Self {
            body: Entity::new(EntityKind::Shot, sprite, Self::SIZE, Self::SIZE, 0),
            speed: Self::DEFAULT_SPEED,
            power: Self::DEFAULT_POWER,
            guidance: Guidance::Straight,
        }
    }

    pub fn homing(sprite: SpriteId) -> Self {
        let mut shot = Self::new(sprite);
        shot.body.kind = EntityKind::HomingShot;
        shot.guidance = Guidance::Homing { ticks_alive: 0 };
        shot
    }

    /// Bring a dormant slot to life at `pos`.
    pub fn activate(&mut self, pos: Vec2, power: i32, speed: f32) {
        self.body.pos = pos;
        self.body.life = 1;
        self.power = power;
        self.speed = speed;
        if let Guidance::Homing { ticks_alive } = &mut self.guidance {
            *ticks_alive = 0;
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.body.is_alive()
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Enemy {
    pub body: Entity,
    pub behavior: EnemyBehavior,
    pub ticks_alive: u32,
    pub speed: f32,
}

impl Enemy {
    pub const SMALL_SIZE: f32 = 48.0;
    pub const LARGE_SIZE: f32 = 64.0;
    pub const SPEED: f32 = 3.0;

    pub fn small() -> Self {
        Self::with_sprite(SpriteId::EnemySmall, Self::SMALL_SIZE)
    }

    pub fn large() -> Self {
        Self::with_sprite(SpriteId::EnemyLarge, Self::LARGE_SIZE)
    }

    fn with_sprite(sprite: SpriteId, size: f32) -> Self {
        let behavior = EnemyBehavior::Default;
        Self {
            body: Entity::new(EntityKind::Enemy(behavior), sprite, size, size, 0),
            behavior,
            ticks_alive: 0,
            speed: Self::SPEED,
        }
    }

    /// Respawn this slot.
    pub fn place(&mut self, pos: Vec2, life: i32, behavior: EnemyBehavior) {
        self.body.pos = pos;
        self.body.life = life;
        self.behavior = behavior;
        self.body.kind = EntityKind::Enemy(behavior);
        self.ticks_alive = 0;
    }
}

#[derive(Clone, Debug)]
pub struct Boss {
    pub body: Entity,
    pub mode: BossMode,
    pub ticks_alive: u32,
    pub speed: f32,
}

impl Boss {
    pub const SIZE: f32 = 128.0;
    pub const SPEED: f32 = 3.0;

    pub fn new() -> Self {
        Self {
            body: Entity::new(EntityKind::Boss, SpriteId::Boss, Self::SIZE, Self::SIZE, 0),
            mode: BossMode::Idle,
            ticks_alive: 0,
            speed: Self::SPEED,
        }
    }

    pub fn place(&mut self, pos: Vec2, life: i32) {
        self.body.pos = pos;
        self.body.life = life;
        self.ticks_alive = 0;
    }

    pub fn set_mode(&mut self, mode: BossMode) {
        if self.mode != mode {
            log::debug!("boss mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }
}

impl Default for Boss {
    fn default() -> Self {
        Self::new()
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub body: Entity,
    /// True while the entrance animation plays.
    pub entering: bool,
    pub entrance_started_ms: u64,
    pub entrance_start: Vec2,
    pub entrance_end: Vec2,
    /// Climb rate during the entrance, units per second.
    pub entrance_rate: f32,
    /// Fires when `>= 0`; reset to `-fire_interval` after a volley.
    pub fire_cooldown: i32,
    pub fire_interval: i32,
    pub speed: f32,
}

impl Player {
    pub fn new(size: f32, speed: f32, fire_interval: i32, entrance_rate: f32) -> Self {
        Self {
            body: Entity::new(EntityKind::Player, SpriteId::Viper, size, size, 1),
            entering: false,
            entrance_started_ms: 0,
            entrance_start: Vec2::ZERO,
            entrance_end: Vec2::ZERO,
            entrance_rate,
            fire_cooldown: 0,
            fire_interval,
            speed,
        }
    }

    /// (Re)start the entrance: revive, move to `start`, glide to `end`.
    pub fn set_coming(&mut self, start: Vec2, end: Vec2, now_ms: u64) {
        self.entering = true;
        self.body.invulnerable = true;
        self.body.life = 1;
        self.entrance_started_ms = now_ms;
        self.entrance_start = start;
        self.body.pos = start;
        self.entrance_end = end;
    }
}

// ── Explosions ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub size: Vec2,
    /// Random direction scaled by a random magnitude in `[0, 1)`.
    pub direction: Vec2,
}

#[derive(Clone, Debug)]
pub struct Explosion {
    pub origin: Vec2,
    pub radius: f32,
    pub spark_count: usize,
    pub base_spark_size: f32,
    pub lifetime_secs: f32,
    pub sparks: Vec<Spark>,
    pub alive: bool,
    pub started_ms: u64,
    /// 0.0 at trigger, 1.0 when finished.
    pub progress: f32,
}

impl Explosion {
    pub fn new(radius: f32, spark_count: usize, base_spark_size: f32, lifetime_secs: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            radius,
            spark_count,
            base_spark_size,
            lifetime_secs,
            sparks: Vec::with_capacity(spark_count),
            alive: false,
            started_ms: 0,
            progress: 0.0,
        }
    }
}
