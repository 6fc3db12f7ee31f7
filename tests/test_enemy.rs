mod common;

use common::assert_close;
use glam::Vec2;
use viper_shooter::consts::BOSS_FLOAT_Y;
use viper_shooter::entities::*;
use viper_shooter::pool::active_count;
use viper_shooter::vector::{deg_to_rad, heading_from_angle};
use viper_shooter::Viewport;

fn shot_pool(n: usize) -> Vec<Projectile> {
    (0..n).map(|_| Projectile::new(SpriteId::EnemyShot)).collect()
}

fn homing_pool(n: usize) -> Vec<Projectile> {
    (0..n).map(|_| Projectile::homing(SpriteId::HomingShot)).collect()
}

const TARGET: Vec2 = Vec2::new(320.0, 540.0);

// ── Default ───────────────────────────────────────────────────────────────────

#[test]
fn default_enemy_fires_once_after_100_ticks() {
    let viewport = Viewport::default();
    let mut shots = shot_pool(50);
    let mut enemy = Enemy::small();
    enemy.place(Vec2::new(-48.0, 30.0), 2, EnemyBehavior::Default);
    enemy.body.set_heading_from_angle(deg_to_rad(30.0));

    for _ in 0..99 {
        enemy.update(&mut shots, TARGET, &viewport);
    }
    assert_eq!(active_count(&shots), 0);

    enemy.update(&mut shots, TARGET, &viewport);
    assert_eq!(active_count(&shots), 1);
    assert!(enemy.body.is_alive());
    assert_close(enemy.body.pos.x, -48.0 + 300.0 * deg_to_rad(30.0).cos(), 1e-2);
    assert_close(enemy.body.pos.y, 180.0, 1e-2);

    // The shot drops straight down at speed 5
    let shot = shots.iter().find(|s| s.is_active()).expect("one shot");
    assert_eq!(shot.body.heading, Vec2::new(0.0, 1.0));
    assert_eq!(shot.speed, 5.0);

    for _ in 0..50 {
        enemy.update(&mut shots, TARGET, &viewport);
    }
    assert_eq!(active_count(&shots), 1);
}

#[test]
fn enemy_dies_below_the_screen() {
    let viewport = Viewport::default();
    let mut shots = shot_pool(1);
    let mut enemy = Enemy::small();
    enemy.place(Vec2::new(320.0, 687.0), 2, EnemyBehavior::Default);
    enemy.body.set_heading_from_angle(deg_to_rad(90.0));
    enemy.update(&mut shots, TARGET, &viewport);
    assert!(!enemy.body.is_alive());
}

#[test]
fn dead_enemy_does_not_move() {
    let mut shots = shot_pool(1);
    let mut enemy = Enemy::small();
    enemy.body.pos = Vec2::new(5.0, 5.0);
    enemy.update(&mut shots, TARGET, &Viewport::default());
    assert_eq!(enemy.body.pos, Vec2::new(5.0, 5.0));
    assert_eq!(enemy.ticks_alive, 0);
}

// ── Wave ──────────────────────────────────────────────────────────────────────

#[test]
fn wave_enemy_aims_on_arrival_then_every_60_ticks() {
    let viewport = Viewport::default();
    let mut shots = shot_pool(10);
    let mut enemy = Enemy::small();
    let origin = Vec2::new(128.0, -48.0);
    enemy.place(origin, 2, EnemyBehavior::Wave);

    enemy.update(&mut shots, TARGET, &viewport);
    assert_eq!(active_count(&shots), 1);

    let expected = (TARGET - origin).normalize();
    let heading = shots[0].body.heading;
    assert_close(heading.x, expected.x, 1e-5);
    assert_close(heading.y, expected.y, 1e-5);
    assert_eq!(shots[0].speed, 4.0);

    for _ in 0..59 {
        enemy.update(&mut shots, TARGET, &viewport);
    }
    assert_eq!(active_count(&shots), 1);
    assert_close(enemy.body.pos.y, -48.0 + 120.0, 1e-3);

    enemy.update(&mut shots, TARGET, &viewport);
    assert_eq!(active_count(&shots), 2);
}

// ── Large ─────────────────────────────────────────────────────────────────────

#[test]
fn large_enemy_fires_radial_burst_on_arrival() {
    let viewport = Viewport::default();
    let mut shots = shot_pool(10);
    let mut enemy = Enemy::large();
    enemy.place(Vec2::new(320.0, -64.0), 50, EnemyBehavior::Large);

    enemy.update(&mut shots, TARGET, &viewport);
    assert_eq!(active_count(&shots), 8);
    for (i, shot) in shots.iter().take(8).enumerate() {
        let expected = heading_from_angle(deg_to_rad(45.0 * i as f32));
        assert_close(shot.body.heading.x, expected.x, 1e-6);
        assert_close(shot.body.heading.y, expected.y, 1e-6);
        assert_eq!(shot.speed, 3.0);
    }

    for _ in 0..49 {
        enemy.update(&mut shots, TARGET, &viewport);
    }
    assert_eq!(active_count(&shots), 8);

    // Second burst only finds two idle slots; the rest are dropped
    enemy.update(&mut shots, TARGET, &viewport);
    assert_eq!(active_count(&shots), 10);
}

// ── Boss ──────────────────────────────────────────────────────────────────────

fn invading_boss() -> Boss {
    let mut boss = Boss::new();
    boss.place(Vec2::new(320.0, -128.0), 250);
    boss.set_mode(BossMode::Invade);
    boss
}

#[test]
fn boss_starts_floating_when_y_first_exceeds_100() {
    let mut shots = shot_pool(50);
    let mut homing = homing_pool(50);
    let mut boss = invading_boss();

    for _ in 0..76 {
        boss.update(&mut shots, &mut homing, TARGET);
    }
    assert_eq!(boss.body.pos.y, 100.0);
    assert_eq!(boss.mode, BossMode::Invade);

    boss.update(&mut shots, &mut homing, TARGET);
    assert_eq!(boss.mode, BossMode::Floating);
    assert_eq!(boss.body.pos.y, BOSS_FLOAT_Y);
    assert_eq!(boss.ticks_alive, 0);

    for _ in 0..600 {
        boss.update(&mut shots, &mut homing, TARGET);
        assert_eq!(boss.body.pos.y, BOSS_FLOAT_Y);
    }
}

#[test]
fn floating_boss_alternates_aimed_and_homing_fire() {
    let mut shots = shot_pool(50);
    let mut homing = homing_pool(50);
    let mut boss = invading_boss();
    while boss.mode == BossMode::Invade {
        boss.update(&mut shots, &mut homing, TARGET);
    }

    for _ in 0..200 {
        boss.update(&mut shots, &mut homing, TARGET);
    }
    // Ticks 150, 160, 170, 180, 190
    assert_eq!(active_count(&shots), 5);
    assert_eq!(active_count(&homing), 0);

    for _ in 200..1000 {
        boss.update(&mut shots, &mut homing, TARGET);
    }
    // Plus 350..390; ticks 400..499 sit outside the aimed window
    assert_eq!(active_count(&shots), 10);
    // Ticks 500, 550, ..., 950
    assert_eq!(active_count(&homing), 10);
    assert_eq!(homing[0].speed, 3.5);
    assert_eq!(homing[0].body.heading, Vec2::new(0.0, 1.0));
}

#[test]
fn escaping_boss_leaves_through_the_top() {
    let mut shots = shot_pool(1);
    let mut homing = homing_pool(1);
    let mut boss = Boss::new();
    boss.place(Vec2::new(320.0, 100.0), 250);
    boss.set_mode(BossMode::Escape);

    for _ in 0..76 {
        boss.update(&mut shots, &mut homing, TARGET);
    }
    assert!(boss.body.is_alive());
    boss.update(&mut shots, &mut homing, TARGET);
    assert!(!boss.body.is_alive());
}
