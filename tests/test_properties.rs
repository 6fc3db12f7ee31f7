use glam::Vec2;
use proptest::prelude::*;
use viper_shooter::consts::MAX_SCORE;
use viper_shooter::entities::{EnemyBehavior, EntityKind};
use viper_shooter::projectile::within_hit_range;
use viper_shooter::vector::{VectorExt, ONE_DEGREE};
use viper_shooter::{SimulationContext, Viewport};

fn kind() -> impl Strategy<Value = EntityKind> {
    prop_oneof![
        Just(EntityKind::Enemy(EnemyBehavior::Default)),
        Just(EntityKind::Enemy(EnemyBehavior::Wave)),
        Just(EntityKind::Enemy(EnemyBehavior::Large)),
        Just(EntityKind::Boss),
        Just(EntityKind::Player),
    ]
}

proptest! {
    #[test]
    fn score_stays_within_bounds(kills in prop::collection::vec(kind(), 0..300)) {
        let mut ctx = SimulationContext::default();
        let mut previous = 0;
        for k in kills {
            ctx.award(k.score_value());
            prop_assert!(ctx.score() >= previous);
            prop_assert!(ctx.score() <= MAX_SCORE);
            previous = ctx.score();
        }
    }

    #[test]
    fn large_kill_adds_1000_below_the_cap(start in 0u32..=98_999) {
        let mut ctx = SimulationContext::default();
        ctx.award(start);
        ctx.award(EntityKind::Enemy(EnemyBehavior::Large).score_value());
        prop_assert_eq!(ctx.score(), start + 1000);
    }

    #[test]
    fn hit_range_matches_quarter_width_sum(
        w1 in 1.0f32..200.0,
        w2 in 1.0f32..200.0,
        angle in 0.0f32..std::f32::consts::TAU,
    ) {
        let threshold = (w1 + w2) / 4.0;
        let dir = Vec2::new(angle.cos(), angle.sin());
        let a = Vec2::new(100.0, 100.0);
        prop_assert!(within_hit_range(a, w1, a + dir * threshold * 0.999, w2));
        prop_assert!(!within_hit_range(a, w1, a + dir * (threshold * 1.001 + 0.01), w2));
    }

    #[test]
    fn inside_the_padded_viewport_is_never_outside(
        x in -16.0f32..=656.0,
        y in -16.0f32..=656.0,
    ) {
        prop_assert!(!Viewport::default().is_fully_outside(Vec2::new(x, y), 32.0, 32.0));
    }

    #[test]
    fn past_the_padded_viewport_is_outside(
        over in 0.01f32..500.0,
        along in 0.0f32..640.0,
        side in 0usize..4,
    ) {
        let pos = match side {
            0 => Vec2::new(-16.0 - over, along),
            1 => Vec2::new(656.0 + over, along),
            2 => Vec2::new(along, -16.0 - over),
            _ => Vec2::new(along, 656.0 + over),
        };
        prop_assert!(Viewport::default().is_fully_outside(pos, 32.0, 32.0));
    }

    #[test]
    fn rotation_by_one_degree_preserves_length(x in -50.0f32..50.0, y in -50.0f32..50.0) {
        let v = Vec2::new(x, y);
        prop_assert!((v.rotated(ONE_DEGREE).length() - v.length()).abs() < 1e-3);
    }
}
