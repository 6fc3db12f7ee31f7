use viper_shooter::{Config, ConfigError};

#[test]
fn defaults_match_classic_tuning() {
    let c = Config::default();
    assert_eq!((c.viewport.width, c.viewport.height), (640.0, 640.0));
    assert_eq!(c.pools.player_shots, 10);
    assert_eq!(c.pools.twin_shots, 20);
    assert_eq!(c.pools.enemy_shots, 50);
    assert_eq!(c.pools.homing_shots, 50);
    assert_eq!(c.pools.small_enemies, 20);
    assert_eq!(c.pools.large_enemies, 5);
    assert_eq!(c.pools.explosions, 10);
    assert_eq!(c.player.fire_interval, 10);
    assert_eq!(c.player.speed, 3.0);
    assert_eq!(c.explosion.sparks, 15);
    assert_eq!(c.starfield.count, 100);
    assert!(c.validate().is_ok());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let c = Config::from_json_str(r#"{ "pools": { "enemy_shots": 8 }, "player": { "fire_interval": 4 } }"#)
        .expect("valid config");
    assert_eq!(c.pools.enemy_shots, 8);
    assert_eq!(c.pools.homing_shots, 50);
    assert_eq!(c.player.fire_interval, 4);
    assert_eq!(c.player.speed, 3.0);
    assert_eq!(c.viewport.width, 640.0);
}

#[test]
fn empty_object_is_default() {
    let c = Config::from_json_str("{}").expect("valid config");
    assert_eq!(c.pools.small_enemies, 20);
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = Config::from_json_str("{ pools: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn validation_failures() {
    let err = Config::from_json_str(r#"{ "viewport": { "width": 0, "height": 480 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidViewport { .. }));

    let err = Config::from_json_str(r#"{ "pools": { "small_enemies": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyPool("small_enemies")));

    let err = Config::from_json_str(r#"{ "pools": { "twin_shots": 7 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OddTwinPool(7)));

    let err = Config::from_json_str(r#"{ "player": { "fire_interval": -1 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NegativeFireInterval(-1)));

    let err = Config::from_json_str(r#"{ "explosion": { "lifetime_secs": 0.0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidExplosionLifetime(_)));

    let err = Config::from_json_str(r#"{ "starfield": { "max_speed": 0.5 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidStarfield));
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("viper_config_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "viewport": { "width": 480, "height": 800 } }"#).expect("write temp file");
    let c = Config::load(&path).expect("loads");
    let _ = std::fs::remove_file(&path);
    assert_eq!((c.viewport.width, c.viewport.height), (480.0, 800.0));
}

#[test]
fn load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("viper_config_does_not_exist.json");
    assert!(matches!(Config::load(&path), Err(ConfigError::Io(_))));
}

#[test]
fn config_serializes_back() {
    let json = serde_json::to_string(&Config::default()).expect("serializes");
    let back = Config::from_json_str(&json).expect("parses");
    assert_eq!(back.pools.enemy_shots, 50);
}
