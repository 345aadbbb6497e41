use particle_field::{FieldConfig, FieldError, ParticleField, Quality};

#[test]
fn json_config_builds_a_field() {
    let json = r#"{
        "particleCount": 50,
        "speed": 0.8,
        "colors": ["rgba(255, 0, 0, 0.5)", "rgba(0, 255, 0, 0.5)"],
        "quality": "premium",
        "seed": 11
    }"#;

    let config = FieldConfig::from_json(json).expect("config should parse");
    assert_eq!(config.quality, Quality::Premium);
    assert_eq!(config.effective_pool_size(), 50);

    let field = ParticleField::with_seed(config).expect("field should build");
    assert!(!field.is_running());
    assert_eq!(field.profile().target_fps, 60.0);
    assert!(field.profile().connections);
}

#[test]
fn unknown_keys_are_tolerated_but_bad_types_are_not() {
    assert!(FieldConfig::from_json(r#"{"theme": "dark"}"#).is_ok());
    assert!(matches!(
        FieldConfig::from_json(r#"{"particleCount": "lots"}"#),
        Err(FieldError::InvalidConfig(_))
    ));
}

#[test]
fn config_round_trips_through_json() {
    let config = FieldConfig::default().with_quality(Quality::Basic).with_seed(3);
    let json = serde_json::to_string(&config).expect("config should serialize");
    assert!(json.contains("\"particleCount\":30"));
    assert!(json.contains("\"quality\":\"basic\""));
    assert_eq!(FieldConfig::from_json(&json), Ok(config));
}
