use jalalify::config::Config;
use jalalify::constants::{DATE_INPUT_FORMAT, TIME_INPUT_FORMAT};
use jalalify::TEHRAN;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.timezone.offset_hours, 3);
    assert_eq!(config.timezone.offset_minutes, 30);
    assert_eq!(config.display.date_format, DATE_INPUT_FORMAT);
    assert_eq!(config.display.time_format, TIME_INPUT_FORMAT);
}

#[test]
fn test_default_config_resolves_to_tehran() {
    let config = Config::default();
    assert_eq!(config.fixed_zone(), TEHRAN);
    assert_eq!(config.fixed_zone().time_zone_name(), "Asia/Tehran");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Out-of-range hour component should fail
    config.timezone.offset_hours = 25;
    assert!(config.validate().is_err());

    // Reset and test out-of-range minutes
    config.timezone.offset_hours = 3;
    config.timezone.offset_minutes = 75;
    assert!(config.validate().is_err());

    // Mixed signs should fail
    config.timezone.offset_minutes = -30;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_bad_format_strings() {
    let mut config = Config::default();
    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("offset_hours = 3"));
    assert!(toml_str.contains("offset_minutes = 30"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[timezone]
offset_hours = 4
offset_minutes = 30
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.timezone.offset_hours, 4);
    assert_eq!(config.timezone.offset_minutes, 30);
    assert_eq!(config.fixed_zone().utc_offset().local_minus_utc(), 16_200);

    // Unspecified sections keep their defaults
    assert_eq!(config.display.date_format, DATE_INPUT_FORMAT);
}

#[test]
fn test_custom_zone_falls_back_to_canonical_display() {
    let partial_toml = r#"
[timezone]
offset_hours = -4
offset_minutes = -30
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.fixed_zone().time_zone_name(), "-04:30");
}
