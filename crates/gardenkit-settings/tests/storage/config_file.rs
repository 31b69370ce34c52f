use gardenkit_settings::{PlannerConfig, SettingsError};
use tempfile::TempDir;

#[test]
fn test_toml_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = PlannerConfig::new();
    config.overlay.default_site_size_in_meters = 25.0;
    config.weather.frost_temperature = -2.0;
    config.storage.data_directory = dir.path().join("data");
    config.save_to_file(&path).unwrap();

    let loaded = PlannerConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let mut config = PlannerConfig::new();
    config.weather.min_window_days = 5;
    config.save_to_file(&path).unwrap();

    assert_eq!(PlannerConfig::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[weather]\nfrost_temperature = 1.0\n").unwrap();

    let config = PlannerConfig::load_from_file(&path).unwrap();
    assert_eq!(config.weather.frost_temperature, 1.0);
    assert_eq!(config.weather.low_risk_threshold, 0.1);
    assert_eq!(config.overlay.default_site_size_in_meters, 40.0);
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[weather]\nlow_risk_threshold = 2.0\n").unwrap();

    let err = PlannerConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Config(_)));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    assert!(matches!(
        PlannerConfig::load_from_file(&path),
        Err(SettingsError::LoadError(_))
    ));
    assert_eq!(
        PlannerConfig::load_or_default(&path).unwrap(),
        PlannerConfig::default()
    );
}
