use std::ffi::OsString;

use tempfile::NamedTempFile;

use super::{
    RuntimeSettings, load_runtime_settings, load_runtime_settings_from, save_runtime_settings,
    settings_path_from,
};
use crate::{domain::weather::WeatherType, test_support::state_test_cli};

#[test]
fn from_cli_defaults_uses_requested_weather() {
    let mut cli = state_test_cli();
    assert_eq!(
        RuntimeSettings::from_cli_defaults(&cli).weather,
        WeatherType::Night
    );

    cli.code = Some(71);
    let settings = RuntimeSettings::from_cli_defaults(&cli);
    assert_eq!(settings.weather, WeatherType::Snow);
    assert_eq!(settings.fps, 60);
}

#[test]
fn load_runtime_settings_without_disk_returns_cli_defaults() {
    let (settings, path) = load_runtime_settings(&state_test_cli(), false);
    assert!(path.is_none());
    assert_eq!(settings, RuntimeSettings::default());
}

#[test]
fn settings_path_prefers_config_dir_override() {
    let path = settings_path_from(
        Some(OsString::from("/tmp/backdrop")),
        Some(OsString::from("/home/someone")),
    )
    .expect("path");
    assert_eq!(path, std::path::Path::new("/tmp/backdrop/settings.json"));

    let path = settings_path_from(None, Some(OsString::from("/home/someone"))).expect("path");
    assert!(path.ends_with(".config/weather-backdrop/settings.json"));

    assert!(settings_path_from(None, None).is_none());
}

#[test]
fn roundtrip_preserves_weather_and_rate() {
    let settings = RuntimeSettings {
        weather: WeatherType::Storm,
        fps: 30,
        scale: 4.0,
    };
    let file = NamedTempFile::new().expect("create temp settings file");
    save_runtime_settings(file.path(), &settings).expect("save settings");

    let restored = load_runtime_settings_from(&state_test_cli(), file.path());
    assert_eq!(restored, settings);
}

#[test]
fn explicit_cli_flags_override_saved_values() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = temp_dir.path().join("nested").join("settings.json");
    let saved = RuntimeSettings {
        weather: WeatherType::Cloudy,
        fps: 30,
        scale: 4.0,
    };
    save_runtime_settings(&path, &saved).expect("save creates parent dirs");

    let mut cli = state_test_cli();
    cli.weather = Some(WeatherType::Rain);
    cli.fps = 20;
    let loaded = load_runtime_settings_from(&cli, &path);

    assert_eq!(loaded.weather, WeatherType::Rain);
    assert_eq!(loaded.fps, 20);
    assert!((loaded.scale - 4.0).abs() < f32::EPSILON);
}

#[test]
fn missing_or_malformed_file_falls_back_to_defaults() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let missing = temp_dir.path().join("settings.json");
    assert_eq!(
        load_runtime_settings_from(&state_test_cli(), &missing),
        RuntimeSettings::default()
    );

    std::fs::write(&missing, "{ not json").expect("write garbage");
    assert_eq!(
        load_runtime_settings_from(&state_test_cli(), &missing),
        RuntimeSettings::default()
    );
}

#[test]
fn partial_file_fills_missing_fields_and_clamps_fps() {
    let file = NamedTempFile::new().expect("create temp settings file");
    std::fs::write(file.path(), r#"{ "weather": "snow", "fps": 240 }"#).expect("write");

    let loaded = load_runtime_settings_from(&state_test_cli(), file.path());
    assert_eq!(loaded.weather, WeatherType::Snow);
    assert_eq!(loaded.fps, 60);
    assert!((loaded.scale - 8.0).abs() < f32::EPSILON);
}

#[test]
fn saved_json_uses_lowercase_labels() {
    let file = NamedTempFile::new().expect("create temp settings file");
    let settings = RuntimeSettings {
        weather: WeatherType::Sunny,
        ..RuntimeSettings::default()
    };
    save_runtime_settings(file.path(), &settings).expect("save");
    let content = std::fs::read_to_string(file.path()).expect("read settings");
    assert!(content.contains(r#""weather": "sunny""#));
}
