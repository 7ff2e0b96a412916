use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    cli::{Cli, DEFAULT_FPS},
    domain::weather::WeatherType,
    engine::frame_loop::{MAX_FPS, MIN_FPS},
    ui::raster::DEFAULT_SCALE,
};

pub const CONFIG_DIR_ENV: &str = "WEATHER_BACKDROP_CONFIG_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub weather: WeatherType,
    pub fps: u8,
    pub scale: f32,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            weather: WeatherType::default(),
            fps: DEFAULT_FPS,
            scale: DEFAULT_SCALE,
        }
    }
}

impl RuntimeSettings {
    #[must_use]
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        Self {
            weather: cli.requested_weather().unwrap_or_default(),
            fps: cli.fps,
            scale: cli.scale,
        }
    }

    /// Explicit flags win over whatever was saved.
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(weather) = cli.requested_weather() {
            self.weather = weather;
        }
        if cli.fps != DEFAULT_FPS {
            self.fps = cli.fps;
        }
        if (cli.scale - DEFAULT_SCALE).abs() > f32::EPSILON {
            self.scale = cli.scale;
        }
        self.fps = self.fps.clamp(MIN_FPS, MAX_FPS);
    }
}

pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    if !enable_disk {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    }
    let path = settings_path_from(
        std::env::var_os(CONFIG_DIR_ENV),
        std::env::var_os("HOME"),
    );
    match path {
        Some(path) => (load_runtime_settings_from(cli, &path), Some(path)),
        None => (RuntimeSettings::from_cli_defaults(cli), None),
    }
}

/// Reads saved settings at `path`; a missing or unreadable file falls back to CLI defaults.
pub fn load_runtime_settings_from(cli: &Cli, path: &Path) -> RuntimeSettings {
    let mut settings = RuntimeSettings::from_cli_defaults(cli);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<RuntimeSettings>(&content) {
            Ok(saved) => settings = saved,
            Err(err) => warn!("ignoring malformed settings at {}: {err}", path.display()),
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => warn!("could not read settings at {}: {err}", path.display()),
    }
    settings.apply_cli_overrides(cli);
    settings
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path_from(config_dir: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(base) = config_dir {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = home?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("weather-backdrop")
            .join("settings.json"),
    )
}

#[cfg(test)]
mod tests;
