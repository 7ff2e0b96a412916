use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Coarse visual category driving the backdrop gradient and particle kind.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WeatherType {
    Sunny,
    Cloudy,
    Rain,
    Snow,
    #[default]
    Night,
    Storm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticleKind {
    Ray,
    CloudBlob,
    Rain,
    Snow,
    Star,
}

impl WeatherType {
    pub const ALL: [Self; 6] = [
        Self::Sunny,
        Self::Cloudy,
        Self::Rain,
        Self::Snow,
        Self::Night,
        Self::Storm,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Night => "night",
            Self::Storm => "storm",
        }
    }

    /// Exact label lookup; anything else resolves to the default type.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::recognize(label).unwrap_or_default()
    }

    /// Exact label lookup that reports a miss instead of falling back.
    #[must_use]
    pub fn recognize(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Sunny => "Sun rays",
            Self::Cloudy => "Drifting clouds",
            Self::Rain => "Rain",
            Self::Snow => "Snowfall",
            Self::Night => "Starry night",
            Self::Storm => "Thunderstorm",
        }
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for WeatherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for WeatherType {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl ParticleKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ray => "ray",
            Self::CloudBlob => "cloud-blob",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Star => "star",
        }
    }
}

impl fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a WMO weather code and the time of day to a backdrop weather type.
#[must_use]
pub fn classify(code: u8, time_of_day: TimeOfDay) -> WeatherType {
    let night = time_of_day == TimeOfDay::Night;
    match code {
        0 if night => WeatherType::Night,
        0 => WeatherType::Sunny,
        1..=3 => WeatherType::Cloudy,
        61 | 63 | 65 | 80..=82 => WeatherType::Rain,
        71 | 73 | 75 | 85 | 86 => WeatherType::Snow,
        95 | 96 | 99 => WeatherType::Storm,
        _ if night => WeatherType::Night,
        _ => WeatherType::Cloudy,
    }
}

#[cfg(test)]
mod tests;
