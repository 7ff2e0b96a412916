//! Static per-weather-type configuration: backdrop gradient plus particle layer.

use std::f32::consts::PI;

use crate::{
    domain::weather::{ParticleKind, WeatherType},
    surface::{Rgba, Viewport},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// CSS-style linear gradient; `angle_deg` follows CSS (0 = towards top, clockwise).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropGradient {
    pub angle_deg: f32,
    pub stops: [GradientStop; 3],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherTypeConfig {
    pub weather: WeatherType,
    pub background: BackdropGradient,
    pub particle_kind: ParticleKind,
    pub particle_count: usize,
}

const fn hex(rgb: u32) -> Rgba {
    Rgba::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 1.0)
}

const fn gradient(first: u32, middle: u32, last: u32) -> BackdropGradient {
    BackdropGradient {
        angle_deg: 160.0,
        stops: [
            GradientStop {
                offset: 0.0,
                color: hex(first),
            },
            GradientStop {
                offset: 0.5,
                color: hex(middle),
            },
            GradientStop {
                offset: 1.0,
                color: hex(last),
            },
        ],
    }
}

pub const CONFIGS: [WeatherTypeConfig; 6] = [
    WeatherTypeConfig {
        weather: WeatherType::Sunny,
        background: gradient(0x0f1f3d, 0x1a3a6b, 0x0a0f1e),
        particle_kind: ParticleKind::Ray,
        particle_count: 6,
    },
    WeatherTypeConfig {
        weather: WeatherType::Cloudy,
        background: gradient(0x0d1b2a, 0x1b2a3d, 0x080e1d),
        particle_kind: ParticleKind::CloudBlob,
        particle_count: 18,
    },
    WeatherTypeConfig {
        weather: WeatherType::Rain,
        background: gradient(0x080f1a, 0x0f1e30, 0x050a10),
        particle_kind: ParticleKind::Rain,
        particle_count: 80,
    },
    WeatherTypeConfig {
        weather: WeatherType::Snow,
        background: gradient(0x0d1520, 0x1a2640, 0x080e1d),
        particle_kind: ParticleKind::Snow,
        particle_count: 50,
    },
    WeatherTypeConfig {
        weather: WeatherType::Night,
        background: gradient(0x020509, 0x080e1d, 0x030710),
        particle_kind: ParticleKind::Star,
        particle_count: 80,
    },
    WeatherTypeConfig {
        weather: WeatherType::Storm,
        background: gradient(0x050810, 0x0a0f1a, 0x030508),
        particle_kind: ParticleKind::Rain,
        particle_count: 60,
    },
];

/// Total lookup: unknown labels resolve to the night configuration.
#[must_use]
pub fn config_for(label: &str) -> &'static WeatherTypeConfig {
    WeatherType::from_label(label).config()
}

impl WeatherType {
    #[must_use]
    pub fn config(self) -> &'static WeatherTypeConfig {
        CONFIGS
            .iter()
            .find(|config| config.weather == self)
            .unwrap_or(&CONFIGS[4])
    }
}

impl BackdropGradient {
    /// Colour at logical position `(x, y)` inside `viewport`.
    #[must_use]
    pub fn color_at(&self, x: f32, y: f32, viewport: Viewport) -> Rgba {
        let t = self.ratio_at(x, y, viewport);
        let [first, middle, last] = self.stops;
        if t <= middle.offset {
            let span = (middle.offset - first.offset).max(f32::EPSILON);
            first.color.lerp(middle.color, (t - first.offset) / span)
        } else {
            let span = (last.offset - middle.offset).max(f32::EPSILON);
            middle.color.lerp(last.color, (t - middle.offset) / span)
        }
    }

    fn ratio_at(&self, x: f32, y: f32, viewport: Viewport) -> f32 {
        if !viewport.is_drawable() {
            return 0.0;
        }
        let theta = self.angle_deg * PI / 180.0;
        let (dir_x, dir_y) = (theta.sin(), -theta.cos());
        let line_len = (viewport.width * dir_x).abs() + (viewport.height * dir_y).abs();
        if line_len <= f32::EPSILON {
            return 0.0;
        }
        let (cx, cy) = (viewport.width / 2.0, viewport.height / 2.0);
        let projected = (x - cx) * dir_x + (y - cy) * dir_y;
        (projected / line_len + 0.5).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognised_labels_map_to_table_entries() {
        let rain = config_for("rain");
        assert_eq!(rain.particle_kind, ParticleKind::Rain);
        assert_eq!(rain.particle_count, 80);

        let storm = config_for("storm");
        assert_eq!(storm.particle_kind, ParticleKind::Rain);
        assert_eq!(storm.particle_count, 60);

        assert_eq!(config_for("sunny").particle_kind, ParticleKind::Ray);
        assert_eq!(config_for("cloudy").particle_count, 18);
        assert_eq!(config_for("snow").particle_count, 50);
    }

    #[test]
    fn unknown_labels_fall_back_to_night() {
        let night = config_for("night");
        for label in ["", "fog", "SUNNY-ish", "🌧", "RAIN", " rain", "Storm"] {
            assert_eq!(config_for(label), night);
        }
        assert_eq!(night.particle_kind, ParticleKind::Star);
        assert_eq!(night.particle_count, 80);
    }

    #[test]
    fn every_type_has_exactly_one_config() {
        for kind in WeatherType::ALL {
            let matches = CONFIGS.iter().filter(|c| c.weather == kind).count();
            assert_eq!(matches, 1, "{kind}");
            assert!(kind.config().particle_count > 0);
        }
    }

    #[test]
    fn hex_splits_channels() {
        assert_eq!(hex(0x1a3a6b), Rgba::new(0x1a, 0x3a, 0x6b, 1.0));
    }

    #[test]
    fn gradient_hits_first_and_last_stop_at_corners() {
        let background = WeatherType::Sunny.config().background;
        let viewport = Viewport::new(1000.0, 800.0);
        // 160deg points down and slightly right, so top-left is the start.
        assert_eq!(background.color_at(0.0, 0.0, viewport), hex(0x0f1f3d));
        assert_eq!(
            background.color_at(1000.0, 800.0, viewport),
            hex(0x0a0f1e)
        );
        assert_eq!(background.color_at(500.0, 400.0, viewport), hex(0x1a3a6b));
    }

    #[test]
    fn gradient_on_empty_viewport_uses_first_stop() {
        let background = WeatherType::Rain.config().background;
        assert_eq!(
            background.color_at(3.0, 3.0, Viewport::default()),
            hex(0x080f1a)
        );
    }
}
