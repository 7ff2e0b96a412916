#![allow(clippy::missing_errors_doc)]

use clap::Parser;

use crate::{
    domain::weather::{TimeOfDay, WeatherType, classify},
    engine::frame_loop::MAX_FPS,
    ui::raster::DEFAULT_SCALE,
};

pub const DEFAULT_FPS: u8 = MAX_FPS;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-backdrop",
    version,
    about = "Animated weather particle backdrop for the terminal"
)]
pub struct Cli {
    /// Weather type to animate
    #[arg(long, value_enum, conflicts_with = "code")]
    pub weather: Option<WeatherType>,

    /// WMO weather code to classify (e.g. 61 for rain)
    #[arg(long)]
    pub code: Option<u8>,

    /// Classify --code as night time
    #[arg(long, requires = "code")]
    pub night: bool,

    /// Target FPS (15..60)
    #[arg(
        long,
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u8).range(15..=60)
    )]
    pub fps: u8,

    /// Logical pixels per raster pixel
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f32,

    /// Seed for the particle random source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Neither read nor write the settings file
    #[arg(long)]
    pub no_save: bool,
}

impl Cli {
    /// Weather type asked for on the command line, if any.
    #[must_use]
    pub fn requested_weather(&self) -> Option<WeatherType> {
        self.weather.or_else(|| {
            let time_of_day = if self.night {
                TimeOfDay::Night
            } else {
                TimeOfDay::Day
            };
            self.code.map(|code| classify(code, time_of_day))
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            anyhow::bail!("--scale must be a positive number, got {}", self.scale);
        }
        Ok(())
    }
}
