//! Particle animation engine.
//!
//! [`AnimationEngine`] owns a particle population built for one weather type,
//! a drawing surface, and the handles of the frame loop and resize observer
//! that drive it. The host delivers ticks, weather changes and resize
//! notifications from a single event loop, so they never interleave.

pub mod factory;
pub mod frame_loop;
pub mod kinds;
pub mod particle;
pub mod render;
pub mod simulate;

use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;
use tokio::sync::watch;

use crate::{
    domain::weather::WeatherType,
    surface::{Surface, SurfaceError, Viewport},
};
use factory::build_population;
use frame_loop::FrameLoop;
use particle::Particle;
use render::{FrameRenderer, RenderedFrame};
use simulate::step_population;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("particle layer could not start: {0}")]
    Surface(#[from] SurfaceError),
    #[error("animation engine is already running")]
    AlreadyStarted,
    #[error("animation engine has been stopped")]
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Rendered(RenderedFrame),
    /// The engine was not running; nothing was simulated or drawn.
    Skipped,
}

#[derive(Debug)]
pub struct AnimationEngine<S> {
    state: EngineState,
    weather: WeatherType,
    population: Vec<Particle>,
    renderer: FrameRenderer,
    viewport: Viewport,
    surface: Option<S>,
    resize: Option<watch::Receiver<Viewport>>,
    frames: Option<FrameLoop>,
    rng: StdRng,
}

impl<S> AnimationEngine<S> {
    #[must_use]
    pub fn new(weather: WeatherType) -> Self {
        Self::with_rng(weather, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn with_seed(weather: WeatherType, seed: u64) -> Self {
        Self::with_rng(weather, StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn with_rng(weather: WeatherType, rng: StdRng) -> Self {
        Self {
            state: EngineState::Idle,
            weather,
            population: Vec::new(),
            renderer: FrameRenderer::new(),
            viewport: Viewport::default(),
            surface: None,
            resize: None,
            frames: None,
            rng,
        }
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[must_use]
    pub fn weather(&self) -> WeatherType {
        self.weather
    }

    #[must_use]
    pub fn population(&self) -> &[Particle] {
        &self.population
    }

    #[must_use]
    pub fn frame(&self) -> u64 {
        self.renderer.frame()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    #[must_use]
    pub fn observes_resize(&self) -> bool {
        self.resize.is_some()
    }

    #[must_use]
    pub fn frame_loop_armed(&self) -> bool {
        self.frames.as_ref().is_some_and(FrameLoop::is_armed)
    }

    /// Cancels the frame loop and releases the resize observer. Idempotent.
    pub fn stop(&mut self) {
        if self.state == EngineState::Stopped {
            return;
        }
        if let Some(mut frames) = self.frames.take() {
            frames.cancel();
        }
        self.resize = None;
        self.state = EngineState::Stopped;
        info!(
            "particle engine stopped after {} frames ({})",
            self.renderer.frame(),
            self.weather
        );
    }
}

impl<S: Surface> AnimationEngine<S> {
    /// Idle → Running.
    ///
    /// Measures the viewport from `resize`, acquires the surface, builds the
    /// initial population, and takes ownership of both the resize observer and
    /// the frame loop. A surface failure is fatal: the engine stops and
    /// releases everything it was handed.
    pub fn start<F>(
        &mut self,
        acquire: F,
        mut resize: watch::Receiver<Viewport>,
        mut frames: FrameLoop,
    ) -> Result<(), EngineError>
    where
        F: FnOnce(Viewport) -> Result<S, SurfaceError>,
    {
        match self.state {
            EngineState::Idle => {}
            EngineState::Running => return Err(EngineError::AlreadyStarted),
            EngineState::Stopped => return Err(EngineError::Stopped),
        }

        let viewport = *resize.borrow_and_update();
        let surface = match acquire(viewport) {
            Ok(surface) => surface,
            Err(err) => {
                warn!("particle surface unavailable: {err}");
                frames.cancel();
                self.state = EngineState::Stopped;
                return Err(err.into());
            }
        };

        self.viewport = viewport;
        self.population = build_population(self.weather.config(), viewport, &mut self.rng);
        self.surface = Some(surface);
        self.resize = Some(resize);
        self.frames = Some(frames);
        self.state = EngineState::Running;
        info!(
            "particle engine started: {} x{} on {}x{}",
            self.weather,
            self.population.len(),
            viewport.width,
            viewport.height
        );
        Ok(())
    }

    /// Simulates then renders one frame. Ticks arriving while not running are skipped.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != EngineState::Running {
            return TickOutcome::Skipped;
        }
        self.observe_resize();
        let Some(surface) = self.surface.as_mut() else {
            return TickOutcome::Skipped;
        };

        step_population(&mut self.population, self.viewport, &mut self.rng);
        let rendered = self.renderer.draw(
            surface,
            &self.population,
            self.weather,
            self.viewport,
            &mut self.rng,
        );
        TickOutcome::Rendered(rendered)
    }

    /// Swaps in a freshly built population for `weather`.
    ///
    /// Returns `true` when the population was rebuilt. Before start the label
    /// is only recorded; the frame counter carries on across rebuilds.
    pub fn set_weather_type(&mut self, weather: WeatherType) -> bool {
        if weather == self.weather || self.state == EngineState::Stopped {
            return false;
        }
        self.weather = weather;
        if self.state != EngineState::Running {
            return false;
        }
        self.population = build_population(weather.config(), self.viewport, &mut self.rng);
        info!(
            "particle population rebuilt: {} x{}",
            weather,
            self.population.len()
        );
        true
    }

    /// Applies a pending viewport change, if any. Existing particles keep
    /// their positions; only later respawns and draws see the new bounds.
    pub fn observe_resize(&mut self) -> bool {
        let Some(resize) = self.resize.as_mut() else {
            return false;
        };
        if !resize.has_changed().unwrap_or(false) {
            return false;
        }
        let viewport = *resize.borrow_and_update();
        self.viewport = viewport;
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(viewport);
        }
        debug!(
            "particle viewport resized to {}x{}",
            viewport.width, viewport.height
        );
        true
    }
}
