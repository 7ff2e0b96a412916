use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::warn;
use tokio::sync::{mpsc, watch};

use crate::{
    app::{
        events::AppEvent,
        settings::{RuntimeSettings, save_runtime_settings},
    },
    cli::Cli,
    domain::weather::WeatherType,
    engine::{AnimationEngine, TickOutcome, frame_loop::FrameLoop, render::RenderedFrame},
    surface::Viewport,
    ui::raster::Raster,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Running,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub settings: RuntimeSettings,
    pub engine: AnimationEngine<Raster>,
    pub last_error: Option<String>,
    pub last_frame: Option<RenderedFrame>,
    settings_path: Option<PathBuf>,
    viewport_tx: watch::Sender<Viewport>,
}

impl AppState {
    /// `cells` is the terminal size in columns and rows.
    pub fn new(
        cli: &Cli,
        settings: RuntimeSettings,
        settings_path: Option<PathBuf>,
        cells: (u16, u16),
    ) -> Self {
        let viewport = Raster::viewport_for_cells(cells.0, cells.1, settings.scale);
        let (viewport_tx, _) = watch::channel(viewport);
        let engine = match cli.seed {
            Some(seed) => AnimationEngine::with_seed(settings.weather, seed),
            None => AnimationEngine::new(settings.weather),
        };

        Self {
            mode: AppMode::Running,
            running: true,
            settings,
            engine,
            last_error: None,
            last_frame: None,
            settings_path,
            viewport_tx,
        }
    }

    /// Weather type shown by the backdrop, even when the particle layer is down.
    #[must_use]
    pub fn weather(&self) -> WeatherType {
        self.settings.weather
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        *self.viewport_tx.borrow()
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => self.start_engine(tx),
            AppEvent::TickFrame => {
                if let TickOutcome::Rendered(rendered) = self.engine.tick() {
                    self.last_frame = Some(rendered);
                }
            }
            AppEvent::Input(event) => self.handle_input(event),
            AppEvent::Quit => self.quit(),
        }

        Ok(())
    }

    pub fn select_weather(&mut self, weather: WeatherType) {
        if weather == self.settings.weather {
            return;
        }
        self.settings.weather = weather;
        self.engine.set_weather_type(weather);
        self.persist_settings();
    }

    fn start_engine(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let scale = self.settings.scale;
        let frames = FrameLoop::spawn(tx.clone(), self.settings.fps, || AppEvent::TickFrame);
        if let Err(err) = self.engine.start(
            |viewport| Raster::acquire(viewport, scale),
            self.viewport_tx.subscribe(),
            frames,
        ) {
            self.last_error = Some(err.to_string());
        }
    }

    /// Stops the engine and ends the loop; never waits on the event channel.
    pub fn quit(&mut self) {
        self.engine.stop();
        self.mode = AppMode::Quit;
    }

    fn handle_input(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit_key(key) {
                    self.quit();
                    return;
                }
                match key.code {
                    KeyCode::Left | KeyCode::Char('h') => {
                        self.select_weather(self.settings.weather.previous());
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        self.select_weather(self.settings.weather.next());
                    }
                    KeyCode::Char(digit @ '1'..='6') => {
                        let idx = (digit as usize) - ('1' as usize);
                        self.select_weather(WeatherType::ALL[idx]);
                    }
                    _ => {}
                }
            }
            Event::Resize(cols, rows) => self.resize_to(cols, rows),
            _ => {}
        }
    }

    fn resize_to(&mut self, cols: u16, rows: u16) {
        let viewport = Raster::viewport_for_cells(cols, rows, self.settings.scale);
        self.viewport_tx.send_replace(viewport);
        // Apply now so the redraw after this event matches the new cell grid.
        self.engine.observe_resize();
    }

    fn persist_settings(&mut self) {
        let Some(path) = self.settings_path.as_deref() else {
            return;
        };
        if let Err(err) = save_runtime_settings(path, &self.settings) {
            warn!("saving settings failed: {err:#}");
            self.last_error = Some(format!("{err:#}"));
        }
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
