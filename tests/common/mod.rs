#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use weather_backdrop::{
    app::{settings::RuntimeSettings, state::AppState},
    cli::Cli,
    domain::weather::WeatherType,
    ui,
};

pub fn backdrop_cli() -> Cli {
    Cli {
        weather: None,
        code: None,
        night: false,
        fps: 60,
        scale: 8.0,
        seed: Some(11),
        no_save: true,
    }
}

pub fn state_for(weather: WeatherType, cells: (u16, u16)) -> AppState {
    let settings = RuntimeSettings {
        weather,
        ..RuntimeSettings::default()
    };
    AppState::new(&backdrop_cli(), settings, None, cells)
}

pub fn render_buffer(state: &AppState, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| ui::render(frame, state))
        .expect("draw");
    terminal.backend().buffer().clone()
}

pub fn row_text(buffer: &Buffer, y: u16) -> String {
    let width = buffer.area.width;
    let mut line = String::new();
    for x in 0..width {
        line.push_str(buffer[(x, y)].symbol());
    }
    line.trim_end().to_string()
}
