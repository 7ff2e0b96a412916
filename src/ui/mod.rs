pub mod backdrop;
pub mod raster;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::app::state::AppState;
use backdrop::{SkyBackdrop, rgb};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let weather = state.weather();

    frame.render_widget(
        SkyBackdrop {
            gradient: &weather.config().background,
            particles: state
                .engine
                .surface()
                .filter(|_| state.engine.is_running()),
            scale: state.settings.scale,
        },
        area,
    );

    render_status_strip(frame, area, state);
}

fn render_status_strip(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 {
        return;
    }
    let strip = Rect {
        x: area.x,
        y: area.bottom() - 1,
        width: area.width,
        height: 1,
    };
    let weather = state.weather();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", weather.label()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("· {} ", weather.description())),
    ];
    if state.last_frame.is_some() {
        spans.push(Span::raw(format!("· frame {} ", state.engine.frame())));
    }
    match &state.last_error {
        Some(err) => spans.push(Span::styled(
            format!("· ⚠ {err}"),
            Style::default().fg(Color::Yellow),
        )),
        None => spans.push(Span::styled(
            "· ←/→ switch · 1-6 pick · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    }

    let background = rgb(weather.config().background.stops[2].color);
    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::Gray).bg(background));
    frame.render_widget(Clear, strip);
    frame.render_widget(status, strip);
}
