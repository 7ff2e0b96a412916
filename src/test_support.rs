//! Test doubles shared by unit and integration tests; not part of the public API.

#[cfg(test)]
use crate::cli::Cli;
use crate::surface::{Paint, Point, Rgba, Surface, Viewport};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Resize(Viewport),
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Rgba,
    },
    Circle {
        center: Point,
        radius: f32,
        paint: Paint,
    },
    Polygon {
        points: Vec<Point>,
        paint: Paint,
    },
    Rect {
        origin: Point,
        size: Viewport,
        paint: Paint,
    },
}

/// Surface double that records every primitive it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    viewport: Viewport,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            calls: Vec::new(),
        }
    }

    #[must_use]
    pub fn clears(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Clear))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.calls.push(DrawCall::Resize(viewport));
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgba) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[Point], paint: &Paint) {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            paint: paint.clone(),
        });
    }

    fn fill_rect(&mut self, origin: Point, size: Viewport, paint: &Paint) {
        self.calls.push(DrawCall::Rect {
            origin,
            size,
            paint: paint.clone(),
        });
    }
}

#[cfg(test)]
pub(crate) fn state_test_cli() -> Cli {
    Cli {
        weather: None,
        code: None,
        night: false,
        fps: 60,
        scale: 8.0,
        seed: Some(7),
        no_save: true,
    }
}
