//! Drawing-surface contract shared by the engine and its hosts.
//!
//! A surface is anything with a logical size and a handful of 2-D primitives.
//! Coordinates are logical pixels with the origin in the top-left corner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `distance` along `angle` (radians, 0 = +x, clockwise on screen).
    #[must_use]
    pub fn offset(self, angle: f32, distance: f32) -> Self {
        Self {
            x: self.x + angle.cos() * distance,
            y: self.y + angle.sin() * distance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Straight (non-premultiplied) colour with a unit-range alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| {
            let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Colour ramps from `start` at `from` to `end` at `to`, clamped beyond both ends.
    Linear {
        from: Point,
        to: Point,
        start: Rgba,
        end: Rgba,
    },
    /// Colour ramps from `inner` at `center` to `outer` at `radius`.
    Radial {
        center: Point,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
}

impl Paint {
    #[must_use]
    pub fn color_at(&self, p: Point) -> Rgba {
        match self {
            Self::Solid(color) => *color,
            Self::Linear {
                from,
                to,
                start,
                end,
            } => {
                let (dx, dy) = (to.x - from.x, to.y - from.y);
                let len_sq = dx * dx + dy * dy;
                if len_sq <= f32::EPSILON {
                    return *start;
                }
                let t = ((p.x - from.x) * dx + (p.y - from.y) * dy) / len_sq;
                start.lerp(*end, t)
            }
            Self::Radial {
                center,
                radius,
                inner,
                outer,
            } => {
                if *radius <= f32::EPSILON {
                    return *outer;
                }
                let dist = (p.x - center.x).hypot(p.y - center.y);
                inner.lerp(*outer, dist / radius)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    #[error("drawing surface has no drawable area ({width}x{height})")]
    ZeroSized { width: f32, height: f32 },
    #[error("surface scale must be positive, got {0}")]
    InvalidScale(f32),
    #[error("drawing context unavailable: {0}")]
    Unavailable(String),
}

/// 2-D drawing primitives the frame renderer needs.
pub trait Surface {
    fn viewport(&self) -> Viewport;

    /// Adopt new logical dimensions; previous contents may be discarded.
    fn resize(&mut self, viewport: Viewport);

    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgba);

    fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint);

    /// Fill a closed polygon (even-odd rule).
    fn fill_polygon(&mut self, points: &[Point], paint: &Paint);

    fn fill_rect(&mut self, origin: Point, size: Viewport, paint: &Paint);
}
