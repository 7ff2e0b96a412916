#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

//! Half-block pixel raster used as the terminal drawing surface.
//!
//! Every terminal cell holds two stacked pixels; one raster pixel covers
//! `scale` logical pixels in each direction. Primitives thinner or smaller
//! than one pixel still light the pixel they touch, so hairline rain and
//! sub-pixel stars stay visible at terminal resolution.

use crate::surface::{Paint, Point, Rgba, Surface, SurfaceError, Viewport};

pub const DEFAULT_SCALE: f32 = 8.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Pixel {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

#[derive(Debug, Clone)]
pub struct Raster {
    scale: f32,
    viewport: Viewport,
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Raster {
    /// Acquires a raster for `viewport`, failing when there is nothing to draw on.
    pub fn acquire(viewport: Viewport, scale: f32) -> Result<Self, SurfaceError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SurfaceError::InvalidScale(scale));
        }
        if !viewport.is_drawable() {
            return Err(SurfaceError::ZeroSized {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let mut raster = Self {
            scale,
            viewport: Viewport::default(),
            width: 0,
            height: 0,
            pixels: Vec::new(),
        };
        raster.resize(viewport);
        Ok(raster)
    }

    /// Logical viewport covering `cols` x `rows` terminal cells.
    #[must_use]
    pub fn viewport_for_cells(cols: u16, rows: u16, scale: f32) -> Viewport {
        Viewport::new(
            f32::from(cols) * scale,
            f32::from(rows) * 2.0 * scale,
        )
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Raster size in pixels (width, height).
    #[must_use]
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Colour and coverage of pixel `(x, y)`; out-of-range pixels are transparent.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.index(x, y)
            .map_or(Rgba::new(0, 0, 0, 0.0), |idx| {
                let p = self.pixels[idx];
                Rgba::new(
                    p.r.round().clamp(0.0, 255.0) as u8,
                    p.g.round().clamp(0.0, 255.0) as u8,
                    p.b.round().clamp(0.0, 255.0) as u8,
                    p.a,
                )
            })
    }

    /// Pixel `(x, y)` composited over an opaque `base` colour.
    #[must_use]
    pub fn composite_over(&self, x: usize, y: usize, base: Rgba) -> (u8, u8, u8) {
        let Some(idx) = self.index(x, y) else {
            return (base.r, base.g, base.b);
        };
        let p = self.pixels[idx];
        let mix = |top: f32, bottom: u8| {
            (top * p.a + f32::from(bottom) * (1.0 - p.a))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        (mix(p.r, base.r), mix(p.g, base.g), mix(p.b, base.b))
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn to_pixel_space(&self, p: Point) -> (f32, f32) {
        (p.x / self.scale, p.y / self.scale)
    }

    fn pixel_center(&self, x: usize, y: usize) -> Point {
        Point::new(
            (x as f32 + 0.5) * self.scale,
            (y as f32 + 0.5) * self.scale,
        )
    }

    fn pixel_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let (x, y) = (px.floor() as usize, py.floor() as usize);
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// Clamped inclusive pixel range covering logical `[min, max]` on one axis.
    fn span(&self, min: f32, max: f32, limit: usize) -> Option<(usize, usize)> {
        if limit == 0 || !min.is_finite() || !max.is_finite() {
            return None;
        }
        let lo = (min / self.scale).floor().max(0.0);
        let hi = (max / self.scale).floor().min(limit as f32 - 1.0);
        (lo <= hi).then(|| (lo as usize, hi as usize))
    }

    fn blend(&mut self, x: usize, y: usize, color: Rgba) {
        let a = color.a.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let dst = &mut self.pixels[idx];
        let keep = dst.a * (1.0 - a);
        let out_a = a + keep;
        dst.r = (f32::from(color.r) * a + dst.r * keep) / out_a;
        dst.g = (f32::from(color.g) * a + dst.g * keep) / out_a;
        dst.b = (f32::from(color.b) * a + dst.b * keep) / out_a;
        dst.a = out_a;
    }

    fn fill_region<F>(&mut self, min: Point, max: Point, paint: &Paint, inside: F) -> usize
    where
        F: Fn(Point) -> bool,
    {
        let (Some((x0, x1)), Some((y0, y1))) = (
            self.span(min.x, max.x, self.width),
            self.span(min.y, max.y, self.height),
        ) else {
            return 0;
        };
        let mut filled = 0;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = self.pixel_center(x, y);
                if inside(center) {
                    self.blend(x, y, paint.color_at(center));
                    filled += 1;
                }
            }
        }
        filled
    }
}

impl Surface for Raster {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        let pixels = |logical: f32| {
            if logical.is_finite() && logical > 0.0 {
                (logical / self.scale).round() as usize
            } else {
                0
            }
        };
        self.viewport = viewport;
        self.width = pixels(viewport.width);
        self.height = pixels(viewport.height);
        self.pixels = vec![Pixel::default(); self.width * self.height];
    }

    fn clear(&mut self) {
        self.pixels.fill(Pixel::default());
    }

    fn stroke_line(&mut self, from: Point, to: Point, _width: f32, color: Rgba) {
        let (x0, y0) = self.to_pixel_space(from);
        let (x1, y1) = self.to_pixel_space(to);
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0);
        if !steps.is_finite() {
            return;
        }
        let mut last = None;
        for i in 0..=(steps as usize) {
            let t = i as f32 / steps;
            let here = self.pixel_at(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t);
            if let Some((x, y)) = here
                && here != last
            {
                self.blend(x, y, color);
                last = here;
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        let min = Point::new(center.x - radius, center.y - radius);
        let max = Point::new(center.x + radius, center.y + radius);
        let filled = self.fill_region(min, max, paint, |p| {
            (p.x - center.x).hypot(p.y - center.y) <= radius
        });
        if filled == 0 {
            let (px, py) = self.to_pixel_space(center);
            if let Some((x, y)) = self.pixel_at(px, py) {
                self.blend(x, y, paint.color_at(center));
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Point], paint: &Paint) {
        if points.len() < 3 {
            return;
        }
        let (mut min, mut max) = (points[0], points[0]);
        for p in points {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        self.fill_region(min, max, paint, |p| contains(points, p));
    }

    fn fill_rect(&mut self, origin: Point, size: Viewport, paint: &Paint) {
        let max = Point::new(origin.x + size.width, origin.y + size.height);
        self.fill_region(origin, max, paint, |p| {
            p.x >= origin.x && p.x <= max.x && p.y >= origin.y && p.y <= max.y
        });
    }
}

/// Even-odd point-in-polygon test.
fn contains(points: &[Point], p: Point) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for (i, a) in points.iter().enumerate() {
        let b = points[j];
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}
