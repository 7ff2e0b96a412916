use std::f32::consts::{PI, TAU};

use rand::Rng;

use crate::{
    domain::weather::ParticleKind,
    engine::particle::{Behavior, FrameContext, oscillate, uniform},
    surface::{Paint, Point, Rgba, Surface, Viewport},
};

const RAY_CORE: Rgba = Rgba::new(255, 220, 100, 1.0);
const RAY_EDGE: Rgba = Rgba::new(255, 200, 50, 0.0);
const FAN_SPREAD: f32 = PI * 0.4;
const FAN_START: f32 = -0.2;
const WOBBLE: f32 = 0.05;
/// Origin sits above the top edge at this fraction of the width.
const ORIGIN_X: f32 = 0.7;
const ORIGIN_Y: f32 = -50.0;
/// Beam length and gradient axis length, as multiples of the surface height.
const BEAM_REACH: f32 = 2.0;
const GLOW_REACH: f32 = 1.5;
const WIDTH_TO_RADIANS: f32 = 1.0 / 10_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    pub angle: f32,
    pub speed: f32,
    pub offset: f32,
    pub opacity: f32,
    pub width: f32,
}

impl Ray {
    /// Beam angle at `frame`, wobbling within `angle ± 0.05`.
    #[must_use]
    pub fn angle_at(&self, frame: u64) -> f32 {
        self.angle + WOBBLE * oscillate(frame, self.speed, self.offset)
    }

    #[must_use]
    pub fn origin(viewport: Viewport) -> Point {
        Point::new(viewport.width * ORIGIN_X, ORIGIN_Y)
    }
}

impl Behavior for Ray {
    const KIND: ParticleKind = ParticleKind::Ray;

    fn spawn<R: Rng + ?Sized>(rng: &mut R, _: Viewport, index: usize, count: usize) -> Self {
        let share = if count == 0 {
            0.0
        } else {
            index as f32 / count as f32
        };
        Self {
            angle: share * FAN_SPREAD + FAN_START,
            opacity: uniform(rng, 0.01, 0.05),
            width: uniform(rng, 60.0, 180.0),
            speed: uniform(rng, 0.0001, 0.0004),
            offset: uniform(rng, 0.0, TAU),
        }
    }

    fn step<R: Rng + ?Sized>(&mut self, _: Viewport, _: &mut R) {}

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, ctx: FrameContext) {
        let origin = Self::origin(ctx.viewport);
        let angle = self.angle_at(ctx.frame);
        let half = self.width * WIDTH_TO_RADIANS;
        let reach = ctx.viewport.height * BEAM_REACH;
        let beam = [
            origin,
            origin.offset(angle - half, reach),
            origin.offset(angle + half, reach),
        ];
        let glow = Paint::Linear {
            from: origin,
            to: origin.offset(angle, ctx.viewport.height * GLOW_REACH),
            start: RAY_CORE.with_alpha(self.opacity),
            end: RAY_EDGE,
        };
        surface.fill_polygon(&beam, &glow);
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::test_support::{DrawCall, RecordingSurface};

    #[test]
    fn fan_angles_are_evenly_spaced_by_index() {
        let mut rng = StdRng::seed_from_u64(9);
        let viewport = Viewport::new(100.0, 100.0);
        let angles: Vec<f32> = (0..6)
            .map(|i| Ray::spawn(&mut rng, viewport, i, 6).angle)
            .collect();
        assert!((angles[0] - FAN_START).abs() < f32::EPSILON);
        let step = FAN_SPREAD / 6.0;
        for pair in angles.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-5);
        }
    }

    #[test]
    fn wobble_stays_within_bounds() {
        let ray = Ray {
            angle: 0.3,
            speed: 0.0004,
            offset: 1.0,
            opacity: 0.03,
            width: 100.0,
        };
        for frame in (0..100_000).step_by(97) {
            let angle = ray.angle_at(frame);
            assert!((angle - 0.3).abs() <= WOBBLE + 1e-6);
        }
    }

    #[test]
    fn draws_a_gradient_triangle_from_above_the_surface() {
        let viewport = Viewport::new(1000.0, 500.0);
        let mut surface = RecordingSurface::new(viewport);
        let ray = Ray {
            angle: 0.5,
            speed: 0.0002,
            offset: 0.0,
            opacity: 0.04,
            width: 100.0,
        };
        ray.draw(&mut surface, FrameContext { frame: 0, viewport });

        let [DrawCall::Polygon { points, paint }] = surface.calls.as_slice() else {
            panic!("expected one polygon, got {:?}", surface.calls);
        };
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point::new(700.0, -50.0));
        let Paint::Linear { start, end, .. } = paint else {
            panic!("expected linear paint");
        };
        assert!((start.a - 0.04).abs() < f32::EPSILON);
        assert!(end.a.abs() < f32::EPSILON);
    }
}
