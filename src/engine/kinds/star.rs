use std::f32::consts::TAU;

use rand::Rng;

use crate::{
    domain::weather::ParticleKind,
    engine::particle::{Behavior, FrameContext, oscillate, uniform},
    surface::{Paint, Point, Rgba, Surface, Viewport},
};

const STAR_COLOR: Rgba = Rgba::new(210, 225, 255, 1.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub opacity: f32,
    pub twinkle_speed: f32,
    pub twinkle_offset: f32,
}

impl Star {
    /// Opacity at `frame`, oscillating within `[0.2, 1.0] * opacity`.
    #[must_use]
    pub fn twinkle_opacity(&self, frame: u64) -> f32 {
        let twinkle = oscillate(frame, self.twinkle_speed, self.twinkle_offset);
        self.opacity * (0.6 + 0.4 * twinkle)
    }
}

impl Behavior for Star {
    const KIND: ParticleKind = ParticleKind::Star;

    fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, _: usize, _: usize) -> Self {
        Self {
            x: uniform(rng, 0.0, viewport.width),
            y: uniform(rng, 0.0, viewport.height),
            r: uniform(rng, 0.2, 1.4),
            opacity: uniform(rng, 0.1, 0.9),
            twinkle_speed: uniform(rng, 0.005, 0.025),
            twinkle_offset: uniform(rng, 0.0, TAU),
        }
    }

    fn step<R: Rng + ?Sized>(&mut self, _: Viewport, _: &mut R) {}

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, ctx: FrameContext) {
        surface.fill_circle(
            Point::new(self.x, self.y),
            self.r,
            &Paint::Solid(STAR_COLOR.with_alpha(self.twinkle_opacity(ctx.frame))),
        );
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn stepping_never_moves_a_star() {
        let mut rng = StdRng::seed_from_u64(5);
        let viewport = Viewport::new(300.0, 300.0);
        let mut star = Star::spawn(&mut rng, viewport, 0, 1);
        let before = star.clone();
        for _ in 0..100 {
            star.step(viewport, &mut rng);
        }
        assert_eq!(star, before);
    }

    #[test]
    fn twinkle_peaks_at_base_opacity() {
        let star = Star {
            x: 0.0,
            y: 0.0,
            r: 1.0,
            opacity: 0.5,
            twinkle_speed: 0.01,
            twinkle_offset: std::f32::consts::FRAC_PI_2,
        };
        assert!((star.twinkle_opacity(0) - 0.5).abs() < 1e-5);
        for frame in 0..2_000 {
            let op = star.twinkle_opacity(frame);
            assert!(op >= 0.1 - 1e-5 && op <= 0.5 + 1e-5, "frame {frame}: {op}");
        }
    }
}
