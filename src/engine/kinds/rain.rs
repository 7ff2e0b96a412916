use rand::Rng;

use crate::{
    domain::weather::ParticleKind,
    engine::particle::{Behavior, FrameContext, uniform},
    surface::{Point, Rgba, Surface, Viewport},
};

const RAIN_COLOR: Rgba = Rgba::new(174, 214, 241, 1.0);
/// Constant leftward wind applied to every drop.
pub const RAIN_DRIFT: f32 = -1.5;
/// Horizontal lean of the streak between its head and tail.
const STREAK_SLANT: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Raindrop {
    pub x: f32,
    pub y: f32,
    pub len: f32,
    pub speed: f32,
    pub drift: f32,
    pub opacity: f32,
    pub width: f32,
}

impl Behavior for Raindrop {
    const KIND: ParticleKind = ParticleKind::Rain;

    fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, _: usize, _: usize) -> Self {
        Self {
            x: uniform(rng, 0.0, viewport.width),
            y: uniform(rng, 0.0, viewport.height),
            len: uniform(rng, 10.0, 28.0),
            speed: uniform(rng, 10.0, 18.0),
            drift: RAIN_DRIFT,
            opacity: uniform(rng, 0.1, 0.5),
            width: uniform(rng, 0.5, 1.5),
        }
    }

    fn step<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        if self.y > viewport.height {
            self.y = -self.len;
            self.x = uniform(rng, 0.0, viewport.width);
            return;
        }
        self.y += self.speed;
        self.x += self.drift;
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, _: FrameContext) {
        surface.stroke_line(
            Point::new(self.x, self.y),
            Point::new(self.x - STREAK_SLANT, self.y + self.len),
            self.width,
            RAIN_COLOR.with_alpha(self.opacity),
        );
    }
}
