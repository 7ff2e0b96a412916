use rand::Rng;

use crate::{
    domain::weather::ParticleKind,
    engine::particle::{Behavior, FrameContext, uniform},
    surface::{Paint, Point, Rgba, Surface, Viewport},
};

const SNOW_COLOR: Rgba = Rgba::new(220, 235, 255, 1.0);
const RESPAWN_Y: f32 = -5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub speed: f32,
    pub drift: f32,
    pub opacity: f32,
}

impl Behavior for Snowflake {
    const KIND: ParticleKind = ParticleKind::Snow;

    fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, _: usize, _: usize) -> Self {
        Self {
            x: uniform(rng, 0.0, viewport.width),
            y: uniform(rng, 0.0, viewport.height),
            r: uniform(rng, 0.5, 3.0),
            speed: uniform(rng, 0.2, 1.0),
            drift: uniform(rng, -0.15, 0.15),
            opacity: uniform(rng, 0.2, 0.8),
        }
    }

    fn step<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        if self.y > viewport.height {
            self.y = RESPAWN_Y;
            self.x = uniform(rng, 0.0, viewport.width);
            return;
        }
        self.y += self.speed;
        self.x += self.drift;
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, _: FrameContext) {
        surface.fill_circle(
            Point::new(self.x, self.y),
            self.r,
            &Paint::Solid(SNOW_COLOR.with_alpha(self.opacity)),
        );
    }
}
