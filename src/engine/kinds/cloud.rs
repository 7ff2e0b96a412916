use rand::Rng;

use crate::{
    domain::weather::ParticleKind,
    engine::particle::{Behavior, FrameContext, uniform},
    surface::{Paint, Point, Rgba, Surface, Viewport},
};

const CLOUD_COLOR: Rgba = Rgba::new(180, 200, 220, 1.0);
/// Blobs spawn in the upper part of the sky only.
const SKY_BAND: f32 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct CloudBlob {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub speed: f32,
    pub opacity: f32,
}

impl Behavior for CloudBlob {
    const KIND: ParticleKind = ParticleKind::CloudBlob;

    fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, _: usize, _: usize) -> Self {
        Self {
            x: uniform(rng, 0.0, viewport.width),
            y: uniform(rng, 0.0, viewport.height * SKY_BAND),
            r: uniform(rng, 30.0, 90.0),
            opacity: uniform(rng, 0.01, 0.05),
            speed: uniform(rng, 0.05, 0.20),
        }
    }

    fn step<R: Rng + ?Sized>(&mut self, viewport: Viewport, _: &mut R) {
        if self.x - self.r > viewport.width {
            self.x = -self.r;
            return;
        }
        self.x += self.speed;
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, _: FrameContext) {
        let center = Point::new(self.x, self.y);
        surface.fill_circle(
            center,
            self.r,
            &Paint::Radial {
                center,
                radius: self.r,
                inner: CLOUD_COLOR.with_alpha(self.opacity),
                outer: CLOUD_COLOR.with_alpha(0.0),
            },
        );
    }
}
