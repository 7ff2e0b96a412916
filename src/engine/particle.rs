use rand::Rng;

use crate::{
    domain::weather::ParticleKind,
    engine::kinds::{CloudBlob, Ray, Raindrop, Snowflake, Star},
    surface::{Surface, Viewport},
};

/// Per-frame inputs shared by every particle draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub frame: u64,
    pub viewport: Viewport,
}

/// Spawn, motion and draw rules for one particle kind.
pub trait Behavior: Sized {
    const KIND: ParticleKind;

    /// `index`/`count` place the particle within its population (used by fanned kinds).
    fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: Viewport,
        index: usize,
        count: usize,
    ) -> Self;

    /// Advance one frame in place, respawning instead of leaving the bounds for good.
    fn step<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R);

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, ctx: FrameContext);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Particle {
    Ray(Ray),
    CloudBlob(CloudBlob),
    Rain(Raindrop),
    Snow(Snowflake),
    Star(Star),
}

macro_rules! each_kind {
    ($value:expr, $p:ident => $body:expr) => {
        match $value {
            Particle::Ray($p) => $body,
            Particle::CloudBlob($p) => $body,
            Particle::Rain($p) => $body,
            Particle::Snow($p) => $body,
            Particle::Star($p) => $body,
        }
    };
}

impl Particle {
    pub(crate) fn spawn<R: Rng + ?Sized>(
        kind: ParticleKind,
        rng: &mut R,
        viewport: Viewport,
        index: usize,
        count: usize,
    ) -> Self {
        match kind {
            ParticleKind::Ray => Self::Ray(Ray::spawn(rng, viewport, index, count)),
            ParticleKind::CloudBlob => {
                Self::CloudBlob(CloudBlob::spawn(rng, viewport, index, count))
            }
            ParticleKind::Rain => Self::Rain(Raindrop::spawn(rng, viewport, index, count)),
            ParticleKind::Snow => Self::Snow(Snowflake::spawn(rng, viewport, index, count)),
            ParticleKind::Star => Self::Star(Star::spawn(rng, viewport, index, count)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ParticleKind {
        fn kind_of<B: Behavior>(_: &B) -> ParticleKind {
            B::KIND
        }
        each_kind!(self, p => kind_of(p))
    }

    pub(crate) fn step<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        each_kind!(self, p => p.step(viewport, rng));
    }

    pub(crate) fn draw<S: Surface + ?Sized>(&self, surface: &mut S, ctx: FrameContext) {
        each_kind!(self, p => p.draw(surface, ctx));
    }
}

/// Uniform sample from `[low, high)`; collapses to `low` for an empty range.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.random_range(low..high)
    } else {
        low
    }
}

/// Sine of `frame * rate + offset`, evaluated in f64 so long runs keep their phase.
pub(crate) fn oscillate(frame: u64, rate: f32, offset: f32) -> f32 {
    (frame as f64 * f64::from(rate) + f64::from(offset)).sin() as f32
}
