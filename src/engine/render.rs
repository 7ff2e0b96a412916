use rand::Rng;

use crate::{
    domain::weather::WeatherType,
    engine::particle::{FrameContext, Particle},
    surface::{Paint, Point, Rgba, Surface, Viewport},
};

/// Chance per storm frame of a faint full-surface lightning flash.
pub const LIGHTNING_PROBABILITY: f64 = 0.002;
const LIGHTNING_COLOR: Rgba = Rgba::new(200, 220, 255, 0.03);

/// Draws one frame of the population and owns the frame counter.
#[derive(Debug, Clone, Default)]
pub struct FrameRenderer {
    frame: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Counter value the frame was drawn with.
    pub frame: u64,
    pub drawn: usize,
    pub lightning: bool,
}

impl FrameRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames drawn so far (wraps at `u64::MAX`).
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn draw<S, R>(
        &mut self,
        surface: &mut S,
        population: &[Particle],
        weather: WeatherType,
        viewport: Viewport,
        rng: &mut R,
    ) -> RenderedFrame
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let ctx = FrameContext {
            frame: self.frame,
            viewport,
        };

        surface.clear();
        for particle in population {
            particle.draw(surface, ctx);
        }

        let lightning = weather == WeatherType::Storm && rng.random_bool(LIGHTNING_PROBABILITY);
        if lightning {
            surface.fill_rect(Point::default(), viewport, &Paint::Solid(LIGHTNING_COLOR));
        }

        self.frame = self.frame.wrapping_add(1);
        RenderedFrame {
            frame: ctx.frame,
            drawn: population.len(),
            lightning,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        domain::config::config_for,
        engine::factory::build_population,
        test_support::{DrawCall, RecordingSurface},
    };

    fn render_once(weather: WeatherType, seed: u64) -> (RecordingSurface, RenderedFrame) {
        let viewport = Viewport::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(seed);
        let population = build_population(weather.config(), viewport, &mut rng);
        let mut surface = RecordingSurface::new(viewport);
        let mut renderer = FrameRenderer::new();
        let rendered = renderer.draw(&mut surface, &population, weather, viewport, &mut rng);
        (surface, rendered)
    }

    #[test]
    fn clears_before_drawing_each_particle() {
        let (surface, rendered) = render_once(WeatherType::Snow, 1);
        assert_eq!(surface.calls.first(), Some(&DrawCall::Clear));
        assert_eq!(rendered.drawn, 50);
        let circles = surface
            .calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Circle { .. }))
            .count();
        assert_eq!(circles, 50);
    }

    #[test]
    fn each_kind_uses_its_primitive() {
        let expectations: [(WeatherType, fn(&DrawCall) -> bool); 5] = [
            (WeatherType::Rain, |c| matches!(c, DrawCall::Line { .. })),
            (WeatherType::Snow, |c| {
                matches!(c, DrawCall::Circle { paint: Paint::Solid(_), .. })
            }),
            (WeatherType::Night, |c| {
                matches!(c, DrawCall::Circle { paint: Paint::Solid(_), .. })
            }),
            (WeatherType::Sunny, |c| {
                matches!(c, DrawCall::Polygon { paint: Paint::Linear { .. }, .. })
            }),
            (WeatherType::Cloudy, |c| {
                matches!(c, DrawCall::Circle { paint: Paint::Radial { .. }, .. })
            }),
        ];
        for (weather, expected) in expectations {
            let (surface, _) = render_once(weather, 2);
            let drawn = &surface.calls[1..];
            assert_eq!(drawn.len(), config_for(weather.label()).particle_count);
            assert!(drawn.iter().all(expected), "{weather}");
        }
    }

    #[test]
    fn frame_counter_advances_once_per_draw() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(0);
        let mut surface = RecordingSurface::new(viewport);
        let mut renderer = FrameRenderer::new();
        for expected in 0..5 {
            let rendered = renderer.draw(&mut surface, &[], WeatherType::Night, viewport, &mut rng);
            assert_eq!(rendered.frame, expected);
        }
        assert_eq!(renderer.frame(), 5);
    }

    #[test]
    fn lightning_only_flashes_during_storms() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(77);
        let mut renderer = FrameRenderer::new();

        let mut flashes = 0;
        for _ in 0..20_000 {
            let mut surface = RecordingSurface::new(viewport);
            let rendered = renderer.draw(&mut surface, &[], WeatherType::Storm, viewport, &mut rng);
            if rendered.lightning {
                flashes += 1;
                assert!(matches!(surface.calls.last(), Some(DrawCall::Rect { .. })));
            }
        }
        // Expected ~40 flashes; allow generous slack for the random source.
        assert!((5..=120).contains(&flashes), "{flashes} flashes");

        for _ in 0..20_000 {
            let mut surface = RecordingSurface::new(viewport);
            let rendered = renderer.draw(&mut surface, &[], WeatherType::Rain, viewport, &mut rng);
            assert!(!rendered.lightning);
        }
    }
}
