use rand::Rng;

use crate::{domain::config::WeatherTypeConfig, engine::particle::Particle, surface::Viewport};

/// Builds a fresh population of `config.particle_count` particles of `config.particle_kind`.
///
/// An empty or non-finite viewport yields an empty population.
pub fn build_population<R: Rng + ?Sized>(
    config: &WeatherTypeConfig,
    viewport: Viewport,
    rng: &mut R,
) -> Vec<Particle> {
    if !viewport.is_drawable() {
        return Vec::new();
    }
    let count = config.particle_count;
    (0..count)
        .map(|index| Particle::spawn(config.particle_kind, rng, viewport, index, count))
        .collect()
}
