use rand::Rng;

use crate::{engine::particle::Particle, surface::Viewport};

/// Advances every particle by one frame in place.
///
/// Population size never changes here: particles leaving the bounds respawn.
pub fn step_population<R: Rng + ?Sized>(
    population: &mut [Particle],
    viewport: Viewport,
    rng: &mut R,
) {
    for particle in population {
        particle.step(viewport, rng);
    }
}
