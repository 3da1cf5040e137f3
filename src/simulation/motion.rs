//! Per-tick motion: velocity integration, edge bounce and clamping.

use rand::Rng;

use super::entity::Entity;
use super::geometric_utils::clamp_box_mut;
use super::locatable::Locatable;
use super::params::Params;
use super::population::Population;

/// Moves one entity by `vel * dt` and keeps it inside the arena.
///
/// When the bounding box crosses a vertical edge the horizontal velocity is
/// reversed and rescaled by a factor drawn from `[bounce_min, bounce_max]`;
/// horizontal edges do the same for the vertical velocity. The box is then
/// clamped back inside the arena.
pub fn advance<R: Rng + ?Sized>(entity: &mut Entity, dt: f32, params: &Params, rng: &mut R) {
    entity.update(dt);

    let size = params.entity_size;
    let bounds = [params.arena_width, params.arena_height];

    for axis in 0..2 {
        let low = entity.pos[axis];
        if low < 0.0 || low + size > bounds[axis] {
            let factor = rng.random_range(params.bounce_min..=params.bounce_max);
            // Repeated large factors must not push a component to infinity.
            entity.vel[axis] = (-entity.vel[axis] * factor).clamp(-f32::MAX, f32::MAX);
        }
    }

    clamp_box_mut(entity.pos_mut(), size, params.arena_width, params.arena_height);
}

/// Advances every entity of the population.
pub fn advance_all<R: Rng + ?Sized>(
    population: &mut Population,
    dt: f32,
    params: &Params,
    rng: &mut R,
) {
    for entity in population.iter_mut() {
        advance(entity, dt, params, rng);
    }
}
