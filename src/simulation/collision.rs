//! Contact resolution between kinds.
//!
//! Pairs are scanned in [`PREDATION_ORDER`]. For each pair, every prey entity
//! whose box overlaps at least one predator is replaced by a new predator at
//! the same position. Predators are left untouched. Later pairs see the result
//! of earlier ones, so a rock created while resolving rock/scissors can be
//! converted to paper by the paper/rock scan of the same tick.

use rand::Rng;
use tracing::{debug, warn};

use super::events::ConversionEvent;
use super::kind::{Kind, PREDATION_ORDER};
use super::params::Params;
use super::population::Population;
use super::spatial::SpatialIndex;

/// Resolves all contacts in the population and returns one event per conversion.
///
/// Events are ordered by pair scan, then by prey position in its group.
pub fn resolve<R: Rng + ?Sized>(
    population: &mut Population,
    params: &Params,
    rng: &mut R,
) -> Vec<ConversionEvent> {
    let mut events = Vec::new();
    for (predator, prey) in PREDATION_ORDER {
        resolve_pair(population, predator, prey, params, rng, &mut events);
    }
    events
}

/// Indices into `population.of_kind(prey)` of prey touching any predator.
pub fn find_contacts(
    population: &Population,
    predator: Kind,
    prey: Kind,
    entity_size: f32,
) -> Vec<usize> {
    let predators = population.of_kind(predator);
    let preys = population.of_kind(prey);
    if predators.is_empty() || preys.is_empty() {
        return Vec::new();
    }

    let index = match SpatialIndex::build(predators) {
        Ok(index) => index,
        Err(e) => {
            // Only non-finite coordinates fail, and those overlap nothing.
            warn!(%predator, error = ?e, "skipping contact scan, spatial index unavailable");
            return Vec::new();
        }
    };

    preys
        .iter()
        .enumerate()
        .filter(|(_, target)| index.overlaps_any(predators, &target.pos, entity_size))
        .map(|(i, _)| i)
        .collect()
}

fn resolve_pair<R: Rng + ?Sized>(
    population: &mut Population,
    predator: Kind,
    prey: Kind,
    params: &Params,
    rng: &mut R,
    events: &mut Vec<ConversionEvent>,
) {
    let contacts = find_contacts(population, predator, prey, params.entity_size);
    if contacts.is_empty() {
        return;
    }

    let converted = population.convert(prey, &contacts, predator, params.max_speed, rng);
    for (id, pos) in converted {
        debug!(%predator, %prey, id, x = pos[0], y = pos[1], "converted");
        events.push(ConversionEvent {
            id,
            position: [pos[0], pos[1]],
            new_kind: predator,
            defeated: prey,
        });
    }
}
