//! The set of entities living in an arena, partitioned by kind.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use std::collections::HashSet;

use super::entity::Entity;
use super::error::SnapshotError;
use super::kind::Kind;
use super::params::Params;

/// All entities of an arena, kept in one group per kind.
///
/// Order inside a group carries no meaning. Every entity sits in the group
/// matching its `kind`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Population {
    groups: [Vec<Entity>; 3],
    next_id: u64,
}

impl Population {
    /// Creates `params.num_per_kind` entities of every kind at random positions.
    pub fn new<R: Rng + ?Sized>(params: &Params, rng: &mut R) -> Self {
        let mut population = Self {
            groups: std::array::from_fn(|_| Vec::with_capacity(params.initial_population())),
            next_id: 0,
        };

        for _ in 0..params.num_per_kind {
            for kind in Kind::ALL {
                let id = population.allocate_id();
                population.insert(Entity::new_random(id, kind, params, rng));
            }
        }

        population
    }

    /// Builds a population from explicitly placed entities.
    ///
    /// Fresh ids continue after the largest id given.
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut population = Self::default();
        for entity in entities {
            population.next_id = population.next_id.max(entity.id + 1);
            population.insert(entity);
        }
        population
    }

    /// Entities of one kind.
    pub fn of_kind(&self, kind: Kind) -> &[Entity] {
        &self.groups[kind.index()]
    }

    /// Iterates over every entity, rocks first, then papers, then scissors.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.groups.iter().flatten()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.groups.iter_mut().flatten()
    }

    /// Number of entities of one kind.
    pub fn count(&self, kind: Kind) -> usize {
        self.groups[kind.index()].len()
    }

    /// Per-kind counts indexed by [`Kind::index`].
    pub fn counts(&self) -> [usize; 3] {
        [
            self.groups[0].len(),
            self.groups[1].len(),
            self.groups[2].len(),
        ]
    }

    /// Total number of entities.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Returns `true` if there are no entities at all.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// The kind every entity shares, if the population is non-empty and uniform.
    pub fn monochrome_kind(&self) -> Option<Kind> {
        let total = self.len();
        if total == 0 {
            return None;
        }
        Kind::ALL.into_iter().find(|kind| self.count(*kind) == total)
    }

    /// Looks up an entity by id.
    pub fn get(&self, id: u64) -> Option<&Entity> {
        self.iter().find(|entity| entity.id == id)
    }

    /// Replaces the given entities of kind `prey` with fresh `predator`
    /// entities at the same positions.
    ///
    /// `prey_indices` index into [`Population::of_kind`]`(prey)` and must be
    /// distinct and ascending. New entities are created in that order and
    /// draw new velocities. Returns the converted positions in the same order.
    pub(crate) fn convert(
        &mut self,
        prey: Kind,
        prey_indices: &[usize],
        predator: Kind,
        max_speed: f32,
        rng: &mut (impl Rng + ?Sized),
    ) -> Vec<(u64, Array1<f32>)> {
        let positions: Vec<Array1<f32>> = prey_indices
            .iter()
            .map(|&idx| self.groups[prey.index()][idx].pos.clone())
            .collect();

        // Descending swap_remove keeps the remaining lower indices valid.
        for &idx in prey_indices.iter().rev() {
            self.groups[prey.index()].swap_remove(idx);
        }

        positions
            .into_iter()
            .map(|pos| {
                let id = self.allocate_id();
                let entity = Entity::spawn_at(id, predator, pos.clone(), max_speed, rng);
                self.insert(entity);
                (id, pos)
            })
            .collect()
    }

    /// Checks the invariants a deserialized population must uphold.
    ///
    /// Every entity sits in its own kind's group, lies inside the arena, and
    /// carries a unique id below the next id to be handed out.
    pub(crate) fn verify(&self, params: &Params) -> Result<(), SnapshotError> {
        let max_x = params.arena_width - params.entity_size;
        let max_y = params.arena_height - params.entity_size;
        let mut seen = HashSet::with_capacity(self.len());

        for group in Kind::ALL {
            for entity in self.of_kind(group) {
                if entity.kind != group {
                    return Err(SnapshotError::MisfiledEntity {
                        id: entity.id,
                        kind: entity.kind,
                        group,
                    });
                }

                let inside = entity.pos.len() == 2
                    && entity.vel.len() == 2
                    && entity.vel.iter().all(|v| v.is_finite())
                    && (0.0..=max_x).contains(&entity.pos[0])
                    && (0.0..=max_y).contains(&entity.pos[1]);
                if !inside {
                    return Err(SnapshotError::OutOfBounds {
                        id: entity.id,
                        x: entity.pos.get(0).copied().unwrap_or(f32::NAN),
                        y: entity.pos.get(1).copied().unwrap_or(f32::NAN),
                    });
                }

                if entity.id >= self.next_id || !seen.insert(entity.id) {
                    return Err(SnapshotError::IdCollision {
                        id: entity.id,
                        next_id: self.next_id,
                    });
                }
            }
        }

        Ok(())
    }

    fn insert(&mut self, entity: Entity) {
        self.groups[entity.kind.index()].push(entity);
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
