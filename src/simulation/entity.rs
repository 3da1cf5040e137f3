//! A single moving piece in the arena.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::kind::Kind;
use super::locatable::Locatable;
use super::params::Params;

/// A moving rock, paper or scissors piece.
///
/// `pos` is the top-left corner of the entity's square bounding box; the box
/// edge length comes from [`Params::entity_size`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier, never reused within one arena.
    pub id: u64,
    /// Which team the entity belongs to.
    pub kind: Kind,
    /// Top-left corner of the bounding box.
    pub pos: Array1<f32>,
    /// Displacement per unit of time.
    pub vel: Array1<f32>,
}

impl Entity {
    /// Creates an entity with an explicit position and velocity.
    pub fn new(id: u64, kind: Kind, pos: [f32; 2], vel: [f32; 2]) -> Self {
        Self {
            id,
            kind,
            pos: Array1::from_vec(pos.to_vec()),
            vel: Array1::from_vec(vel.to_vec()),
        }
    }

    /// Creates an entity at a random position fully inside the arena.
    pub fn new_random<R: Rng + ?Sized>(id: u64, kind: Kind, params: &Params, rng: &mut R) -> Self {
        let max_x = params.arena_width - params.entity_size;
        let max_y = params.arena_height - params.entity_size;
        let pos = Array1::from_vec(vec![
            rng.random_range(0.0..=max_x),
            rng.random_range(0.0..=max_y),
        ]);
        Self::spawn_at(id, kind, pos, params.max_speed, rng)
    }

    /// Creates an entity at `pos` with a freshly drawn velocity.
    pub fn spawn_at<R: Rng + ?Sized>(
        id: u64,
        kind: Kind,
        pos: Array1<f32>,
        max_speed: f32,
        rng: &mut R,
    ) -> Self {
        Self {
            id,
            kind,
            pos,
            vel: random_velocity(max_speed, rng),
        }
    }
}

impl Locatable for Entity {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }

    fn update(&mut self, dt: f32) {
        self.pos.scaled_add(dt, &self.vel);
    }
}

/// Draws a velocity uniformly from `[-max_speed, max_speed]` on each axis.
pub fn random_velocity<R: Rng + ?Sized>(max_speed: f32, rng: &mut R) -> Array1<f32> {
    Array1::from_vec(vec![
        rng.random_range(-max_speed..=max_speed),
        rng.random_range(-max_speed..=max_speed),
    ])
}
