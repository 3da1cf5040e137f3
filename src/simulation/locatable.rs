//! Trait for entities that have a position and move over time.

use ndarray::Array1;

/// Trait for entities with a position that can be updated over time.
///
/// Any type that implements this trait:
/// - Has a position in 2D space
/// - Can integrate its own velocity over a time delta
pub trait Locatable {
    /// Returns a reference to the entity's position.
    fn pos(&self) -> &Array1<f32>;

    /// Returns a mutable reference to the entity's position.
    fn pos_mut(&mut self) -> &mut Array1<f32>;

    /// Moves the entity along its velocity.
    ///
    /// # Arguments
    ///
    /// * `dt` - Time delta since the last update.
    fn update(&mut self, dt: f32);
}
