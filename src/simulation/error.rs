//! Error types for configuration and persistence.
//!
//! The simulation itself never fails once an arena exists; only parameter
//! validation and file I/O report errors.

use thiserror::Error;

use super::kind::Kind;

/// A rejected simulation parameter.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The entity count text was not an integer.
    #[error("entity count {input:?} is not an integer")]
    InvalidCount {
        /// Text as supplied by the user.
        input: String,
    },
    /// Each kind needs at least one entity.
    #[error("entity count must be positive, got {0}")]
    NonPositiveCount(i64),
    /// Arena width or height is not a positive finite number.
    #[error("arena dimensions must be positive and finite, got {width}x{height}")]
    InvalidArena {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
    /// Entity box edge is not a positive finite number.
    #[error("entity size must be positive and finite, got {0}")]
    InvalidEntitySize(f32),
    /// A single entity box does not fit in the arena.
    #[error("entity size {size} does not fit in a {width}x{height} arena")]
    EntityTooLarge {
        /// Entity box edge.
        size: f32,
        /// Arena width.
        width: f32,
        /// Arena height.
        height: f32,
    },
    /// Speed bound is not positive, or its range `[-max, max]` is not finite.
    #[error("max speed must be positive and at most {limit}, got {value}")]
    InvalidSpeed {
        /// Requested speed bound.
        value: f32,
        /// Largest accepted bound.
        limit: f32,
    },
    /// Bounce rescale range is empty, inverted or non-positive.
    #[error("bounce range [{min}, {max}] must satisfy 0 < min <= max")]
    InvalidBounceRange {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },
    /// Tick step is not a positive finite number.
    #[error("tick step must be positive and finite, got {0}")]
    InvalidStep(f32),
    /// Event log capacity is beyond the supported maximum.
    #[error("event log size must be at most {limit}, got {value}")]
    InvalidLogSize {
        /// Requested capacity.
        value: usize,
        /// Largest accepted capacity.
        limit: usize,
    },
}

/// Failure to save or restore state on disk.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading or writing the file failed.
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The file did not contain valid JSON for the expected type.
    #[error("snapshot is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    /// The stored parameters failed validation.
    #[error("snapshot holds invalid parameters: {0}")]
    Config(#[from] ConfigError),
    /// An entity is stored in the group of another kind.
    #[error("entity {id} of kind {kind} is stored with the {group} group")]
    MisfiledEntity {
        /// Entity id.
        id: u64,
        /// Kind recorded on the entity.
        kind: Kind,
        /// Group it was found in.
        group: Kind,
    },
    /// An entity box lies partly or fully outside the arena.
    #[error("entity {id} at ({x}, {y}) is outside the arena")]
    OutOfBounds {
        /// Entity id.
        id: u64,
        /// Stored x coordinate.
        x: f32,
        /// Stored y coordinate.
        y: f32,
    },
    /// An entity id is repeated or not below the next id to hand out.
    #[error("entity id {id} collides with id allocation (next id {next_id})")]
    IdCollision {
        /// Offending id.
        id: u64,
        /// Stored next id.
        next_id: u64,
    },
    /// The stored phase disagrees with the stored population.
    #[error("stored phase does not match the population")]
    PhaseMismatch,
}
