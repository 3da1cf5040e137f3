//! # RPS Arena - Rock, Paper, Scissors Ecosystem
//!
//! A headless simulation of three kinds of pieces drifting around a bounded
//! arena. Pieces bounce off the edges and convert each other on contact:
//! rock beats scissors, scissors beats paper, paper beats rock. A run ends
//! when one kind holds the whole population.
//!
//! ## Features
//!
//! - Seeded, fully deterministic runs (ChaCha8 random number generator)
//! - Randomised edge bounces to avoid periodic trajectories
//! - KD-tree broadphase for contact detection
//! - Conversion events for an external sound or rendering layer
//! - Save/load of parameters and complete arena state
//! - Parallel batches of independent runs for win statistics
//!
//! ## Core Modules
//!
//! - [`simulation::arena`] - Simulation driver and termination
//! - [`simulation::motion`] - Movement and edge bounce
//! - [`simulation::collision`] - Contact resolution between kinds
//! - [`simulation::population`] - Entity storage partitioned by kind
//! - [`simulation::params`] - Configuration and validation

/// Core simulation logic and data structures.
pub mod simulation {
    /// Simulation driver: ticking, termination and snapshots.
    pub mod arena;
    /// Parallel batches of independent runs.
    pub mod batch;
    /// Contact detection and conversion.
    pub mod collision;
    /// A single moving piece.
    pub mod entity;
    /// Configuration and persistence errors.
    pub mod error;
    /// Bounded log of recent events.
    pub mod event_log;
    /// Events reported to the presentation layer.
    pub mod events;
    /// Box overlap and clamping helpers.
    pub mod geometric_utils;
    /// The three kinds and who beats whom.
    pub mod kind;
    /// Trait for locatable entities that can be updated.
    ///
    /// The [`locatable::Locatable`] trait is implemented by
    /// [`entity::Entity`] and drives its velocity integration.
    pub mod locatable;
    /// Per-tick movement with edge bounce.
    pub mod motion;
    /// Simulation parameters.
    pub mod params;
    /// Entity collection partitioned by kind.
    pub mod population;
    /// KD-tree index for the contact broadphase.
    pub mod spatial;
}
