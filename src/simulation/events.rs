//! Events produced by the simulation for the presentation layer.
//!
//! The core never renders or plays audio; it reports what happened and leaves
//! the reaction (a sound cue, a flash, a log line) to whoever drives the arena.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::Kind;

/// One prey entity replaced by a fresh entity of the winning kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionEvent {
    /// Id of the newly spawned entity.
    pub id: u64,
    /// Top-left corner shared by the removed and the spawned entity.
    pub position: [f32; 2],
    /// Kind of the spawned entity (the winner of the contact).
    pub new_kind: Kind,
    /// Kind of the removed entity.
    pub defeated: Kind,
}

impl ConversionEvent {
    /// Sound cue associated with the winning kind.
    pub fn sound_cue(&self) -> &'static str {
        self.new_kind.sound_cue()
    }
}

/// Everything the arena records in its event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimulationEvent {
    /// An entity changed sides.
    Converted(ConversionEvent),
    /// A single kind holds the whole population.
    Won {
        /// The surviving kind.
        winner: Kind,
        /// Ticks played until the win.
        ticks: u64,
    },
    /// The tick cap was reached before any kind won.
    TickLimitReached {
        /// Ticks played.
        ticks: u64,
    },
}

impl fmt::Display for SimulationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationEvent::Converted(event) => write!(
                f,
                "{} became {} at ({:.1}, {:.1})",
                event.defeated, event.new_kind, event.position[0], event.position[1]
            ),
            SimulationEvent::Won { winner, ticks } => {
                write!(f, "{} won after {} ticks", winner.team_name(), ticks)
            }
            SimulationEvent::TickLimitReached { ticks } => {
                write!(f, "stopped after {} ticks without a winner", ticks)
            }
        }
    }
}
