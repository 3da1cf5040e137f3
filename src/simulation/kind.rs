//! The three entity kinds and the domination rule between them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an entity.
///
/// Every kind beats exactly one other kind and loses to the remaining one:
/// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

/// Order in which predator/prey pairs are resolved within one tick.
///
/// Each pair sees the population as mutated by the pairs before it.
pub const PREDATION_ORDER: [(Kind, Kind); 3] = [
    (Kind::Rock, Kind::Scissors),
    (Kind::Scissors, Kind::Paper),
    (Kind::Paper, Kind::Rock),
];

impl Kind {
    /// All kinds, in index order.
    pub const ALL: [Kind; 3] = [Kind::Rock, Kind::Paper, Kind::Scissors];

    /// The kind this one converts on contact.
    pub fn prey(self) -> Kind {
        match self {
            Kind::Rock => Kind::Scissors,
            Kind::Scissors => Kind::Paper,
            Kind::Paper => Kind::Rock,
        }
    }

    /// The kind that converts this one on contact.
    pub fn predator(self) -> Kind {
        match self {
            Kind::Rock => Kind::Paper,
            Kind::Paper => Kind::Scissors,
            Kind::Scissors => Kind::Rock,
        }
    }

    /// Returns `true` if `self` converts `other` on contact.
    pub fn beats(self, other: Kind) -> bool {
        self.prey() == other
    }

    /// Stable index into per-kind arrays.
    pub fn index(self) -> usize {
        match self {
            Kind::Rock => 0,
            Kind::Paper => 1,
            Kind::Scissors => 2,
        }
    }

    /// Team label used in the game-over report.
    pub fn team_name(self) -> &'static str {
        match self {
            Kind::Rock => "rocks",
            Kind::Paper => "papers",
            Kind::Scissors => "scissors",
        }
    }

    /// Name of the sound cue a presentation layer plays when this kind wins a contact.
    pub fn sound_cue(self) -> &'static str {
        match self {
            Kind::Rock => "sound_rock",
            Kind::Paper => "sound_paper",
            Kind::Scissors => "sound_scissors",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Rock => "rock",
            Kind::Paper => "paper",
            Kind::Scissors => "scissors",
        };
        f.write_str(name)
    }
}
