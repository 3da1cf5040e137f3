//! The simulation driver.
//!
//! An [`Arena`] owns the population, the random number generator and the
//! clock. Each tick moves every entity, resolves contacts and then checks
//! whether a single kind is left. Once that happens the arena is finished and
//! further ticks do nothing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use tracing::{info, trace, warn};

use super::collision;
use super::error::{ConfigError, SnapshotError};
use super::event_log::EventLog;
use super::events::{ConversionEvent, SimulationEvent};
use super::kind::Kind;
use super::motion;
use super::params::Params;
use super::population::Population;

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// The kind holding the whole population.
    pub winner: Kind,
    /// Ticks played before the win.
    pub ticks: u64,
    /// Simulation time elapsed before the win.
    pub time: f32,
}

/// Lifecycle of an arena. `Finished` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// More than one kind is alive.
    Running,
    /// One kind took over.
    Finished(Outcome),
}

/// A complete, self-contained simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    params: Params,
    population: Population,
    rng: ChaCha8Rng,
    time: f32,
    ticks: u64,
    phase: Phase,
    log: EventLog,
}

impl Arena {
    /// Creates an arena with a random balanced population.
    pub fn new(params: Params) -> Result<Self, ConfigError> {
        params.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        let population = Population::new(&params, &mut rng);
        info!(
            per_kind = params.num_per_kind,
            width = params.arena_width,
            height = params.arena_height,
            seed = params.seed,
            "arena created"
        );
        Ok(Self::assemble(params, population, rng))
    }

    /// Creates an arena around an explicitly placed population.
    ///
    /// `params.num_per_kind` is only validated, not used to spawn anything.
    pub fn with_population(params: Params, population: Population) -> Result<Self, ConfigError> {
        params.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(params.seed);
        Ok(Self::assemble(params, population, rng))
    }

    fn assemble(params: Params, population: Population, rng: ChaCha8Rng) -> Self {
        let phase = match population.monochrome_kind() {
            Some(winner) => Phase::Finished(Outcome {
                winner,
                ticks: 0,
                time: 0.0,
            }),
            None => Phase::Running,
        };
        let log = EventLog::new(params.event_log_size);
        Self {
            params,
            population,
            rng,
            time: 0.0,
            ticks: 0,
            phase,
            log,
        }
    }

    /// Advances the simulation by `dt` and returns the conversions it caused.
    ///
    /// Does nothing once the arena is finished, or when `dt` is not a positive
    /// finite number.
    pub fn tick(&mut self, dt: f32) -> Vec<ConversionEvent> {
        if self.is_finished() {
            return Vec::new();
        }
        if !(dt.is_finite() && dt > 0.0) {
            warn!(dt, "ignoring tick with invalid step");
            return Vec::new();
        }

        motion::advance_all(&mut self.population, dt, &self.params, &mut self.rng);
        let events = collision::resolve(&mut self.population, &self.params, &mut self.rng);

        self.time += dt;
        self.ticks += 1;

        for event in &events {
            self.log
                .log(self.time, SimulationEvent::Converted(event.clone()));
        }

        let [rocks, papers, scissors] = self.population.counts();
        trace!(
            tick = self.ticks,
            rocks,
            papers,
            scissors,
            conversions = events.len(),
            "tick"
        );

        if let Some(winner) = self.population.monochrome_kind() {
            let outcome = Outcome {
                winner,
                ticks: self.ticks,
                time: self.time,
            };
            info!(
                winner = winner.team_name(),
                ticks = outcome.ticks,
                time = outcome.time,
                "game over"
            );
            self.log.log(
                self.time,
                SimulationEvent::Won {
                    winner,
                    ticks: outcome.ticks,
                },
            );
            self.phase = Phase::Finished(outcome);
        }

        events
    }

    /// Advances the simulation by the configured step.
    pub fn step(&mut self) -> Vec<ConversionEvent> {
        self.tick(self.params.dt)
    }

    /// Steps until a kind wins or the tick cap is reached.
    ///
    /// Without `max_ticks` nothing guarantees that a kind ever wins, so this
    /// may not return.
    pub fn run(&mut self) -> Option<Outcome> {
        self.run_with(|_, _| ControlFlow::Continue(()))
    }

    /// Like [`Arena::run`], calling `on_tick` after every step.
    ///
    /// Returning `ControlFlow::Break` from the callback stops the run between
    /// ticks; the arena stays `Running` and `None` is returned.
    pub fn run_with<F>(&mut self, mut on_tick: F) -> Option<Outcome>
    where
        F: FnMut(&Arena, &[ConversionEvent]) -> ControlFlow<()>,
    {
        loop {
            if let Some(outcome) = self.winner() {
                return Some(outcome);
            }
            if self.params.max_ticks.is_some_and(|max| self.ticks >= max) {
                warn!(ticks = self.ticks, "tick limit reached without a winner");
                self.log.log(
                    self.time,
                    SimulationEvent::TickLimitReached { ticks: self.ticks },
                );
                return None;
            }

            let events = self.step();
            if on_tick(self, &events).is_break() {
                return self.winner();
            }
        }
    }

    /// The outcome, if a single kind holds the whole population.
    pub fn winner(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            Phase::Running => None,
        }
    }

    /// Returns `true` once a kind has won.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Parameters the arena was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Current entities.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Simulation time elapsed.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Ticks played.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Recent events, newest first.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Saves the complete arena state to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!(path, ticks = self.ticks, "snapshot saved");
        Ok(())
    }

    /// Loads an arena state from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path)?;
        let arena: Self = serde_json::from_str(&json)?;
        arena.params.validate()?;
        arena.population.verify(&arena.params)?;

        let expected = arena.population.monochrome_kind();
        let consistent = match arena.phase {
            Phase::Running => expected.is_none(),
            Phase::Finished(outcome) => {
                expected == Some(outcome.winner) && outcome.ticks <= arena.ticks
            }
        };
        if !consistent {
            return Err(SnapshotError::PhaseMismatch);
        }
        Ok(arena)
    }
}

/// Creates an arena with `num_per_kind` entities of every kind.
///
/// All other parameters take their defaults.
pub fn new_population(
    num_per_kind: usize,
    arena_width: f32,
    arena_height: f32,
    seed: u64,
) -> Result<Arena, ConfigError> {
    Arena::new(Params {
        num_per_kind,
        arena_width,
        arena_height,
        seed,
        ..Params::default()
    })
}

/// Advances `arena` by `dt`; see [`Arena::tick`].
pub fn tick(arena: &mut Arena, dt: f32) -> Vec<ConversionEvent> {
    arena.tick(dt)
}

/// The winning outcome of `arena`, if any; see [`Arena::winner`].
pub fn winner(arena: &Arena) -> Option<Outcome> {
    arena.winner()
}
