//! Many independent runs played in parallel.
//!
//! Each run is a normal single-threaded [`Arena`]; only whole runs are spread
//! across threads, so every run stays deterministic for its seed.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::arena::{Arena, Outcome};
use super::error::ConfigError;
use super::kind::Kind;
use super::params::Params;

/// Result of a single run inside a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Seed the run used.
    pub seed: u64,
    /// How it ended, `None` if the tick cap stopped it first.
    pub outcome: Option<Outcome>,
    /// Ticks played.
    pub ticks: u64,
}

/// Aggregated results of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Per-run results ordered by seed.
    pub runs: Vec<RunResult>,
    /// Wins indexed by [`Kind::index`].
    pub wins: [usize; 3],
    /// Runs stopped by the tick cap.
    pub undecided: usize,
}

impl BatchReport {
    fn from_runs(runs: Vec<RunResult>) -> Self {
        let mut wins = [0; 3];
        let mut undecided = 0;
        for run in &runs {
            match run.outcome {
                Some(outcome) => wins[outcome.winner.index()] += 1,
                None => undecided += 1,
            }
        }
        Self {
            runs,
            wins,
            undecided,
        }
    }

    /// Wins for one kind.
    pub fn wins_for(&self, kind: Kind) -> usize {
        self.wins[kind.index()]
    }

    /// Mean ticks to victory over decided runs.
    pub fn mean_ticks_to_win(&self) -> Option<f64> {
        let decided: Vec<u64> = self
            .runs
            .iter()
            .filter_map(|run| run.outcome.map(|outcome| outcome.ticks))
            .collect();
        if decided.is_empty() {
            None
        } else {
            Some(decided.iter().sum::<u64>() as f64 / decided.len() as f64)
        }
    }
}

/// Plays `runs` arenas seeded `params.seed, params.seed + 1, ...` in parallel.
pub fn run_batch(params: &Params, runs: usize) -> Result<BatchReport, ConfigError> {
    params.validate()?;

    let results = (0..runs)
        .into_par_iter()
        .map(|offset| -> Result<RunResult, ConfigError> {
            let seed = params.seed.wrapping_add(offset as u64);
            let mut arena = Arena::new(Params {
                seed,
                ..params.clone()
            })?;
            let outcome = arena.run();
            Ok(RunResult {
                seed,
                outcome,
                ticks: arena.ticks(),
            })
        })
        .collect::<Result<Vec<RunResult>, ConfigError>>()?;

    let report = BatchReport::from_runs(results);
    info!(
        runs,
        rocks = report.wins_for(Kind::Rock),
        papers = report.wins_for(Kind::Paper),
        scissors = report.wins_for(Kind::Scissors),
        undecided = report.undecided,
        "batch finished"
    );
    Ok(report)
}
