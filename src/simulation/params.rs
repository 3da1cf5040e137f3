use serde::{Deserialize, Serialize};

use super::error::{ConfigError, SnapshotError};

/// Largest accepted initial speed bound.
pub const MAX_SPEED_LIMIT: f32 = 1.0e6;

/// Largest accepted event log capacity.
pub const MAX_EVENT_LOG_SIZE: usize = 100_000;

/// Simulation parameters that control arena behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Arena width.
    pub arena_width: f32,
    /// Arena height.
    pub arena_height: f32,
    /// Edge length of the square bounding box shared by every entity.
    pub entity_size: f32,
    /// Initial number of entities of each kind.
    pub num_per_kind: usize,
    /// Initial velocity is drawn uniformly from `[-max_speed, max_speed]` per axis.
    pub max_speed: f32,
    /// Lower bound of the random factor applied to a bounced velocity component.
    pub bounce_min: f32,
    /// Upper bound of the random factor applied to a bounced velocity component.
    pub bounce_max: f32,
    /// Fixed tick step.
    pub dt: f32,
    /// Seed for the arena's random number generator.
    pub seed: u64,
    /// Stop after this many ticks even without a winner.
    pub max_ticks: Option<u64>,
    /// Number of recent events kept in the arena's event log.
    pub event_log_size: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            arena_width: 1920.0,
            arena_height: 1080.0,
            entity_size: 50.0,
            num_per_kind: 10,
            max_speed: 3.0,
            bounce_min: 0.8,
            bounce_max: 1.2,
            dt: 1.0,
            seed: 42,
            max_ticks: None,
            event_log_size: 20,
        }
    }
}

impl Params {
    /// Checks that the parameters describe a runnable arena.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_per_kind == 0 {
            return Err(ConfigError::NonPositiveCount(0));
        }

        let (width, height) = (self.arena_width, self.arena_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidArena { width, height });
        }

        let size = self.entity_size;
        if !(size.is_finite() && size > 0.0) {
            return Err(ConfigError::InvalidEntitySize(size));
        }
        if size > width || size > height {
            return Err(ConfigError::EntityTooLarge {
                size,
                width,
                height,
            });
        }

        // A zero bound leaves everything frozen and a run could never end.
        if !(self.max_speed > 0.0 && self.max_speed <= MAX_SPEED_LIMIT) {
            return Err(ConfigError::InvalidSpeed {
                value: self.max_speed,
                limit: MAX_SPEED_LIMIT,
            });
        }

        let (min, max) = (self.bounce_min, self.bounce_max);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidBounceRange { min, max });
        }

        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidStep(self.dt));
        }

        if self.event_log_size > MAX_EVENT_LOG_SIZE {
            return Err(ConfigError::InvalidLogSize {
                value: self.event_log_size,
                limit: MAX_EVENT_LOG_SIZE,
            });
        }

        Ok(())
    }

    /// Total number of entities at the start of a run.
    pub fn initial_population(&self) -> usize {
        self.num_per_kind * 3
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from a JSON file and validates them.
    ///
    /// Missing fields take their default values.
    pub fn load_from_file(path: &str) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }
}

/// Parses the user-supplied entity count.
///
/// Surrounding whitespace is ignored; the value must be a positive integer.
pub fn parse_entity_count(input: &str) -> Result<usize, ConfigError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| ConfigError::InvalidCount {
        input: input.to_string(),
    })?;
    if value <= 0 {
        return Err(ConfigError::NonPositiveCount(value));
    }
    usize::try_from(value).map_err(|_| ConfigError::InvalidCount {
        input: input.to_string(),
    })
}
