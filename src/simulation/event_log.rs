//! Event logging system for recent simulation events.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::events::SimulationEvent;

/// A logged event stamped with the simulation clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Simulation time when the event occurred
    pub time: f32,
    /// What happened
    pub event: SimulationEvent,
}

/// Event log that tracks recent simulation events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::new(),
            max_events,
        }
    }

    /// Adds a new event to the log
    pub fn log(&mut self, time: f32, event: SimulationEvent) {
        if self.max_events == 0 {
            return;
        }

        self.events.push_front(LoggedEvent { time, event });

        // Keep only the most recent events
        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Number of events currently held
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been logged
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clears all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
