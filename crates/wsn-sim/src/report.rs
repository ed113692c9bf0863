//! What the simulation reports after each tick.

use std::fmt;

use wsn_agent::AgentStatus;
use wsn_core::{AgentId, Cell, Tick};
use wsn_detect::{DetectionSet, Thresholds};

/// Displayed state of a thief.
///
/// `Detected` is a moving thief whose latest detection set reached
/// `k_detection`; it has no effect on movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    Moving,
    Detected,
    Frozen,
    Escaped,
}

impl AgentState {
    pub fn of(status: AgentStatus, current: &DetectionSet, thresholds: Thresholds) -> Self {
        match status {
            AgentStatus::Frozen  => AgentState::Frozen,
            AgentStatus::Escaped => AgentState::Escaped,
            AgentStatus::Moving if thresholds.qualifies(current) => AgentState::Detected,
            AgentStatus::Moving  => AgentState::Moving,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Moving   => "moving",
            AgentState::Detected => "detected",
            AgentState::Frozen   => "frozen",
            AgentState::Escaped  => "escaped",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One thief as of the end of a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub agent:      AgentId,
    pub state:      AgentState,
    pub position:   Cell,
    /// Sensors that saw the thief on its most recent move.
    pub detections: DetectionSet,
    /// Size of every qualifying detection set so far, oldest first.
    pub qualifying: Vec<usize>,
}

/// Thief counts per [`AgentState`] at the end of a tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick:     Tick,
    pub moving:   usize,
    pub detected: usize,
    pub frozen:   usize,
    pub escaped:  usize,
}

impl TickSummary {
    pub fn total(&self) -> usize {
        self.moving + self.detected + self.frozen + self.escaped
    }

    /// Thieves that will still be processed next tick.
    pub fn active(&self) -> usize {
        self.moving + self.detected
    }

    pub(crate) fn count(&mut self, state: AgentState) {
        match state {
            AgentState::Moving   => self.moving += 1,
            AgentState::Detected => self.detected += 1,
            AgentState::Frozen   => self.frozen += 1,
            AgentState::Escaped  => self.escaped += 1,
        }
    }
}
