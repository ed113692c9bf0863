//! Persisted lifecycle status of a thief.

use std::fmt;

/// Lifecycle status.  `Frozen` and `Escaped` are terminal.
///
/// The "detected" display state is not stored here; it is derived each tick
/// from the latest detection set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentStatus {
    #[default]
    Moving,
    Frozen,
    Escaped,
}

impl AgentStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, AgentStatus::Moving)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentStatus::Moving  => "moving",
            AgentStatus::Frozen  => "frozen",
            AgentStatus::Escaped => "escaped",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
