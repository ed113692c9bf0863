//! Plain data row types written by output backends.

use wsn_core::Tick;
use wsn_sim::{AgentSnapshot, TickSummary};

/// One thief at the end of a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id:   u32,
    pub tick:       u64,
    /// `moving`, `detected`, `frozen` or `escaped`.
    pub state:      &'static str,
    pub x:          i32,
    pub y:          i32,
    /// Sensor ids of the latest detection set, `;`-separated.
    pub detections: String,
    /// Sizes of the qualifying detection sets so far, `+`-separated
    /// (e.g. `3+4+3`).  Empty if none.
    pub qualifying: String,
}

impl AgentSnapshotRow {
    pub fn from_snapshot(tick: Tick, snap: &AgentSnapshot) -> Self {
        Self {
            agent_id:   snap.agent.0,
            tick:       tick.0,
            state:      snap.state.as_str(),
            x:          snap.position.x,
            y:          snap.position.y,
            detections: join(snap.detections.iter().map(|s| s.0), ";"),
            qualifying: join(snap.qualifying.iter(), "+"),
        }
    }
}

/// Thief counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    /// Paced time since the start of the run (`tick × tick_interval_ms`).
    pub elapsed_ms: u64,
    pub moving:     u64,
    pub detected:   u64,
    pub frozen:     u64,
    pub escaped:    u64,
}

impl TickSummaryRow {
    pub fn from_summary(summary: &TickSummary, tick_interval_ms: u64) -> Self {
        Self {
            tick:       summary.tick.0,
            elapsed_ms: summary.tick.0.saturating_mul(tick_interval_ms),
            moving:     summary.moving as u64,
            detected:   summary.detected as u64,
            frozen:     summary.frozen as u64,
            escaped:    summary.escaped as u64,
        }
    }
}

fn join<T: ToString>(items: impl Iterator<Item = T>, sep: &str) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(sep)
}
