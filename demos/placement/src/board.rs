//! Text status board: one line per thief after every tick.

use wsn_core::Tick;
use wsn_detect::Thresholds;
use wsn_sim::{AgentSnapshot, AgentState, SimObserver, TickSummary};

pub struct StatusBoard {
    thresholds: Thresholds,
}

impl StatusBoard {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    fn line(&self, snap: &AgentSnapshot) -> String {
        let n = snap.agent.0 + 1;
        let groups = format!(
            "K={}, C={}/{}",
            snap.qualifying.iter().map(usize::to_string).collect::<Vec<_>>().join("+"),
            snap.qualifying.len(),
            self.thresholds.c_groups,
        );
        match snap.state {
            AgentState::Escaped  => format!("Thief {n}: escaped at {}", snap.position),
            AgentState::Frozen   => format!("Thief {n}: FROZEN at {} ({groups})", snap.position),
            AgentState::Detected => format!(
                "Thief {n}: detected by {} sensors {} ({groups})",
                snap.detections.len(),
                snap.detections,
            ),
            AgentState::Moving   => format!("Thief {n}: moving freely at {}", snap.position),
        }
    }
}

impl SimObserver for StatusBoard {
    fn on_tick_start(&mut self, tick: Tick) {
        println!();
        println!(
            "── {tick} ── rules: K={} sensors/group, C={} groups",
            self.thresholds.k_detection, self.thresholds.c_groups
        );
    }

    fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
        println!(
            "moving {}  detected {}  frozen {}  escaped {}",
            summary.moving, summary.detected, summary.frozen, summary.escaped
        );
    }

    fn on_snapshot(&mut self, _tick: Tick, agents: &[AgentSnapshot]) {
        for snap in agents {
            println!("  {}", self.line(snap));
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!();
        println!("Simulation finished after {} ticks", final_tick.0);
    }
}
