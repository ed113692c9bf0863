//! The `Sim` struct and its tick loop.

use std::thread;

use tracing::{debug, info};

use wsn_agent::{AgentStatus, AgentStore};
use wsn_core::{AgentId, Cell, SimConfig, Tick};
use wsn_detect::{DetectionSet, Detector, FreezeRule, Thresholds};
use wsn_grid::{GridModel, Navigator, NextStep};

use crate::{AgentSnapshot, AgentState, SimObserver, SimResult, TickSummary};

// ── Per-thief plan computed before the apply phase ────────────────────────────

/// What one moving thief will do this tick.  Built from read-only state so
/// the plan phase is side-effect-free.
#[derive(Debug)]
enum Plan {
    /// Already standing on an exit.
    Escape,
    /// No exit reachable; stays put without a detection entry.
    Stuck,
    /// Step to `to`, where `seen` sensors will see it.
    Advance { to: Cell, seen: DetectionSet },
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<N, F>` holds all simulation state and drives the two-phase tick loop
/// described in the [crate docs](crate).  Thieves never interact with each
/// other, so plans are independent and can be computed in any order; they
/// are applied in ascending `AgentId` order.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<N: Navigator, F: FreezeRule> {
    /// Grid size, thresholds and pacing.
    pub config: SimConfig,

    /// `k_detection` and `c_groups`, validated.
    pub thresholds: Thresholds,

    /// Immutable walls, exits and sensors.
    pub grid: GridModel,

    /// Sensor index over `grid`.
    pub detector: Detector,

    /// Thief state (SoA arrays).
    pub agents: AgentStore,

    pub navigator: N,

    pub rule: F,

    /// Last completed tick.  `Tick::ZERO` before the first step.
    pub tick: Tick,
}

impl<N: Navigator, F: FreezeRule> Sim<N, F> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every thief is frozen or escaped, or `config.max_ticks` is
    /// reached, sleeping `config.tick_interval_ms` between ticks.
    ///
    /// Returns the summary of the last tick.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        let pause = self.config.tick_interval();
        let mut summary = self.summary();
        while !self.is_finished() {
            if let Some(pause) = pause.filter(|_| self.tick > Tick::ZERO) {
                thread::sleep(pause);
            }
            summary = self.step(observer)?;
        }
        info!(
            tick    = %self.tick,
            frozen  = summary.frozen,
            escaped = summary.escaped,
            active  = summary.active(),
            "simulation finished"
        );
        observer.on_sim_end(self.tick);
        Ok(summary)
    }

    /// Run exactly `n` ticks, unpaced, ignoring `max_ticks` and whether any
    /// thief is still moving.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<TickSummary> {
        let mut summary = self.summary();
        for _ in 0..n {
            summary = self.step(observer)?;
        }
        Ok(summary)
    }

    /// Process one tick.  This is the entry point for hosts that drive the
    /// simulation from their own timer.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        let now = self.tick.next();
        observer.on_tick_start(now);

        let plans = self.compute_plans();
        for (agent, plan) in plans {
            self.apply_plan(agent, plan, now)?;
        }
        self.tick = now;

        let summary = self.summary();
        observer.on_tick_end(now, &summary);
        observer.on_snapshot(now, &self.snapshots());
        Ok(summary)
    }

    /// `true` once every thief is terminal or the tick cap is reached.
    pub fn is_finished(&self) -> bool {
        self.agents.all_terminal()
            || self.config.max_ticks.is_some_and(|max| self.tick.0 >= max)
    }

    /// Counts per displayed state as of the last completed tick.
    pub fn summary(&self) -> TickSummary {
        let mut summary = TickSummary { tick: self.tick, ..TickSummary::default() };
        for agent in self.agents.agent_ids() {
            summary.count(self.state_of(agent));
        }
        summary
    }

    /// One snapshot per thief, in `AgentId` order.
    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        self.agents
            .agent_ids()
            .map(|agent| AgentSnapshot {
                agent,
                state:      self.state_of(agent),
                position:   self.agents.position(agent),
                detections: self.agents.current_detections(agent).clone(),
                qualifying: self.agents.history(agent).qualifying_sizes(self.thresholds.k_detection),
            })
            .collect()
    }

    pub fn state_of(&self, agent: AgentId) -> AgentState {
        AgentState::of(
            self.agents.status(agent),
            self.agents.current_detections(agent),
            self.thresholds,
        )
    }

    // ── Plan phase ────────────────────────────────────────────────────────

    /// Plans for every moving thief, in ascending `AgentId` order.
    ///
    /// With the `parallel` Cargo feature the per-thief work runs on Rayon's
    /// thread pool; `collect` keeps the input order.
    fn compute_plans(&self) -> Vec<(AgentId, Plan)> {
        let active: Vec<AgentId> = self
            .agents
            .agent_ids()
            .filter(|&a| !self.agents.status(a).is_terminal())
            .collect();

        #[cfg(not(feature = "parallel"))]
        {
            active.into_iter().map(|agent| (agent, self.plan_for(agent))).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            active.into_par_iter().map(|agent| (agent, self.plan_for(agent))).collect()
        }
    }

    fn plan_for(&self, agent: AgentId) -> Plan {
        let at = self.agents.position(agent);
        match self.navigator.next_step(&self.grid, at) {
            NextStep::AtExit  => Plan::Escape,
            NextStep::NoPath  => Plan::Stuck,
            NextStep::Move(to) => Plan::Advance { to, seen: self.detector.detect(&self.grid, to) },
        }
    }

    // ── Apply phase ───────────────────────────────────────────────────────

    /// A move onto an exit escapes on the same tick, unless the freeze rule
    /// fires on that tick's detections first.
    fn apply_plan(&mut self, agent: AgentId, plan: Plan, now: Tick) -> SimResult<()> {
        match plan {
            Plan::Escape => {
                self.agents.set_status(agent, AgentStatus::Escaped)?;
                info!(%agent, tick = %now, at = %self.agents.position(agent), "escaped");
            }

            Plan::Stuck => {
                debug!(%agent, tick = %now, at = %self.agents.position(agent), "no reachable exit");
            }

            Plan::Advance { to, seen } => {
                self.agents.move_to(agent, to)?;
                self.agents.record(agent, seen)?;

                let history = self.agents.history(agent);
                debug!(
                    %agent,
                    tick     = %now,
                    at       = %to,
                    seen     = %self.agents.current_detections(agent),
                    history  = ?history.iter().map(|s| s.len()).collect::<Vec<_>>(),
                    "detections"
                );

                if self.rule.evaluate(history, self.thresholds) {
                    let sizes = history.qualifying_sizes(self.thresholds.k_detection);
                    self.agents.set_status(agent, AgentStatus::Frozen)?;
                    info!(%agent, tick = %now, at = %to, qualifying = ?sizes, "frozen");
                } else if self.grid.is_exit(to) {
                    self.agents.set_status(agent, AgentStatus::Escaped)?;
                    info!(%agent, tick = %now, at = %to, "escaped");
                }
            }
        }
        Ok(())
    }
}
