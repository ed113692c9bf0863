//! Core thief storage.
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let pos = store.position(agent);  // O(1)
//! ```
//!
//! Fields are private so that the terminal-state rule cannot be bypassed:
//! every mutator checks the agent's status first.

use wsn_core::{AgentId, Cell};
use wsn_detect::{DetectionHistory, DetectionSet};

use crate::{AgentError, AgentResult, AgentStatus};

/// Structure-of-Arrays storage for all thieves.
#[derive(Clone, Debug)]
pub struct AgentStore {
    /// Number of thieves.  Equals the length of every SoA `Vec`.
    pub count: usize,

    start:    Vec<Cell>,
    position: Vec<Cell>,
    status:   Vec<AgentStatus>,
    /// One entry per tick in which the thief moved and was scanned.
    history:  Vec<DetectionHistory>,
    /// Detections of the most recent processed tick (empty before the first).
    current:  Vec<DetectionSet>,
}

impl AgentStore {
    pub(crate) fn new(starts: Vec<Cell>) -> Self {
        let count = starts.len();
        Self {
            count,
            position: starts.clone(),
            start:    starts,
            status:   vec![AgentStatus::Moving; count],
            history:  vec![DetectionHistory::new(); count],
            current:  vec![DetectionSet::new(); count],
        }
    }

    /// `true` if there are no thieves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self, agent: AgentId) -> Cell {
        self.position[agent.index()]
    }

    #[inline]
    pub fn start(&self, agent: AgentId) -> Cell {
        self.start[agent.index()]
    }

    #[inline]
    pub fn status(&self, agent: AgentId) -> AgentStatus {
        self.status[agent.index()]
    }

    #[inline]
    pub fn history(&self, agent: AgentId) -> &DetectionHistory {
        &self.history[agent.index()]
    }

    #[inline]
    pub fn current_detections(&self, agent: AgentId) -> &DetectionSet {
        &self.current[agent.index()]
    }

    /// Thieves still moving.
    pub fn active_count(&self) -> usize {
        self.status.iter().filter(|s| !s.is_terminal()).count()
    }

    /// `true` once every thief is frozen or escaped.
    pub fn all_terminal(&self) -> bool {
        self.status.iter().all(|s| s.is_terminal())
    }

    pub fn count_with(&self, status: AgentStatus) -> usize {
        self.status.iter().filter(|&&s| s == status).count()
    }

    // ── Writes (non-terminal thieves only) ────────────────────────────────

    /// Move `agent` to `cell`.
    pub fn move_to(&mut self, agent: AgentId, cell: Cell) -> AgentResult<()> {
        self.ensure_active(agent)?;
        self.position[agent.index()] = cell;
        Ok(())
    }

    /// Append this tick's detections to the history and make them current.
    pub fn record(&mut self, agent: AgentId, set: DetectionSet) -> AgentResult<()> {
        self.ensure_active(agent)?;
        self.current[agent.index()] = set.clone();
        self.history[agent.index()].push(set);
        Ok(())
    }

    /// Transition to `Frozen` or `Escaped`.  Setting `Moving` on a moving
    /// thief is a no-op.
    pub fn set_status(&mut self, agent: AgentId, status: AgentStatus) -> AgentResult<()> {
        self.ensure_active(agent)?;
        self.status[agent.index()] = status;
        Ok(())
    }

    fn ensure_active(&self, agent: AgentId) -> AgentResult<()> {
        match self.status.get(agent.index()) {
            None => Err(AgentError::NotFound(agent)),
            Some(s) if s.is_terminal() => Err(AgentError::Terminal(agent, s.as_str())),
            Some(_) => Ok(()),
        }
    }
}
