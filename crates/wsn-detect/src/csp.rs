//! Constraint-satisfaction formulation of the freeze rule.
//!
//! # Model
//!
//! - **Variables**: one [`Slot`] per required group (`c_groups` of them).
//! - **Domain**: every tick index of the history, plus [`Slot::Unassigned`].
//! - **Unary constraint**: an assigned slot's tick must qualify
//!   (`|set| >= k_detection`).  Applied once up front by filtering the
//!   domain (node consistency).
//! - **Global constraint**: assigned slots are pairwise distinct.
//! - **Goal**: every slot is assigned.
//!
//! # Search
//!
//! Chronological backtracking.  Slots are interchangeable, so assignments
//! are generated in strictly ascending tick order; this removes the `c!`
//! permutations of every solution and implies all-distinct.  Forward checking
//! rejects a value when too few larger ticks remain for the slots still
//! open, and an `Unassigned` value is rejected as soon as it is tried because
//! it can never reach the goal.

use tracing::trace;

use crate::{DetectionHistory, FreezeRule, Thresholds};

/// The value of one decision variable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Unassigned,
    Tick(usize),
}

/// Backtracking solver for the freeze rule.  Agrees with
/// [`CountingRule`](crate::CountingRule) on every history.
#[derive(Copy, Clone, Debug, Default)]
pub struct CspRule;

impl FreezeRule for CspRule {
    fn assign(&self, history: &DetectionHistory, thresholds: Thresholds) -> Option<Vec<usize>> {
        if history.len() < thresholds.c_groups {
            return None;
        }

        let domain: Vec<usize> = (0..history.len())
            .filter(|&i| history.get(i).is_some_and(|s| thresholds.qualifies(s)))
            .collect();

        let mut search = Search {
            domain: &domain,
            slots:  vec![Slot::Unassigned; thresholds.c_groups],
            nodes:  0,
        };
        let found = search.solve(0);
        trace!(
            slots = thresholds.c_groups,
            domain = domain.len(),
            nodes = search.nodes,
            found,
            "freeze csp search"
        );

        if !found {
            return None;
        }
        search
            .slots
            .iter()
            .map(|s| match s {
                Slot::Tick(t) => Some(*t),
                Slot::Unassigned => None,
            })
            .collect()
    }
}

struct Search<'a> {
    /// Qualifying tick indices, ascending.
    domain: &'a [usize],
    slots:  Vec<Slot>,
    nodes:  u64,
}

impl Search<'_> {
    fn solve(&mut self, var: usize) -> bool {
        self.nodes += 1;
        if var == self.slots.len() {
            return self.goal_reached();
        }

        let open_after = self.slots.len() - var - 1;
        for (pos, &tick) in self.domain.iter().enumerate() {
            // Forward check: enough larger ticks left for the open slots.
            if self.domain.len() - pos - 1 < open_after {
                break;
            }
            if !self.consistent(var, tick) {
                continue;
            }
            self.slots[var] = Slot::Tick(tick);
            if self.solve(var + 1) {
                return true;
            }
        }

        // `Unassigned` is the last value of every domain and never reaches
        // the goal.
        self.slots[var] = Slot::Unassigned;
        false
    }

    /// All-distinct plus ascending order against every earlier slot.
    fn consistent(&self, var: usize, t: usize) -> bool {
        self.slots[..var].iter().all(|s| match s {
            Slot::Tick(prev) => *prev < t,
            Slot::Unassigned => true,
        })
    }

    fn goal_reached(&self) -> bool {
        self.slots.iter().all(|s| matches!(s, Slot::Tick(_)))
    }
}
