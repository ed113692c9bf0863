//! Navigation trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! `wsn-sim` asks for movement via the [`Navigator`] trait, so applications
//! can swap in another search (A*, weighted costs, sensor-avoiding paths)
//! without touching the tick loop.  The default [`BfsNavigator`] re-searches
//! the whole grid on every call; there is no cache to invalidate.

use std::collections::VecDeque;

use wsn_core::Cell;

use crate::GridModel;

// ── NextStep ──────────────────────────────────────────────────────────────────

/// The outcome of one navigation query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NextStep {
    /// Step to this edge-adjacent cell; it is the first cell on a shortest
    /// path to an exit.
    Move(Cell),
    /// The agent already stands on an exit.
    AtExit,
    /// No exit is reachable from the agent's cell.
    NoPath,
}

// ── Navigator trait ───────────────────────────────────────────────────────────

/// Pluggable single-step navigation toward any exit.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared across Rayon
/// worker threads when the simulation's compute phase runs in parallel.
pub trait Navigator: Send + Sync {
    /// Compute the next cell for an agent at `from`.
    ///
    /// A returned [`NextStep::Move`] cell must be edge-adjacent to `from` and
    /// passable (in bounds, not a wall, not a sensor).
    fn next_step(&self, grid: &GridModel, from: Cell) -> NextStep;
}

// ── BfsNavigator ──────────────────────────────────────────────────────────────

/// Breadth-first search over 4-connected passable cells.
///
/// Neighbours are expanded left, right, up, down.  The first exit discovered
/// wins, which makes the choice among equidistant exits deterministic.
/// Cost is O(width · height) per call.
#[derive(Copy, Clone, Debug, Default)]
pub struct BfsNavigator;

impl Navigator for BfsNavigator {
    fn next_step(&self, grid: &GridModel, from: Cell) -> NextStep {
        bfs(grid, from)
    }
}

/// Sentinel for "no parent" in the predecessor array.
const NO_PARENT: usize = usize::MAX;

fn bfs(grid: &GridModel, start: Cell) -> NextStep {
    if grid.is_exit(start) {
        return NextStep::AtExit;
    }
    let Some(start_idx) = grid.index_of(start) else {
        return NextStep::NoPath;
    };

    let mut visited = vec![false; grid.area()];
    // parent[i] = index of the cell that discovered cell i.
    let mut parent = vec![NO_PARENT; grid.area()];
    let mut queue = VecDeque::new();

    visited[start_idx] = true;
    queue.push_back((start, start_idx));

    while let Some((cur, cur_idx)) = queue.pop_front() {
        for next in cur.neighbours() {
            if !grid.is_passable(next) {
                continue;
            }
            let Some(next_idx) = grid.index_of(next) else {
                continue;
            };
            if visited[next_idx] {
                continue;
            }
            visited[next_idx] = true;
            parent[next_idx] = cur_idx;

            // FIFO order means the first exit discovered is also the first
            // exit that would be dequeued.
            if grid.is_exit(next) {
                return NextStep::Move(first_step(grid, &parent, start_idx, next_idx));
            }
            queue.push_back((next, next_idx));
        }
    }

    NextStep::NoPath
}

/// Walk the predecessor chain back from `goal` and return the cell directly
/// after `start`.
fn first_step(grid: &GridModel, parent: &[usize], start: usize, goal: usize) -> Cell {
    let mut cur = goal;
    while parent[cur] != start {
        cur = parent[cur];
    }
    grid.cell_at(cur)
}
