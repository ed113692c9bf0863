//! Fluent builder for constructing an `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use wsn_agent::AgentStoreBuilder;
//! use wsn_core::{AgentId, Cell};
//!
//! let mut b = AgentStoreBuilder::new();
//! let a = b.add_agent(Cell::new(3, 4));
//! let store = b.build();
//!
//! assert_eq!(a, AgentId(0));
//! assert_eq!(store.count, 1);
//! assert_eq!(store.position(a), Cell::new(3, 4));
//! ```

use wsn_core::{AgentId, Cell};

use crate::AgentStore;

/// Fluent builder for [`AgentStore`].
///
/// Thieves start `Moving` with an empty history.  Ids are assigned in the
/// order thieves are added.
#[derive(Default)]
pub struct AgentStoreBuilder {
    starts: Vec<Cell>,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-filled with one thief per start cell.
    pub fn with_starts(starts: impl IntoIterator<Item = Cell>) -> Self {
        Self { starts: starts.into_iter().collect() }
    }

    /// Add a thief at `start` and return its id.
    pub fn add_agent(&mut self, start: Cell) -> AgentId {
        let id = AgentId(self.starts.len() as u32);
        self.starts.push(start);
        id
    }

    pub fn build(self) -> AgentStore {
        AgentStore::new(self.starts)
    }
}
