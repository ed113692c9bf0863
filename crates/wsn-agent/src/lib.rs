//! `wsn-agent` — Structure-of-Arrays thief storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`status`]  | `AgentStatus` — `Moving`, `Frozen`, `Escaped`            |
//! | [`store`]   | `AgentStore` (SoA arrays) with terminal-state guards     |
//! | [`builder`] | `AgentStoreBuilder` (fluent construction)                |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                           |
//!
//! Once a thief is `Frozen` or `Escaped` the store refuses every further
//! write to its position and history.

pub mod builder;
pub mod error;
pub mod status;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use status::AgentStatus;
pub use store::AgentStore;
