//! `wsn-sim` — tick loop orchestrator for the wsn sensor-network simulation.
//!
//! # Two-phase tick loop
//!
//! ```text
//! loop until every thief is frozen or escaped (or config.max_ticks):
//!   ① Plan   — for each moving thief, from read-only state
//!              (parallel with the `parallel` feature):
//!                on an exit        → Escape
//!                Navigator NoPath  → Stuck
//!                Navigator Move(c) → Advance(c, Detector::detect(c))
//!   ② Apply  — for each plan in ascending AgentId order:
//!                Escape  → Escaped
//!                Stuck   → nothing changes, retried next tick
//!                Advance → move, append detections, FreezeRule::evaluate;
//!                          frozen → Frozen, else on an exit → Escaped
//!   ③ Report — TickSummary + AgentSnapshots to the observer
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the plan phase on Rayon's thread pool.            |
//! | `serde`    | Derives `Serialize`/`Deserialize` on report types.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wsn_core::SimConfig;
//! use wsn_detect::CountingRule;
//! use wsn_grid::BfsNavigator;
//! use wsn_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, scenario, BfsNavigator, CountingRule).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{AgentSnapshot, AgentState, TickSummary};
pub use sim::Sim;
