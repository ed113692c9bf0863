//! `wsn-core` — foundational types for the `wsn` sensor-network simulation.
//!
//! This crate is a dependency of every other `wsn-*` crate.  It has no
//! `wsn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `SensorId`                                 |
//! | [`cell`]        | `Cell` grid coordinate, Chebyshev distance, neighbours|
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `SimConfig` (grid size, thresholds, pacing)           |
//! | [`rng`]         | `SimRng` (seeded scenario generation)                 |
//! | [`error`]       | `WsnError`, `WsnResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::{MAX_SENSOR_RADIUS, SimConfig};
pub use error::{WsnError, WsnResult};
pub use ids::{AgentId, SensorId};
pub use rng::SimRng;
pub use time::Tick;
