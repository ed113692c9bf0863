//! `wsn-grid` — static grid layout, line rasterization, and navigation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`grid`]      | `GridModel` (dense cell kinds + sensor list), `GridBuilder`, `Sensor` |
//! | [`line`]      | `LineCells` — endpoint-inclusive Bresenham iterator        |
//! | [`navigator`] | `Navigator` trait, `NextStep`, `BfsNavigator`              |
//! | [`error`]     | `GridError`, `GridResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod line;
pub mod navigator;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::{CellKind, GridBuilder, GridModel, Sensor};
pub use line::LineCells;
pub use navigator::{BfsNavigator, Navigator, NextStep};
