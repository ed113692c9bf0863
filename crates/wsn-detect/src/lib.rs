//! `wsn-detect` — who sees a thief, what has been seen so far, and when that
//! is enough to freeze it.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`detector`] | `Detector` — R-tree candidate lookup + line-of-sight filter  |
//! | [`set`]      | `DetectionSet` — ordered set of `SensorId`s for one tick     |
//! | [`history`]  | `DetectionHistory` — append-only per-thief log of sets       |
//! | [`rule`]     | `FreezeRule` trait, `Thresholds`, `CountingRule`             |
//! | [`csp`]      | `CspRule` — backtracking constraint formulation of the rule  |
//! | [`error`]    | `DetectError`, `DetectResult<T>`                             |
//!
//! # Freeze rule
//!
//! A tick *qualifies* when at least `k_detection` sensors saw the thief in
//! that tick.  A thief is frozen once its history holds `c_groups` distinct
//! qualifying ticks, anywhere and in any order.  Every qualifying tick is
//! interchangeable with every other, so [`CountingRule`] answers the question
//! with a single pass.  [`CspRule`] states the same rule as slots with
//! domains and an all-distinct constraint and must agree with it on every
//! history.

pub mod csp;
pub mod detector;
pub mod error;
pub mod history;
pub mod rule;
pub mod set;

#[cfg(test)]
mod tests;

pub use csp::{CspRule, Slot};
pub use detector::{Detector, sees};
pub use error::{DetectError, DetectResult};
pub use history::DetectionHistory;
pub use rule::{CountingRule, FreezeRule, Thresholds};
pub use set::DetectionSet;
