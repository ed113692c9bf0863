//! `wsn-scenario` — where things start.
//!
//! A [`Scenario`] is the placement layer: sensors, thieves, walls and exits
//! on a fixed-size board, at most one feature per cell.  It can be built
//! cell by cell, read from CSV, or scattered from a seed, and is turned into
//! an immutable [`wsn_grid::GridModel`] plus thief start cells when a
//! simulation is built.
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`placement`] | `PlacementKind`, `Scenario` (occupancy-checked placement) |
//! | [`loader`]  | `kind,x,y` CSV reader and writer                          |
//! | [`scatter`] | `ScatterCounts`, seeded random layouts                    |
//! | [`error`]   | `ScenarioError`, `ScenarioResult<T>`                      |

pub mod error;
pub mod loader;
pub mod placement;
pub mod scatter;


pub use error::{ScenarioError, ScenarioResult};
pub use loader::{load_scenario_csv, load_scenario_reader, write_scenario_csv, write_scenario_writer};
pub use placement::{PlacementKind, Scenario};
pub use scatter::{scatter, ScatterCounts};
