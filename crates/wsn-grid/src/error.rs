//! Grid-construction error type.

use thiserror::Error;

use wsn_core::Cell;

/// Errors produced while building a `GridModel`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Cell),

    #[error("cell {cell} already holds a {existing}")]
    Occupied { cell: Cell, existing: &'static str },

    #[error("sensor radius {0} exceeds {max}", max = wsn_core::MAX_SENSOR_RADIUS)]
    RadiusTooLarge(u32),
}

pub type GridResult<T> = Result<T, GridError>;
