use thiserror::Error;

use wsn_core::Cell;
use wsn_grid::GridError;

use crate::PlacementKind;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: u32, height: u32 },

    #[error("{kind} at {cell} lies outside the board")]
    OutOfBounds { kind: PlacementKind, cell: Cell },

    #[error("cannot place {kind} at {cell}: cell already holds a {existing}")]
    Occupied { kind: PlacementKind, cell: Cell, existing: PlacementKind },

    #[error("scenario needs at least one {0}")]
    Missing(PlacementKind),

    #[error("cannot scatter {requested} features on a board of {area} cells")]
    TooCrowded { requested: usize, area: usize },

    #[error("scenario parse error: {0}")]
    Parse(String),

    /// A CSV data row failed to parse or place.  `row` counts the header as 1.
    #[error("row {row}: {source}")]
    Row { row: usize, source: Box<ScenarioError> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
