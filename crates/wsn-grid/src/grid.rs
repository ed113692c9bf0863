//! Static grid layout and builder.
//!
//! # Data layout
//!
//! Cell features live in a dense row-major `Vec<CellKind>` of length
//! `width * height`, so every `is_*` query is one bounds check plus one
//! indexed load.  Sensors are additionally kept in placement order in
//! `sensors`, where the position in the `Vec` is the `SensorId`.
//!
//! A `GridModel` is immutable once built.

use wsn_core::{Cell, MAX_SENSOR_RADIUS, SensorId};

use crate::{GridError, GridResult};

// ── CellKind ──────────────────────────────────────────────────────────────────

/// The static feature occupying a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Open,
    Wall,
    Exit,
    Sensor,
}

impl CellKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CellKind::Open   => "open cell",
            CellKind::Wall   => "wall",
            CellKind::Exit   => "exit",
            CellKind::Sensor => "sensor",
        }
    }
}

// ── Sensor ────────────────────────────────────────────────────────────────────

/// A static detector: position plus Chebyshev detection radius.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sensor {
    pub id:     SensorId,
    pub cell:   Cell,
    pub radius: u32,
}

impl Sensor {
    /// `true` if `cell` is within this sensor's Chebyshev radius.  Walls are
    /// not considered here.
    #[inline]
    pub fn in_range(&self, cell: Cell) -> bool {
        self.cell.chebyshev(cell) <= self.radius
    }
}

// ── GridModel ─────────────────────────────────────────────────────────────────

/// Bounded grid with walls, exits, and sensors.
///
/// Do not construct directly; use [`GridBuilder`].
#[derive(Clone, Debug)]
pub struct GridModel {
    width:   u32,
    height:  u32,
    kinds:   Vec<CellKind>,
    sensors: Vec<Sensor>,
    exits:   Vec<Cell>,
    walls:   Vec<Cell>,
}

impl GridModel {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// Row-major index of `cell`, or `None` if it lies outside the grid.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((index % w) as i32, (index / w) as i32)
    }

    /// Feature at `cell`; [`CellKind::Open`] outside the grid.
    #[inline]
    pub fn kind(&self, cell: Cell) -> CellKind {
        self.index_of(cell).map_or(CellKind::Open, |i| self.kinds[i])
    }

    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.kind(cell) == CellKind::Wall
    }

    #[inline]
    pub fn is_exit(&self, cell: Cell) -> bool {
        self.kind(cell) == CellKind::Exit
    }

    #[inline]
    pub fn is_sensor(&self, cell: Cell) -> bool {
        self.kind(cell) == CellKind::Sensor
    }

    /// `true` if an agent may step onto `cell`: in bounds, not a wall, not a
    /// sensor.  Exits are passable.
    #[inline]
    pub fn is_passable(&self, cell: Cell) -> bool {
        matches!(self.index_of(cell).map(|i| self.kinds[i]), Some(CellKind::Open | CellKind::Exit))
    }

    /// Sensors in placement order; `sensors()[id.index()]` has that `id`.
    #[inline]
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    pub fn sensor(&self, id: SensorId) -> Option<&Sensor> {
        self.sensors.get(id.index())
    }

    #[inline]
    pub fn exits(&self) -> &[Cell] {
        &self.exits
    }

    #[inline]
    pub fn walls(&self) -> &[Cell] {
        &self.walls
    }

    /// Largest sensor radius, or 0 with no sensors.
    pub fn max_sensor_radius(&self) -> u32 {
        self.sensors.iter().map(|s| s.radius).max().unwrap_or(0)
    }

    /// `true` if no wall lies on the rasterized line from `from` to `to`.
    /// Both endpoints are checked.
    pub fn line_is_clear(&self, from: Cell, to: Cell) -> bool {
        !crate::LineCells::new(from, to).any(|c| self.is_wall(c))
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Incremental construction of a [`GridModel`].
///
/// Each `add_*` call validates bounds and single occupancy immediately, so a
/// failed placement leaves the builder unchanged.
///
/// ```rust
/// use wsn_core::Cell;
/// use wsn_grid::GridBuilder;
///
/// let mut b = GridBuilder::new(5, 5).unwrap();
/// b.add_wall(Cell::new(1, 0)).unwrap();
/// b.add_exit(Cell::new(4, 4)).unwrap();
/// let s = b.add_sensor(Cell::new(2, 2), 2).unwrap();
/// let grid = b.build();
/// assert!(grid.is_wall(Cell::new(1, 0)));
/// assert_eq!(grid.sensors()[s.index()].cell, Cell::new(2, 2));
/// ```
pub struct GridBuilder {
    width:   u32,
    height:  u32,
    kinds:   Vec<CellKind>,
    sensors: Vec<Sensor>,
    exits:   Vec<Cell>,
    walls:   Vec<Cell>,
}

impl GridBuilder {
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(GridError::EmptyGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            kinds:   vec![CellKind::Open; width as usize * height as usize],
            sensors: Vec::new(),
            exits:   Vec::new(),
            walls:   Vec::new(),
        })
    }

    pub fn add_wall(&mut self, cell: Cell) -> GridResult<()> {
        self.claim(cell, CellKind::Wall)?;
        self.walls.push(cell);
        Ok(())
    }

    pub fn add_exit(&mut self, cell: Cell) -> GridResult<()> {
        self.claim(cell, CellKind::Exit)?;
        self.exits.push(cell);
        Ok(())
    }

    /// Place a sensor and return its id (the number of sensors placed before it).
    pub fn add_sensor(&mut self, cell: Cell, radius: u32) -> GridResult<SensorId> {
        if radius > MAX_SENSOR_RADIUS {
            return Err(GridError::RadiusTooLarge(radius));
        }
        self.claim(cell, CellKind::Sensor)?;
        let id = SensorId(self.sensors.len() as u32);
        self.sensors.push(Sensor { id, cell, radius });
        Ok(id)
    }

    pub fn build(self) -> GridModel {
        GridModel {
            width:   self.width,
            height:  self.height,
            kinds:   self.kinds,
            sensors: self.sensors,
            exits:   self.exits,
            walls:   self.walls,
        }
    }

    fn claim(&mut self, cell: Cell, kind: CellKind) -> GridResult<()> {
        if cell.x < 0 || cell.y < 0 || cell.x as u32 >= self.width || cell.y as u32 >= self.height {
            return Err(GridError::OutOfBounds(cell));
        }
        let i = cell.y as usize * self.width as usize + cell.x as usize;
        match self.kinds[i] {
            CellKind::Open => {
                self.kinds[i] = kind;
                Ok(())
            }
            existing => Err(GridError::Occupied { cell, existing: existing.as_str() }),
        }
    }
}
