//! Occupancy-checked feature placement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use wsn_core::{Cell, SimConfig};
use wsn_grid::{GridBuilder, GridModel};

use crate::{ScenarioError, ScenarioResult};

// ── PlacementKind ─────────────────────────────────────────────────────────────

/// The four things that can be put on a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    Sensor,
    Thief,
    Wall,
    Exit,
}

impl PlacementKind {
    pub const ALL: [PlacementKind; 4] =
        [PlacementKind::Sensor, PlacementKind::Thief, PlacementKind::Wall, PlacementKind::Exit];

    pub fn as_str(self) -> &'static str {
        match self {
            PlacementKind::Sensor => "sensor",
            PlacementKind::Thief  => "thief",
            PlacementKind::Wall   => "wall",
            PlacementKind::Exit   => "exit",
        }
    }
}

impl fmt::Display for PlacementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlacementKind {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        PlacementKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(t))
            .ok_or_else(|| {
                ScenarioError::Parse(format!(
                    "invalid kind {t:?}: expected \"sensor\", \"thief\", \"wall\", or \"exit\""
                ))
            })
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Initial layout of one simulation run.
///
/// Each feature list keeps placement order, which is what gives sensors and
/// thieves their ids.
#[derive(Clone, Debug)]
pub struct Scenario {
    width:    u32,
    height:   u32,
    occupant: Vec<Option<PlacementKind>>,
    sensors:  Vec<Cell>,
    thieves:  Vec<Cell>,
    walls:    Vec<Cell>,
    exits:    Vec<Cell>,
}

impl Scenario {
    pub fn new(width: u32, height: u32) -> ScenarioResult<Self> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(ScenarioError::EmptyBoard { width, height });
        }
        Ok(Self {
            width,
            height,
            occupant: vec![None; width as usize * height as usize],
            sensors:  Vec::new(),
            thieves:  Vec::new(),
            walls:    Vec::new(),
            exits:    Vec::new(),
        })
    }

    /// Empty scenario sized to `config`'s grid.
    pub fn for_config(config: &SimConfig) -> ScenarioResult<Self> {
        Self::new(config.width, config.height)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Put `kind` on `cell`.
    ///
    /// Fails without changing anything if the cell is off the board or
    /// already taken.
    pub fn place(&mut self, kind: PlacementKind, cell: Cell) -> ScenarioResult<()> {
        let i = self.index_of(cell).ok_or(ScenarioError::OutOfBounds { kind, cell })?;
        if let Some(existing) = self.occupant[i] {
            return Err(ScenarioError::Occupied { kind, cell, existing });
        }
        self.occupant[i] = Some(kind);
        self.list_mut(kind).push(cell);
        Ok(())
    }

    /// What is on `cell`, if anything.  `None` off the board.
    pub fn occupant(&self, cell: Cell) -> Option<PlacementKind> {
        self.index_of(cell).and_then(|i| self.occupant[i])
    }

    pub fn sensors(&self) -> &[Cell] {
        &self.sensors
    }

    pub fn thieves(&self) -> &[Cell] {
        &self.thieves
    }

    pub fn walls(&self) -> &[Cell] {
        &self.walls
    }

    pub fn exits(&self) -> &[Cell] {
        &self.exits
    }

    /// Cells holding `kind`, in placement order.
    pub fn cells(&self, kind: PlacementKind) -> &[Cell] {
        match kind {
            PlacementKind::Sensor => &self.sensors,
            PlacementKind::Thief  => &self.thieves,
            PlacementKind::Wall   => &self.walls,
            PlacementKind::Exit   => &self.exits,
        }
    }

    /// Every placement as `(kind, cell)`, grouped by kind in
    /// [`PlacementKind::ALL`] order.
    pub fn placements(&self) -> impl Iterator<Item = (PlacementKind, Cell)> + '_ {
        PlacementKind::ALL
            .into_iter()
            .flat_map(move |k| self.cells(k).iter().map(move |&c| (k, c)))
    }

    /// A runnable scenario has at least one sensor, one thief and one exit.
    /// Walls are optional.
    pub fn validate(&self) -> ScenarioResult<()> {
        for kind in [PlacementKind::Sensor, PlacementKind::Thief, PlacementKind::Exit] {
            if self.cells(kind).is_empty() {
                return Err(ScenarioError::Missing(kind));
            }
        }
        Ok(())
    }

    /// Static part of the scenario as a grid.  Every sensor gets
    /// `sensor_radius`; thieves are not part of the grid.
    pub fn to_grid(&self, sensor_radius: u32) -> ScenarioResult<GridModel> {
        let mut b = GridBuilder::new(self.width, self.height)?;
        for &cell in &self.walls {
            b.add_wall(cell)?;
        }
        for &cell in &self.exits {
            b.add_exit(cell)?;
        }
        for &cell in &self.sensors {
            b.add_sensor(cell, sensor_radius)?;
        }
        Ok(b.build())
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        let inside = cell.x >= 0
            && cell.y >= 0
            && (cell.x as u32) < self.width
            && (cell.y as u32) < self.height;
        inside.then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    fn list_mut(&mut self, kind: PlacementKind) -> &mut Vec<Cell> {
        match kind {
            PlacementKind::Sensor => &mut self.sensors,
            PlacementKind::Thief  => &mut self.thieves,
            PlacementKind::Wall   => &mut self.walls,
            PlacementKind::Exit   => &mut self.exits,
        }
    }
}
