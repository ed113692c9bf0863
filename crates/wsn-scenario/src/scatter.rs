//! Seeded random scenarios.

use wsn_core::{Cell, SimConfig, SimRng};

use crate::{PlacementKind, Scenario, ScenarioError, ScenarioResult};

/// How many of each feature to scatter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScatterCounts {
    pub sensors: usize,
    pub thieves: usize,
    pub walls:   usize,
    pub exits:   usize,
}

impl ScatterCounts {
    pub fn total(&self) -> usize {
        self.sensors + self.thieves + self.walls + self.exits
    }
}

impl Default for ScatterCounts {
    fn default() -> Self {
        Self { sensors: 12, thieves: 3, walls: 20, exits: 2 }
    }
}

/// Scatter `counts` features over distinct random cells of `config`'s grid.
///
/// The same `rng` seed always produces the same scenario.  No attempt is
/// made to keep exits reachable; a boxed-in thief simply never moves.
pub fn scatter(config: &SimConfig, counts: ScatterCounts, rng: &mut SimRng) -> ScenarioResult<Scenario> {
    let mut scenario = Scenario::for_config(config)?;
    let area = config.area();
    if counts.total() > area {
        return Err(ScenarioError::TooCrowded { requested: counts.total(), area });
    }

    let width = config.width as usize;
    let mut cells: Vec<Cell> = (0..area)
        .map(|i| Cell::new((i % width) as i32, (i / width) as i32))
        .collect();
    rng.shuffle(&mut cells);

    let plan = [
        (PlacementKind::Exit,   counts.exits),
        (PlacementKind::Sensor, counts.sensors),
        (PlacementKind::Wall,   counts.walls),
        (PlacementKind::Thief,  counts.thieves),
    ];
    let mut free = cells.into_iter();
    for (kind, n) in plan {
        for cell in free.by_ref().take(n) {
            scenario.place(kind, cell)?;
        }
    }
    Ok(scenario)
}
