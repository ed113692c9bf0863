//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per placed feature, in placement order.  Sensor ids follow the
//! order of `sensor` rows; thief ids follow the order of `thief` rows.
//!
//! ```csv
//! kind,x,y
//! sensor,5,5
//! sensor,9,4
//! thief,1,1
//! wall,7,5
//! exit,19,10
//! ```
//!
//! `kind` is case-insensitive.  A row that lands outside the board or on an
//! occupied cell fails the whole load; nothing is silently skipped.

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use wsn_core::{Cell, SimConfig};

use crate::{PlacementKind, Scenario, ScenarioError, ScenarioResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlacementRecord {
    kind: String,
    x:    i32,
    y:    i32,
}

#[derive(Serialize)]
struct PlacementRow {
    kind: PlacementKind,
    x:    i32,
    y:    i32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scenario sized to `config`'s grid from a CSV file.
pub fn load_scenario_csv(path: &Path, config: &SimConfig) -> ScenarioResult<Scenario> {
    let file = std::fs::File::open(path).map_err(ScenarioError::Io)?;
    load_scenario_reader(file, config)
}

/// Like [`load_scenario_csv`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(reader: R, config: &SimConfig) -> ScenarioResult<Scenario> {
    let mut scenario = Scenario::for_config(config)?;
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    for (line, result) in csv_reader.deserialize::<PlacementRecord>().enumerate() {
        // Header is line 1.
        let at_row = |e: ScenarioError| ScenarioError::Row { row: line + 2, source: Box::new(e) };
        let row = result.map_err(|e| at_row(ScenarioError::Parse(e.to_string())))?;
        let kind: PlacementKind = row.kind.parse().map_err(at_row)?;
        scenario.place(kind, Cell::new(row.x, row.y)).map_err(at_row)?;
    }

    debug!(
        sensors = scenario.sensors().len(),
        thieves = scenario.thieves().len(),
        walls   = scenario.walls().len(),
        exits   = scenario.exits().len(),
        "scenario loaded"
    );
    Ok(scenario)
}

/// Write `scenario` as `kind,x,y` rows to a new file at `path`.
pub fn write_scenario_csv(path: &Path, scenario: &Scenario) -> ScenarioResult<()> {
    let file = std::fs::File::create(path)?;
    write_scenario_writer(file, scenario)
}

/// Like [`write_scenario_csv`] but accepts any `Write` sink.
pub fn write_scenario_writer<W: Write>(writer: W, scenario: &Scenario) -> ScenarioResult<()> {
    let mut w = csv::Writer::from_writer(writer);
    for (kind, cell) in scenario.placements() {
        w.serialize(PlacementRow { kind, x: cell.x, y: cell.y })
            .map_err(|e| ScenarioError::Parse(e.to_string()))?;
    }
    w.flush()?;
    Ok(())
}
