//! Sensor detection with line of sight.
//!
//! # Rule
//!
//! Sensor `s` sees a thief at cell `a` iff
//!
//! 1. `chebyshev(s.cell, a) <= s.radius`, and
//! 2. no wall lies on the Bresenham line from `s.cell` to `a`, both endpoints
//!    included.
//!
//! # Spatial index
//!
//! Sensors are bulk-loaded into an `rstar` R-tree keyed by integer cell.  A
//! query collects candidates within the Euclidean circle circumscribing the
//! largest radius square (`r² + r²`), then the exact rule above filters them.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use wsn_core::{Cell, SensorId};
use wsn_grid::{GridModel, Sensor};

use crate::DetectionSet;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct SensorEntry {
    point: [i32; 2], // [x, y]
    id:    SensorId,
}

impl RTreeObject for SensorEntry {
    type Envelope = AABB<[i32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SensorEntry {
    fn distance_2(&self, point: &[i32; 2]) -> i32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Detector ──────────────────────────────────────────────────────────────────

/// Answers "which sensors see this cell?" for one grid.
///
/// Build once per simulation; [`detect`](Self::detect) is pure, so repeated
/// calls with the same cell return identical sets.
pub struct Detector {
    index:   RTree<SensorEntry>,
    /// Squared Euclidean bound covering every sensor's Chebyshev square.
    reach_2: i32,
}

impl Detector {
    pub fn new(grid: &GridModel) -> Self {
        let entries: Vec<SensorEntry> = grid
            .sensors()
            .iter()
            .map(|s| SensorEntry { point: [s.cell.x, s.cell.y], id: s.id })
            .collect();
        // `GridBuilder` caps radii at `MAX_SENSOR_RADIUS`.
        let r = grid.max_sensor_radius() as i32;
        Self {
            index:   RTree::bulk_load(entries),
            reach_2: 2 * r * r,
        }
    }

    /// Number of indexed sensors.
    pub fn sensor_count(&self) -> usize {
        self.index.size()
    }

    /// Every sensor that sees a thief standing on `at`.
    pub fn detect(&self, grid: &GridModel, at: Cell) -> DetectionSet {
        self.index
            .locate_within_distance([at.x, at.y], self.reach_2)
            .filter_map(|e| grid.sensor(e.id))
            .filter(|s| sees(grid, s, at))
            .map(|s| s.id)
            .collect()
    }
}

/// `true` if `sensor` sees `at`: within radius and with a clear line.
pub fn sees(grid: &GridModel, sensor: &Sensor, at: Cell) -> bool {
    sensor.in_range(at) && grid.line_is_clear(sensor.cell, at)
}
