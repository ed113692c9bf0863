//! Top-level simulation configuration.
//!
//! The defaults reproduce the classic demo setup: a 20 × 20 grid, sensors
//! with a Chebyshev radius of 2, and a freeze rule of three qualifying ticks
//! of at least three simultaneous detections each, stepped once per second.

use std::time::Duration;

use crate::{Cell, WsnError, WsnResult};

/// Largest accepted sensor radius.  Squared reach stays inside `i32`.
pub const MAX_SENSOR_RADIUS: u32 = i16::MAX as u32;

/// Simulation configuration.
///
/// Typically loaded from a TOML file by the application crate (enable the
/// `serde` feature) and passed to the simulation builder.  Missing keys fall
/// back to [`SimConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of grid columns.
    pub width: u32,

    /// Number of grid rows.
    pub height: u32,

    /// Chebyshev detection radius shared by every sensor.
    pub sensor_radius: u32,

    /// Minimum number of sensors that must see a thief in one tick for that
    /// tick to qualify (`K_DETECTION`).
    pub k_detection: usize,

    /// Number of distinct qualifying ticks that freeze a thief (`C_GROUPS`).
    pub c_groups: usize,

    /// Real-time delay between ticks in `Sim::run`.  0 runs unpaced.
    pub tick_interval_ms: u64,

    /// Stop after this many ticks even if some thieves are still moving.
    /// `None` runs until every thief is frozen or escaped.
    pub max_ticks: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:            20,
            height:           20,
            sensor_radius:    2,
            k_detection:      3,
            c_groups:         3,
            tick_interval_ms: 1_000,
            max_ticks:        None,
        }
    }
}

impl SimConfig {
    /// Check the values that the rest of the framework relies on.
    pub fn validate(&self) -> WsnResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WsnError::Config(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(WsnError::Config("grid dimensions exceed i32 range".into()));
        }
        if self.sensor_radius > MAX_SENSOR_RADIUS {
            return Err(WsnError::Config(format!(
                "sensor_radius {} exceeds {MAX_SENSOR_RADIUS}",
                self.sensor_radius
            )));
        }
        if self.k_detection == 0 {
            return Err(WsnError::Config("k_detection must be at least 1".into()));
        }
        if self.c_groups == 0 {
            return Err(WsnError::Config("c_groups must be at least 1".into()));
        }
        Ok(())
    }

    /// Pause between ticks, or `None` when running unpaced.
    #[inline]
    pub fn tick_interval(&self) -> Option<Duration> {
        (self.tick_interval_ms > 0).then(|| Duration::from_millis(self.tick_interval_ms))
    }

    /// `true` if `cell` lies inside the configured grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
