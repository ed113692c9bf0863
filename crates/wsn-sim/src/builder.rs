//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use wsn_agent::AgentStoreBuilder;
use wsn_core::{SimConfig, Tick};
use wsn_detect::{Detector, FreezeRule, Thresholds};
use wsn_grid::Navigator;
use wsn_scenario::Scenario;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<N, F>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — grid size, sensor radius, thresholds, pacing
/// - [`Scenario`] — sensors, thieves, walls and exits
/// - `N: Navigator` — e.g. [`wsn_grid::BfsNavigator`]
/// - `F: FreezeRule` — e.g. [`wsn_detect::CountingRule`]
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, scenario, BfsNavigator, CountingRule).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<N: Navigator, F: FreezeRule> {
    config:    SimConfig,
    scenario:  Scenario,
    navigator: N,
    rule:      F,
}

impl<N: Navigator, F: FreezeRule> SimBuilder<N, F> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, scenario: Scenario, navigator: N, rule: F) -> Self {
        Self { config, scenario, navigator, rule }
    }

    /// Validate inputs, freeze the grid, index the sensors and place the
    /// thieves.  Nothing is ticked.
    pub fn build(self) -> SimResult<Sim<N, F>> {
        // ── Validate ──────────────────────────────────────────────────────
        self.config.validate()?;
        let thresholds = Thresholds::from_config(&self.config)?;

        let (w, h) = (self.scenario.width(), self.scenario.height());
        if (w, h) != (self.config.width, self.config.height) {
            return Err(SimError::Config(format!(
                "scenario board is {w}x{h} but the configured grid is {}x{}",
                self.config.width, self.config.height
            )));
        }
        self.scenario.validate()?;

        // ── Static world ──────────────────────────────────────────────────
        let grid = self.scenario.to_grid(self.config.sensor_radius)?;
        let detector = Detector::new(&grid);

        // ── Thieves ───────────────────────────────────────────────────────
        let agents = AgentStoreBuilder::with_starts(self.scenario.thieves().iter().copied()).build();

        info!(
            width   = w,
            height  = h,
            sensors = grid.sensors().len(),
            thieves = agents.count,
            exits   = grid.exits().len(),
            k       = thresholds.k_detection,
            c       = thresholds.c_groups,
            "simulation built"
        );

        Ok(Sim {
            config:    self.config,
            thresholds,
            grid,
            detector,
            agents,
            navigator: self.navigator,
            rule:      self.rule,
            tick:      Tick::ZERO,
        })
    }
}
