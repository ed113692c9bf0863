use thiserror::Error;

use wsn_agent::AgentError;
use wsn_core::WsnError;
use wsn_detect::DetectError;
use wsn_grid::GridError;
use wsn_scenario::ScenarioError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] WsnError),

    #[error("freeze thresholds: {0}")]
    Thresholds(#[from] DetectError),

    #[error("scenario: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("grid: {0}")]
    Grid(#[from] GridError),

    #[error("agent state: {0}")]
    Agent(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
