use thiserror::Error;

use wsn_core::AgentId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("agent {0} not found")]
    NotFound(AgentId),

    #[error("agent {0} is {1} and can no longer change")]
    Terminal(AgentId, &'static str),
}

pub type AgentResult<T> = Result<T, AgentError>;
