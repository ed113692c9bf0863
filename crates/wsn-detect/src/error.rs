use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectError {
    #[error("k_detection must be at least 1")]
    ZeroDetectionThreshold,

    #[error("c_groups must be at least 1")]
    ZeroGroupThreshold,
}

pub type DetectResult<T> = Result<T, DetectError>;
