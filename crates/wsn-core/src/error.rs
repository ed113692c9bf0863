//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `WsnError` as one variant
//! where configuration problems need to bubble up unchanged.

use thiserror::Error;

/// The top-level error type for `wsn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WsnError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `wsn-core`.
pub type WsnResult<T> = Result<T, WsnError>;
