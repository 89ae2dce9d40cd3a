//! Framework error type.
//!
//! Sub-crates define their own error enums; `BdiError` covers the shared
//! primitives, which can only fail validation.

use thiserror::Error;

/// The top-level error type for `bdi-core`.
#[derive(Debug, Error)]
pub enum BdiError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `bdi-core`.
pub type BdiResult<T> = Result<T, BdiError>;
