//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid speed multiplier {0} (expected 1, 2 or 4)")]
    InvalidSpeed(u32),

    #[error("invalid game time day {day} {hour:02}:{minute:02}")]
    InvalidTime { day: u32, hour: u32, minute: u32 },

    #[error("need values must be finite, got {0}")]
    InvalidNeed(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ds-core`.
pub type CoreResult<T> = Result<T, CoreError>;
