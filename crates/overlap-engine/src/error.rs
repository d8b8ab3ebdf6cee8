//! Error types for overlap-engine operations.

use thiserror::Error;

/// Errors that can occur while validating slots or resolving time zones.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A malformed weekly slot (out-of-range day/hour, or start >= end).
    /// Rejected at construction — never clamped into range.
    #[error("Invalid slot: {0}")]
    InvalidSlot(String),

    /// A time-zone identifier the catalog cannot resolve. Raised when the
    /// normalizer looks up the slot's offset; the caller decides whether to
    /// skip that slot or fail the whole match.
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
}

/// Convenience alias used throughout overlap-engine.
pub type Result<T> = std::result::Result<T, EngineError>;
