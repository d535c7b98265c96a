//! Core type definitions with validation.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::event_kind::EventKind;

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// Converts a millisecond timestamp to a UTC datetime.
///
/// Returns `None` when the value is outside chrono's representable range.
pub fn to_datetime(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(timestamp)
}

/// Validation errors for a single event.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Timestamps are milliseconds since the epoch and cannot precede it.
    #[error("{kind} event has negative timestamp {timestamp}")]
    NegativeTimestamp { kind: EventKind, timestamp: Timestamp },

    /// A coordinate was NaN or infinite.
    #[error("location {field} must be finite, got {value}")]
    NonFiniteCoordinate { field: &'static str, value: f64 },

    /// A record was placed in the stream of another kind.
    #[error("{found} event found in the {expected} stream")]
    KindMismatch {
        expected: EventKind,
        found: EventKind,
    },
}
