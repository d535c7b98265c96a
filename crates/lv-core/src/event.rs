//! Raw activity events captured on the device.

use serde::{Deserialize, Serialize};

use crate::event_kind::EventKind;
use crate::types::{Timestamp, ValidationError};

/// A GPS fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEvent {
    pub timestamp: Timestamp,
    pub lat: f64,
    pub lon: f64,
}

/// A snapshot of a text input buffer.
///
/// `text` is the entire content of the buffer at `timestamp`, not a delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEvent {
    pub timestamp: Timestamp,
    /// The package (application) that owns the input field.
    #[serde(rename = "package")]
    pub source: String,
    pub text: String,
}

/// A notification posted by an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub timestamp: Timestamp,
    /// The package (application) that posted the notification.
    #[serde(rename = "package")]
    pub source: String,
    pub title: String,
    pub text: String,
}

/// A Wi-Fi connectivity sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityEvent {
    pub timestamp: Timestamp,
    pub ssid: String,
    pub bssid: String,
}

/// A single timestamped record of one of the four kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Text(TextEvent),
    Location(LocationEvent),
    Notification(NotificationEvent),
    Connectivity(ConnectivityEvent),
}

impl Event {
    pub const fn timestamp(&self) -> Timestamp {
        match self {
            Self::Text(e) => e.timestamp,
            Self::Location(e) => e.timestamp,
            Self::Notification(e) => e.timestamp,
            Self::Connectivity(e) => e.timestamp,
        }
    }

    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Text(_) => EventKind::Text,
            Self::Location(_) => EventKind::Location,
            Self::Notification(_) => EventKind::Notification,
            Self::Connectivity(_) => EventKind::Connectivity,
        }
    }

    /// Checks the invariants that the type system cannot express.
    ///
    /// Timestamps must be non-negative and coordinates finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let timestamp = self.timestamp();
        if timestamp < 0 {
            return Err(ValidationError::NegativeTimestamp {
                kind: self.kind(),
                timestamp,
            });
        }

        if let Self::Location(location) = self {
            for (field, value) in [("lat", location.lat), ("lon", location.lon)] {
                if !value.is_finite() {
                    return Err(ValidationError::NonFiniteCoordinate { field, value });
                }
            }
        }

        Ok(())
    }
}

impl From<TextEvent> for Event {
    fn from(event: TextEvent) -> Self {
        Self::Text(event)
    }
}

impl From<LocationEvent> for Event {
    fn from(event: LocationEvent) -> Self {
        Self::Location(event)
    }
}

impl From<NotificationEvent> for Event {
    fn from(event: NotificationEvent) -> Self {
        Self::Notification(event)
    }
}

impl From<ConnectivityEvent> for Event {
    fn from(event: ConnectivityEvent) -> Self {
        Self::Connectivity(event)
    }
}

/// The contents of one log file: every stream, kept apart by kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogData {
    pub text: Vec<TextEvent>,
    pub location: Vec<LocationEvent>,
    pub notification: Vec<NotificationEvent>,
    pub connectivity: Vec<ConnectivityEvent>,
}

impl LogData {
    /// Total number of events across all streams.
    pub const fn len(&self) -> usize {
        self.text.len() + self.location.len() + self.notification.len() + self.connectivity.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds a log from loose events, routing each to its stream in order.
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut data = Self::default();
        for event in events {
            match event {
                Event::Text(e) => data.text.push(e),
                Event::Location(e) => data.location.push(e),
                Event::Notification(e) => data.notification.push(e),
                Event::Connectivity(e) => data.connectivity.push(e),
            }
        }
        data
    }
}
