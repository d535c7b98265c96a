//! Event kind enum as the single source of truth for kind strings.

use std::fmt;
use std::str::FromStr;

/// The four kinds of log record.
///
/// Variant order is the tie-break priority used when merging streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Text,
    Location,
    Notification,
    Connectivity,
}

impl EventKind {
    /// All kinds in merge priority order.
    pub const ALL: [Self; 4] = [
        Self::Text,
        Self::Location,
        Self::Notification,
        Self::Connectivity,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Location => "location",
            Self::Notification => "notification",
            Self::Connectivity => "connectivity",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "location" => Ok(Self::Location),
            "notification" => Ok(Self::Notification),
            "connectivity" => Ok(Self::Connectivity),
            _ => Err(UnknownEventKind(s.to_string())),
        }
    }
}

/// Error type for unknown event kind strings.
#[derive(Debug, Clone)]
pub struct UnknownEventKind(String);

impl fmt::Display for UnknownEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event kind: {}", self.0)
    }
}

impl std::error::Error for UnknownEventKind {}
