//! Pairing of location fixes with connectivity samples, and navigation
//! between neighbouring fixes.

use crate::event::{ConnectivityEvent, LocationEvent};
use crate::types::Timestamp;

/// Returns the connectivity sample closest in time to `location`.
///
/// Scans the whole stream. When several samples are equally close the first
/// one in iteration order wins. Returns `None` for an empty stream.
pub fn nearest<'a>(
    location: &LocationEvent,
    connectivity: &'a [ConnectivityEvent],
) -> Option<&'a ConnectivityEvent> {
    let mut best: Option<(&ConnectivityEvent, u64)> = None;

    for candidate in connectivity {
        let distance = candidate.timestamp.abs_diff(location.timestamp);
        // Strict comparison keeps the earliest candidate on ties.
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((candidate, distance));
        }
    }

    best.map(|(candidate, _)| candidate)
}

/// A position within the location stream.
#[derive(Debug, Clone, Copy)]
pub struct LocationCursor<'a> {
    locations: &'a [LocationEvent],
    index: usize,
}

impl<'a> LocationCursor<'a> {
    /// Cursor at `index`, or `None` if out of bounds.
    pub const fn at(locations: &'a [LocationEvent], index: usize) -> Option<Self> {
        if index < locations.len() {
            Some(Self { locations, index })
        } else {
            None
        }
    }

    /// Cursor at the first fix taken at `timestamp`.
    pub fn find(locations: &'a [LocationEvent], timestamp: Timestamp) -> Option<Self> {
        locations
            .iter()
            .position(|l| l.timestamp == timestamp)
            .map(|index| Self { locations, index })
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn current(&self) -> &'a LocationEvent {
        &self.locations[self.index]
    }

    /// The fix before this one, if any.
    pub fn previous(&self) -> Option<Self> {
        self.index
            .checked_sub(1)
            .and_then(|index| Self::at(self.locations, index))
    }

    /// The fix after this one, if any.
    pub fn following(&self) -> Option<Self> {
        Self::at(self.locations, self.index + 1)
    }
}

/// Everything the detail view shows for one selected location.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LocationDetail<'a> {
    pub index: usize,
    pub location: &'a LocationEvent,
    pub nearest_connectivity: Option<&'a ConnectivityEvent>,
    pub previous: Option<&'a LocationEvent>,
    pub next: Option<&'a LocationEvent>,
}

impl<'a> LocationDetail<'a> {
    /// Builds the detail for the fix under `cursor`.
    pub fn new(cursor: LocationCursor<'a>, connectivity: &'a [ConnectivityEvent]) -> Self {
        let location = cursor.current();
        Self {
            index: cursor.index(),
            location,
            nearest_connectivity: nearest(location, connectivity),
            previous: cursor.previous().map(|c| c.current()),
            next: cursor.following().map(|c| c.current()),
        }
    }
}
