//! Chronological merging of the per-kind streams.
//!
//! Every ordering here is a stable sort on the timestamp, so events that share
//! a timestamp keep their relative input order. For the unified timeline the
//! input order is the streams concatenated as text, location, notification,
//! connectivity, which makes ties resolve by kind priority.

use std::cmp::Reverse;

use crate::event::{Event, LogData, NotificationEvent};

/// Merges every stream of `data` into one timeline sorted by timestamp.
pub fn merge(data: &LogData) -> Vec<Event> {
    let mut events: Vec<Event> = Vec::with_capacity(data.len());
    events.extend(data.text.iter().cloned().map(Event::from));
    events.extend(data.location.iter().cloned().map(Event::from));
    events.extend(data.notification.iter().cloned().map(Event::from));
    events.extend(data.connectivity.iter().cloned().map(Event::from));

    events.sort_by_key(Event::timestamp);
    events
}

/// Combines a second log into an already loaded one.
///
/// Each kind is concatenated (`existing` first) and sorted on its own. Nothing
/// is deduplicated: identical events from both logs are both kept.
pub fn append(existing: LogData, new: LogData) -> LogData {
    tracing::debug!(
        existing = existing.len(),
        new = new.len(),
        "appending log data"
    );

    let LogData {
        mut text,
        mut location,
        mut notification,
        mut connectivity,
    } = existing;

    text.extend(new.text);
    location.extend(new.location);
    notification.extend(new.notification);
    connectivity.extend(new.connectivity);

    LogData {
        text,
        location,
        notification,
        connectivity,
    }
    .sorted()
}

/// Notifications ordered most recent first; ties keep input order.
pub fn newest_first(notifications: &[NotificationEvent]) -> Vec<&NotificationEvent> {
    let mut sorted: Vec<&NotificationEvent> = notifications.iter().collect();
    sorted.sort_by_key(|n| Reverse(n.timestamp));
    sorted
}

impl LogData {
    /// Sorts each stream by timestamp independently.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.text.sort_by_key(|e| e.timestamp);
        self.location.sort_by_key(|e| e.timestamp);
        self.notification.sort_by_key(|e| e.timestamp);
        self.connectivity.sort_by_key(|e| e.timestamp);
        self
    }

    /// The unified timeline of this log. See [`merge`].
    pub fn timeline(&self) -> Vec<Event> {
        merge(self)
    }
}
