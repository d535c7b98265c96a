//! Typing session segmentation.
//!
//! Splits the text snapshot stream into sessions based on:
//! 1. Source - a snapshot from a different package starts a new session
//! 2. Inactivity - a gap longer than the typing timeout starts a new session

use serde::Serialize;

use crate::event::TextEvent;
use crate::types::Timestamp;

/// Configuration for session segmentation.
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    /// Inactivity threshold in milliseconds. A snapshot arriving more than
    /// this long after the previous one starts a new session. Default: 5000.
    pub typing_timeout_ms: i64,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            typing_timeout_ms: 5_000,
        }
    }
}

/// A contiguous run of snapshots from one source.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypingSession {
    pub source: String,
    pub snapshots: Vec<TextEvent>,
    pub start_timestamp: Timestamp,
    pub end_timestamp: Timestamp,
}

impl TypingSession {
    fn open(first: &TextEvent) -> Self {
        Self {
            source: first.source.clone(),
            snapshots: vec![first.clone()],
            start_timestamp: first.timestamp,
            end_timestamp: first.timestamp,
        }
    }

    fn accepts(&self, snapshot: &TextEvent, config: &SegmentConfig) -> bool {
        let gap_ms = snapshot.timestamp - self.end_timestamp;
        snapshot.source == self.source && gap_ms <= config.typing_timeout_ms
    }

    fn push(&mut self, snapshot: &TextEvent) {
        self.end_timestamp = snapshot.timestamp;
        self.snapshots.push(snapshot.clone());
    }
}

/// Partitions text snapshots into typing sessions.
///
/// Input need not be sorted; it is stably sorted by timestamp first.
pub fn segment(events: &[TextEvent], config: &SegmentConfig) -> Vec<TypingSession> {
    let mut sorted: Vec<&TextEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    let mut sessions = Vec::new();
    let mut current: Option<TypingSession> = None;

    for snapshot in sorted {
        if let Some(session) = current.as_mut() {
            if session.accepts(snapshot, config) {
                session.push(snapshot);
                continue;
            }
        }

        if let Some(finished) = current.replace(TypingSession::open(snapshot)) {
            sessions.push(finished);
        }
    }

    sessions.extend(current);

    tracing::debug!(
        snapshots = events.len(),
        sessions = sessions.len(),
        "segmented typing sessions"
    );
    sessions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(timestamp: i64, source: &str, text: &str) -> TextEvent {
        TextEvent {
            timestamp,
            source: source.into(),
            text: text.into(),
        }
    }

    fn bounds(sessions: &[TypingSession]) -> Vec<(i64, i64, usize)> {
        sessions
            .iter()
            .map(|s| (s.start_timestamp, s.end_timestamp, s.snapshots.len()))
            .collect()
    }

    #[test]
    fn empty_input_yields_no_sessions() {
        assert!(segment(&[], &SegmentConfig::default()).is_empty());
    }

    #[test]
    fn gap_equal_to_timeout_stays_in_session() {
        let events = vec![snap(0, "app", "a"), snap(5_000, "app", "ab")];

        let sessions = segment(&events, &SegmentConfig::default());
        assert_eq!(bounds(&sessions), vec![(0, 5_000, 2)]);
    }

    #[test]
    fn gap_over_timeout_splits() {
        let events = vec![snap(0, "app", "a"), snap(5_001, "app", "ab")];

        let sessions = segment(&events, &SegmentConfig::default());
        assert_eq!(bounds(&sessions), vec![(0, 0, 1), (5_001, 5_001, 1)]);
    }

    #[test]
    fn source_change_always_splits() {
        let events = vec![
            snap(0, "com.a", "x"),
            snap(1, "com.b", "y"),
            snap(2, "com.a", "xz"),
        ];

        let sessions = segment(&events, &SegmentConfig::default());
        let sources: Vec<&str> = sessions.iter().map(|s| s.source.as_str()).collect();
        assert_eq!(sources, vec!["com.a", "com.b", "com.a"]);
    }

    #[test]
    fn gap_is_measured_from_last_snapshot_not_session_start() {
        let events = vec![
            snap(0, "app", "a"),
            snap(4_000, "app", "ab"),
            snap(8_000, "app", "abc"),
            snap(12_000, "app", "abcd"),
        ];

        let sessions = segment(&events, &SegmentConfig::default());
        assert_eq!(bounds(&sessions), vec![(0, 12_000, 4)]);
    }

    #[test]
    fn unsorted_input_is_sorted_stably() {
        let events = vec![
            snap(200, "app", "abc"),
            snap(100, "app", "first"),
            snap(100, "app", "second"),
        ];

        let sessions = segment(&events, &SegmentConfig::default());
        assert_eq!(sessions.len(), 1);
        let texts: Vec<&str> = sessions[0]
            .snapshots
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "second", "abc"]);
    }

    #[test]
    fn custom_timeout_is_respected() {
        let config = SegmentConfig {
            typing_timeout_ms: 100,
        };
        let events = vec![snap(0, "app", "a"), snap(150, "app", "ab")];

        assert_eq!(segment(&events, &config).len(), 2);
    }
}
