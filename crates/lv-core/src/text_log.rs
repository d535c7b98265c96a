//! Typing history grouped by source, ready for display.

use std::cmp::Reverse;
use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::diff::{Edit, reconstruct};
use crate::event::TextEvent;
use crate::types::Timestamp;
use crate::typing::{SegmentConfig, TypingSession, segment};

/// A session together with its reconstructed edits. Never has zero edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionEdits {
    #[serde(flatten)]
    pub session: TypingSession,
    pub edits: Vec<Edit>,
}

/// All sessions of one source, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceGroup {
    pub source: String,
    /// Start of the most recent session in the group.
    pub latest_start: Timestamp,
    pub sessions: Vec<SessionEdits>,
}

/// Segments `events`, reconstructs each session's edits and groups the
/// sessions by source.
///
/// Sessions without edits are dropped. Groups are ordered by their most
/// recent session start, descending; equal starts fall back to the source name.
pub fn build(events: &[TextEvent], config: &SegmentConfig) -> Vec<SourceGroup> {
    let sessions = segment(events, config);
    let session_count = sessions.len();

    // collect() keeps session order.
    let with_edits: Vec<SessionEdits> = sessions
        .into_par_iter()
        .filter_map(|session| {
            let edits = reconstruct(&session);
            (!edits.is_empty()).then_some(SessionEdits { session, edits })
        })
        .collect();

    tracing::debug!(
        sessions = session_count,
        kept = with_edits.len(),
        "reconstructed typing edits"
    );

    group_by_source(with_edits)
}

fn group_by_source(sessions: Vec<SessionEdits>) -> Vec<SourceGroup> {
    let mut groups: HashMap<String, Vec<SessionEdits>> = HashMap::new();
    for entry in sessions {
        groups
            .entry(entry.session.source.clone())
            .or_default()
            .push(entry);
    }

    let mut groups: Vec<SourceGroup> = groups
        .into_iter()
        .map(|(source, mut sessions)| {
            sessions.sort_by_key(|s| Reverse(s.session.start_timestamp));
            let latest_start = sessions
                .first()
                .map_or(Timestamp::MIN, |s| s.session.start_timestamp);
            SourceGroup {
                source,
                latest_start,
                sessions,
            }
        })
        .collect();

    groups.sort_by(|a, b| {
        b.latest_start
            .cmp(&a.latest_start)
            .then_with(|| a.source.cmp(&b.source))
    });
    groups
}
