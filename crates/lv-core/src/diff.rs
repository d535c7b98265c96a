//! Edit reconstruction for a typing session.
//!
//! Snapshots hold the whole buffer, sampled at arbitrary moments. Comparing
//! the length of each snapshot with the previous one tells whether the user
//! was typing or deleting at that point. One edit is emitted every time that
//! inferred phase flips, plus one for the final state of the session.
//!
//! Lengths are counted in UTF-16 code units, the way the device app measures
//! its input buffer. The growth test is strict (`>`), so a
//! snapshot of equal length counts as "not growing": it flips typing into
//! deleting but never flips deleting back into typing.

use serde::{Deserialize, Serialize};

use crate::event::TextEvent;
use crate::typing::TypingSession;
use crate::types::Timestamp;

/// Whether a state was reached by net growth or net shrink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    Add,
    Remove,
}

impl EditKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl std::fmt::Display for EditKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One meaningful state of the text buffer during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub text: String,
    pub kind: EditKind,
    pub timestamp: Timestamp,
}

/// What the user is inferred to be doing between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

impl Phase {
    /// The phase to switch to, or `None` to stay.
    const fn transition(self, growing: bool) -> Option<Self> {
        match (self, growing) {
            (Self::Typing, false) => Some(Self::Deleting),
            (Self::Deleting, true) => Some(Self::Typing),
            _ => None,
        }
    }

    const fn edit_kind(self) -> EditKind {
        match self {
            Self::Typing => EditKind::Add,
            Self::Deleting => EditKind::Remove,
        }
    }
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Reconstructs the edits of one session.
///
/// The result may be empty, in which case the session carries nothing worth
/// showing.
pub fn reconstruct(session: &TypingSession) -> Vec<Edit> {
    let raw = match session.snapshots.as_slice() {
        [] => Vec::new(),
        [only] if is_blank(&only.text) => Vec::new(),
        [only] => vec![Edit {
            text: only.text.clone(),
            kind: EditKind::Add,
            timestamp: only.timestamp,
        }],
        snapshots => walk_phases(snapshots),
    };

    clean(raw)
}

fn walk_phases(snapshots: &[TextEvent]) -> Vec<Edit> {
    let mut edits = Vec::new();
    let mut phase = Phase::Typing;

    for pair in snapshots.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        let growing = utf16_len(&current.text) > utf16_len(&previous.text);

        if let Some(next) = phase.transition(growing) {
            // The edit records the last state of the phase that just ended.
            edits.push(Edit {
                text: previous.text.clone(),
                kind: phase.edit_kind(),
                timestamp: previous.timestamp,
            });
            phase = next;
        }
    }

    if let Some(last) = snapshots.last() {
        edits.push(Edit {
            text: last.text.clone(),
            kind: phase.edit_kind(),
            timestamp: last.timestamp,
        });
    }

    edits
}

/// Collapses repeated states and drops blank additions.
///
/// A blank `Remove` is kept: it means the field was cleared.
fn clean(mut edits: Vec<Edit>) -> Vec<Edit> {
    edits.dedup_by(|current, previous| {
        current.text == previous.text && current.kind == previous.kind
    });
    edits.retain(|edit| edit.kind == EditKind::Remove || !is_blank(&edit.text));
    edits
}
