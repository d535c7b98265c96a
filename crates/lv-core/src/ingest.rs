//! Loading and validation of JSON log files.
//!
//! A log file is a JSON object with four arrays, `text`, `location`,
//! `notification` and `connectivity`, each holding events tagged with
//! `"type"`. Everything downstream of this module assumes validated input.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::event::{Event, LogData};
use crate::event_kind::EventKind;
use crate::merge::append;
use crate::types::ValidationError;

/// Errors raised while turning raw bytes into [`LogData`].
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be read.
    #[error("failed to read {}", .path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a well-formed log.
    #[error("malformed log data in {origin}: {reason}")]
    MalformedInput { origin: String, reason: String },
}

impl IngestError {
    fn malformed(origin: &str, reason: impl ToString) -> Self {
        Self::MalformedInput {
            origin: origin.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// The file as written by the device, before per-kind checks.
#[derive(Debug, Deserialize)]
struct RawLogData {
    text: Vec<Event>,
    location: Vec<Event>,
    notification: Vec<Event>,
    connectivity: Vec<Event>,
}

/// Validates every event of one stream and unwraps it to its concrete type.
fn take_stream<T>(
    events: Vec<Event>,
    expected: EventKind,
    unwrap: impl Fn(Event) -> Option<T>,
) -> Result<Vec<T>, ValidationError> {
    events
        .into_iter()
        .map(|event| {
            event.validate()?;
            let found = event.kind();
            unwrap(event).ok_or(ValidationError::KindMismatch { expected, found })
        })
        .collect()
}

fn validate(raw: RawLogData) -> Result<LogData, ValidationError> {
    Ok(LogData {
        text: take_stream(raw.text, EventKind::Text, |e| match e {
            Event::Text(t) => Some(t),
            _ => None,
        })?,
        location: take_stream(raw.location, EventKind::Location, |e| match e {
            Event::Location(l) => Some(l),
            _ => None,
        })?,
        notification: take_stream(raw.notification, EventKind::Notification, |e| match e {
            Event::Notification(n) => Some(n),
            _ => None,
        })?,
        connectivity: take_stream(raw.connectivity, EventKind::Connectivity, |e| match e {
            Event::Connectivity(c) => Some(c),
            _ => None,
        })?,
    })
}

/// Parses and validates a log from a JSON string.
///
/// `origin` names the input in error messages. Streams are returned in file
/// order; see [`LogData::sorted`].
pub fn parse_log_data(json: &str, origin: &str) -> Result<LogData, IngestError> {
    let raw: RawLogData =
        serde_json::from_str(json).map_err(|e| IngestError::malformed(origin, e))?;
    validate(raw).map_err(|e| IngestError::malformed(origin, e))
}

/// Reads, validates and sorts one log file.
pub fn load_log_file(path: &Path) -> Result<LogData, IngestError> {
    let content =
        std::fs::read_to_string(path).map_err(|source| IngestError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        })?;

    let data = parse_log_data(&content, &path.display().to_string())?.sorted();
    tracing::debug!(
        path = %path.display(),
        text = data.text.len(),
        location = data.location.len(),
        notification = data.notification.len(),
        connectivity = data.connectivity.len(),
        "loaded log file"
    );
    Ok(data)
}

/// Loads the first file and appends every following one to it.
///
/// Fails on the first file that cannot be loaded. No paths yields an empty log.
pub fn load_log_files<P: AsRef<Path>>(paths: &[P]) -> Result<LogData, IngestError> {
    paths.iter().try_fold(LogData::default(), |combined, path| {
        Ok(append(combined, load_log_file(path.as_ref())?))
    })
}
