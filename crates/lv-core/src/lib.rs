//! Core logic for the device activity log viewer.
//!
//! This crate contains the fundamental types and logic for:
//! - Ingestion: loading and validating JSON log files
//! - Merging: one chronological timeline out of the four event streams
//! - Correlation: the connectivity sample nearest to a location fix
//! - Typing sessions: segmenting text snapshots and reconstructing edits

pub mod correlate;
pub mod diff;
pub mod event;
pub mod event_kind;
pub mod ingest;
pub mod merge;
pub mod text_log;
pub mod types;
pub mod typing;

pub use correlate::{LocationCursor, LocationDetail, nearest};
pub use diff::{Edit, EditKind};
pub use event::{ConnectivityEvent, Event, LocationEvent, LogData, NotificationEvent, TextEvent};
pub use event_kind::{EventKind, UnknownEventKind};
pub use ingest::{IngestError, load_log_file, load_log_files, parse_log_data};
pub use merge::{append, merge, newest_first};
pub use text_log::{SessionEdits, SourceGroup};
pub use types::{Timestamp, ValidationError, to_datetime};
pub use typing::{SegmentConfig, TypingSession, segment};
