//! Shared utilities for CLI commands.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use lv_core::{LogData, Timestamp, load_log_files, to_datetime};

/// Display format for timestamps: `dd.mm.yy HH:MM:SS`.
const DISPLAY_FORMAT: &str = "%d.%m.%y %H:%M:%S";

/// Formats a millisecond timestamp for display.
///
/// Values chrono cannot represent are shown as raw milliseconds.
pub fn format_timestamp(timestamp: Timestamp, utc: bool) -> String {
    let Some(dt) = to_datetime(timestamp) else {
        return format!("{timestamp}ms");
    };

    if utc {
        dt.format(DISPLAY_FORMAT).to_string()
    } else {
        dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
    }
}

/// Loads the given log files, appending each one after the first.
pub fn load_logs(files: &[PathBuf]) -> anyhow::Result<LogData> {
    let data = load_log_files(files).context("failed to load log files")?;
    tracing::debug!(files = files.len(), events = data.len(), "loaded logs");
    Ok(data)
}

/// Renders text for a single display line, marking blank content.
pub fn quote(text: &str) -> String {
    if text.trim().is_empty() {
        "[empty]".to_string()
    } else {
        format!("{text:?}")
    }
}
