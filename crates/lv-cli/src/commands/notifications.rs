//! Notifications command: every notification, most recent first.

use std::io::Write;

use anyhow::Result;
use lv_core::{Event, LogData, newest_first};

use super::util::{format_timestamp, quote};

/// Runs the notifications command.
pub fn run<W: Write>(writer: &mut W, data: &LogData, json: bool, utc: bool) -> Result<()> {
    let notifications = newest_first(&data.notification);

    if json {
        for notification in notifications {
            let event = Event::Notification(notification.clone());
            writeln!(writer, "{}", serde_json::to_string(&event)?)?;
        }
        return Ok(());
    }

    if notifications.is_empty() {
        writeln!(writer, "No notifications.")?;
        return Ok(());
    }

    for notification in notifications {
        writeln!(
            writer,
            "{}  [{}] {}",
            format_timestamp(notification.timestamp, utc),
            notification.source,
            notification.title
        )?;
        writeln!(writer, "    {}", quote(&notification.text))?;
    }
    Ok(())
}
