//! Timeline command: every event of every stream in chronological order.

use std::io::Write;

use anyhow::Result;
use lv_core::{Event, EventKind, LogData};

use super::util::{format_timestamp, quote};

/// One-line description of an event, without its timestamp.
fn describe(event: &Event) -> String {
    match event {
        Event::Text(e) => format!("[{}] {}", e.source, quote(&e.text)),
        Event::Location(e) => format!("{}, {}", e.lat, e.lon),
        Event::Notification(e) => format!("[{}] {}: {}", e.source, e.title, quote(&e.text)),
        Event::Connectivity(e) => format!("{} ({})", e.ssid, e.bssid),
    }
}

/// Runs the timeline command.
///
/// With `json`, each event is written as one JSON line in the input format.
pub fn run<W: Write>(
    writer: &mut W,
    data: &LogData,
    kind: Option<EventKind>,
    json: bool,
    utc: bool,
) -> Result<()> {
    let events: Vec<Event> = data
        .timeline()
        .into_iter()
        .filter(|e| kind.is_none_or(|k| e.kind() == k))
        .collect();

    if json {
        for event in &events {
            writeln!(writer, "{}", serde_json::to_string(event)?)?;
        }
        return Ok(());
    }

    if events.is_empty() {
        writeln!(writer, "No events.")?;
        return Ok(());
    }

    for event in &events {
        writeln!(
            writer,
            "{}  {:<12} {}",
            format_timestamp(event.timestamp(), utc),
            event.kind(),
            describe(event)
        )?;
    }

    Ok(())
}
