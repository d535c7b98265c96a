//! Texts command: typing sessions grouped by application.
//!
//! Each session shows its time range and the reconstructed edits, `+` for
//! text reached by typing and `-` for text reached by deleting.

use std::io::Write;

use anyhow::Result;
use lv_core::{EditKind, LogData, SegmentConfig, SourceGroup, text_log};

use super::util::{format_timestamp, quote};

const fn marker(kind: EditKind) -> char {
    match kind {
        EditKind::Add => '+',
        EditKind::Remove => '-',
    }
}

fn write_group<W: Write>(writer: &mut W, group: &SourceGroup, utc: bool) -> Result<()> {
    writeln!(writer, "{}", group.source)?;
    for entry in &group.sessions {
        writeln!(
            writer,
            "  {} - {}",
            format_timestamp(entry.session.start_timestamp, utc),
            format_timestamp(entry.session.end_timestamp, utc)
        )?;
        for edit in &entry.edits {
            writeln!(writer, "    {} {}", marker(edit.kind), quote(&edit.text))?;
        }
    }
    Ok(())
}

/// Runs the texts command.
pub fn run<W: Write>(
    writer: &mut W,
    data: &LogData,
    config: &SegmentConfig,
    json: bool,
    utc: bool,
) -> Result<()> {
    let groups = text_log::build(&data.text, config);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&groups)?)?;
        return Ok(());
    }

    if groups.is_empty() {
        writeln!(writer, "No typing sessions.")?;
        return Ok(());
    }

    for group in &groups {
        write_group(writer, group, utc)?;
    }
    Ok(())
}
