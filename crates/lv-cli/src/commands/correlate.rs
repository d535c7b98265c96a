//! Correlate command: nearest connectivity sample for each location fix.

use std::io::Write;

use anyhow::{Result, bail};
use lv_core::{LocationCursor, LocationDetail, LogData, Timestamp};

use super::util::format_timestamp;

/// Which location fixes to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    All,
    Index(usize),
    At(Timestamp),
}

/// Collects the details to show: one location, or all of them.
pub fn details(data: &LogData, selection: Selection) -> Result<Vec<LocationDetail<'_>>> {
    let cursors: Vec<LocationCursor<'_>> = match selection {
        Selection::Index(index) => {
            let Some(cursor) = LocationCursor::at(&data.location, index) else {
                bail!(
                    "location index {index} out of range ({} locations)",
                    data.location.len()
                );
            };
            vec![cursor]
        }
        Selection::At(timestamp) => {
            let Some(cursor) = LocationCursor::find(&data.location, timestamp) else {
                bail!("no location at timestamp {timestamp}");
            };
            vec![cursor]
        }
        Selection::All => (0..data.location.len())
            .filter_map(|i| LocationCursor::at(&data.location, i))
            .collect(),
    };

    Ok(cursors
        .into_iter()
        .map(|cursor| LocationDetail::new(cursor, &data.connectivity))
        .collect())
}

fn write_detail<W: Write>(writer: &mut W, detail: &LocationDetail<'_>, utc: bool) -> Result<()> {
    let location = detail.location;
    writeln!(
        writer,
        "#{} {}  {}, {}",
        detail.index,
        format_timestamp(location.timestamp, utc),
        location.lat,
        location.lon
    )?;

    match detail.nearest_connectivity {
        Some(network) => writeln!(
            writer,
            "  nearest network: {} ({}) at {}",
            network.ssid,
            network.bssid,
            format_timestamp(network.timestamp, utc)
        )?,
        None => writeln!(writer, "  nearest network: none")?,
    }

    let neighbour = |l: Option<&lv_core::LocationEvent>| {
        l.map_or_else(|| "-".to_string(), |l| format_timestamp(l.timestamp, utc))
    };
    writeln!(
        writer,
        "  previous: {}  next: {}",
        neighbour(detail.previous),
        neighbour(detail.next)
    )?;
    Ok(())
}

/// Runs the correlate command.
pub fn run<W: Write>(
    writer: &mut W,
    data: &LogData,
    selection: Selection,
    json: bool,
    utc: bool,
) -> Result<()> {
    let details = details(data, selection)?;

    if json {
        for detail in &details {
            writeln!(writer, "{}", serde_json::to_string(detail)?)?;
        }
        return Ok(());
    }

    if details.is_empty() {
        writeln!(writer, "No locations.")?;
        return Ok(());
    }

    for detail in &details {
        write_detail(writer, detail, utc)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use lv_core::{ConnectivityEvent, Event, LocationEvent};

    fn sample() -> LogData {
        LogData::from_events([
            Event::Location(LocationEvent {
                timestamp: 10_000,
                lat: 55.75,
                lon: 37.61,
            }),
            Event::Location(LocationEvent {
                timestamp: 20_000,
                lat: 55.76,
                lon: 37.62,
            }),
            Event::Connectivity(ConnectivityEvent {
                timestamp: 12_000,
                ssid: "home".into(),
                bssid: "aa:bb".into(),
            }),
            Event::Connectivity(ConnectivityEvent {
                timestamp: 8_000,
                ssid: "street".into(),
                bssid: "cc:dd".into(),
            }),
        ])
    }

    fn render(data: &LogData, selection: Selection, json: bool) -> String {
        let mut output = Vec::new();
        run(&mut output, data, selection, json, true).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn correlates_every_location() {
        // At 10s both samples are 2s away; the first in the stream wins.
        assert_snapshot!(render(&sample(), Selection::All, false), @r"
        #0 01.01.70 00:00:10  55.75, 37.61
          nearest network: home (aa:bb) at 01.01.70 00:00:12
          previous: -  next: 01.01.70 00:00:20
        #1 01.01.70 00:00:20  55.76, 37.62
          nearest network: home (aa:bb) at 01.01.70 00:00:12
          previous: 01.01.70 00:00:10  next: -
        ");
    }

    #[test]
    fn single_location_json() {
        let output = render(&sample(), Selection::Index(1), true);
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();

        assert_eq!(value["index"], 1);
        assert_eq!(value["nearest_connectivity"]["ssid"], "home");
        assert_eq!(value["previous"]["timestamp"], 10_000);
        assert!(value["next"].is_null());
    }

    #[test]
    fn no_connectivity_reports_none() {
        let data = LogData {
            connectivity: Vec::new(),
            ..sample()
        };
        let output = render(&data, Selection::Index(0), false);
        assert!(output.contains("nearest network: none"));
    }

    #[test]
    fn out_of_range_index_fails() {
        let mut output = Vec::new();
        let err = run(&mut output, &sample(), Selection::Index(5), false, true).unwrap_err();
        assert_eq!(err.to_string(), "location index 5 out of range (2 locations)");
    }

    #[test]
    fn selects_location_by_timestamp() {
        let output = render(&sample(), Selection::At(20_000), false);
        assert!(output.starts_with("#1 01.01.70 00:00:20"), "output: {output}");
        assert!(output.contains("previous: 01.01.70 00:00:10  next: -"));
    }

    #[test]
    fn unknown_timestamp_fails() {
        let mut output = Vec::new();
        let err = run(&mut output, &sample(), Selection::At(15_000), false, true).unwrap_err();
        assert_eq!(err.to_string(), "no location at timestamp 15000");
    }

    #[test]
    fn no_locations() {
        assert_eq!(render(&LogData::default(), Selection::All, false), "No locations.\n");
    }
}
