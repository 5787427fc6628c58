//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tour_snapshots.csv`
//! - `tour_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, SnapshotRow};

/// Writes tour logs to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("tour_snapshots.csv"))?;
        snapshots.write_record([
            "tick",
            "x",
            "y",
            "z",
            "heading",
            "phase",
            "current_index",
            "narration_playing",
            "paused",
            "visitor_near",
        ])?;

        let mut events = Writer::from_path(dir.join("tour_events.csv"))?;
        events.write_record(["tick", "event", "detail"])?;

        Ok(Self {
            snapshots,
            events,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        self.finished = false;
        self.snapshots.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.position.x),
            format!("{:.3}", row.position.y),
            format!("{:.3}", row.position.z),
            format!("{:.3}", row.heading),
            row.phase.to_string(),
            row.current_index.to_string(),
            (row.is_narration_playing as u8).to_string(),
            (row.is_paused as u8).to_string(),
            (row.is_visitor_near as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.finished = false;
        self.events
            .write_record([row.tick.to_string().as_str(), row.event, row.detail.as_str()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
