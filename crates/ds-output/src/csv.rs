//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `snapshots.csv`
//! - `actions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use ds_sim::SimStatus;

use crate::writer::OutputWriter;
use crate::{ActionRow, OutputResult, SnapshotRow};

pub const SNAPSHOT_HEADER: [&str; 11] = [
    "tick", "day", "time", "energy", "sleep", "health", "happiness", "location", "activity",
    "status", "ended_by",
];

pub const ACTION_HEADER: [&str; 10] = [
    "tick", "action", "start_day", "start_time", "end_day", "end_time", "energy", "sleep",
    "health", "happiness",
];

/// Writes a recording to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    actions:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut actions = Writer::from_path(dir.join("actions.csv"))?;
        actions.write_record(ACTION_HEADER)?;

        Ok(Self { snapshots, actions, finished: false })
    }
}

fn clock(minute_of_day: u32) -> String {
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}

fn need(v: f64) -> String {
    format!("{v:.2}")
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        let (status, ended_by) = match row.status {
            SimStatus::Running => ("running", String::new()),
            SimStatus::Paused => ("paused", String::new()),
            SimStatus::Terminal(reason) => ("ended", reason.need().to_string()),
        };
        self.snapshots.write_record(&[
            row.tick.to_string(),
            row.day.to_string(),
            clock(row.hour * 60 + row.minute),
            need(row.energy),
            need(row.sleep),
            need(row.health),
            need(row.happiness),
            row.location.to_string(),
            row.activity.to_string(),
            status.to_owned(),
            ended_by,
        ])?;
        Ok(())
    }

    fn write_action(&mut self, row: &ActionRow) -> OutputResult<()> {
        self.actions.write_record(&[
            row.tick.to_string(),
            row.action.to_string(),
            row.start_day.to_string(),
            clock(row.start_minute),
            row.end_day.to_string(),
            clock(row.end_minute),
            need(row.energy),
            need(row.sleep),
            need(row.health),
            need(row.happiness),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.actions.flush()?;
        Ok(())
    }
}
