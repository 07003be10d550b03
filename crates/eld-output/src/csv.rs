//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `duty_intervals.csv`
//! - `log_entries.csv`
//! - `daily_logs.csv`

use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DailyLogRow, IntervalRow, LogEntryRow, OutputResult};

pub const INTERVAL_HEADERS: [&str; 9] = [
    "driver_name", "status", "activity", "start_time", "end_time",
    "duration_hours", "lat", "lon", "distance_miles",
];

pub const LOG_ENTRY_HEADERS: [&str; 10] = [
    "date", "driver_name", "status", "start_time", "end_time",
    "duration_hours", "lat", "lon", "distance_miles", "remark",
];

pub const DAILY_LOG_HEADERS: [&str; 13] = [
    "date", "driver_name", "off_duty_hours", "sleeper_berth_hours", "driving_hours",
    "on_duty_hours", "total_on_duty_hours", "miles_driven", "starting_odometer",
    "ending_odometer", "duty_changes", "cycle_hours_used", "cycle_hours_available",
];

/// Writes trip plans to three CSV files.
pub struct CsvWriter {
    intervals:   Writer<File>,
    log_entries: Writer<File>,
    daily_logs:  Writer<File>,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut intervals = Writer::from_path(dir.join("duty_intervals.csv"))?;
        intervals.write_record(INTERVAL_HEADERS)?;

        let mut log_entries = Writer::from_path(dir.join("log_entries.csv"))?;
        log_entries.write_record(LOG_ENTRY_HEADERS)?;

        let mut daily_logs = Writer::from_path(dir.join("daily_logs.csv"))?;
        daily_logs.write_record(DAILY_LOG_HEADERS)?;

        Ok(Self { intervals, log_entries, daily_logs })
    }
}

fn timestamp(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

fn hours(h: f64) -> String {
    format!("{h:.4}")
}

impl OutputWriter for CsvWriter {
    fn write_intervals(&mut self, rows: &[IntervalRow]) -> OutputResult<()> {
        for row in rows {
            self.intervals.write_record(&[
                row.driver_name.clone(),
                row.status.to_string(),
                row.activity.to_string(),
                timestamp(row.start_time),
                timestamp(row.end_time),
                hours(row.duration_hours),
                row.lat.to_string(),
                row.lon.to_string(),
                format!("{:.3}", row.distance_miles),
            ])?;
        }
        Ok(())
    }

    fn write_log_entries(&mut self, rows: &[LogEntryRow]) -> OutputResult<()> {
        for row in rows {
            self.log_entries.write_record(&[
                row.date.to_string(),
                row.driver_name.clone(),
                row.status.to_string(),
                timestamp(row.start_time),
                timestamp(row.end_time),
                hours(row.duration_hours),
                row.lat.to_string(),
                row.lon.to_string(),
                format!("{:.3}", row.distance_miles),
                row.remark.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_daily_log(&mut self, row: &DailyLogRow) -> OutputResult<()> {
        self.daily_logs.write_record(&[
            row.date.to_string(),
            row.driver_name.clone(),
            hours(row.off_duty_hours),
            hours(row.sleeper_berth_hours),
            hours(row.driving_hours),
            hours(row.on_duty_hours),
            hours(row.total_on_duty_hours),
            format!("{:.3}", row.miles_driven),
            format!("{:.3}", row.starting_odometer),
            format!("{:.3}", row.ending_odometer),
            row.duty_changes.to_string(),
            hours(row.cycle_hours_used),
            hours(row.cycle_hours_available),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.intervals.flush()?;
        self.log_entries.flush()?;
        self.daily_logs.flush()?;
        Ok(())
    }
}
