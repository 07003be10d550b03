//! `TripOutputObserver<W>`: bridges `TripObserver` to an `OutputWriter`.

use eld_log::{DailyLog, EldLogEntry};
use eld_route::DutyInterval;
use eld_trip::{TripObserver, TripPlan, TripRequest};

use crate::row::{DailyLogRow, IntervalRow, LogEntryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TripObserver`] that writes intervals, log entries, and daily totals
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `TripObserver`
/// methods have no return value.  After `plan_with` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct TripOutputObserver<W: OutputWriter> {
    writer:      W,
    driver_name: String,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> TripOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, driver_name: String::new(), last_error: None }
    }

    /// Take the stored write error (if any) after planning returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after planning).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TripObserver for TripOutputObserver<W> {
    fn on_plan_start(&mut self, request: &TripRequest) {
        self.driver_name.clone_from(&request.driver_name);
    }

    fn on_interval(&mut self, interval: &DutyInterval) {
        let row = IntervalRow::new(&self.driver_name, interval);
        let result = self.writer.write_intervals(std::slice::from_ref(&row));
        self.store_err(result);
    }

    fn on_day(&mut self, log: &DailyLog, entries: &[EldLogEntry]) {
        let rows: Vec<LogEntryRow> = entries.iter().map(LogEntryRow::from).collect();
        if !rows.is_empty() {
            let result = self.writer.write_log_entries(&rows);
            self.store_err(result);
        }
        let result = self.writer.write_daily_log(&DailyLogRow::from(log));
        self.store_err(result);
    }

    fn on_plan_end(&mut self, _plan: &TripPlan) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
