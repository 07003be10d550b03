//! The `OutputWriter` trait implemented by backend writers.

use crate::{DailyLogRow, IntervalRow, LogEntryRow, OutputResult};

/// Trait implemented by export backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with [`TripOutputObserver::take_error`].
///
/// [`TripOutputObserver::take_error`]: crate::TripOutputObserver::take_error
pub trait OutputWriter {
    /// Write a batch of duty intervals.
    fn write_intervals(&mut self, rows: &[IntervalRow]) -> OutputResult<()>;

    /// Write a batch of log entries.
    fn write_log_entries(&mut self, rows: &[LogEntryRow]) -> OutputResult<()>;

    /// Write one daily log row.
    fn write_daily_log(&mut self, row: &DailyLogRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Safe to call more than once; rows written afterwards are still
    /// accepted, so one writer can collect several trips.
    fn finish(&mut self) -> OutputResult<()>;
}
