//! `eld-output`: trip plan export for the ELD planning engine.
//!
//! | Backend | Files created                                                |
//! |---------|--------------------------------------------------------------|
//! | CSV     | `duty_intervals.csv`, `log_entries.csv`, `daily_logs.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`TripOutputObserver`], which implements `eld_trip::TripObserver`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use eld_output::{CsvWriter, TripOutputObserver};
//! use eld_trip::{TripPlannerBuilder, TripRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = TripRequest::from_json_file(Path::new("trip.json"))?;
//! let planner = TripPlannerBuilder::new().build()?;
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TripOutputObserver::new(writer);
//! planner.plan_with(&request, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TripOutputObserver;
pub use row::{DailyLogRow, IntervalRow, LogEntryRow};
pub use writer::OutputWriter;
