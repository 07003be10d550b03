//! `eld-log`: turns a duty timeline into ELD log entries and daily sheets.
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`entry`]     | `EldLogEntry`: one row of a daily log grid           |
//! | [`generator`] | `generate_log_entries`, `LogOptions`: midnight split |
//! | [`summary`]   | `DailyLog`, `daily_logs`: per-date totals            |
//!
//! Log dates are naive (home-terminal) calendar dates.  An interval that
//! crosses one or more midnights becomes one entry per date it touches.

pub mod entry;
pub mod generator;
pub mod summary;


pub use entry::EldLogEntry;
pub use generator::{LogOptions, generate_log_entries};
pub use summary::{DailyLog, daily_logs};
