//! Trip time model.
//!
//! # Design
//!
//! Durations travel through the engine as fractional hours (`f64`).  The
//! mapping to wall-clock time is held in `TripClock`:
//!
//!   timestamp = start + round_ms(elapsed_hours)
//!
//! Every timestamp is derived from the *cumulative* elapsed hours rather than
//! by adding per-interval durations to the previous timestamp, so rounding
//! never accumulates across a multi-day trip.  Timestamps carry millisecond
//! resolution; the shortest interval the engine will emit is
//! [`EPSILON_HOURS`] (3.6 ms), which always survives rounding.
//!
//! Timestamps are naive (home-terminal local time).  ELD logs are kept in
//! the home terminal's time zone, so midnight boundaries are naive midnights.

use chrono::{Duration, NaiveDateTime};

/// Durations below this are treated as zero (floating-point residue).
pub const EPSILON_HOURS: f64 = 1e-6;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Convert fractional hours to a `chrono::Duration`, rounded to the nearest
/// millisecond.
#[inline]
pub fn hours_to_duration(hours: f64) -> Duration {
    Duration::milliseconds((hours * MS_PER_HOUR).round() as i64)
}

/// Fractional hours from `earlier` to `later` (negative if reversed).
#[inline]
pub fn hours_between(earlier: NaiveDateTime, later: NaiveDateTime) -> f64 {
    (later - earlier).num_milliseconds() as f64 / MS_PER_HOUR
}

// ── TripClock ─────────────────────────────────────────────────────────────────

/// Converts elapsed trip hours to wall-clock timestamps.
///
/// `TripClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripClock {
    /// Timestamp of hour 0 (the start of the pickup buffer).
    pub start: NaiveDateTime,
    /// Hours elapsed since `start`: advanced by every emitted interval.
    pub elapsed_hours: f64,
}

impl TripClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self { start, elapsed_hours: 0.0 }
    }

    /// Advance the clock by `hours`.
    #[inline]
    pub fn advance(&mut self, hours: f64) {
        self.elapsed_hours += hours;
    }

    /// Timestamp corresponding to the current elapsed hours.
    #[inline]
    pub fn now(&self) -> NaiveDateTime {
        self.at(self.elapsed_hours)
    }

    /// Timestamp for an arbitrary elapsed-hours offset.
    #[inline]
    pub fn at(&self, elapsed_hours: f64) -> NaiveDateTime {
        self.start + hours_to_duration(elapsed_hours)
    }
}
