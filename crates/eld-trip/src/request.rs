//! Trip input.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "driver_name": "R. Alvarez",
//!   "trip_start": "2026-03-02T08:00:00",
//!   "current_cycle_hours": 22.5,
//!   "segments": [
//!     { "start": { "lat": 41.88, "lon": -87.63 },
//!       "end":   { "lat": 39.10, "lon": -94.58 },
//!       "distance_miles": 510.0, "driving_time_hours": 8.2 }
//!   ]
//! }
//! ```
//!
//! `current_daily_drive_hours` and `current_daily_duty_hours` are optional
//! and default to 0 (driver starts the trip rested).

use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use eld_core::RouteSegment;

use crate::TripResult;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub driver_name: String,
    /// Start of the pickup buffer, home-terminal time.
    pub trip_start: NaiveDateTime,
    /// On-duty hours already used in the current cycle.
    pub current_cycle_hours: f64,
    #[serde(default)]
    pub current_daily_drive_hours: f64,
    #[serde(default)]
    pub current_daily_duty_hours: f64,
    pub segments: Vec<RouteSegment>,
}

impl TripRequest {
    /// A request for a rested driver with `current_cycle_hours` already used.
    pub fn new(
        driver_name:         impl Into<String>,
        trip_start:          NaiveDateTime,
        current_cycle_hours: f64,
        segments:            Vec<RouteSegment>,
    ) -> Self {
        Self {
            driver_name: driver_name.into(),
            trip_start,
            current_cycle_hours,
            current_daily_drive_hours: 0.0,
            current_daily_duty_hours: 0.0,
            segments,
        }
    }

    /// Start the trip partway through a duty period.
    pub fn with_daily_hours(mut self, drive_hours: f64, duty_hours: f64) -> Self {
        self.current_daily_drive_hours = drive_hours;
        self.current_daily_duty_hours = duty_hours;
        self
    }

    pub fn total_distance_miles(&self) -> f64 {
        self.segments.iter().map(|s| s.distance_miles).sum()
    }

    pub fn total_driving_hours(&self) -> f64 {
        self.segments.iter().map(|s| s.driving_time_hours).sum()
    }

    pub fn from_reader<R: Read>(reader: R) -> TripResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_file(path: &Path) -> TripResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}
