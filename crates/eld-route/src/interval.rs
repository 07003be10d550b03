//! The unit of the duty timeline.

use chrono::NaiveDateTime;

use eld_core::{DutyStatus, GeoPoint, hours_between};

/// Why the driver is in a given status.  Printed as the log remark.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Activity {
    Pickup,
    Driving,
    FuelStop,
    /// Qualifying rest that resets the daily counters.
    Rest,
    /// Extended rest that also resets the cycle.
    Restart,
    Dropoff,
}

impl Activity {
    pub fn remark(self) -> &'static str {
        match self {
            Activity::Pickup   => "Loading/Pickup",
            Activity::Driving  => "Driving",
            Activity::FuelStop => "Fuel stop",
            Activity::Rest     => "Mandatory 10-hour rest",
            Activity::Restart  => "34-hour restart",
            Activity::Dropoff  => "Unloading/Delivery",
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.remark())
    }
}

/// One contiguous stretch of a single duty status.
///
/// Emitted by the segmenter, never mutated afterwards.  Within a timeline
/// each interval starts exactly where the previous one ended.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutyInterval {
    pub status:         DutyStatus,
    pub start_time:     NaiveDateTime,
    pub end_time:       NaiveDateTime,
    /// Where the interval begins.  For driving, the start of the chunk.
    pub location:       GeoPoint,
    /// Miles driven; 0 for every non-driving interval.
    pub distance_miles: f64,
    pub activity:       Activity,
}

impl DutyInterval {
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        hours_between(self.start_time, self.end_time)
    }

    #[inline]
    pub fn is_driving(&self) -> bool {
        self.status == DutyStatus::Driving
    }
}
