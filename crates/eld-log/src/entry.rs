use chrono::{NaiveDate, NaiveDateTime};

use eld_core::{DutyStatus, GeoPoint, hours_between};

/// One status segment on one calendar date.
///
/// `start_time` and `end_time` both fall on `date`, except that `end_time`
/// may be the following midnight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EldLogEntry {
    pub date:           NaiveDate,
    pub driver_name:    String,
    pub duty_status:    DutyStatus,
    pub start_time:     NaiveDateTime,
    pub end_time:       NaiveDateTime,
    pub location:       GeoPoint,
    pub distance_miles: f64,
    pub remark:         String,
}

impl EldLogEntry {
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        hours_between(self.start_time, self.end_time)
    }
}
