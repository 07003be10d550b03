//! Plain data row types written by output backends.

use chrono::{NaiveDate, NaiveDateTime};

use eld_log::{DailyLog, EldLogEntry};
use eld_route::DutyInterval;

/// One duty interval, flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalRow {
    pub driver_name:    String,
    /// Short status code (`OFF`, `SB`, `D`, `ON`).
    pub status:         &'static str,
    pub activity:       &'static str,
    pub start_time:     NaiveDateTime,
    pub end_time:       NaiveDateTime,
    pub duration_hours: f64,
    pub lat:            f64,
    pub lon:            f64,
    pub distance_miles: f64,
}

impl IntervalRow {
    pub fn new(driver_name: &str, interval: &DutyInterval) -> Self {
        Self {
            driver_name:    driver_name.to_string(),
            status:         interval.status.code(),
            activity:       interval.activity.remark(),
            start_time:     interval.start_time,
            end_time:       interval.end_time,
            duration_hours: interval.duration_hours(),
            lat:            interval.location.lat,
            lon:            interval.location.lon,
            distance_miles: interval.distance_miles,
        }
    }
}

/// One row of a daily log grid.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntryRow {
    pub date:           NaiveDate,
    pub driver_name:    String,
    pub status:         &'static str,
    pub start_time:     NaiveDateTime,
    pub end_time:       NaiveDateTime,
    pub duration_hours: f64,
    pub lat:            f64,
    pub lon:            f64,
    pub distance_miles: f64,
    pub remark:         String,
}

impl From<&EldLogEntry> for LogEntryRow {
    fn from(entry: &EldLogEntry) -> Self {
        Self {
            date:           entry.date,
            driver_name:    entry.driver_name.clone(),
            status:         entry.duty_status.code(),
            start_time:     entry.start_time,
            end_time:       entry.end_time,
            duration_hours: entry.duration_hours(),
            lat:            entry.location.lat,
            lon:            entry.location.lon,
            distance_miles: entry.distance_miles,
            remark:         entry.remark.clone(),
        }
    }
}

/// Totals for one log date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyLogRow {
    pub date:                  NaiveDate,
    pub driver_name:           String,
    pub off_duty_hours:        f64,
    pub sleeper_berth_hours:   f64,
    pub driving_hours:         f64,
    pub on_duty_hours:         f64,
    pub total_on_duty_hours:   f64,
    pub miles_driven:          f64,
    pub starting_odometer:     f64,
    pub ending_odometer:       f64,
    pub duty_changes:          u64,
    pub cycle_hours_used:      f64,
    pub cycle_hours_available: f64,
}

impl From<&DailyLog> for DailyLogRow {
    fn from(log: &DailyLog) -> Self {
        Self {
            date:                  log.date,
            driver_name:           log.driver_name.clone(),
            off_duty_hours:        log.off_duty_hours,
            sleeper_berth_hours:   log.sleeper_berth_hours,
            driving_hours:         log.driving_hours,
            on_duty_hours:         log.on_duty_not_driving_hours,
            total_on_duty_hours:   log.total_on_duty_hours(),
            miles_driven:          log.miles_driven(),
            starting_odometer:     log.starting_odometer,
            ending_odometer:       log.ending_odometer,
            duty_changes:          log.duty_changes as u64,
            cycle_hours_used:      log.cycle_hours_used,
            cycle_hours_available: log.cycle_hours_available,
        }
    }
}
