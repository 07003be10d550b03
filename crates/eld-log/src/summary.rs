//! Per-date log sheet totals.

use std::ops::Range;

use chrono::NaiveDate;
use tracing::debug;

use eld_core::{DutyStatus, EldResult};
use eld_hos::{CycleState, RuleSet};

use crate::EldLogEntry;

/// The totals printed on one daily log sheet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyLog {
    pub date:        NaiveDate,
    pub driver_name: String,
    /// Indices of this date's rows in the entry list passed to
    /// [`daily_logs`].
    pub entries:     Range<usize>,

    pub starting_odometer: f64,
    pub ending_odometer:   f64,

    pub off_duty_hours:            f64,
    pub sleeper_berth_hours:       f64,
    pub driving_hours:             f64,
    pub on_duty_not_driving_hours: f64,

    /// Number of status changes within the date.
    pub duty_changes: usize,

    /// Cycle hours on the books at the end of the date.
    pub cycle_hours_used:      f64,
    pub cycle_hours_available: f64,
}

impl DailyLog {
    fn empty(date: NaiveDate, driver_name: &str, index: usize, odometer: f64) -> Self {
        Self {
            date,
            driver_name: driver_name.to_string(),
            entries: index..index,
            starting_odometer: odometer,
            ending_odometer: odometer,
            off_duty_hours: 0.0,
            sleeper_berth_hours: 0.0,
            driving_hours: 0.0,
            on_duty_not_driving_hours: 0.0,
            duty_changes: 0,
            cycle_hours_used: 0.0,
            cycle_hours_available: 0.0,
        }
    }

    pub fn total_on_duty_hours(&self) -> f64 {
        self.driving_hours + self.on_duty_not_driving_hours
    }

    pub fn total_hours(&self) -> f64 {
        self.off_duty_hours + self.sleeper_berth_hours + self.total_on_duty_hours()
    }

    pub fn miles_driven(&self) -> f64 {
        self.ending_odometer - self.starting_odometer
    }

    fn add(&mut self, status: DutyStatus, hours: f64) {
        match status {
            DutyStatus::OffDuty          => self.off_duty_hours += hours,
            DutyStatus::SleeperBerth     => self.sleeper_berth_hours += hours,
            DutyStatus::Driving          => self.driving_hours += hours,
            DutyStatus::OnDutyNotDriving => self.on_duty_not_driving_hours += hours,
        }
    }
}

/// Group `entries` (as produced by [`generate_log_entries`]) by date.
///
/// `initial` is the driver's state before the first entry; its cycle hours
/// seed the running total.  Back-to-back rest entries count as one rest, so
/// a rest split at midnight still resets the counters.
///
/// # Errors
///
/// [`EldError::UnreachableState`] if an entry ends before it starts.
///
/// [`generate_log_entries`]: crate::generate_log_entries
/// [`EldError::UnreachableState`]: eld_core::EldError::UnreachableState
pub fn daily_logs(
    entries: &[EldLogEntry],
    rules:   &RuleSet,
    initial: &CycleState,
) -> EldResult<Vec<DailyLog>> {
    let mut logs: Vec<DailyLog> = Vec::new();
    let mut state = initial.clone();
    let mut before_rest: Option<(CycleState, f64)> = None;
    let mut odometer = 0.0;
    let mut prev_status: Option<DutyStatus> = None;

    for (index, entry) in entries.iter().enumerate() {
        if logs.last().is_none_or(|log| log.date != entry.date) {
            logs.push(DailyLog::empty(entry.date, &entry.driver_name, index, odometer));
            prev_status = None;
        }
        let hours = entry.duration_hours();

        if entry.duty_status.is_rest() {
            let (base, run) = before_rest.take().unwrap_or_else(|| (state.clone(), 0.0));
            let run = run + hours;
            state = base.clone();
            state.apply_rest(rules, run)?;
            before_rest = Some((base, run));
        } else {
            before_rest = None;
            state.advance(entry.duty_status, hours)?;
        }
        odometer += entry.distance_miles;

        // Pushed above when the date changed, so a log always exists here.
        let Some(log) = logs.last_mut() else { continue };
        log.entries.end = index + 1;
        log.add(entry.duty_status, hours);
        log.ending_odometer = odometer;
        if prev_status.is_some_and(|p| p != entry.duty_status) {
            log.duty_changes += 1;
        }
        prev_status = Some(entry.duty_status);
        log.cycle_hours_used = state.cycle_hours_last_8_days;
        log.cycle_hours_available = (rules.max_cycle_hours - state.cycle_hours_last_8_days).max(0.0);
    }

    debug!(days = logs.len(), miles = odometer, "daily logs built");
    Ok(logs)
}
