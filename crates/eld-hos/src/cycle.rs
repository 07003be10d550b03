//! Per-trip duty counters.

use eld_core::{DutyStatus, EPSILON_HOURS, EldError, EldResult};

use crate::RuleSet;

/// The mutable HOS state of one driver during one planning run.
///
/// Exactly one `CycleState` exists per run.  It is passed by `&mut` to the
/// segmenter (never stored in a global) and mutated only through
/// [`advance`](Self::advance) and [`apply_rest`](Self::apply_rest), so
/// independent trips can be planned on different threads without sharing.
///
/// Invariant: `driving_hours_today ≤ on_duty_window_elapsed_hours`.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleState {
    /// Driving hours since the last qualifying rest.
    pub driving_hours_today: f64,

    /// On-duty hours since the last qualifying rest.
    pub on_duty_window_elapsed_hours: f64,

    /// On-duty hours over the trailing cycle, zeroed by a restart.
    pub cycle_hours_last_8_days: f64,

    /// Hours (any status) since the last rest of at least `min_off_duty_rest`.
    pub hours_since_qualifying_rest: f64,

    /// Hours (any status) since the last rest of at least `restart_duration`.
    pub hours_since_restart: f64,
}

impl CycleState {
    /// A fully rested driver with an empty cycle.
    pub fn fresh() -> Self {
        Self::default()
    }

    /// Seed the tracker from trip input.
    ///
    /// `daily_drive_hours` and `daily_duty_hours` describe the duty period the
    /// driver is already in (both 0 for a rested driver).  The "since"
    /// counters are seeded on the assumption that the driver has been on duty
    /// continuously since the last rest and restart.
    ///
    /// # Errors
    ///
    /// [`EldError::InputOutOfRange`] for any value outside its limit, or if
    /// the daily drive hours exceed the daily duty hours.
    pub fn seed(
        rules:             &RuleSet,
        cycle_hours:       f64,
        daily_drive_hours: f64,
        daily_duty_hours:  f64,
    ) -> EldResult<Self> {
        EldError::check_range("current_cycle_hours", cycle_hours, 0.0, rules.max_cycle_hours)?;
        EldError::check_range(
            "current_daily_duty_hours",
            daily_duty_hours,
            0.0,
            rules.max_on_duty_window.min(cycle_hours),
        )?;
        EldError::check_range(
            "current_daily_drive_hours",
            daily_drive_hours,
            0.0,
            rules.max_driving_per_day.min(daily_duty_hours),
        )?;

        Ok(Self {
            driving_hours_today:          daily_drive_hours,
            on_duty_window_elapsed_hours: daily_duty_hours,
            cycle_hours_last_8_days:      cycle_hours,
            hours_since_qualifying_rest:  daily_duty_hours,
            hours_since_restart:          cycle_hours,
        })
    }

    /// Account for `hours` spent in `status`.
    ///
    /// On-duty statuses consume window and cycle hours; only `Driving`
    /// consumes driving hours.  Off-duty time passed through here is too
    /// short to qualify as rest; use [`apply_rest`](Self::apply_rest) for
    /// rest periods.
    pub fn advance(&mut self, status: DutyStatus, hours: f64) -> EldResult<()> {
        check_duration("advance", hours)?;
        if status.is_on_duty() {
            self.on_duty_window_elapsed_hours += hours;
            self.cycle_hours_last_8_days += hours;
        }
        if status == DutyStatus::Driving {
            self.driving_hours_today += hours;
        }
        self.hours_since_qualifying_rest += hours;
        self.hours_since_restart += hours;
        Ok(())
    }

    /// Account for a consecutive off-duty period of `hours`.
    ///
    /// All or nothing: at least `min_off_duty_rest` resets the daily
    /// counters, at least `restart_duration` also resets the cycle.  Anything
    /// shorter resets nothing.
    pub fn apply_rest(&mut self, rules: &RuleSet, hours: f64) -> EldResult<()> {
        check_duration("apply_rest", hours)?;
        let qualifies = hours + EPSILON_HOURS >= rules.min_off_duty_rest;
        let restarts = hours + EPSILON_HOURS >= rules.restart_duration;

        if qualifies {
            self.driving_hours_today = 0.0;
            self.on_duty_window_elapsed_hours = 0.0;
            self.hours_since_qualifying_rest = 0.0;
        } else {
            self.hours_since_qualifying_rest += hours;
        }

        if restarts {
            self.cycle_hours_last_8_days = 0.0;
            self.hours_since_restart = 0.0;
        } else {
            self.hours_since_restart += hours;
        }
        Ok(())
    }

    /// Verify every counter is within `rules`.
    ///
    /// A failure means the engine itself is wrong; callers abort the run.
    pub fn check_invariants(&self, rules: &RuleSet) -> EldResult<()> {
        let counters = [
            ("driving_hours_today", self.driving_hours_today, rules.max_driving_per_day),
            ("on_duty_window_elapsed_hours", self.on_duty_window_elapsed_hours, rules.max_on_duty_window),
            ("cycle_hours_last_8_days", self.cycle_hours_last_8_days, rules.max_cycle_hours),
        ];
        for (name, value, cap) in counters {
            if !(value >= -EPSILON_HOURS && value <= cap + EPSILON_HOURS) {
                return Err(EldError::UnreachableState(format!(
                    "{name} = {value} outside [0, {cap}]"
                )));
            }
        }
        if self.driving_hours_today > self.on_duty_window_elapsed_hours + EPSILON_HOURS {
            return Err(EldError::UnreachableState(format!(
                "driving hours {} exceed on-duty hours {}",
                self.driving_hours_today, self.on_duty_window_elapsed_hours
            )));
        }
        Ok(())
    }
}

fn check_duration(op: &str, hours: f64) -> EldResult<()> {
    if hours.is_finite() && hours >= 0.0 {
        Ok(())
    } else {
        Err(EldError::UnreachableState(format!("{op} called with {hours} hours")))
    }
}
