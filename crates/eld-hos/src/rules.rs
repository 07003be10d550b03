//! The HOS rule set: a table of named limits plus pure predicates over a
//! [`CycleState`].
//!
//! # Tolerance
//!
//! All limit comparisons allow [`EPSILON_HOURS`] of slack.  The segmenter
//! computes a chunk as `limit - counter` and then adds it back, which can
//! land a few ULPs above the limit; without the slack the predicate would
//! reject the very chunk it sized.

use serde::{Deserialize, Serialize};

use eld_core::EPSILON_HOURS;

use crate::{CycleState, HosError, HosResult};

// ── Limit ─────────────────────────────────────────────────────────────────────

/// Names of the entries in a [`RuleSet`] table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limit {
    /// Driving hours allowed between qualifying rests.
    DailyDriving,
    /// On-duty window length after coming on duty.
    OnDutyWindow,
    /// Consecutive off-duty hours that reset the daily counters.
    OffDutyRest,
    /// On-duty hours allowed over the trailing cycle.
    CycleHours,
    /// Consecutive off-duty hours that reset the cycle counter.
    Restart,
    /// Miles between fuel stops.
    FuelDistance,
    /// Length of a fuel stop (hours, on duty).
    FuelStop,
    /// Length of the pickup and of the dropoff buffer (hours, on duty).
    PickupDropoffBuffer,
}

impl Limit {
    pub const ALL: [Limit; 8] = [
        Limit::DailyDriving,
        Limit::OnDutyWindow,
        Limit::OffDutyRest,
        Limit::CycleHours,
        Limit::Restart,
        Limit::FuelDistance,
        Limit::FuelStop,
        Limit::PickupDropoffBuffer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Limit::DailyDriving        => "daily driving",
            Limit::OnDutyWindow        => "on-duty window",
            Limit::OffDutyRest         => "off-duty rest",
            Limit::CycleHours          => "cycle hours",
            Limit::Restart             => "restart",
            Limit::FuelDistance        => "fuel distance",
            Limit::FuelStop            => "fuel stop",
            Limit::PickupDropoffBuffer => "pickup/dropoff buffer",
        }
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RestKind ──────────────────────────────────────────────────────────────────

/// The two qualifying rests the engine can insert.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestKind {
    /// `min_off_duty_rest` hours; resets driving and window counters.
    Daily,
    /// `restart_duration` hours; additionally resets the cycle counter.
    Restart,
}

impl RestKind {
    pub fn hours(self, rules: &RuleSet) -> f64 {
        match self {
            RestKind::Daily   => rules.min_off_duty_rest,
            RestKind::Restart => rules.restart_duration,
        }
    }
}

// ── RuleSet ───────────────────────────────────────────────────────────────────

/// A complete table of HOS limits.
///
/// Alternate driver classes or jurisdictions are expressed as different
/// `RuleSet` values (see [`crate::load_rule_set_json`]), never as branches in
/// the segmenter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSet {
    /// Display name, e.g. `"US federal 70/8"`.
    pub name: String,
    pub max_driving_per_day: f64,
    pub max_on_duty_window: f64,
    pub min_off_duty_rest: f64,
    pub max_cycle_hours: f64,
    /// Length of the trailing cycle in days (informational; the tracker keeps
    /// a running total seeded by the caller).
    pub cycle_days: u32,
    pub restart_duration: f64,
    pub max_distance_before_fuel: f64,
    pub fuel_stop_duration: f64,
    pub pickup_dropoff_buffer: f64,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::federal_70_8()
    }
}

impl RuleSet {
    /// US federal property-carrying limits, 70 hours over 8 days.
    pub fn federal_70_8() -> Self {
        Self {
            name:                     "US federal 70/8".to_string(),
            max_driving_per_day:      11.0,
            max_on_duty_window:       14.0,
            min_off_duty_rest:        10.0,
            max_cycle_hours:          70.0,
            cycle_days:               8,
            restart_duration:         34.0,
            max_distance_before_fuel: 1_000.0,
            fuel_stop_duration:       0.5,
            pickup_dropoff_buffer:    1.0,
        }
    }

    /// US federal property-carrying limits for carriers that do not operate
    /// every day of the week: 60 hours over 7 days.
    pub fn federal_60_7() -> Self {
        Self {
            name:            "US federal 60/7".to_string(),
            max_cycle_hours: 60.0,
            cycle_days:      7,
            ..Self::federal_70_8()
        }
    }

    /// Look up a limit by name.
    pub fn limit(&self, limit: Limit) -> f64 {
        match limit {
            Limit::DailyDriving        => self.max_driving_per_day,
            Limit::OnDutyWindow        => self.max_on_duty_window,
            Limit::OffDutyRest         => self.min_off_duty_rest,
            Limit::CycleHours          => self.max_cycle_hours,
            Limit::Restart             => self.restart_duration,
            Limit::FuelDistance        => self.max_distance_before_fuel,
            Limit::FuelStop            => self.fuel_stop_duration,
            Limit::PickupDropoffBuffer => self.pickup_dropoff_buffer,
        }
    }

    /// The whole table as `(name, value)` pairs, in [`Limit::ALL`] order.
    pub fn limits(&self) -> Vec<(Limit, f64)> {
        Limit::ALL.iter().map(|&l| (l, self.limit(l))).collect()
    }

    /// Check that the table is usable.
    ///
    /// Besides positivity this guarantees termination of the segmenter: after
    /// a restart every counter is zero, so any buffer or fuel stop must fit in
    /// an empty window and an empty cycle.
    pub fn validate(&self) -> HosResult<()> {
        for (limit, value) in self.limits() {
            if !(value.is_finite() && value > 0.0) {
                return Err(self.invalid(format!("{limit} must be positive, got {value}")));
            }
        }
        if self.cycle_days == 0 {
            return Err(self.invalid("cycle_days must be at least 1".to_string()));
        }
        if self.max_driving_per_day > self.max_on_duty_window {
            return Err(self.invalid(format!(
                "daily driving ({}) exceeds the on-duty window ({})",
                self.max_driving_per_day, self.max_on_duty_window
            )));
        }
        if self.min_off_duty_rest > self.restart_duration {
            return Err(self.invalid(format!(
                "off-duty rest ({}) is longer than the restart ({})",
                self.min_off_duty_rest, self.restart_duration
            )));
        }
        let empty_room = self.max_on_duty_window.min(self.max_cycle_hours);
        for limit in [Limit::FuelStop, Limit::PickupDropoffBuffer] {
            if self.limit(limit) > empty_room {
                return Err(self.invalid(format!(
                    "{limit} ({}) cannot fit in an empty duty period ({empty_room})",
                    self.limit(limit)
                )));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> HosError {
        HosError::InvalidRuleSet { name: self.name.clone(), reason }
    }

    // ── Remaining room ────────────────────────────────────────────────────

    #[inline]
    pub fn driving_room(&self, state: &CycleState) -> f64 {
        self.max_driving_per_day - state.driving_hours_today
    }

    #[inline]
    pub fn window_room(&self, state: &CycleState) -> f64 {
        self.max_on_duty_window - state.on_duty_window_elapsed_hours
    }

    #[inline]
    pub fn cycle_room(&self, state: &CycleState) -> f64 {
        self.max_cycle_hours - state.cycle_hours_last_8_days
    }

    // ── Predicates ────────────────────────────────────────────────────────

    /// `true` iff `hours` more driving stays within the daily-driving,
    /// on-duty-window, and cycle limits.
    pub fn can_drive_for(&self, state: &CycleState, hours: f64) -> bool {
        hours <= self.driving_room(state) + EPSILON_HOURS && self.can_work_for(state, hours)
    }

    /// `true` iff `hours` more on-duty (not driving) time stays within the
    /// on-duty-window and cycle limits.
    pub fn can_work_for(&self, state: &CycleState, hours: f64) -> bool {
        hours <= self.window_room(state) + EPSILON_HOURS
            && hours <= self.cycle_room(state) + EPSILON_HOURS
    }

    /// The largest `t` for which [`can_drive_for`](Self::can_drive_for)
    /// holds, clamped at zero.
    pub fn max_drivable_hours(&self, state: &CycleState) -> f64 {
        self.driving_room(state)
            .min(self.window_room(state))
            .min(self.cycle_room(state))
            .max(0.0)
    }

    /// The largest on-duty (not driving) duration that still fits.
    pub fn max_workable_hours(&self, state: &CycleState) -> f64 {
        self.window_room(state).min(self.cycle_room(state)).max(0.0)
    }

    /// The limit that currently blocks driving, if any.
    ///
    /// Precedence when several are exhausted at once: cycle, then on-duty
    /// window, then daily driving.  The window outranks the driving cap
    /// because on-duty time keeps counting even when the wheels stop.
    pub fn binding_limit(&self, state: &CycleState) -> Option<Limit> {
        if self.cycle_room(state) < EPSILON_HOURS {
            Some(Limit::CycleHours)
        } else if self.window_room(state) < EPSILON_HOURS {
            Some(Limit::OnDutyWindow)
        } else if self.driving_room(state) < EPSILON_HOURS {
            Some(Limit::DailyDriving)
        } else {
            None
        }
    }

    /// Which rest must be taken before driving can resume, given the
    /// on-duty hours still ahead on the trip.
    ///
    /// A daily rest gives back no cycle hours.  A restart is owed once the
    /// cycle room cannot hold the next duty period's driving, or the rest
    /// of the trip if that is shorter.
    pub fn rest_to_resume_driving(&self, state: &CycleState, remaining_hours: f64) -> RestKind {
        let cycle_room = self.cycle_room(state);
        let next_period = remaining_hours.min(self.max_driving_per_day);
        if cycle_room < EPSILON_HOURS || next_period > cycle_room + EPSILON_HOURS {
            RestKind::Restart
        } else {
            RestKind::Daily
        }
    }

    /// Which rest must be taken so that `needed_hours` of on-duty (not
    /// driving) time fit afterwards.
    ///
    /// A daily rest never gives back cycle hours, so once the cycle room is
    /// smaller than what is needed only a restart helps.
    pub fn rest_to_resume_work(&self, state: &CycleState, needed_hours: f64) -> RestKind {
        if needed_hours > self.cycle_room(state) + EPSILON_HOURS {
            RestKind::Restart
        } else {
            RestKind::Daily
        }
    }
}
