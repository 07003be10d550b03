//! Independent replay of a finished timeline.
//!
//! The segmenter checks its counters as it goes; the audit re-derives them
//! from nothing but the emitted intervals, so it also catches mistakes in
//! how intervals were written out (gaps, overlaps, zero lengths).

use chrono::NaiveDateTime;

use eld_hos::{CycleState, RuleSet};

use crate::DutyInterval;

/// Slack on replayed counters.  Replayed durations come from
/// millisecond-rounded timestamps, so a limit hit exactly can read a few
/// milliseconds over.
const TOLERANCE_HOURS: f64 = 1e-4;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ViolationKind {
    DrivingLimit,
    DutyWindow,
    CycleLimit,
    Gap,
    Overlap,
    ZeroLength,
    /// The interval ends before it starts; the replay cannot account for it.
    NegativeLength,
}

/// One problem found by [`audit_intervals`].
#[derive(Clone, Debug, PartialEq)]
pub struct Violation {
    pub kind:   ViolationKind,
    /// Start of the offending interval.
    pub at:     NaiveDateTime,
    /// Position in the interval list.
    pub index:  usize,
    pub detail: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} at interval {} ({}): {}", self.kind, self.index, self.at, self.detail)
    }
}

/// Replay `intervals` against `rules`, starting from `initial`.
///
/// Consecutive rest intervals count as one rest.  An empty result means the
/// timeline is contiguous and compliant.
pub fn audit_intervals(
    rules:     &RuleSet,
    initial:   &CycleState,
    intervals: &[DutyInterval],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut state = initial.clone();
    // State just before the current run of rest intervals began.
    let mut before_rest: Option<(CycleState, f64)> = None;
    let mut prev_end: Option<NaiveDateTime> = None;

    for (index, interval) in intervals.iter().enumerate() {
        let mut flag = |kind, detail: String| {
            violations.push(Violation { kind, at: interval.start_time, index, detail });
        };

        if let Some(end) = prev_end {
            if interval.start_time > end {
                flag(ViolationKind::Gap, format!("previous interval ended {end}"));
            } else if interval.start_time < end {
                flag(ViolationKind::Overlap, format!("previous interval ended {end}"));
            }
        }
        prev_end = Some(interval.end_time);

        let hours = interval.duration_hours();
        if hours == 0.0 {
            flag(ViolationKind::ZeroLength, format!("{hours} h"));
            continue;
        }

        if interval.status.is_rest() {
            let (base, run) = before_rest.take().unwrap_or_else(|| (state.clone(), 0.0));
            let run = run + hours;
            let mut rested = base.clone();
            match rested.apply_rest(rules, run) {
                Ok(()) => {
                    state = rested;
                    before_rest = Some((base, run));
                }
                Err(e) => {
                    flag(ViolationKind::NegativeLength, e.to_string());
                    before_rest = Some((base, run - hours));
                }
            }
            continue;
        }

        if let Err(e) = state.advance(interval.status, hours) {
            flag(ViolationKind::NegativeLength, e.to_string());
            continue;
        }
        before_rest = None;
        let checks = [
            (ViolationKind::DrivingLimit, state.driving_hours_today, rules.max_driving_per_day),
            (ViolationKind::DutyWindow, state.on_duty_window_elapsed_hours, rules.max_on_duty_window),
            (ViolationKind::CycleLimit, state.cycle_hours_last_8_days, rules.max_cycle_hours),
        ];
        for (kind, value, cap) in checks {
            if value > cap + TOLERANCE_HOURS {
                flag(kind, format!("{value:.4} h exceeds {cap} h"));
            }
        }
    }
    violations
}
