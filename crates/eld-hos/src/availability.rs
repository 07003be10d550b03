//! Remaining hours for a driver, limited by the most restrictive rule.

use crate::{CycleState, RuleSet};

/// Snapshot of how much more a driver may drive and work right now.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Availability {
    /// Driving hours left before a rest is required.
    pub driving_hours: f64,
    /// On-duty (any kind) hours left before a rest is required.
    pub on_duty_hours: f64,
    /// Cycle hours left before a restart is required.
    pub cycle_hours_remaining: f64,
    /// `true` when only a restart can make more driving possible.
    pub needs_restart: bool,
}

impl Availability {
    pub fn compute(rules: &RuleSet, state: &CycleState) -> Self {
        Self {
            driving_hours:         rules.max_drivable_hours(state),
            on_duty_hours:         rules.max_workable_hours(state),
            cycle_hours_remaining: rules.cycle_room(state).max(0.0),
            needs_restart:         rules.binding_limit(state) == Some(crate::Limit::CycleHours),
        }
    }
}
