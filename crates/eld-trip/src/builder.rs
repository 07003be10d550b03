//! Fluent builder for constructing a [`TripPlanner`].

use std::path::PathBuf;

use eld_core::DutyStatus;
use eld_hos::{RuleSet, load_rule_set_json};
use eld_log::LogOptions;

use crate::{TripError, TripPlanner, TripResult};

/// Fluent builder for [`TripPlanner`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                       |
/// |-------------------------|-------------------------------|
/// | `.rules(r)`             | `RuleSet::federal_70_8()`     |
/// | `.rules_file(path)`     | none; overrides `.rules`      |
/// | `.rest_status(s)`       | `DutyStatus::OffDuty`         |
/// | `.pad_partial_days(b)`  | `false`                       |
///
/// # Example
///
/// ```rust,ignore
/// let planner = TripPlannerBuilder::new()
///     .rules(RuleSet::federal_60_7())
///     .rest_status(DutyStatus::SleeperBerth)
///     .pad_partial_days(true)
///     .build()?;
/// let plan = planner.plan(&request)?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct TripPlannerBuilder {
    rules:       Option<RuleSet>,
    rules_file:  Option<PathBuf>,
    rest_status: Option<DutyStatus>,
    log_options: LogOptions,
}

impl TripPlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Load the rule set from a JSON file at build time.
    pub fn rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_file = Some(path.into());
        self
    }

    /// Status used for inserted rests: off duty or sleeper berth.
    pub fn rest_status(mut self, status: DutyStatus) -> Self {
        self.rest_status = Some(status);
        self
    }

    pub fn pad_partial_days(mut self, pad: bool) -> Self {
        self.log_options.pad_partial_days = pad;
        self
    }

    /// Resolve and validate every input and return a ready planner.
    pub fn build(self) -> TripResult<TripPlanner> {
        // ── Rule set ──────────────────────────────────────────────────────
        let rules = match (self.rules_file, self.rules) {
            (Some(path), _) => load_rule_set_json(&path)?,
            (None, Some(rules)) => {
                rules.validate()?;
                rules
            }
            (None, None) => RuleSet::default(),
        };

        // ── Rest status ───────────────────────────────────────────────────
        let rest_status = self.rest_status.unwrap_or(DutyStatus::OffDuty);
        if !rest_status.is_rest() {
            return Err(TripError::Config(format!(
                "rest status must be off duty or sleeper berth, got {rest_status}"
            )));
        }

        Ok(TripPlanner { rules, rest_status, log_options: self.log_options })
    }
}
