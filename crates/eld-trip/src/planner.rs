//! The `TripPlanner` and the plan it produces.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use eld_core::{DutyStatus, EldError, hours_between};
use eld_hos::{Availability, CycleState, RuleSet};
use eld_log::{DailyLog, EldLogEntry, LogOptions, daily_logs, generate_log_entries};
use eld_route::{Activity, AugmentedRoute, DutyInterval, RouteSegmenter, audit_intervals};

use crate::{NoopObserver, TripError, TripObserver, TripRequest, TripResult};

// ── TripPlan ──────────────────────────────────────────────────────────────────

/// Everything produced for one trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub driver_name: String,
    /// The duty timeline, contiguous from the trip start.
    pub intervals:   Vec<DutyInterval>,
    /// `intervals` split at midnight, one entry per interval per date.
    pub log_entries: Vec<EldLogEntry>,
    /// Per-date totals; each `entries` range indexes into `log_entries`.
    pub daily_logs:  Vec<DailyLog>,
    pub route:       AugmentedRoute,

    /// Driver state when the trip starts.
    pub initial_state: CycleState,
    /// Driver state after the dropoff.
    pub final_state:   CycleState,
    /// Remaining hours after the dropoff.
    pub availability:  Availability,
}

impl TripPlan {
    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.intervals.first().map(|i| i.start_time)
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.intervals.last().map(|i| i.end_time)
    }

    /// Wall-clock hours from pickup to the end of dropoff.
    pub fn total_hours(&self) -> f64 {
        match (self.start_time(), self.end_time()) {
            (Some(start), Some(end)) => hours_between(start, end),
            _ => 0.0,
        }
    }

    pub fn total_miles(&self) -> f64 {
        self.intervals.iter().map(|i| i.distance_miles).sum()
    }

    pub fn hours_in(&self, status: DutyStatus) -> f64 {
        self.intervals
            .iter()
            .filter(|i| i.status == status)
            .map(DutyInterval::duration_hours)
            .sum()
    }

    pub fn count(&self, activity: Activity) -> usize {
        self.intervals.iter().filter(|i| i.activity == activity).count()
    }

    /// The log entries of one daily log.
    pub fn entries_for(&self, log: &DailyLog) -> &[EldLogEntry] {
        self.log_entries.get(log.entries.clone()).unwrap_or(&[])
    }
}

// ── TripPlanner ───────────────────────────────────────────────────────────────

/// Plans trips against one rule set.
///
/// A planner is immutable once built and holds no per-trip state, so it can
/// be shared across threads (see [`plan_batch`](crate::plan_batch)).
///
/// Create via [`TripPlannerBuilder`](crate::TripPlannerBuilder) or
/// [`TripPlanner::new`].
#[derive(Clone, Debug)]
pub struct TripPlanner {
    pub(crate) rules:       RuleSet,
    pub(crate) rest_status: DutyStatus,
    pub(crate) log_options: LogOptions,
}

impl Default for TripPlanner {
    fn default() -> Self {
        Self {
            rules:       RuleSet::default(),
            rest_status: DutyStatus::OffDuty,
            log_options: LogOptions::default(),
        }
    }
}

impl TripPlanner {
    /// A planner for `rules` with off-duty rests and unpadded logs.
    pub fn new(rules: RuleSet) -> TripResult<Self> {
        rules.validate()?;
        Ok(Self { rules, ..Self::default() })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn rest_status(&self) -> DutyStatus {
        self.rest_status
    }

    pub fn log_options(&self) -> &LogOptions {
        &self.log_options
    }

    pub fn plan(&self, request: &TripRequest) -> TripResult<TripPlan> {
        self.plan_with(request, &mut NoopObserver)
    }

    /// Plan `request`, reporting progress to `observer`.
    ///
    /// All inputs are validated before any interval is produced.  The
    /// finished timeline is replayed by [`audit_intervals`]; any violation
    /// aborts the plan with [`EldError::UnreachableState`].
    pub fn plan_with<O: TripObserver>(
        &self,
        request:  &TripRequest,
        observer: &mut O,
    ) -> TripResult<TripPlan> {
        observer.on_plan_start(request);

        if request.segments.is_empty() {
            return Err(TripError::EmptyRoute);
        }
        let initial = CycleState::seed(
            &self.rules,
            request.current_cycle_hours,
            request.current_daily_drive_hours,
            request.current_daily_duty_hours,
        )?;
        debug!(
            driver = %request.driver_name,
            available = ?Availability::compute(&self.rules, &initial),
            "planning trip"
        );

        let mut state = initial.clone();
        let segmentation = RouteSegmenter::new(&self.rules)
            .with_rest_status(self.rest_status)?
            .run(&request.segments, &mut state, request.trip_start)?;

        let violations = audit_intervals(&self.rules, &initial, &segmentation.intervals);
        if let Some(first) = violations.first() {
            for v in &violations {
                warn!(driver = %request.driver_name, violation = %v, "timeline failed audit");
            }
            return Err(EldError::UnreachableState(format!(
                "timeline failed audit with {} violation(s); first: {first}",
                violations.len()
            ))
            .into());
        }

        let log_entries =
            generate_log_entries(&segmentation.intervals, &request.driver_name, &self.log_options);
        let daily_logs = daily_logs(&log_entries, &self.rules, &initial)?;

        let plan = TripPlan {
            driver_name:   request.driver_name.clone(),
            intervals:     segmentation.intervals,
            log_entries,
            daily_logs,
            route:         segmentation.route,
            availability:  Availability::compute(&self.rules, &state),
            initial_state: initial,
            final_state:   state,
        };

        for interval in &plan.intervals {
            observer.on_interval(interval);
        }
        for log in &plan.daily_logs {
            observer.on_day(log, plan.entries_for(log));
        }
        observer.on_plan_end(&plan);

        info!(
            driver    = %plan.driver_name,
            intervals = plan.intervals.len(),
            days      = plan.daily_logs.len(),
            miles     = plan.total_miles(),
            hours     = plan.total_hours(),
            "trip planned"
        );
        Ok(plan)
    }
}
