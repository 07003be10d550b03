//! Planner observer trait for progress reporting and data collection.

use eld_log::{DailyLog, EldLogEntry};
use eld_route::DutyInterval;

use crate::{TripPlan, TripRequest};

/// Callbacks invoked by [`TripPlanner::plan_with`][crate::TripPlanner::plan_with]
/// as a plan is assembled.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Callbacks fire only after the timeline has
/// passed its audit, so an observer never sees part of a rejected plan.
///
/// # Example: day printer
///
/// ```rust,ignore
/// struct DayPrinter;
///
/// impl TripObserver for DayPrinter {
///     fn on_day(&mut self, log: &DailyLog, _entries: &[EldLogEntry]) {
///         println!("{}: {:.1} h driving", log.date, log.driving_hours);
///     }
/// }
/// ```
pub trait TripObserver {
    /// Called once, before the request is validated.
    fn on_plan_start(&mut self, _request: &TripRequest) {}

    /// Called for every duty interval, in time order.
    fn on_interval(&mut self, _interval: &DutyInterval) {}

    /// Called once per log date with that date's entries.
    fn on_day(&mut self, _log: &DailyLog, _entries: &[EldLogEntry]) {}

    /// Called once with the finished plan.
    fn on_plan_end(&mut self, _plan: &TripPlan) {}
}

/// A [`TripObserver`] that does nothing.
pub struct NoopObserver;

impl TripObserver for NoopObserver {}
