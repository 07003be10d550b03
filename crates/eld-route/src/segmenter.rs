//! The forward pass that turns route segments into duty intervals.

use chrono::NaiveDateTime;
use tracing::debug;

use eld_core::{DutyStatus, EPSILON_HOURS, EldError, GeoPoint, RouteSegment, TripClock};
use eld_hos::{CycleState, RestKind, RuleSet};

use crate::{Activity, AugmentedRoute, DutyInterval, RouteError, RouteResult, StopPoint};

// ── Segmentation ──────────────────────────────────────────────────────────────

/// Output of one segmenter run.
#[derive(Clone, Debug, PartialEq)]
pub struct Segmentation {
    /// The duty timeline, contiguous and in time order.
    pub intervals: Vec<DutyInterval>,
    /// The route split at every stop, plus the stops themselves.
    pub route:     AugmentedRoute,
}

impl Segmentation {
    pub fn driving_miles(&self) -> f64 {
        self.intervals.iter().map(|i| i.distance_miles).sum()
    }

    pub fn driving_hours(&self) -> f64 {
        self.intervals
            .iter()
            .filter(|i| i.is_driving())
            .map(DutyInterval::duration_hours)
            .sum()
    }

    pub fn count(&self, activity: Activity) -> usize {
        self.intervals.iter().filter(|i| i.activity == activity).count()
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.intervals.first().map(|i| i.start_time)
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.intervals.last().map(|i| i.end_time)
    }
}

// ── RouteSegmenter ────────────────────────────────────────────────────────────

/// Walks a route once, left to right, emitting the duty timeline.
///
/// The segmenter owns no trip state: every [`run`](Self::run) borrows the
/// caller's [`CycleState`] mutably and builds its output from scratch, so a
/// single segmenter can serve many trips.
#[derive(Clone, Debug)]
pub struct RouteSegmenter<'r> {
    rules:       &'r RuleSet,
    rest_status: DutyStatus,
}

impl<'r> RouteSegmenter<'r> {
    /// A segmenter that logs rests as [`DutyStatus::OffDuty`].
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules, rest_status: DutyStatus::OffDuty }
    }

    /// Log inserted rests as `status` instead.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidRestStatus`] unless `status` is off duty or
    /// sleeper berth.
    pub fn with_rest_status(mut self, status: DutyStatus) -> RouteResult<Self> {
        if !status.is_rest() {
            return Err(RouteError::InvalidRestStatus(status));
        }
        self.rest_status = status;
        Ok(self)
    }

    pub fn rules(&self) -> &RuleSet {
        self.rules
    }

    pub fn rest_status(&self) -> DutyStatus {
        self.rest_status
    }

    /// Segment `segments` starting at `start` with the driver in `state`.
    ///
    /// On success `state` holds the counters as of the end of the dropoff.
    ///
    /// # Errors
    ///
    /// - [`RouteError::EmptyRoute`] if `segments` is empty.
    /// - [`EldError::InvalidSegment`] for a non-positive distance or time.
    /// - [`EldError::UnreachableState`] if a counter ever leaves its limit.
    pub fn run(
        &self,
        segments: &[RouteSegment],
        state:    &mut CycleState,
        start:    NaiveDateTime,
    ) -> RouteResult<Segmentation> {
        let (first, last) = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(RouteError::EmptyRoute),
        };
        for (index, segment) in segments.iter().enumerate() {
            segment.validate(index)?;
        }
        state.check_invariants(self.rules)?;

        let mut pass = Pass {
            rules:            self.rules,
            rest_status:      self.rest_status,
            state,
            clock:            TripClock::new(start),
            position:         first.start,
            odometer:         0.0,
            miles_since_fuel: 0.0,
            driving_left:     segments.iter().map(|s| s.driving_time_hours).sum(),
            intervals:        Vec::new(),
            route:            AugmentedRoute::default(),
        };

        pass.on_duty(Activity::Pickup, self.rules.pickup_dropoff_buffer)?;
        for (index, segment) in segments.iter().enumerate() {
            pass.drive_segment(index, segment)?;
        }
        pass.position = last.end;
        pass.on_duty(Activity::Dropoff, self.rules.pickup_dropoff_buffer)?;

        debug!(
            intervals = pass.intervals.len(),
            stops     = pass.route.stops.len(),
            miles     = pass.odometer,
            "segmentation complete"
        );
        Ok(Segmentation { intervals: pass.intervals, route: pass.route })
    }
}

// ── Pass ──────────────────────────────────────────────────────────────────────

/// Mutable bookkeeping for one run.
struct Pass<'a> {
    rules:            &'a RuleSet,
    rest_status:      DutyStatus,
    state:            &'a mut CycleState,
    clock:            TripClock,
    position:         GeoPoint,
    odometer:         f64,
    miles_since_fuel: f64,
    /// Route driving hours not yet emitted.
    driving_left:     f64,
    intervals:        Vec<DutyInterval>,
    route:            AugmentedRoute,
}

impl Pass<'_> {
    fn drive_segment(&mut self, index: usize, segment: &RouteSegment) -> RouteResult<()> {
        let total = segment.driving_time_hours;
        let speed = segment.average_speed_mph();
        let mut done = 0.0;
        // Start of the piece of this segment not yet pushed to the route.
        let mut piece_start = 0.0;

        while total - done > EPSILON_HOURS {
            let remaining = total - done;
            let room = self.rules.max_drivable_hours(self.state);

            if room < EPSILON_HOURS {
                self.close_piece(segment, piece_start, done);
                piece_start = done;
                let ahead = self.driving_left + self.rules.pickup_dropoff_buffer;
                let kind = self.rules.rest_to_resume_driving(self.state, ahead);
                debug!(segment = index, limit = ?self.rules.binding_limit(self.state), "driving blocked");
                self.rest(kind)?;
                continue;
            }

            let mut chunk = remaining.min(room);
            let mut fuel_due = false;
            let to_fuel = ((self.rules.max_distance_before_fuel - self.miles_since_fuel) / speed).max(0.0);
            // Refuel only when the rest of the segment would strictly cross
            // the threshold; a trip ending on it needs no stop.
            if to_fuel < remaining - EPSILON_HOURS && to_fuel <= chunk {
                chunk = to_fuel;
                fuel_due = true;
            }

            if chunk >= EPSILON_HOURS {
                let miles = chunk * speed;
                self.emit(DutyStatus::Driving, Activity::Driving, chunk, miles);
                self.state.advance(DutyStatus::Driving, chunk)?;
                self.state.check_invariants(self.rules)?;
                self.odometer += miles;
                self.miles_since_fuel += miles;
                self.driving_left -= chunk;
                done += chunk;
                self.position = segment.point_after(done);
            }

            if fuel_due {
                self.close_piece(segment, piece_start, done);
                piece_start = done;
                debug!(segment = index, mile = self.odometer, at = %self.position, "fuel stop");
                self.on_duty(Activity::FuelStop, self.rules.fuel_stop_duration)?;
                self.miles_since_fuel = 0.0;
            }
        }

        self.close_piece(segment, piece_start, total);
        Ok(())
    }

    /// On-duty, not-driving time at the current position, preceded by the
    /// rest it needs when the window or cycle cannot hold it.
    fn on_duty(&mut self, activity: Activity, hours: f64) -> RouteResult<()> {
        if !self.rules.can_work_for(self.state, hours) {
            let kind = self.rules.rest_to_resume_work(self.state, hours);
            debug!(?activity, ?kind, "rest before on-duty stop");
            self.rest(kind)?;
            if !self.rules.can_work_for(self.state, hours) {
                return Err(EldError::UnreachableState(format!(
                    "{activity:?} of {hours} h does not fit after a {kind:?} rest"
                ))
                .into());
            }
        }
        let arrival = self.clock.now();
        self.emit(DutyStatus::OnDutyNotDriving, activity, hours, 0.0);
        self.state.advance(DutyStatus::OnDutyNotDriving, hours)?;
        self.state.check_invariants(self.rules)?;
        self.push_stop(activity, arrival);
        Ok(())
    }

    fn rest(&mut self, kind: RestKind) -> RouteResult<()> {
        let hours = kind.hours(self.rules);
        let activity = match kind {
            RestKind::Daily   => Activity::Rest,
            RestKind::Restart => Activity::Restart,
        };
        let arrival = self.clock.now();
        debug!(at = %arrival, ?kind, hours, mile = self.odometer, "inserting rest");
        self.emit(self.rest_status, activity, hours, 0.0);
        self.state.apply_rest(self.rules, hours)?;
        self.push_stop(activity, arrival);
        Ok(())
    }

    fn emit(&mut self, status: DutyStatus, activity: Activity, hours: f64, distance_miles: f64) {
        if hours < EPSILON_HOURS {
            return;
        }
        let start_time = self.clock.now();
        self.clock.advance(hours);
        self.intervals.push(DutyInterval {
            status,
            start_time,
            end_time: self.clock.now(),
            location: self.position,
            distance_miles,
            activity,
        });
    }

    fn push_stop(&mut self, activity: Activity, arrival: NaiveDateTime) {
        self.route.stops.push(StopPoint {
            activity,
            location:    self.position,
            arrival,
            departure:   self.clock.now(),
            mile_marker: self.odometer,
        });
    }

    fn close_piece(&mut self, segment: &RouteSegment, from_hours: f64, to_hours: f64) {
        if to_hours - from_hours >= EPSILON_HOURS {
            self.route.segments.push(segment.portion(from_hours, to_hours));
        }
    }
}
