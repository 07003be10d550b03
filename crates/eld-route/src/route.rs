//! The route as actually driven: original segments split at every stop.

use chrono::NaiveDateTime;

use eld_core::{GeoPoint, RouteSegment};

use crate::Activity;

/// A place where the truck stands still: pickup, fuel, rest, or dropoff.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopPoint {
    pub activity:    Activity,
    /// Placeholder position on the route.  A fuel-stop provider may swap in a
    /// concrete truck stop later.
    pub location:    GeoPoint,
    pub arrival:     NaiveDateTime,
    pub departure:   NaiveDateTime,
    /// Miles driven since the trip started.
    pub mile_marker: f64,
}

impl StopPoint {
    pub fn duration_hours(&self) -> f64 {
        eld_core::hours_between(self.arrival, self.departure)
    }
}

/// Original route segments subdivided at inserted stops, plus the stops.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AugmentedRoute {
    pub segments: Vec<RouteSegment>,
    pub stops:    Vec<StopPoint>,
}

impl AugmentedRoute {
    pub fn total_distance_miles(&self) -> f64 {
        self.segments.iter().map(|s| s.distance_miles).sum()
    }

    pub fn total_driving_hours(&self) -> f64 {
        self.segments.iter().map(|s| s.driving_time_hours).sum()
    }

    /// Stops of one kind, in trip order.
    pub fn stops_of(&self, activity: Activity) -> impl Iterator<Item = &StopPoint> {
        self.stops.iter().filter(move |s| s.activity == activity)
    }
}
