//! One routed leg as supplied by the external routing provider.

use crate::{EldError, EldResult, GeoPoint};

/// An ordered element of the route: endpoints plus distance and drive time.
///
/// The engine treats the full list as an immutable sequence walked once,
/// left to right.  Splitting never mutates the caller's segments; split
/// pieces are fresh values built with [`RouteSegment::portion`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSegment {
    pub start:              GeoPoint,
    pub end:                GeoPoint,
    pub distance_miles:     f64,
    pub driving_time_hours: f64,
}

impl RouteSegment {
    pub fn new(start: GeoPoint, end: GeoPoint, distance_miles: f64, driving_time_hours: f64) -> Self {
        Self { start, end, distance_miles, driving_time_hours }
    }

    /// Reject non-positive or non-finite distance/time.  `index` is the
    /// position in the route, reported back in the error.
    pub fn validate(&self, index: usize) -> EldResult<()> {
        let ok = self.distance_miles.is_finite()
            && self.driving_time_hours.is_finite()
            && self.distance_miles > 0.0
            && self.driving_time_hours > 0.0;
        if ok {
            Ok(())
        } else {
            Err(EldError::InvalidSegment {
                index,
                distance_miles:     self.distance_miles,
                driving_time_hours: self.driving_time_hours,
            })
        }
    }

    /// Miles covered per hour of driving on this segment.
    #[inline]
    pub fn average_speed_mph(&self) -> f64 {
        self.distance_miles / self.driving_time_hours
    }

    /// Point reached after driving `hours` into the segment.
    pub fn point_after(&self, hours: f64) -> GeoPoint {
        self.start.lerp(self.end, hours / self.driving_time_hours)
    }

    /// The sub-segment between `from_hours` and `to_hours` of driving time.
    pub fn portion(&self, from_hours: f64, to_hours: f64) -> RouteSegment {
        let speed = self.average_speed_mph();
        RouteSegment {
            start:              self.point_after(from_hours),
            end:                self.point_after(to_hours),
            distance_miles:     (to_hours - from_hours) * speed,
            driving_time_hours: to_hours - from_hours,
        }
    }
}
