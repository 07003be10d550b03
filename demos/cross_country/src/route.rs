//! Built-in Chicago → Los Angeles route.
//!
//! Five legs along I-80 / I-76 / I-70 / I-15, with distances and drive times
//! in the range a routing provider would return.

use eld_core::{GeoPoint, RouteSegment};

pub fn build_route() -> Vec<RouteSegment> {
    let chicago     = GeoPoint::new(41.878, -87.630);
    let omaha       = GeoPoint::new(41.257, -95.935);
    let denver      = GeoPoint::new(39.739, -104.990);
    let grand_jct   = GeoPoint::new(39.064, -108.551);
    let las_vegas   = GeoPoint::new(36.170, -115.140);
    let los_angeles = GeoPoint::new(34.052, -118.244);

    vec![
        RouteSegment::new(chicago,   omaha,       470.0, 7.2),
        RouteSegment::new(omaha,     denver,      540.0, 8.0),
        RouteSegment::new(denver,    grand_jct,   245.0, 4.1),
        RouteSegment::new(grand_jct, las_vegas,   485.0, 7.3),
        RouteSegment::new(las_vegas, los_angeles, 270.0, 4.3),
    ]
}
