//! `eld-core`: foundational types for the `rust_eld` trip planning engine.
//!
//! This crate is a dependency of every other `eld-*` crate.  It intentionally
//! has no `eld-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, haversine distance, interpolation         |
//! | [`segment`]     | `RouteSegment`: one leg supplied by the router       |
//! | [`status`]      | `DutyStatus` enum                                     |
//! | [`time`]        | `TripClock`, fractional-hour ↔ timestamp helpers      |
//! | [`error`]       | `EldError`, `EldResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod segment;
pub mod status;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EldError, EldResult};
pub use geo::GeoPoint;
pub use segment::RouteSegment;
pub use status::DutyStatus;
pub use time::{EPSILON_HOURS, TripClock, hours_between, hours_to_duration};
