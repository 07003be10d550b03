//! `eld-route`: turns a routed trip into an HOS-compliant duty timeline.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`interval`]  | `DutyInterval`, `Activity`                                      |
//! | [`route`]     | `AugmentedRoute`, `StopPoint`: segments split at inserted stops |
//! | [`segmenter`] | `RouteSegmenter`: the single forward pass                      |
//! | [`audit`]     | `audit_intervals`: independent replay of a finished timeline   |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                                  |
//!
//! # Segmentation model (summary)
//!
//! ```text
//! pickup buffer (ON)
//! for segment in route:
//!     while segment has time left:
//!         d = min(left, max_drivable, hours to fuel threshold)
//!         d == 0 → rest (10 h, or 34 h if the cycle is spent)
//!         drive d; fuel threshold reached → fuel stop (ON)
//! dropoff buffer (ON)
//! ```
//!
//! Every on-duty stop is preceded by the rest it needs when the window or
//! cycle has no room left for it, so the emitted timeline never breaks a
//! limit.  The pass is deterministic: the same inputs always yield the same
//! intervals.

pub mod audit;
pub mod error;
pub mod interval;
pub mod route;
pub mod segmenter;

#[cfg(test)]
mod tests;

pub use audit::{Violation, ViolationKind, audit_intervals};
pub use error::{RouteError, RouteResult};
pub use interval::{Activity, DutyInterval};
pub use route::{AugmentedRoute, StopPoint};
pub use segmenter::{RouteSegmenter, Segmentation};
