//! `eld-trip`: plans a trip end to end.
//!
//! # Pipeline
//!
//! ```text
//! TripRequest
//!   ① Validate → non-empty route, seed CycleState (range-checked)
//!   ② Segment  → RouteSegmenter, pickup, driving chunks, fuel, rests, dropoff
//!   ③ Audit    → replay the timeline; any violation aborts the plan
//!   ④ Logs     → split at midnight, build daily totals
//!   ⑤ Observe  → TripObserver callbacks, then the TripPlan is returned
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | `plan_batch` runs on Rayon's thread pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use eld_trip::{TripPlannerBuilder, TripRequest};
//!
//! let planner = TripPlannerBuilder::new().build()?;
//! let plan = planner.plan(&TripRequest::new("R. Alvarez", start, 22.5, segments))?;
//! for log in &plan.daily_logs {
//!     println!("{}: {:.1} mi", log.date, log.miles_driven());
//! }
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod planner;
pub mod request;


pub use batch::plan_batch;
pub use builder::TripPlannerBuilder;
pub use error::{TripError, TripResult};
pub use observer::{NoopObserver, TripObserver};
pub use planner::{TripPlan, TripPlanner};
pub use request::TripRequest;
