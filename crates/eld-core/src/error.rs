//! Engine error type.
//!
//! Sub-crates define their own error enums and wrap `EldError` as one
//! variant via `#[from]`, so validation failures raised here surface to the
//! caller unchanged with the offending value attached.

use thiserror::Error;

/// The top-level error type for `eld-core` and a common base for sub-crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EldError {
    /// A route segment with non-positive (or non-finite) distance or time.
    /// Rejected before simulation starts.
    #[error(
        "segment {index} is invalid: distance {distance_miles} mi, driving time {driving_time_hours} h"
    )]
    InvalidSegment {
        index:              usize,
        distance_miles:     f64,
        driving_time_hours: f64,
    },

    /// A trip input outside its legal range (e.g. cycle hours above 70).
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    InputOutOfRange {
        field: &'static str,
        value: f64,
        min:   f64,
        max:   f64,
    },

    /// An internal invariant was broken.  Never clamped: the run is aborted
    /// rather than emit a possibly non-compliant schedule.
    #[error("unreachable state: {0}")]
    UnreachableState(String),
}

impl EldError {
    /// Range check helper used by every validating constructor.
    pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> EldResult<()> {
        if value.is_finite() && value >= min && value <= max {
            Ok(())
        } else {
            Err(EldError::InputOutOfRange { field, value, min, max })
        }
    }
}

/// Shorthand result type for all `eld-*` crates.
pub type EldResult<T> = Result<T, EldError>;
