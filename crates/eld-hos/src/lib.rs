//! `eld-hos`: Hours-of-Service rule sets and the cycle state tracker.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`rules`]        | `RuleSet` (table of named limits), `Limit`, `RestKind`     |
//! | [`cycle`]        | `CycleState`: per-trip mutable duty counters              |
//! | [`availability`] | `Availability`: remaining hours under a rule set          |
//! | [`loader`]       | `load_rule_set_json`, `load_rule_set_reader`               |
//! | [`error`]        | `HosError`, `HosResult<T>`                                 |
//!
//! # Rule model (summary)
//!
//! ```text
//! can_drive_for(s, h) ⇔ s.driving + h ≤ 11 ∧ s.window + h ≤ 14 ∧ s.cycle + h ≤ 70
//! can_work_for(s, h)  ⇔                      s.window + h ≤ 14 ∧ s.cycle + h ≤ 70
//! rest ≥ 10 h → driving = window = 0
//! rest ≥ 34 h → driving = window = cycle = 0
//! ```
//!
//! The numbers above are the federal 70-hour/8-day property-carrying limits
//! returned by [`RuleSet::federal_70_8`].  They are data, not code: any other
//! limit table can be loaded from JSON.

pub mod availability;
pub mod cycle;
pub mod error;
pub mod loader;
pub mod rules;


pub use availability::Availability;
pub use cycle::CycleState;
pub use error::{HosError, HosResult};
pub use loader::{load_rule_set_json, load_rule_set_reader};
pub use rules::{Limit, RestKind, RuleSet};
