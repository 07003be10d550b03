//! JSON rule-set loader.
//!
//! # JSON format
//!
//! One object with every field of [`RuleSet`]; unknown fields are rejected so
//! a misspelt limit cannot silently fall back to a default.
//!
//! ```json
//! {
//!   "name": "US federal 60/7",
//!   "max_driving_per_day": 11,
//!   "max_on_duty_window": 14,
//!   "min_off_duty_rest": 10,
//!   "max_cycle_hours": 60,
//!   "cycle_days": 7,
//!   "restart_duration": 34,
//!   "max_distance_before_fuel": 1000,
//!   "fuel_stop_duration": 0.5,
//!   "pickup_dropoff_buffer": 1
//! }
//! ```
//!
//! Loaded tables are validated with [`RuleSet::validate`] before being
//! returned.

use std::io::Read;
use std::path::Path;

use crate::{HosResult, RuleSet};

/// Load and validate a [`RuleSet`] from a JSON file.
pub fn load_rule_set_json(path: &Path) -> HosResult<RuleSet> {
    let file = std::fs::File::open(path)?;
    load_rule_set_reader(std::io::BufReader::new(file))
}

/// Like [`load_rule_set_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for rule sets embedded in
/// a larger configuration blob.
pub fn load_rule_set_reader<R: Read>(reader: R) -> HosResult<RuleSet> {
    let rules: RuleSet = serde_json::from_reader(reader)?;
    rules.validate()?;
    Ok(rules)
}
