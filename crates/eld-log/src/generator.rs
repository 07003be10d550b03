//! Midnight splitting.

use chrono::{NaiveDateTime, NaiveTime};

use eld_core::{DutyStatus, hours_between};
use eld_route::DutyInterval;

use crate::EldLogEntry;

/// Remark used on padding entries.
pub const PADDING_REMARK: &str = "Off duty";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogOptions {
    /// Fill the first day from midnight and the last day to midnight with
    /// off-duty entries, so every date in the log covers a full 24 h.
    pub pad_partial_days: bool,
}

/// Split `intervals` at every midnight into log entries, in time order.
///
/// Each piece keeps its interval's status, location, and remark.  Distance
/// is apportioned by time; the last piece of an interval takes whatever the
/// earlier pieces did not, so per-interval distance is preserved exactly.
pub fn generate_log_entries(
    intervals:   &[DutyInterval],
    driver_name: &str,
    options:     &LogOptions,
) -> Vec<EldLogEntry> {
    let mut entries = Vec::with_capacity(intervals.len() + intervals.len() / 4 + 2);

    for interval in intervals {
        let total_hours = interval.duration_hours();
        let mut cursor = interval.start_time;
        let mut miles_left = interval.distance_miles;

        while cursor < interval.end_time {
            let piece_end = next_midnight(cursor).min(interval.end_time);
            let distance_miles = if piece_end == interval.end_time || total_hours <= 0.0 {
                miles_left
            } else {
                interval.distance_miles * hours_between(cursor, piece_end) / total_hours
            };
            miles_left -= distance_miles;

            entries.push(EldLogEntry {
                date:        cursor.date(),
                driver_name: driver_name.to_string(),
                duty_status: interval.status,
                start_time:  cursor,
                end_time:    piece_end,
                location:    interval.location,
                distance_miles,
                remark:      interval.activity.remark().to_string(),
            });
            cursor = piece_end;
        }
    }

    if options.pad_partial_days {
        pad(&mut entries, driver_name);
    }
    entries
}

fn pad(entries: &mut Vec<EldLogEntry>, driver_name: &str) {
    let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
        return;
    };
    let day_start = first.date.and_time(NaiveTime::MIN);
    let lead = (first.start_time > day_start).then(|| off_duty(first, driver_name, day_start, first.start_time));

    // An end on midnight already closes the last date.
    let day_end = next_midnight(last.start_time);
    let tail = (last.end_time < day_end).then(|| off_duty(last, driver_name, last.end_time, day_end));

    if let Some(lead) = lead {
        entries.insert(0, lead);
    }
    entries.extend(tail);
}

fn off_duty(
    neighbour:   &EldLogEntry,
    driver_name: &str,
    start_time:  NaiveDateTime,
    end_time:    NaiveDateTime,
) -> EldLogEntry {
    EldLogEntry {
        date:           start_time.date(),
        driver_name:    driver_name.to_string(),
        duty_status:    DutyStatus::OffDuty,
        start_time,
        end_time,
        location:       neighbour.location,
        distance_miles: 0.0,
        remark:         PADDING_REMARK.to_string(),
    }
}

/// The first midnight strictly after `t`.
pub(crate) fn next_midnight(t: NaiveDateTime) -> NaiveDateTime {
    t.date()
        .succ_opt()
        .map_or(NaiveDateTime::MAX, |d| d.and_time(NaiveTime::MIN))
}
