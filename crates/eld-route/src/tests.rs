//! Unit tests for eld-route.

use chrono::{NaiveDate, NaiveDateTime};

use eld_core::{DutyStatus, GeoPoint, RouteSegment, hours_to_duration};
use eld_hos::{CycleState, RuleSet};

use crate::{Activity, DutyInterval, RouteError, RouteSegmenter, Segmentation, audit_intervals};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_hms_opt(8, 0, 0).unwrap()
}

/// A straight segment heading east from `lon`.
fn leg(lon: f64, miles: f64, hours: f64) -> RouteSegment {
    RouteSegment::new(GeoPoint::new(35.0, lon), GeoPoint::new(35.0, lon + 1.0), miles, hours)
}

fn run(rules: &RuleSet, segments: &[RouteSegment], state: &mut CycleState) -> Segmentation {
    RouteSegmenter::new(rules).run(segments, state, t0()).unwrap()
}

fn activities(seg: &Segmentation) -> Vec<Activity> {
    seg.intervals.iter().map(|i| i.activity).collect()
}

fn hours(seg: &Segmentation) -> Vec<f64> {
    seg.intervals.iter().map(DutyInterval::duration_hours).collect()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-6, "{a} != {b}");
}

// ── Segmenter ─────────────────────────────────────────────────────────────────

mod segmenter {
    use super::*;

    #[test]
    fn long_day_gets_one_daily_rest() {
        let rules = RuleSet::federal_70_8();
        let mut state = CycleState::fresh();
        let seg = run(&rules, &[leg(-100.0, 700.0, 13.0)], &mut state);

        assert_eq!(
            activities(&seg),
            vec![
                Activity::Pickup,
                Activity::Driving,
                Activity::Rest,
                Activity::Driving,
                Activity::Dropoff,
            ]
        );
        let h = hours(&seg);
        for (got, want) in h.iter().zip([1.0, 11.0, 10.0, 2.0, 1.0]) {
            assert_close(*got, want);
        }
        assert_eq!(seg.intervals[2].status, DutyStatus::OffDuty);
        assert_eq!(seg.intervals[0].status, DutyStatus::OnDutyNotDriving);
        assert_eq!(seg.end_time(), Some(t0() + hours_to_duration(25.0)));
    }

    #[test]
    fn spent_cycle_forces_restart() {
        let rules = RuleSet::federal_70_8();
        let mut state = CycleState::seed(&rules, 68.0, 0.0, 0.0).unwrap();
        let seg = run(&rules, &[leg(-100.0, 300.0, 5.0)], &mut state);

        assert_eq!(
            activities(&seg),
            vec![
                Activity::Pickup,
                Activity::Driving,
                Activity::Restart,
                Activity::Driving,
                Activity::Dropoff,
            ]
        );
        let h = hours(&seg);
        for (got, want) in h.iter().zip([1.0, 1.0, 34.0, 4.0, 1.0]) {
            assert_close(*got, want);
        }
        // Only the post-restart driving and dropoff remain on the cycle.
        assert_close(state.cycle_hours_last_8_days, 5.0);
    }

    #[test]
    fn restart_taken_up_front_when_a_daily_rest_would_not_do() {
        let rules = RuleSet::federal_70_8();
        let mut state = CycleState::seed(&rules, 55.0, 0.0, 0.0).unwrap();
        let seg = run(&rules, &[leg(-100.0, 1_000.0, 20.0)], &mut state);

        assert_eq!(
            activities(&seg),
            vec![
                Activity::Pickup,
                Activity::Driving,
                Activity::Restart,
                Activity::Driving,
                Activity::Dropoff,
            ]
        );
        let h = hours(&seg);
        for (got, want) in h.iter().zip([1.0, 11.0, 34.0, 9.0, 1.0]) {
            assert_close(*got, want);
        }
        assert_eq!(seg.count(Activity::Rest), 0);
        assert_close(state.cycle_hours_last_8_days, 10.0);
    }

    #[test]
    fn daily_rest_when_the_cycle_covers_the_rest_of_the_trip() {
        let rules = RuleSet::federal_70_8();
        let mut state = CycleState::seed(&rules, 55.0, 0.0, 0.0).unwrap();
        let seg = run(&rules, &[leg(-100.0, 650.0, 13.0)], &mut state);

        assert_eq!(
            activities(&seg),
            vec![
                Activity::Pickup,
                Activity::Driving,
                Activity::Rest,
                Activity::Driving,
                Activity::Dropoff,
            ]
        );
        assert_close(state.cycle_hours_last_8_days, 70.0);
    }

    #[test]
    fn fuel_every_thousand_miles() {
        let rules = RuleSet::federal_70_8();
        let mut state = CycleState::fresh();
        let seg = run(&rules, &[leg(-110.0, 2_400.0, 24.0)], &mut state);

        let fuel: Vec<f64> = seg.route.stops_of(Activity::FuelStop).map(|s| s.mile_marker).collect();
        assert_eq!(fuel.len(), 2);
        assert_close(fuel[0], 1_000.0);
        assert_close(fuel[1], 2_000.0);
        assert_eq!(seg.count(Activity::FuelStop), 2);
        for stop in seg.route.stops_of(Activity::FuelStop) {
            assert_close(stop.duration_hours(), 0.5);
        }
    }

    #[test]
    fn ending_exactly_on_threshold_needs_no_fuel() {
        let rules = RuleSet::federal_70_8();
        let mut state = CycleState::fresh();
        let seg = run(&rules, &[leg(-100.0, 1_000.0, 20.0)], &mut state);
        assert_eq!(seg.count(Activity::FuelStop), 0);
    }

    #[test]
    fn fuel_at_segment_boundary() {
        let rules = RuleSet::federal_70_8();
        let mut state = CycleState::fresh();
        let route = [leg(-100.0, 500.0, 10.0), leg(-99.0, 500.0, 10.0), leg(-98.0, 100.0, 2.0)];
        let seg = run(&rules, &route, &mut state);

        let fuel: Vec<_> = seg.route.stops_of(Activity::FuelStop).collect();
        assert_eq!(fuel.len(), 1);
        assert_close(fuel[0].mile_marker, 1_000.0);
        assert_eq!(fuel[0].location, route[2].start);
    }

    #[test]
    fn fuel_comes_before_rest_on_a_tie() {
        let rules = RuleSet { max_distance_before_fuel: 550.0, ..RuleSet::federal_70_8() };
        let mut state = CycleState::fresh();
        let seg = run(&rules, &[leg(-100.0, 600.0, 12.0)], &mut state);
        assert_eq!(
            activities(&seg),
            vec![
                Activity::Pickup,
                Activity::Driving,
                Activity::FuelStop,
                Activity::Rest,
                Activity::Driving,
                Activity::Dropoff,
            ]
        );
    }

    #[test]
    fn fuel_stop_that_does_not_fit_waits_for_rest() {
        let rules = RuleSet { max_distance_before_fuel: 25.0, ..RuleSet::federal_70_8() };
        let mut state = CycleState::seed(&rules, 20.0, 0.0, 12.5).unwrap();
        let seg = run(&rules, &[leg(-100.0, 50.0, 1.0)], &mut state);
        assert_eq!(
            activities(&seg),
            vec![
                Activity::Pickup,
                Activity::Driving,
                Activity::Rest,
                Activity::FuelStop,
                Activity::Driving,
                Activity::Dropoff,
            ]
        );
        assert!(audit_intervals(&rules, &CycleState::seed(&rules, 20.0, 0.0, 12.5).unwrap(), &seg.intervals).is_empty());
    }

    #[test]
    fn pickup_waits_for_restart_when_cycle_is_full() {
        let rules = RuleSet::federal_70_8();
        let mut state = CycleState::seed(&rules, 69.5, 0.0, 0.0).unwrap();
        let seg = run(&rules, &[leg(-100.0, 60.0, 1.0)], &mut state);
        assert_eq!(
            activities(&seg),
            vec![Activity::Restart, Activity::Pickup, Activity::Driving, Activity::Dropoff]
        );
        assert_close(seg.intervals[0].duration_hours(), 34.0);
    }

    #[test]
    fn sleeper_berth_rest_status() {
        let rules = RuleSet::federal_70_8();
        let mut state = CycleState::fresh();
        let seg = RouteSegmenter::new(&rules)
            .with_rest_status(DutyStatus::SleeperBerth)
            .unwrap()
            .run(&[leg(-100.0, 700.0, 13.0)], &mut state, t0())
            .unwrap();
        assert_eq!(seg.intervals[2].status, DutyStatus::SleeperBerth);
        assert_eq!(seg.intervals[2].activity, Activity::Rest);
    }

    #[test]
    fn driving_is_not_a_rest_status() {
        let rules = RuleSet::federal_70_8();
        let err = RouteSegmenter::new(&rules).with_rest_status(DutyStatus::Driving).unwrap_err();
        assert!(matches!(err, RouteError::InvalidRestStatus(DutyStatus::Driving)));
    }

    #[test]
    fn empty_route_rejected() {
        let rules = RuleSet::federal_70_8();
        let err = RouteSegmenter::new(&rules).run(&[], &mut CycleState::fresh(), t0()).unwrap_err();
        assert!(matches!(err, RouteError::EmptyRoute));
    }

    #[test]
    fn bad_segment_reports_its_index() {
        let rules = RuleSet::federal_70_8();
        let route = [leg(-100.0, 100.0, 2.0), leg(-99.0, 0.0, 1.0)];
        let err = RouteSegmenter::new(&rules).run(&route, &mut CycleState::fresh(), t0()).unwrap_err();
        assert!(matches!(
            err,
            RouteError::Core(eld_core::EldError::InvalidSegment { index: 1, .. })
        ));
    }

    #[test]
    fn driving_location_is_chunk_start() {
        let rules = RuleSet::federal_70_8();
        let mut state = CycleState::fresh();
        let route = [leg(-100.0, 700.0, 13.0)];
        let seg = run(&rules, &route, &mut state);
        assert_eq!(seg.intervals[1].location, route[0].start);
        assert_eq!(seg.intervals[3].location, route[0].point_after(11.0));
        assert_eq!(seg.intervals[4].location, route[0].end);
    }

    #[test]
    fn same_input_same_output() {
        let rules = RuleSet::federal_60_7();
        let route = [leg(-120.0, 800.0, 14.5), leg(-119.0, 1_300.0, 21.0)];
        let a = run(&rules, &route, &mut CycleState::seed(&rules, 40.0, 3.0, 5.0).unwrap());
        let b = run(&rules, &route, &mut CycleState::seed(&rules, 40.0, 3.0, 5.0).unwrap());
        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }
}

// ── Properties over a grid of trips ───────────────────────────────────────────

mod properties {
    use super::*;

    fn routes() -> Vec<Vec<RouteSegment>> {
        vec![
            vec![leg(-100.0, 30.0, 0.6)],
            vec![leg(-100.0, 700.0, 13.0)],
            vec![leg(-110.0, 2_400.0, 24.0)],
            vec![leg(-120.0, 450.0, 7.25), leg(-119.0, 1_100.0, 17.3), leg(-118.0, 95.0, 1.9)],
            (0..12).map(|i| leg(-120.0 + i as f64, 310.0, 5.1)).collect(),
        ]
    }

    fn trips() -> impl Iterator<Item = (RuleSet, CycleState, Vec<RouteSegment>)> {
        let mut out = Vec::new();
        for rules in [RuleSet::federal_70_8(), RuleSet::federal_60_7()] {
            for (cycle, drive, duty) in [(0.0, 0.0, 0.0), (35.0, 6.0, 8.5), (59.0, 0.0, 0.0), (55.0, 10.0, 13.5)] {
                let state = CycleState::seed(&rules, cycle, drive, duty).unwrap();
                for route in routes() {
                    out.push((rules.clone(), state.clone(), route));
                }
            }
        }
        out.into_iter()
    }

    #[test]
    fn every_trip_passes_the_audit() {
        for (rules, initial, route) in trips() {
            let mut state = initial.clone();
            let seg = run(&rules, &route, &mut state);
            let violations = audit_intervals(&rules, &initial, &seg.intervals);
            assert!(violations.is_empty(), "{}: {violations:?}", rules.name);
        }
    }

    #[test]
    fn distance_and_driving_time_are_preserved() {
        for (rules, initial, route) in trips() {
            let seg = run(&rules, &route, &mut initial.clone());
            let miles: f64 = route.iter().map(|s| s.distance_miles).sum();
            let hours: f64 = route.iter().map(|s| s.driving_time_hours).sum();
            assert!((seg.driving_miles() - miles).abs() < 1e-6 * miles.max(1.0));
            assert!((seg.route.total_distance_miles() - miles).abs() < 1e-6 * miles.max(1.0));
            assert!((seg.driving_hours() - hours).abs() < 1e-3);
        }
    }

    #[test]
    fn timeline_is_contiguous_and_bracketed() {
        for (rules, initial, route) in trips() {
            let seg = run(&rules, &route, &mut initial.clone());
            assert_eq!(seg.start_time(), Some(t0()));
            for pair in seg.intervals.windows(2) {
                assert_eq!(pair[0].end_time, pair[1].start_time);
            }
            assert!(seg.intervals.iter().all(|i| i.end_time > i.start_time));
            assert!(seg.intervals.iter().all(|i| i.is_driving() || i.distance_miles == 0.0));
            assert!(seg.intervals.iter().any(|i| i.activity == Activity::Pickup));
            assert_eq!(seg.intervals.last().map(|i| i.activity), Some(Activity::Dropoff));
        }
    }

    #[test]
    fn fuel_stops_never_exceed_the_threshold() {
        for (rules, initial, route) in trips() {
            let seg = run(&rules, &route, &mut initial.clone());
            let mut last = 0.0;
            for stop in seg.route.stops_of(Activity::FuelStop) {
                assert!(stop.mile_marker - last <= rules.max_distance_before_fuel + 1e-6);
                last = stop.mile_marker;
            }
            assert!(seg.driving_miles() - last <= rules.max_distance_before_fuel + 1e-6);
        }
    }
}

// ── Audit ─────────────────────────────────────────────────────────────────────

mod audit {
    use super::*;
    use crate::ViolationKind;

    fn interval(status: DutyStatus, from: f64, to: f64) -> DutyInterval {
        DutyInterval {
            status,
            start_time:     t0() + hours_to_duration(from),
            end_time:       t0() + hours_to_duration(to),
            location:       GeoPoint::default(),
            distance_miles: 0.0,
            activity:       if status == DutyStatus::Driving { Activity::Driving } else { Activity::Rest },
        }
    }

    fn kinds(intervals: &[DutyInterval]) -> Vec<ViolationKind> {
        audit_intervals(&RuleSet::federal_70_8(), &CycleState::fresh(), intervals)
            .into_iter()
            .map(|v| v.kind)
            .collect()
    }

    #[test]
    fn clean_timeline() {
        let timeline = [
            interval(DutyStatus::Driving, 0.0, 11.0),
            interval(DutyStatus::OffDuty, 11.0, 21.0),
            interval(DutyStatus::Driving, 21.0, 32.0),
        ];
        assert!(kinds(&timeline).is_empty());
    }

    #[test]
    fn too_much_driving() {
        let timeline = [interval(DutyStatus::Driving, 0.0, 12.0)];
        assert_eq!(kinds(&timeline), vec![ViolationKind::DrivingLimit]);
    }

    #[test]
    fn short_break_does_not_reset_the_window() {
        let timeline = [
            interval(DutyStatus::OnDutyNotDriving, 0.0, 8.0),
            interval(DutyStatus::OffDuty, 8.0, 10.0),
            interval(DutyStatus::Driving, 10.0, 17.0),
        ];
        assert_eq!(kinds(&timeline), vec![ViolationKind::DutyWindow]);
    }

    #[test]
    fn split_rest_counts_as_one() {
        let timeline = [
            interval(DutyStatus::Driving, 0.0, 11.0),
            interval(DutyStatus::OffDuty, 11.0, 16.0),
            interval(DutyStatus::SleeperBerth, 16.0, 21.0),
            interval(DutyStatus::Driving, 21.0, 30.0),
        ];
        assert!(kinds(&timeline).is_empty());
    }

    #[test]
    fn gaps_and_overlaps() {
        let timeline = [
            interval(DutyStatus::Driving, 0.0, 2.0),
            interval(DutyStatus::Driving, 3.0, 4.0),
            interval(DutyStatus::Driving, 3.5, 5.0),
            interval(DutyStatus::Driving, 5.0, 5.0),
        ];
        assert_eq!(
            kinds(&timeline),
            vec![ViolationKind::Gap, ViolationKind::Overlap, ViolationKind::ZeroLength]
        );
    }

    #[test]
    fn backwards_intervals_are_flagged_not_skipped() {
        let timeline = [
            interval(DutyStatus::Driving, 0.0, 2.0),
            interval(DutyStatus::Driving, 2.0, 1.0),
            interval(DutyStatus::OffDuty, 1.0, 0.5),
        ];
        let found = audit_intervals(&RuleSet::federal_70_8(), &CycleState::fresh(), &timeline);
        let negative: Vec<usize> = found
            .iter()
            .filter(|v| v.kind == ViolationKind::NegativeLength)
            .map(|v| v.index)
            .collect();
        assert_eq!(negative, vec![1, 2]);
        assert!(found.iter().all(|v| !v.detail.is_empty()));
    }

    #[test]
    fn cycle_overrun() {
        let rules = RuleSet::federal_70_8();
        let initial = CycleState::seed(&rules, 69.0, 0.0, 0.0).unwrap();
        let timeline = [interval(DutyStatus::Driving, 0.0, 2.0)];
        let found = audit_intervals(&rules, &initial, &timeline);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ViolationKind::CycleLimit);
        assert_eq!(found[0].index, 0);
    }
}
