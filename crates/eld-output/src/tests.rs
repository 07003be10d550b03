//! Integration tests for eld-output.

use chrono::{NaiveDate, NaiveDateTime};

use eld_core::{GeoPoint, RouteSegment};
use eld_trip::{TripPlan, TripPlannerBuilder, TripRequest};

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_hms_opt(8, 0, 0).unwrap()
}

fn request() -> TripRequest {
    let segment = RouteSegment::new(GeoPoint::new(41.0, -87.0), GeoPoint::new(40.0, -97.0), 700.0, 13.0);
    TripRequest::new("R. Alvarez", t0(), 0.0, vec![segment])
}

mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvWriter, DAILY_LOG_HEADERS, INTERVAL_HEADERS, LOG_ENTRY_HEADERS};
    use crate::observer::TripOutputObserver;
    use crate::row::{DailyLogRow, IntervalRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn plan_into(dir: &TempDir) -> TripPlan {
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = TripOutputObserver::new(writer);
        let plan = TripPlannerBuilder::new().build().unwrap().plan_with(&request(), &mut obs).unwrap();
        assert!(obs.take_error().is_none());
        plan
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("duty_intervals.csv").exists());
        assert!(dir.path().join("log_entries.csv").exists());
        assert!(dir.path().join("daily_logs.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(headers(&dir, "duty_intervals.csv"), INTERVAL_HEADERS);
        assert_eq!(headers(&dir, "log_entries.csv"), LOG_ENTRY_HEADERS);
        assert_eq!(headers(&dir, "daily_logs.csv"), DAILY_LOG_HEADERS);
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(CsvWriter::new(std::path::Path::new("/nonexistent/eld-out")).is_err());
    }

    #[test]
    fn observer_writes_whole_plan() {
        let dir = tmp();
        let plan = plan_into(&dir);

        let intervals = records(&dir, "duty_intervals.csv");
        assert_eq!(intervals.len(), plan.intervals.len());
        assert_eq!(&intervals[0][0], "R. Alvarez");
        assert_eq!(&intervals[0][1], "ON");
        assert_eq!(&intervals[0][2], "Loading/Pickup");
        assert_eq!(&intervals[0][3], "2026-03-02T08:00:00.000");
        assert_eq!(&intervals[1][1], "D");
        assert_eq!(&intervals[1][5], "11.0000");
        assert_eq!(&intervals[2][1], "OFF");

        let entries = records(&dir, "log_entries.csv");
        assert_eq!(entries.len(), plan.log_entries.len());
        assert_eq!(&entries[0][0], "2026-03-02");
        assert_eq!(&entries[entries.len() - 1][9], "Unloading/Delivery");

        let days = records(&dir, "daily_logs.csv");
        assert_eq!(days.len(), 2);
        assert_eq!(&days[0][0], "2026-03-02");
        assert_eq!(&days[0][4], "11.0000"); // driving_hours
        assert_eq!(&days[1][0], "2026-03-03");
        assert_eq!(&days[1][9], "700.000"); // ending_odometer
    }

    #[test]
    fn one_writer_collects_several_trips() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = TripOutputObserver::new(writer);
        let planner = TripPlannerBuilder::new().build().unwrap();
        let a = planner.plan_with(&request(), &mut obs).unwrap();
        let b = planner.plan_with(&request(), &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let intervals = records(&dir, "duty_intervals.csv");
        assert_eq!(intervals.len(), a.intervals.len() + b.intervals.len());
    }

    #[test]
    fn rows_mirror_plan() {
        let plan = TripPlannerBuilder::new().build().unwrap().plan(&request()).unwrap();
        let row = IntervalRow::new(&plan.driver_name, &plan.intervals[1]);
        assert_eq!(row.status, "D");
        assert_eq!(row.activity, "Driving");
        assert!((row.duration_hours - 11.0).abs() < 1e-6);

        let day = DailyLogRow::from(&plan.daily_logs[0]);
        assert_eq!(day.duty_changes, 2);
        assert!((day.total_on_duty_hours - 12.0).abs() < 1e-6);
    }
}

mod observer_errors {
    use super::*;
    use crate::row::{DailyLogRow, IntervalRow, LogEntryRow};
    use crate::{OutputError, OutputResult, OutputWriter, TripOutputObserver};

    /// Fails every write with a distinct message.
    #[derive(Default)]
    struct BrokenWriter {
        calls: usize,
    }

    impl BrokenWriter {
        fn fail(&mut self) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.calls))))
        }
    }

    impl OutputWriter for BrokenWriter {
        fn write_intervals(&mut self, _rows: &[IntervalRow]) -> OutputResult<()> {
            self.fail()
        }
        fn write_log_entries(&mut self, _rows: &[LogEntryRow]) -> OutputResult<()> {
            self.fail()
        }
        fn write_daily_log(&mut self, _row: &DailyLogRow) -> OutputResult<()> {
            self.fail()
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.fail()
        }
    }

    #[test]
    fn first_error_is_kept_and_planning_continues() {
        let mut obs = TripOutputObserver::new(BrokenWriter::default());
        let plan = TripPlannerBuilder::new().build().unwrap().plan_with(&request(), &mut obs);
        assert!(plan.is_ok());

        let err = obs.take_error().unwrap();
        assert_eq!(err.to_string(), "I/O error: write 1");
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().calls > 1);
    }
}
