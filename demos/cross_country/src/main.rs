//! cross_country: plans one long-haul trip and writes its ELD logs.
//!
//! Usage:
//!
//! ```text
//! cross_country [TRIP_JSON] [--rules RULES_JSON] [--60-7] [--sleeper] [--pad]
//! ```
//!
//! Without `TRIP_JSON` a built-in Chicago → Los Angeles route is planned for
//! a driver with 42 cycle hours already used.  Output lands in
//! `output/cross_country/`.  Set `RUST_LOG=debug` to see every inserted stop.

mod route;


use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use eld_core::DutyStatus;
use eld_hos::RuleSet;
use eld_log::{DailyLog, EldLogEntry};
use eld_output::{CsvWriter, OutputWriter, TripOutputObserver};
use eld_route::{Activity, DutyInterval};
use eld_trip::{TripObserver, TripPlan, TripPlannerBuilder, TripRequest, plan_batch};

use route::build_route;

// ── Constants ─────────────────────────────────────────────────────────────────

const DRIVER:         &str = "R. Alvarez";
const CYCLE_HOURS:    f64  = 42.0;
const OUTPUT_DIR:     &str = "output/cross_country";
/// Cycle hours compared in the what-if table.
const WHAT_IF_CYCLES: [f64; 4] = [0.0, 35.0, 60.0, 69.0];

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "cross_country", about = "Plan a long-haul trip and write its ELD logs")]
struct Args {
    /// Trip request JSON (defaults to the built-in Chicago → Los Angeles route)
    trip: Option<PathBuf>,

    /// Rule-set JSON; overrides --60-7
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Use the 60-hour / 7-day cycle
    #[arg(long = "60-7")]
    short: bool,

    /// Log rests in the sleeper berth
    #[arg(long)]
    sleeper: bool,

    /// Pad the first and last day with off-duty time
    #[arg(long)]
    pad: bool,
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:     TripOutputObserver<W>,
    intervals: usize,
    entries:   usize,
    days:      usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: TripOutputObserver<W>) -> Self {
        Self { inner, intervals: 0, entries: 0, days: 0 }
    }
}

impl<W: OutputWriter> TripObserver for CountingObserver<W> {
    fn on_plan_start(&mut self, request: &TripRequest) {
        self.inner.on_plan_start(request);
    }

    fn on_interval(&mut self, interval: &DutyInterval) {
        self.intervals += 1;
        self.inner.on_interval(interval);
    }

    fn on_day(&mut self, log: &DailyLog, entries: &[EldLogEntry]) {
        self.days += 1;
        self.entries += entries.len();
        self.inner.on_day(log, entries);
    }

    fn on_plan_end(&mut self, plan: &TripPlan) {
        self.inner.on_plan_end(plan);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // 1. Trip request.
    let request = match &args.trip {
        Some(path) => TripRequest::from_json_file(path)
            .with_context(|| format!("loading trip {}", path.display()))?,
        None => {
            let start = NaiveDate::from_ymd_opt(2026, 3, 2)
                .and_then(|d| d.and_hms_opt(6, 0, 0))
                .context("built-in trip start")?;
            TripRequest::new(DRIVER, start, CYCLE_HOURS, build_route())
        }
    };

    // 2. Planner.
    let mut builder = TripPlannerBuilder::new().pad_partial_days(args.pad);
    if args.short {
        builder = builder.rules(RuleSet::federal_60_7());
    }
    if let Some(path) = &args.rules {
        builder = builder.rules_file(path);
    }
    if args.sleeper {
        builder = builder.rest_status(DutyStatus::SleeperBerth);
    }
    let planner = builder.build()?;

    println!("=== cross_country: ELD trip planner ===");
    println!(
        "Driver: {}  |  Rules: {}  |  Cycle used: {:.1} h",
        request.driver_name,
        planner.rules().name,
        request.current_cycle_hours
    );
    println!(
        "Route: {} legs, {:.0} mi, {:.1} h driving",
        request.segments.len(),
        request.total_distance_miles(),
        request.total_driving_hours()
    );
    println!();

    // 3. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(TripOutputObserver::new(writer));

    // 4. Plan.
    let t0 = Instant::now();
    let plan = planner.plan_with(&request, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Planned in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  duty_intervals.csv : {} rows", obs.intervals);
    println!("  log_entries.csv    : {} rows", obs.entries);
    println!("  daily_logs.csv     : {} rows", obs.days);
    println!();
    if let (Some(start), Some(end)) = (plan.start_time(), plan.end_time()) {
        println!("Depart {start}  →  arrive {end}  ({:.1} h)", plan.total_hours());
    }
    println!(
        "Stops: {} fuel, {} rest, {} restart",
        plan.count(Activity::FuelStop),
        plan.count(Activity::Rest),
        plan.count(Activity::Restart)
    );
    println!();

    // 6. Daily log table.
    println!(
        "{:<12} {:>6} {:>6} {:>6} {:>6} {:>8} {:>8}",
        "Date", "OFF", "SB", "D", "ON", "Miles", "Cycle"
    );
    println!("{}", "-".repeat(58));
    for log in &plan.daily_logs {
        println!(
            "{:<12} {:>6.2} {:>6.2} {:>6.2} {:>6.2} {:>8.1} {:>8.2}",
            log.date.to_string(),
            log.off_duty_hours,
            log.sleeper_berth_hours,
            log.driving_hours,
            log.on_duty_not_driving_hours,
            log.miles_driven(),
            log.cycle_hours_used,
        );
    }
    println!();

    // 7. What-if: the same route at different starting cycle hours.
    let requests: Vec<TripRequest> = WHAT_IF_CYCLES
        .iter()
        .map(|&cycle| TripRequest { current_cycle_hours: cycle, ..request.clone() })
        .collect();
    println!("{:<10} {:>10} {:>8} {:>8}", "Cycle", "Total h", "Rests", "Restart");
    println!("{}", "-".repeat(40));
    for (cycle, result) in WHAT_IF_CYCLES.iter().zip(plan_batch(&planner, &requests)) {
        match result {
            Ok(p) => println!(
                "{:<10.1} {:>10.1} {:>8} {:>8}",
                cycle,
                p.total_hours(),
                p.count(Activity::Rest),
                p.count(Activity::Restart)
            ),
            Err(e) => println!("{cycle:<10.1} error: {e}"),
        }
    }

    Ok(())
}
