//! `timetable` CLI — import course lists, lay out weekly timetables, and report
//! conflicts from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Convert a CSV export into a JSON course list (stdin → stdout)
//! cat courses.csv | timetable import
//!
//! # Fail when any CSV row is invalid
//! timetable import -i courses.csv -o courses.json --strict
//!
//! # Lay out the week as JSON using a settings file
//! timetable layout -i courses.json --settings settings.json
//!
//! # Override individual settings
//! timetable layout -i courses.csv --weekends --sunday-first --slot 30 --range 8-18
//!
//! # List overlapping courses
//! timetable conflicts -i courses.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::Path;
use timetable_engine::{Course, ImportReport, SlotDuration, TimeRange, TimetableSettings};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "timetable", version, about = "Weekly course timetable CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log engine decisions (time range, per-day sweeps) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import courses from CSV into a JSON course list
    Import {
        /// Input CSV file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Exit with an error if any row is rejected
        #[arg(long)]
        strict: bool,
    },
    /// Lay out a week of courses as JSON
    Layout {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        display: DisplayArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List overlapping courses per day
    Conflicts {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        display: DisplayArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Course file, JSON or .csv (reads JSON from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
}

#[derive(Args)]
struct DisplayArgs {
    /// JSON settings file; missing fields take their defaults
    #[arg(long)]
    settings: Option<String>,
    /// Show Saturday and Sunday
    #[arg(long)]
    weekends: bool,
    /// Put Sunday first (only with --weekends)
    #[arg(long)]
    sunday_first: bool,
    /// Slot length in minutes (30 or 60)
    #[arg(long, value_parser = parse_slot)]
    slot: Option<SlotDuration>,
    /// Fixed hour window, e.g. "8-18" (disables the dynamic range)
    #[arg(long, value_parser = parse_range)]
    range: Option<TimeRange>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command {
        Commands::Import {
            input,
            output,
            strict,
        } => {
            let csv = read_input(input.as_deref())?;
            let report = timetable_engine::import_csv(csv.as_bytes())
                .context("Failed to read CSV input")?;
            report_row_errors(&report);

            if strict && !report.is_clean() {
                anyhow::bail!("{} row(s) could not be imported", report.errors.len());
            }

            let json = serde_json::to_string_pretty(&report.courses)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Layout {
            source,
            display,
            output,
        } => {
            let courses = load_courses(source.input.as_deref())?;
            let settings = build_settings(&display)?;
            let timetable = timetable_engine::build_timetable(&courses, &settings)
                .context("Failed to lay out timetable")?;
            info!(
                conflicting = timetable.conflict_count(),
                "laid out {} course(s)",
                timetable.courses.len()
            );

            let json = serde_json::to_string_pretty(&timetable)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Conflicts { source, display } => {
            let courses = load_courses(source.input.as_deref())?;
            let settings = build_settings(&display)?;
            let range = timetable_engine::resolve_time_range(&courses, settings.range_mode()?);
            let pairs =
                timetable_engine::conflict_report(&courses, range.start_hour, settings.slot_duration);

            if pairs.is_empty() {
                println!("No conflicts.");
            }
            for pair in &pairs {
                println!(
                    "{}: {} overlaps {} by {} min",
                    pair.day,
                    describe(pair.course_a),
                    describe(pair.course_b),
                    pair.overlap_minutes
                );
            }
        }
    }

    Ok(())
}

fn describe(course: &Course) -> String {
    format!("{} ({}-{})", course.name, course.start_time, course.end_time)
}

fn parse_slot(raw: &str) -> Result<SlotDuration, String> {
    let minutes: u32 = raw
        .parse()
        .map_err(|_| format!("'{}' is not a number of minutes", raw))?;
    SlotDuration::try_from(minutes).map_err(|e| e.to_string())
}

fn parse_range(raw: &str) -> Result<TimeRange, String> {
    let (start, end) = raw
        .split_once('-')
        .ok_or_else(|| format!("'{}' is not START-END", raw))?;
    let start: u32 = start.trim().parse().map_err(|_| format!("invalid start hour '{}'", start))?;
    let end: u32 = end.trim().parse().map_err(|_| format!("invalid end hour '{}'", end))?;
    TimeRange::new(start, end).map_err(|e| e.to_string())
}

/// Merge the settings file (if any) with the command-line overrides.
fn build_settings(display: &DisplayArgs) -> Result<TimetableSettings> {
    let mut settings = match display.settings.as_deref() {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file: {}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid settings file: {}", path))?
        }
        None => TimetableSettings::default(),
    };

    if display.weekends {
        settings.show_weekends = true;
    }
    if display.sunday_first {
        settings.start_with_sunday = true;
    }
    if let Some(slot) = display.slot {
        settings.slot_duration = slot;
    }
    if let Some(range) = display.range {
        settings.dynamic_time_range = false;
        settings.start_hour = range.start_hour;
        settings.end_hour = range.end_hour;
    }

    settings.validate().context("Invalid timetable settings")?;
    Ok(settings)
}

/// Load and validate courses from a JSON course list or a CSV export.
///
/// Invalid CSV rows are skipped with a warning; an invalid JSON course is an
/// error.
fn load_courses(path: Option<&str>) -> Result<Vec<Course>> {
    let raw = read_input(path)?;

    let is_csv = path
        .and_then(|p| Path::new(p).extension())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        let report = timetable_engine::import_csv(raw.as_bytes()).context("Failed to read CSV input")?;
        report_row_errors(&report);
        return Ok(report.courses);
    }

    let courses: Vec<Course> = serde_json::from_str(&raw).context("Failed to parse course JSON")?;
    timetable_engine::validate_courses(&courses)?;
    Ok(courses)
}

fn report_row_errors(report: &ImportReport) {
    for error in &report.errors {
        eprintln!("{}", error);
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
