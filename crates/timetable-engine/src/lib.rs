//! # timetable-engine
//!
//! Deterministic weekly timetable layout for course schedules.
//!
//! The engine takes a snapshot of course records plus a handful of display
//! settings and derives everything a renderer needs: the hour window to show,
//! the slot position and height of every course, per-day conflict levels, and
//! the ordered list of visible days. Every stage is a pure function; the whole
//! pipeline is re-run on every change.
//!
//! ## Modules
//!
//! - [`course`] — Course records, weekdays, and wall-clock times
//! - [`range`] — Dynamic and manual display hour windows
//! - [`slot`] — Clock time → slot index/duration, grid rows
//! - [`conflict`] — Per-day overlap sweep and conflict levels
//! - [`grouping`] — Day buckets and visible-day ordering
//! - [`settings`] — Timetable display settings
//! - [`pipeline`] — The composed `build_timetable` entry point
//! - [`import`] — CSV course import and row validation
//! - [`error`] — Error types

pub mod conflict;
pub mod course;
pub mod error;
pub mod grouping;
pub mod import;
pub mod pipeline;
pub mod range;
pub mod settings;
pub mod slot;

pub use conflict::{conflict_report, detect_conflicts, find_conflicting_courses, ConflictPair};
pub use course::{validate_courses, ClockTime, Course, TimetableCourse, Weekday};
pub use error::TimetableError;
pub use grouping::{group_by_day, visible_days, CoursesByDay};
pub use import::{import_csv, normalize_day, normalize_time, parse_days, ImportReport, RawCourseRow, RowError};
pub use pipeline::{build_timetable, Timetable};
pub use range::{resolve_time_range, RangeMode, TimeRange};
pub use settings::{SlotDuration, TimetableSettings};
pub use slot::{grid_slots, hour_slots, slot_duration, slot_index, TimeSlot};
