//! WASM bindings for timetable-engine.
//!
//! Exposes time range resolution, conflict detection, the full layout pass, and
//! CSV import to JavaScript via `wasm-bindgen`. All complex types cross the
//! boundary as JSON strings using the engine's camelCase serde shapes.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timetable-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/timetable_engine_wasm.wasm
//! ```

use serde::Serialize;
use timetable_engine::{Course, RangeMode, SlotDuration, TimetableSettings};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConflictPairDto<'a> {
    day: timetable_engine::Weekday,
    course_a: &'a str,
    course_b: &'a str,
    overlap_slots: i32,
    overlap_minutes: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RowErrorDto<'a> {
    row_number: usize,
    messages: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportReportDto<'a> {
    courses: &'a [Course],
    errors: Vec<RowErrorDto<'a>>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse and validate a JSON course list; invalid courses never reach the engine.
fn parse_courses_json(json: &str) -> Result<Vec<Course>, JsValue> {
    let courses: Vec<Course> =
        serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid courses JSON: {}", e)))?;
    timetable_engine::validate_courses(&courses).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(courses)
}

fn parse_slot_duration(minutes: u32) -> Result<SlotDuration, JsValue> {
    SlotDuration::try_from(minutes).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Lay out a week of courses.
///
/// `courses_json` is a JSON array of courses; `settings_json` is a settings
/// object (missing fields take their defaults, an empty string means all
/// defaults). Returns the serialized timetable.
#[wasm_bindgen(js_name = "buildTimetable")]
pub fn build_timetable(courses_json: &str, settings_json: &str) -> Result<String, JsValue> {
    let courses = parse_courses_json(courses_json)?;
    let settings: TimetableSettings = if settings_json.trim().is_empty() {
        TimetableSettings::default()
    } else {
        serde_json::from_str(settings_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid settings JSON: {}", e)))?
    };

    let timetable = timetable_engine::build_timetable(&courses, &settings)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&timetable)
}

/// Place courses on the slot grid and compute conflict levels.
///
/// Returns a JSON array of placed courses in input order.
#[wasm_bindgen(js_name = "detectConflicts")]
pub fn detect_conflicts(courses_json: &str, start_hour: u32, slot_duration: u32) -> Result<String, JsValue> {
    let courses = parse_courses_json(courses_json)?;
    let slot = parse_slot_duration(slot_duration)?;
    to_json(&timetable_engine::detect_conflicts(&courses, start_hour, slot))
}

/// List overlapping course pairs per day.
///
/// Returns a JSON array of `{day, courseA, courseB, overlapSlots,
/// overlapMinutes}` where the course fields are course ids.
#[wasm_bindgen(js_name = "conflictReport")]
pub fn conflict_report(courses_json: &str, start_hour: u32, slot_duration: u32) -> Result<String, JsValue> {
    let courses = parse_courses_json(courses_json)?;
    let slot = parse_slot_duration(slot_duration)?;

    let pairs = timetable_engine::conflict_report(&courses, start_hour, slot);
    let dtos: Vec<ConflictPairDto> = pairs
        .iter()
        .map(|p| ConflictPairDto {
            day: p.day,
            course_a: &p.course_a.id,
            course_b: &p.course_b.id,
            overlap_slots: p.overlap_slots,
            overlap_minutes: p.overlap_minutes,
        })
        .collect();
    to_json(&dtos)
}

/// Fit the display hour window to the courses. Returns `{startHour, endHour}`.
#[wasm_bindgen(js_name = "resolveTimeRange")]
pub fn resolve_time_range(courses_json: &str) -> Result<String, JsValue> {
    let courses = parse_courses_json(courses_json)?;
    to_json(&timetable_engine::resolve_time_range(&courses, RangeMode::Dynamic))
}

/// Days to show, in display order. Returns a JSON array of day names.
#[wasm_bindgen(js_name = "visibleDays")]
pub fn visible_days(show_weekends: bool, start_with_sunday: bool) -> Result<String, JsValue> {
    to_json(&timetable_engine::visible_days(show_weekends, start_with_sunday))
}

/// Import courses from CSV text.
///
/// Returns `{courses, errors}` where each error is `{rowNumber, messages}`.
#[wasm_bindgen(js_name = "importCsv")]
pub fn import_csv(csv_text: &str) -> Result<String, JsValue> {
    let report = timetable_engine::import_csv(csv_text.as_bytes()).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dto = ImportReportDto {
        courses: &report.courses,
        errors: report
            .errors
            .iter()
            .map(|e| RowErrorDto {
                row_number: e.row_number,
                messages: &e.messages,
            })
            .collect(),
    };
    to_json(&dto)
}
