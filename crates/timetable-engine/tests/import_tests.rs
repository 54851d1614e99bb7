//! Tests for CSV course import and row validation.

use timetable_engine::{
    detect_conflicts, import_csv, normalize_day, normalize_time, parse_days, ClockTime,
    RawCourseRow, RowError, SlotDuration, TimetableError, Weekday,
};

use Weekday::*;

fn time(raw: &str) -> ClockTime {
    raw.parse().unwrap()
}

fn raw_row(name: &str, days: &str, start: &str, end: &str) -> RawCourseRow {
    RawCourseRow {
        name: name.to_string(),
        days: days.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        ..RawCourseRow::default()
    }
}

// ── normalize_day / normalize_time ─────────────────────────────────────────

#[test]
fn day_aliases_map_to_weekdays() {
    assert_eq!(normalize_day("Monday"), Some(Monday));
    assert_eq!(normalize_day(" mon "), Some(Monday));
    assert_eq!(normalize_day("M"), Some(Monday));
    assert_eq!(normalize_day("tu"), Some(Tuesday));
    assert_eq!(normalize_day("W"), Some(Wednesday));
    assert_eq!(normalize_day("Thurs"), Some(Thursday));
    assert_eq!(normalize_day("th"), Some(Thursday));
    assert_eq!(normalize_day("f"), Some(Friday));
    assert_eq!(normalize_day("SA"), Some(Saturday));
    assert_eq!(normalize_day("sun"), Some(Sunday));
}

#[test]
fn ambiguous_or_unknown_days_are_rejected() {
    // "t" and "s" could be two different days.
    assert_eq!(normalize_day("t"), None);
    assert_eq!(normalize_day("s"), None);
    assert_eq!(normalize_day("Funday"), None);
    assert_eq!(normalize_day(""), None);
}

#[test]
fn bare_digit_times_gain_a_colon() {
    assert_eq!(normalize_time("930"), "09:30");
    assert_eq!(normalize_time("0930"), "09:30");
    assert_eq!(normalize_time(" 1415 "), "14:15");
}

#[test]
fn full_width_colon_is_accepted() {
    assert_eq!(normalize_time("9\u{FF1A}30"), "9:30");
}

#[test]
fn other_times_pass_through_untouched() {
    assert_eq!(normalize_time("9:30"), "9:30");
    assert_eq!(normalize_time("93"), "93");
    assert_eq!(normalize_time("9:30pm"), "9:30pm");
}

// ── RawCourseRow ────────────────────────────────────────────────────────────

#[test]
fn valid_row_becomes_course() {
    let row = RawCourseRow {
        section: " L01 ".to_string(),
        description: "Room 204".to_string(),
        ..raw_row(" Calculus ", "Mon, W, Fri", "930", "10:45")
    };

    let course = row.into_course("calc").unwrap();

    assert_eq!(course.id, "calc");
    assert_eq!(course.name, "Calculus");
    assert_eq!(course.section.as_deref(), Some("L01"));
    assert_eq!(course.days_of_week, vec![Monday, Wednesday, Friday]);
    assert_eq!(course.start_time, time("09:30"));
    assert_eq!(course.end_time, time("10:45"));
    assert_eq!(course.description.as_deref(), Some("Room 204"));
    assert!(course.validate().is_ok());
}

#[test]
fn duplicate_days_are_dropped_keeping_first_order() {
    let course = raw_row("Art", "Fri, Mon, friday, M", "13:00", "14:00")
        .into_course("art")
        .unwrap();

    assert_eq!(course.days_of_week, vec![Friday, Monday]);
}

#[test]
fn missing_fields_are_all_reported() {
    let errors = raw_row("", "", "", "").into_course("x").unwrap_err();

    assert_eq!(
        errors,
        vec![
            "Course name is required",
            "Day of week is required",
            "Start time is required",
            "End time is required",
        ]
    );
}

#[test]
fn bad_days_and_times_are_named() {
    let errors = raw_row("Bio", "Mon, Funday", "25:00", "9.30")
        .into_course("x")
        .unwrap_err();

    assert_eq!(
        errors,
        vec![
            "Invalid day of week \"Funday\"",
            "Invalid start time format \"25:00\"",
            "Invalid end time format \"9.30\"",
        ]
    );
}

#[test]
fn repeated_bad_day_reported_once() {
    let errors = raw_row("Bio", "Xx, Xx", "09:00", "10:00")
        .into_course("x")
        .unwrap_err();

    assert_eq!(errors, vec!["Invalid day of week \"Xx\""]);
}

#[test]
fn end_must_follow_start() {
    for (start, end) in [("10:00", "09:00"), ("10:00", "10:00")] {
        let errors = raw_row("Bio", "Tue", start, end).into_course("x").unwrap_err();
        assert_eq!(errors, vec!["End time must be after start time"]);
    }
}

// ── import_csv ──────────────────────────────────────────────────────────────

#[test]
fn csv_with_aliased_headers_imports() {
    let csv = "\
Course Name,Section,Day of Week,Start Time,End Time,Room
Algorithms,A1,\"Mon,Wed\",09:00,10:30,DC 1350
Databases,,Tue,1300,14:20,
";

    let report = import_csv(csv.as_bytes()).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.courses.len(), 2);

    let algo = &report.courses[0];
    assert_eq!(algo.id, "course-2");
    assert_eq!(algo.name, "Algorithms");
    assert_eq!(algo.section.as_deref(), Some("A1"));
    assert_eq!(algo.days_of_week, vec![Monday, Wednesday]);
    assert_eq!(algo.description.as_deref(), Some("DC 1350"));

    let db = &report.courses[1];
    assert_eq!(db.id, "course-3");
    assert_eq!(db.start_time, time("13:00"));
    assert_eq!(db.section, None);
    assert_eq!(db.description, None);
}

#[test]
fn csv_short_headers_and_unknown_columns() {
    let csv = "name,day,start,end,instructor\nPhysics,th,8:00,9:00,Dr. Who\n";

    let report = import_csv(csv.as_bytes()).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.courses[0].days_of_week, vec![Thursday]);
    assert_eq!(report.courses[0].description, None);
}

#[test]
fn csv_invalid_rows_are_collected_with_line_numbers() {
    let csv = "\
name,day,start,end
Good,Mon,09:00,10:00
Bad,Noday,11:00,10:00
,Fri,08:00,09:00
";

    let report = import_csv(csv.as_bytes()).unwrap();

    assert_eq!(report.courses.len(), 1);
    assert_eq!(report.courses[0].name, "Good");
    assert_eq!(
        report.errors,
        vec![
            RowError {
                row_number: 3,
                messages: vec![
                    "Invalid day of week \"Noday\"".to_string(),
                    "End time must be after start time".to_string(),
                ],
            },
            RowError {
                row_number: 4,
                messages: vec!["Course name is required".to_string()],
            },
        ]
    );
    assert!(!report.is_clean());
}

#[test]
fn row_error_display_joins_messages() {
    let err = RowError {
        row_number: 7,
        messages: vec!["Course name is required".to_string(), "End time is required".to_string()],
    };

    assert_eq!(
        err.to_string(),
        "row 7: Course name is required; End time is required"
    );
}

#[test]
fn csv_blank_rows_are_skipped() {
    let csv = "name,day,start,end\nA,Mon,09:00,10:00\n,,,\nB,Tue,09:00,10:00\n";

    let report = import_csv(csv.as_bytes()).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.courses.len(), 2);
}

#[test]
fn csv_header_only_yields_empty_report() {
    let report = import_csv("name,day,start,end\n".as_bytes()).unwrap();

    assert!(report.courses.is_empty());
    assert!(report.errors.is_empty());
}

#[test]
fn csv_missing_columns_report_required_fields() {
    let csv = "name,day\nChem,Mon\n";

    let report = import_csv(csv.as_bytes()).unwrap();

    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors[0].messages,
        vec!["Start time is required", "End time is required"]
    );
}

#[test]
fn csv_repeated_rows_import_once() {
    let csv = "name,day,start,end\nMath,Mon,09:00,10:00\nMath,Mon,09:00,10:00\n";

    let report = import_csv(csv.as_bytes()).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.courses.len(), 1);
    assert_eq!(report.courses[0].id, "course-2");

    let placed = detect_conflicts(&report.courses, 7, SlotDuration::Hour);
    assert!(!placed[0].has_conflict);
    assert_eq!(placed[0].conflict_level, 0);
}

#[test]
fn csv_repeated_rows_match_ignoring_case_and_time_spelling() {
    let csv = "\
name,section,day,start,end,room
Math,A1,Mon,09:30,10:00,Hall
MATH,a1,mon,930,10:00,hall
Math,A2,Mon,09:30,10:00,Hall
";

    let report = import_csv(csv.as_bytes()).unwrap();

    let ids: Vec<&str> = report.courses.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["course-2", "course-4"]);
}

#[test]
fn csv_repeated_invalid_row_reported_once() {
    let csv = "name,day,start,end\nBad,Noday,09:00,10:00\nbad,noday,09:00,10:00\n";

    let report = import_csv(csv.as_bytes()).unwrap();

    assert!(report.courses.is_empty());
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].row_number, 2);
}

#[test]
fn csv_imported_courses_have_no_color() {
    let report = import_csv("name,day,start,end\nArt,Fri,13:00,14:00\n".as_bytes()).unwrap();

    assert_eq!(report.courses[0].color, None);
}

// ---------------------------------------------------------------------------
// parse_days
// ---------------------------------------------------------------------------

#[test]
fn parse_days_keeps_first_seen_order_without_duplicates() {
    assert_eq!(parse_days("Wed, mon, W, fri").unwrap(), vec![Wednesday, Monday, Friday]);
}

#[test]
fn parse_days_rejects_unknown_entry() {
    assert_eq!(
        parse_days("Mon, Funday"),
        Err(TimetableError::InvalidDay("Funday".to_string()))
    );
}

#[test]
fn parse_days_rejects_empty_list() {
    assert_eq!(parse_days("  "), Err(TimetableError::InvalidDay(String::new())));
}
