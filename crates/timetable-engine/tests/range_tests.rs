//! Tests for display hour window resolution.

use timetable_engine::range::DEFAULT_TIME_RANGE;
use timetable_engine::{
    resolve_time_range, ClockTime, Course, RangeMode, TimeRange, TimetableError, Weekday,
};

fn course(start: &str, end: &str) -> Course {
    Course::new(
        format!("{}-{}", start, end),
        "Course",
        vec![Weekday::Monday],
        start.parse::<ClockTime>().unwrap(),
        end.parse::<ClockTime>().unwrap(),
    )
}

#[test]
fn manual_range_returned_unchanged() {
    let manual = TimeRange::new(9, 15).unwrap();
    let courses = vec![course("06:00", "23:30")];

    assert_eq!(
        resolve_time_range(&courses, RangeMode::Manual(manual)),
        manual
    );
}

#[test]
fn empty_course_list_uses_default_window() {
    let range = resolve_time_range(&[], RangeMode::Dynamic);
    assert_eq!(range, DEFAULT_TIME_RANGE);
    assert_eq!((range.start_hour, range.end_hour), (7, 22));
}

#[test]
fn partial_hours_floor_start_and_ceil_end() {
    // 08:45 floors to 8, minus one hour of padding → 7.
    // 16:30 rounds up to 17.
    let courses = vec![course("08:45", "09:15"), course("16:00", "16:30")];

    let range = resolve_time_range(&courses, RangeMode::Dynamic);

    assert_eq!(range, TimeRange { start_hour: 7, end_hour: 17 });
}

#[test]
fn whole_hour_end_is_not_padded() {
    let courses = vec![course("09:00", "16:00")];

    let range = resolve_time_range(&courses, RangeMode::Dynamic);

    assert_eq!(range, TimeRange { start_hour: 8, end_hour: 16 });
}

#[test]
fn start_minutes_are_ignored() {
    let courses = vec![course("09:15", "10:00"), course("09:55", "10:00")];

    let range = resolve_time_range(&courses, RangeMode::Dynamic);

    assert_eq!(range.start_hour, 8);
}

#[test]
fn window_is_clipped_to_the_day() {
    let courses = vec![course("00:30", "01:00"), course("22:00", "23:30")];

    let range = resolve_time_range(&courses, RangeMode::Dynamic);

    assert_eq!(range, TimeRange { start_hour: 0, end_hour: 23 });
}

#[test]
fn earliest_and_latest_may_come_from_different_courses() {
    let courses = vec![
        course("13:00", "20:10"),
        course("10:00", "11:00"),
        course("12:00", "14:00"),
    ];

    let range = resolve_time_range(&courses, RangeMode::Dynamic);

    assert_eq!(range, TimeRange { start_hour: 9, end_hour: 21 });
}

#[test]
fn time_range_new_validates_bounds() {
    assert!(TimeRange::new(0, 23).is_ok());
    assert_eq!(
        TimeRange::new(10, 10),
        Err(TimetableError::InvalidRange {
            start_hour: 10,
            end_hour: 10
        })
    );
    assert!(TimeRange::new(12, 8).is_err());
    assert!(TimeRange::new(5, 24).is_err());
}

#[test]
fn hours_iterates_inclusively() {
    let hours: Vec<u32> = TimeRange::new(8, 11).unwrap().hours().collect();
    assert_eq!(hours, vec![8, 9, 10, 11]);
}
