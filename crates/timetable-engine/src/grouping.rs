//! Day buckets and visible-day ordering.

use std::collections::BTreeMap;

use crate::course::{TimetableCourse, Weekday};

/// Courses per meeting day.
///
/// Buckets borrow from the laid-out course list: a course meeting on several
/// days is the same record in each bucket, never a copy. Keys iterate in
/// canonical Monday → Sunday order; days without courses have no entry.
pub type CoursesByDay<'a> = BTreeMap<Weekday, Vec<&'a TimetableCourse>>;

/// Bucket `courses` by each day they meet on, keeping input order per bucket.
pub fn group_by_day(courses: &[TimetableCourse]) -> CoursesByDay<'_> {
    let mut by_day: CoursesByDay<'_> = BTreeMap::new();
    for course in courses {
        for day in &course.course.days_of_week {
            by_day.entry(*day).or_default().push(course);
        }
    }
    by_day
}

/// The days to show, in display order.
///
/// Starts from Monday → Sunday, drops the weekend when `show_weekends` is
/// false, and moves Sunday to the front when `start_with_sunday` is set and
/// the weekend is shown. Display order only; layout always covers all days.
pub fn visible_days(show_weekends: bool, start_with_sunday: bool) -> Vec<Weekday> {
    let mut days: Vec<Weekday> = Weekday::ALL
        .into_iter()
        .filter(|day| show_weekends || !day.is_weekend())
        .collect();

    if show_weekends && start_with_sunday {
        if let Some(sunday) = days.iter().position(|day| *day == Weekday::Sunday) {
            days[..=sunday].rotate_right(1);
        }
    }

    days
}
