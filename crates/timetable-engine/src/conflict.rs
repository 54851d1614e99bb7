//! Detect overlapping course occurrences on the slot grid.
//!
//! Every course is expanded into one occurrence per meeting day. Occurrences
//! of a multi-day course share a single working record, so conflicts found on
//! different days accumulate into the same `conflict_level`.
//!
//! Each day is swept independently: occurrences are stably sorted by start
//! slot, then compared pairwise with an early exit once the next occurrence
//! starts at or after the current one ends. Adjacent occurrences (one ends in
//! the slot where the next begins) are NOT conflicts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::course::{Course, TimetableCourse, Weekday};
use crate::settings::SlotDuration;
use crate::slot::{slot_duration, slot_index};

/// A pair of overlapping occurrences on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictPair<'a> {
    pub day: Weekday,
    /// The occurrence that starts first (or ties and comes first in input order).
    pub course_a: &'a Course,
    pub course_b: &'a Course,
    pub overlap_slots: i32,
    /// Overlap of the actual clock times. Can be 0 when two short courses
    /// share a slot without overlapping in wall-clock time.
    pub overlap_minutes: u32,
}

/// Working state for one course during the sweep.
#[derive(Debug, Clone, Copy)]
struct SlotRecord {
    start_slot: i32,
    end_slot: i32,
    has_conflict: bool,
    conflict_level: u32,
}

impl SlotRecord {
    fn overlaps(&self, other: &SlotRecord) -> bool {
        self.start_slot < other.end_slot && other.start_slot < self.end_slot
    }
}

/// Place every course on the grid and compute its conflict state.
///
/// Returns one [`TimetableCourse`] per input course, in input order. The input
/// slice is never modified.
pub fn detect_conflicts(
    courses: &[Course],
    start_hour: u32,
    slot: SlotDuration,
) -> Vec<TimetableCourse> {
    let records = sweep(courses, start_hour, slot, |_, _, _| {});

    courses
        .iter()
        .zip(records)
        .map(|(course, record)| TimetableCourse {
            course: course.clone(),
            start_slot: record.start_slot,
            duration: record.end_slot - record.start_slot,
            has_conflict: record.has_conflict,
            conflict_level: record.conflict_level,
        })
        .collect()
}

/// List every overlapping pair found by the day sweep.
///
/// Pairs are reported in canonical day order, then in sweep order within the
/// day. A multi-day course overlapping on two days yields two pairs.
pub fn conflict_report<'a>(
    courses: &'a [Course],
    start_hour: u32,
    slot: SlotDuration,
) -> Vec<ConflictPair<'a>> {
    let mut pairs = Vec::new();
    sweep(courses, start_hour, slot, |day, (a, ra), (b, rb)| {
        let a_course = &courses[a];
        let b_course = &courses[b];
        pairs.push(ConflictPair {
            day,
            course_a: a_course,
            course_b: b_course,
            overlap_slots: ra.end_slot.min(rb.end_slot) - ra.start_slot.max(rb.start_slot),
            overlap_minutes: overlap_minutes(a_course, b_course),
        });
    });
    pairs
}

/// Find the courses that would clash with `candidate`.
///
/// Compares actual clock times rather than slots: a course clashes when it
/// shares at least one day with the candidate and their time ranges overlap.
/// A course with the candidate's own `id` is skipped, so an edited course is
/// not reported against its previous version.
pub fn find_conflicting_courses<'a>(courses: &'a [Course], candidate: &Course) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|existing| existing.id != candidate.id)
        .filter(|existing| candidate.days_of_week.iter().any(|day| existing.meets_on(*day)))
        .filter(|existing| overlap_minutes(existing, candidate) > 0)
        .collect()
}

fn overlap_minutes(a: &Course, b: &Course) -> u32 {
    let start = a.start_time.max(b.start_time).minutes_since_midnight();
    let end = a.end_time.min(b.end_time).minutes_since_midnight();
    end.saturating_sub(start)
}

/// Run the per-day sweep, calling `on_overlap` for every overlapping pair with
/// the record state as of just before the pair was counted.
fn sweep<F>(courses: &[Course], start_hour: u32, slot: SlotDuration, mut on_overlap: F) -> Vec<SlotRecord>
where
    F: FnMut(Weekday, (usize, SlotRecord), (usize, SlotRecord)),
{
    let mut records: Vec<SlotRecord> = courses
        .iter()
        .map(|course| {
            let start_slot = slot_index(course.start_time, start_hour, slot);
            let duration = slot_duration(course.start_time, course.end_time, start_hour, slot);
            SlotRecord {
                start_slot,
                end_slot: start_slot + duration,
                has_conflict: false,
                conflict_level: 0,
            }
        })
        .collect();

    // Occurrences per day, as indices into `records`.
    let mut by_day: BTreeMap<Weekday, Vec<usize>> = BTreeMap::new();
    for (index, course) in courses.iter().enumerate() {
        for day in &course.days_of_week {
            by_day.entry(*day).or_default().push(index);
        }
    }

    for (day, mut occurrences) in by_day {
        occurrences.sort_by_key(|&index| records[index].start_slot);

        let mut day_conflicts = 0usize;
        for (position, &a) in occurrences.iter().enumerate() {
            for &b in &occurrences[position + 1..] {
                // Sorted by start: nothing later can overlap `a` either.
                if records[b].start_slot >= records[a].end_slot {
                    break;
                }
                if records[a].overlaps(&records[b]) {
                    on_overlap(day, (a, records[a]), (b, records[b]));
                    for index in [a, b] {
                        records[index].has_conflict = true;
                        records[index].conflict_level += 1;
                    }
                    day_conflicts += 1;
                }
            }
        }

        tracing::debug!(
            day = %day,
            occurrences = occurrences.len(),
            conflicts = day_conflicts,
            "swept day"
        );
    }

    records
}
