//! Full layout pass: settings + courses → everything a renderer needs.
//!
//! The pipeline is recomputed from scratch on every call. Conflict levels are a
//! property of the whole course set, so there is no incremental update path.

use serde::{Serialize, Serializer};

use crate::conflict::detect_conflicts;
use crate::course::{Course, TimetableCourse, Weekday};
use crate::error::Result;
use crate::grouping::{group_by_day, visible_days, CoursesByDay};
use crate::range::{resolve_time_range, TimeRange};
use crate::settings::{SlotDuration, TimetableSettings};
use crate::slot::{grid_slots, hour_slots, TimeSlot};

/// The laid-out week.
///
/// Owns the placed courses; [`Timetable::by_day`] borrows them into day
/// buckets. Serializes as `{range, slotDuration, hourSlots, gridSlots,
/// visibleDays, coursesByDay}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    pub range: TimeRange,
    pub slot_duration: SlotDuration,
    /// One row per hour, for the time axis.
    pub hour_slots: Vec<TimeSlot>,
    /// One row per slot, for positioning.
    pub grid_slots: Vec<TimeSlot>,
    pub visible_days: Vec<Weekday>,
    /// Placed courses, in input order.
    pub courses: Vec<TimetableCourse>,
}

impl Timetable {
    pub fn by_day(&self) -> CoursesByDay<'_> {
        group_by_day(&self.courses)
    }

    pub fn conflict_count(&self) -> usize {
        self.courses.iter().filter(|c| c.has_conflict).count()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimetableView<'a> {
    range: TimeRange,
    slot_duration: SlotDuration,
    hour_slots: &'a [TimeSlot],
    grid_slots: &'a [TimeSlot],
    visible_days: &'a [Weekday],
    courses_by_day: CoursesByDay<'a>,
}

impl Serialize for Timetable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        TimetableView {
            range: self.range,
            slot_duration: self.slot_duration,
            hour_slots: &self.hour_slots,
            grid_slots: &self.grid_slots,
            visible_days: &self.visible_days,
            courses_by_day: self.by_day(),
        }
        .serialize(serializer)
    }
}

/// Lay out `courses` according to `settings`.
///
/// The hour window is resolved first; its start hour is the grid origin for
/// every slot index and for conflict detection, all at the settings' slot
/// granularity.
///
/// # Errors
/// Returns `TimetableError::InvalidRange` when the settings ask for an invalid
/// manual window. Course data is assumed valid (see [`Course::validate`]).
pub fn build_timetable(courses: &[Course], settings: &TimetableSettings) -> Result<Timetable> {
    let range = resolve_time_range(courses, settings.range_mode()?);
    let slot = settings.slot_duration;

    let placed = detect_conflicts(courses, range.start_hour, slot);

    tracing::debug!(
        courses = placed.len(),
        conflicting = placed.iter().filter(|c| c.has_conflict).count(),
        start_hour = range.start_hour,
        end_hour = range.end_hour,
        slot_minutes = slot.minutes(),
        "built timetable"
    );

    Ok(Timetable {
        range,
        slot_duration: slot,
        hour_slots: hour_slots(range),
        grid_slots: grid_slots(range, slot),
        visible_days: visible_days(settings.show_weekends, settings.start_with_sunday),
        courses: placed,
    })
}
