//! Map wall-clock times onto the discrete slot grid.
//!
//! Slot indices are relative to the grid's origin hour and always use floor
//! division, so a time before the origin yields a negative index rather than
//! being clamped. Callers must use one [`SlotDuration`] for every call within a
//! single layout pass.

use serde::{Deserialize, Serialize};

use crate::course::ClockTime;
use crate::range::TimeRange;
use crate::settings::SlotDuration;

/// One row of the rendered grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub hour: u32,
    pub minute: u32,
    /// 12-hour display label, e.g. "9:30 AM".
    pub label: String,
    /// Zero-padded 24-hour value, e.g. "09:30".
    pub value: String,
}

impl TimeSlot {
    fn at(hour: u32, minute: u32) -> Self {
        Self {
            hour,
            minute,
            label: format_time_label(hour, minute),
            value: format!("{:02}:{:02}", hour, minute),
        }
    }
}

/// Slot index of `time` on a grid starting at `start_hour`.
///
/// Computes `floor(((hour - start_hour) * 60 + minute) / slot_minutes)`.
pub fn slot_index(time: ClockTime, start_hour: u32, slot: SlotDuration) -> i32 {
    let offset_minutes =
        (time.hour() as i32 - start_hour as i32) * 60 + time.minute() as i32;
    offset_minutes.div_euclid(slot.minutes() as i32)
}

/// Number of slots spanned from `start` to `end`, never less than one.
///
/// A course shorter than one slot, or a degenerate range that slipped past
/// validation, still occupies exactly one visible slot.
pub fn slot_duration(start: ClockTime, end: ClockTime, start_hour: u32, slot: SlotDuration) -> i32 {
    let span = slot_index(end, start_hour, slot) - slot_index(start, start_hour, slot);
    span.max(1)
}

/// One row per hour of `range`, inclusive of both bounds.
pub fn hour_slots(range: TimeRange) -> Vec<TimeSlot> {
    range.hours().map(|hour| TimeSlot::at(hour, 0)).collect()
}

/// One row per slot for every hour of `range`, inclusive of both bounds.
pub fn grid_slots(range: TimeRange, slot: SlotDuration) -> Vec<TimeSlot> {
    let step = slot.minutes() as usize;
    range
        .hours()
        .flat_map(|hour| (0..60).step_by(step).map(move |minute| TimeSlot::at(hour, minute)))
        .collect()
}

/// Format a time of day as a 12-hour label ("12:00 AM", "9:05 AM", "1:30 PM").
pub fn format_time_label(hour: u32, minute: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, suffix)
}
