//! Timetable display settings.
//!
//! This is the settings object a presentation layer hands to
//! [`crate::build_timetable`]. The layout stages themselves take every value
//! as an explicit argument; the defaults here only fill in fields a caller
//! leaves out of a JSON settings file.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};
use crate::range::{RangeMode, TimeRange};

/// Slot granularity of the layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SlotDuration {
    /// 30-minute slots.
    HalfHour,
    /// 60-minute slots.
    #[default]
    Hour,
}

impl SlotDuration {
    pub fn minutes(self) -> u32 {
        match self {
            SlotDuration::HalfHour => 30,
            SlotDuration::Hour => 60,
        }
    }
}

impl TryFrom<u32> for SlotDuration {
    type Error = TimetableError;

    fn try_from(minutes: u32) -> Result<Self> {
        match minutes {
            30 => Ok(SlotDuration::HalfHour),
            60 => Ok(SlotDuration::Hour),
            other => Err(TimetableError::InvalidSlotDuration(other)),
        }
    }
}

impl From<SlotDuration> for u32 {
    fn from(slot: SlotDuration) -> Self {
        slot.minutes()
    }
}

/// Display settings for a weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimetableSettings {
    pub show_weekends: bool,
    /// Rotate Sunday to the front when weekends are shown.
    pub start_with_sunday: bool,
    /// Derive the hour window from the courses instead of `start_hour`/`end_hour`.
    pub dynamic_time_range: bool,
    pub start_hour: u32,
    pub end_hour: u32,
    pub slot_duration: SlotDuration,
}

impl Default for TimetableSettings {
    fn default() -> Self {
        Self {
            show_weekends: false,
            start_with_sunday: false,
            dynamic_time_range: true,
            start_hour: 7,
            end_hour: 17,
            slot_duration: SlotDuration::Hour,
        }
    }
}

impl TimetableSettings {
    /// The hour-window mode these settings select.
    ///
    /// # Errors
    /// Returns `TimetableError::InvalidRange` when a manual window is requested
    /// with hours outside 0-23 or a start that is not before the end.
    pub fn range_mode(&self) -> Result<RangeMode> {
        if self.dynamic_time_range {
            Ok(RangeMode::Dynamic)
        } else {
            TimeRange::new(self.start_hour, self.end_hour).map(RangeMode::Manual)
        }
    }

    /// Validates the manual hour window. The slot duration is already
    /// constrained by its type.
    pub fn validate(&self) -> Result<()> {
        self.range_mode().map(|_| ())
    }
}
