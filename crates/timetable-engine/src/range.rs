//! Display hour window for the timetable grid.
//!
//! In dynamic mode the window hugs the courses: the earliest start hour is
//! floored and padded by one hour, the latest end time is rounded up to the
//! next whole hour. Whole-hour end times are not padded further, so a course
//! ending at 16:00 does not push the grid to 17:00.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::error::{Result, TimetableError};

/// Inclusive hour bounds of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start_hour: u32,
    pub end_hour: u32,
}

/// Window used in dynamic mode when there are no courses.
pub const DEFAULT_TIME_RANGE: TimeRange = TimeRange {
    start_hour: 7,
    end_hour: 22,
};

const LAST_HOUR: u32 = 23;

impl TimeRange {
    /// Builds a manual window.
    ///
    /// # Errors
    /// Returns `TimetableError::InvalidRange` unless `start_hour < end_hour <= 23`.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        if end_hour > LAST_HOUR || start_hour >= end_hour {
            return Err(TimetableError::InvalidRange {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn hours(&self) -> RangeInclusive<u32> {
        self.start_hour..=self.end_hour
    }
}

/// How the display window is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    /// Fit the window to the courses.
    Dynamic,
    /// Use the given window unchanged.
    Manual(TimeRange),
}

/// Resolve the hour window to display for `courses`.
///
/// Manual mode returns its range as-is. Dynamic mode returns
/// [`DEFAULT_TIME_RANGE`] for an empty list, otherwise
/// `max(0, min_start_hour - 1) ..= min(23, max_ceil_end_hour)`.
pub fn resolve_time_range(courses: &[Course], mode: RangeMode) -> TimeRange {
    match mode {
        RangeMode::Manual(range) => range,
        RangeMode::Dynamic => dynamic_range(courses),
    }
}

fn dynamic_range(courses: &[Course]) -> TimeRange {
    let earliest = courses.iter().map(|c| c.start_time.hour()).min();
    let latest = courses.iter().map(|c| c.end_time.ceil_hour()).max();

    let (Some(earliest), Some(latest)) = (earliest, latest) else {
        return DEFAULT_TIME_RANGE;
    };

    let range = TimeRange {
        start_hour: earliest.saturating_sub(1),
        end_hour: latest.min(LAST_HOUR),
    };
    tracing::debug!(
        courses = courses.len(),
        start_hour = range.start_hour,
        end_hour = range.end_hour,
        "resolved dynamic time range"
    );
    range
}
