//! Course records and the value types they are built from.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};

/// Day of the week. Declaration order (Monday → Sunday) is the canonical order
/// used for every day-keyed structure in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in canonical order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Three-letter abbreviation ("Mon", "Tue", ...).
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = TimetableError;

    /// Parses a full English day name, ignoring case and surrounding whitespace.
    /// Abbreviations are handled by [`crate::import::normalize_day`].
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TimetableError::InvalidDay(s.to_string()))
    }
}

/// A zone-less wall-clock time with minute precision.
///
/// Parses `H:MM` or `HH:MM` (hour 0-23, minute 00-59) and always displays as
/// zero-padded `HH:MM`. Serialized as that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Returns `None` when `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    pub fn minutes_since_midnight(self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Whole hours touched by this time: `hour + 1` when minutes are non-zero.
    pub fn ceil_hour(self) -> u32 {
        if self.minute() > 0 {
            self.hour() + 1
        } else {
            self.hour()
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TimetableError::InvalidTime(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(hour) || hour.len() > 2 || !all_digits(minute) || minute.len() != 2 {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        ClockTime::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimetableError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// A course as supplied by the caller. The engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Every day the course meets; one occurrence per day, identical in time.
    pub days_of_week: Vec<Weekday>,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        days_of_week: Vec<Weekday>,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            section: None,
            days_of_week,
            start_time,
            end_time,
            description: None,
            color: None,
        }
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn meets_on(&self, day: Weekday) -> bool {
        self.days_of_week.contains(&day)
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end_time.minutes_since_midnight() as i64
            - self.start_time.minutes_since_midnight() as i64
    }

    /// Checks the invariants the layout stages assume: a non-empty name, at
    /// least one day with no day repeated, and an end time after the start
    /// time.
    ///
    /// # Errors
    /// Returns `TimetableError::InvalidCourse` naming the first violated rule.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TimetableError::InvalidCourse(format!(
                "course {:?}: name is required",
                self.id
            )));
        }
        if self.days_of_week.is_empty() {
            return Err(TimetableError::InvalidCourse(format!(
                "course {:?}: at least one day of the week is required",
                self.id
            )));
        }
        if let Some(day) = self
            .days_of_week
            .iter()
            .enumerate()
            .find_map(|(i, day)| self.days_of_week[..i].contains(day).then_some(day))
        {
            return Err(TimetableError::InvalidCourse(format!(
                "course {:?}: {} is listed more than once",
                self.id, day
            )));
        }
        if self.end_time <= self.start_time {
            return Err(TimetableError::InvalidCourse(format!(
                "course {:?}: end time {} must be after start time {}",
                self.id, self.end_time, self.start_time
            )));
        }
        Ok(())
    }
}

/// Validate every course in a caller-supplied list.
///
/// # Errors
/// Returns the first `TimetableError::InvalidCourse` found, in list order.
pub fn validate_courses(courses: &[Course]) -> Result<()> {
    courses.iter().try_for_each(Course::validate)
}

/// A course placed on the slot grid, with its conflict state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableCourse {
    #[serde(flatten)]
    pub course: Course,
    /// Slot index of the start time relative to the grid origin hour.
    pub start_slot: i32,
    /// Height in slots; never less than 1.
    pub duration: i32,
    pub has_conflict: bool,
    /// Number of other occurrences overlapping this course, summed over all of
    /// its days.
    pub conflict_level: u32,
}

impl TimetableCourse {
    pub fn end_slot(&self) -> i32 {
        self.start_slot + self.duration
    }
}

