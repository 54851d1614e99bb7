//! Error types for timetable-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimetableError {
    #[error("Invalid time: {0:?} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid day of week: {0:?}")]
    InvalidDay(String),

    #[error("Invalid slot duration: {0} (expected 30 or 60)")]
    InvalidSlotDuration(u32),

    #[error("Invalid hour range: {start_hour}-{end_hour}")]
    InvalidRange { start_hour: u32, end_hour: u32 },

    #[error("Invalid course: {0}")]
    InvalidCourse(String),

    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<csv::Error> for TimetableError {
    fn from(err: csv::Error) -> Self {
        TimetableError::Csv(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TimetableError>;
