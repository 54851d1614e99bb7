//! CSV course import and row validation.
//!
//! This is the validation boundary the layout stages rely on: rows with missing
//! fields, unknown day names, malformed times, or an end time that is not after
//! the start time are rejected here with per-row messages, so only well-formed
//! [`Course`] records ever reach the engine.

use std::collections::HashSet;
use std::io::Read;

use thiserror::Error;

use crate::course::{ClockTime, Course, Weekday};
use crate::error::{Result, TimetableError};

/// Raw, untrimmed field values for one course, as typed into a form or read
/// from a CSV row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCourseRow {
    pub name: String,
    pub section: String,
    /// One or more day names or abbreviations, comma-separated.
    pub days: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
}

impl RawCourseRow {
    /// Validate and normalize the row into a [`Course`] with the given id.
    ///
    /// On failure, returns every distinct problem found, in a fixed order:
    /// missing fields, bad day names, bad times, then time ordering.
    pub fn into_course(self, id: impl Into<String>) -> std::result::Result<Course, Vec<String>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        let raw_days = self.days.trim();
        let raw_start = self.start_time.trim();
        let raw_end = self.end_time.trim();

        for (value, message) in [
            (name, "Course name is required"),
            (raw_days, "Day of week is required"),
            (raw_start, "Start time is required"),
            (raw_end, "End time is required"),
        ] {
            if value.is_empty() {
                push_unique(&mut errors, message.to_string());
            }
        }

        let mut days_of_week = Vec::new();
        if !raw_days.is_empty() {
            for part in raw_days.split(',').map(str::trim) {
                match normalize_day(part) {
                    Some(day) if !days_of_week.contains(&day) => days_of_week.push(day),
                    Some(_) => {}
                    None => push_unique(&mut errors, format!("Invalid day of week \"{}\"", part)),
                }
            }
        }

        let start_time = parse_time_field(raw_start, "start", &mut errors);
        let end_time = parse_time_field(raw_end, "end", &mut errors);

        if let (Some(start), Some(end)) = (start_time, end_time) {
            if end <= start {
                push_unique(&mut errors, "End time must be after start time".to_string());
            }
        }

        match (start_time, end_time) {
            (Some(start_time), Some(end_time)) if errors.is_empty() => Ok(Course {
                id: id.into(),
                name: name.to_string(),
                section: non_empty(&self.section),
                days_of_week,
                start_time,
                end_time,
                description: non_empty(&self.description),
                color: None,
            }),
            _ => Err(errors),
        }
    }
}

impl RawCourseRow {
    /// Case-insensitive identity of the row as typed. Times are compared after
    /// [`normalize_time`], so `930` and `09:30` are the same row.
    fn dedupe_key(&self) -> String {
        [
            self.name.trim().to_lowercase(),
            self.section.trim().to_lowercase(),
            self.days.trim().to_lowercase(),
            normalize_time(&self.start_time).to_lowercase(),
            normalize_time(&self.end_time).to_lowercase(),
            self.description.trim().to_lowercase(),
        ]
        .join("|")
    }
}

/// A CSV row that could not be imported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("row {row_number}: {}", .messages.join("; "))]
pub struct RowError {
    /// 1-based line number in the file; the header is line 1.
    pub row_number: usize,
    pub messages: Vec<String>,
}

/// Outcome of a CSV import: accepted courses plus rejected rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub courses: Vec<Course>,
    pub errors: Vec<RowError>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Section,
    Days,
    StartTime,
    EndTime,
    Description,
}

fn column_for_header(header: &str) -> Option<Column> {
    match header.trim().to_lowercase().as_str() {
        "course name" | "coursename" | "name" => Some(Column::Name),
        "section" | "course section" | "coursesection" => Some(Column::Section),
        "day of week" | "dayofweek" | "day" => Some(Column::Days),
        "start time" | "starttime" | "start" => Some(Column::StartTime),
        "end time" | "endtime" | "end" => Some(Column::EndTime),
        "description" | "details" | "location" | "room" => Some(Column::Description),
        _ => None,
    }
}

/// Import courses from a headered CSV stream.
///
/// Header names are matched case-insensitively against common aliases
/// ("Course Name", "start", "Day of Week", "room", ...); unknown columns are
/// ignored. Fully blank rows are skipped, and a row repeating an earlier one
/// (ignoring case) is dropped without being validated again. Accepted courses
/// get the id `course-<line>` and no color; the renderer picks the default.
///
/// # Errors
/// Returns `TimetableError::Csv` if the stream is not readable CSV. Invalid
/// rows are not errors; they are collected in [`ImportReport::errors`].
pub fn import_csv<R: Read>(reader: R) -> Result<ImportReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<Option<Column>> = csv_reader
        .headers()?
        .iter()
        .map(column_for_header)
        .collect();

    let mut report = ImportReport::default();
    let mut seen_rows = HashSet::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let row_number = record
            .position()
            .map_or(index + 2, |position| position.line() as usize);

        // First non-empty value wins when several headers alias one column.
        let field = |wanted: Column| -> String {
            columns
                .iter()
                .zip(record.iter())
                .filter(|(column, _)| **column == Some(wanted))
                .map(|(_, value)| value.trim())
                .find(|value| !value.is_empty())
                .unwrap_or_default()
                .to_string()
        };

        let raw = RawCourseRow {
            name: field(Column::Name),
            section: field(Column::Section),
            days: field(Column::Days),
            start_time: field(Column::StartTime),
            end_time: field(Column::EndTime),
            description: field(Column::Description),
        };

        if !seen_rows.insert(raw.dedupe_key()) {
            tracing::debug!(row = row_number, "skipped repeated CSV row");
            continue;
        }

        match raw.into_course(format!("course-{}", row_number)) {
            Ok(course) => report.courses.push(course),
            Err(messages) => {
                tracing::debug!(row = row_number, errors = ?messages, "rejected CSV row");
                report.errors.push(RowError {
                    row_number,
                    messages,
                });
            }
        }
    }

    tracing::debug!(
        imported = report.courses.len(),
        rejected = report.errors.len(),
        "finished CSV import"
    );
    Ok(report)
}

/// Map a day name or common abbreviation to a [`Weekday`].
///
/// Case-insensitive; accepts full names plus `mon/mo/m`, `tue/tu`,
/// `wed/we/w`, `thu/th/thurs`, `fri/fr/f`, `sat/sa`, `sun/su`.
pub fn normalize_day(raw: &str) -> Option<Weekday> {
    let day = match raw.trim().to_lowercase().as_str() {
        "monday" | "mon" | "mo" | "m" => Weekday::Monday,
        "tuesday" | "tue" | "tu" => Weekday::Tuesday,
        "wednesday" | "wed" | "we" | "w" => Weekday::Wednesday,
        "thursday" | "thu" | "th" | "thurs" => Weekday::Thursday,
        "friday" | "fri" | "fr" | "f" => Weekday::Friday,
        "saturday" | "sat" | "sa" => Weekday::Saturday,
        "sunday" | "sun" | "su" => Weekday::Sunday,
        _ => return None,
    };
    Some(day)
}

/// Parse a comma-separated day list such as `"Mon, Wed"`.
///
/// Duplicates are dropped, keeping first-seen order.
///
/// # Errors
/// Returns `TimetableError::InvalidDay` for the first unrecognized entry, or
/// for an empty list.
pub fn parse_days(raw: &str) -> Result<Vec<Weekday>> {
    let mut days = Vec::new();
    for part in raw.split(',').map(str::trim) {
        let day = normalize_day(part).ok_or_else(|| TimetableError::InvalidDay(part.to_string()))?;
        if !days.contains(&day) {
            days.push(day);
        }
    }
    Ok(days)
}

/// Tidy a hand-typed time: trims, accepts a full-width colon, and expands
/// bare `930` / `0930` to `09:30`. Does not validate.
pub fn normalize_time(raw: &str) -> String {
    let trimmed = raw.trim().replace('\u{FF1A}', ":");
    let is_bare_digits = (3..=4).contains(&trimmed.len()) && trimmed.bytes().all(|b| b.is_ascii_digit());
    if is_bare_digits {
        let padded = format!("{:0>4}", trimmed);
        return format!("{}:{}", &padded[..2], &padded[2..]);
    }
    trimmed
}

fn parse_time_field(raw: &str, which: &str, errors: &mut Vec<String>) -> Option<ClockTime> {
    if raw.is_empty() {
        return None;
    }
    let normalized = normalize_time(raw);
    match normalized.parse::<ClockTime>() {
        Ok(time) => Some(time),
        Err(_) => {
            push_unique(errors, format!("Invalid {} time format \"{}\"", which, normalized));
            None
        }
    }
}

fn push_unique(errors: &mut Vec<String>, message: String) {
    if !errors.contains(&message) {
        errors.push(message);
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
