//! Date and label helpers for a single fixed local calendar.
//!
//! Labels are zero-padded 24-hour `HH:MM` strings. Dates travel as
//! `YYYY-MM-DD`.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

use crate::errors::{ScheduleError, ScheduleResult};

pub const LABEL_FORMAT: &str = "%H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders a time as a slot label, dropping seconds.
pub fn format_label(time: NaiveTime) -> String {
    time.format(LABEL_FORMAT).to_string()
}

/// Parses a strict `HH:MM` label.
///
/// `"9:00"` and `"09:00:00"` are rejected so that a label has exactly one
/// spelling and can be used as a key.
pub fn parse_label(label: &str) -> Option<NaiveTime> {
    if label.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(label, LABEL_FORMAT).ok()
}

/// Like [`parse_label`] but reports a validation error.
pub fn validate_label(label: &str) -> ScheduleResult<NaiveTime> {
    parse_label(label).ok_or_else(|| {
        ScheduleError::Validation(format!("Invalid time label '{}', expected HH:MM", label))
    })
}

/// Label of the slot one hour earlier on the same day, if there is one.
pub fn previous_label(label: &str) -> Option<String> {
    let time = parse_label(label)?;
    let hour = time.hour().checked_sub(1)?;
    Some(format!("{:02}:{:02}", hour, time.minute()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        ScheduleError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", value))
    })
}

/// Monday of the week containing `date`. Sunday belongs to the week that
/// started six days earlier.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date - Duration::days(i64::from(offset))
}

/// The seven consecutive days starting at `start`.
pub fn week_days(start: NaiveDate) -> [NaiveDate; 7] {
    let mut days = [start; 7];
    for (offset, day) in days.iter_mut().enumerate() {
        *day = start + Duration::days(offset as i64);
    }
    days
}
