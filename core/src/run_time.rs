//! # Scan Run Time
//!
//! Turns a host's `startTime`/`stopTime` pair into a sentence such as
//! `"2 hours 5 minutes and 16 seconds"`.
//!
//! The default [`RunTimeFormat::ComponentWise`] subtracts hours, minutes and
//! seconds independently and drops their signs, without carrying between
//! units: `10:59:58` to `11:00:02` reads `"1 hours 59 minutes and 56 seconds"`.
//! [`RunTimeFormat::Elapsed`] gives the real duration.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use nessus_common::error::HostError;

/// Returned when either timestamp is empty.
pub const NOT_AVAILABLE: &str = "N/A";

const CLOCK_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%a %b %e %H:%M:%S %Y",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunTimeFormat {
    /// Per-unit absolute differences of the clock times, dates ignored.
    #[default]
    ComponentWise,
    /// Absolute elapsed time between the two full date-times.
    Elapsed,
}

impl RunTimeFormat {
    pub fn run_time(self, start: &str, stop: &str) -> Result<String, HostError> {
        if start.is_empty() || stop.is_empty() {
            return Ok(NOT_AVAILABLE.to_string());
        }
        match self {
            RunTimeFormat::ComponentWise => component_wise(start, stop),
            RunTimeFormat::Elapsed => elapsed(start, stop),
        }
    }
}

fn component_wise(start: &str, stop: &str) -> Result<String, HostError> {
    let start: NaiveTime = parse_clock(start)?;
    let stop: NaiveTime = parse_clock(stop)?;

    let hours = (i64::from(stop.hour()) - i64::from(start.hour())).abs();
    let minutes = (i64::from(stop.minute()) - i64::from(start.minute())).abs();
    let seconds = (i64::from(stop.second()) - i64::from(start.second())).abs();

    Ok(sentence(hours, minutes, seconds))
}

fn elapsed(start: &str, stop: &str) -> Result<String, HostError> {
    let start: NaiveDateTime = parse_date_time(start)?;
    let stop: NaiveDateTime = parse_date_time(stop)?;

    let total: i64 = (stop - start).num_seconds().abs();
    Ok(sentence(total / 3600, total % 3600 / 60, total % 60))
}

fn sentence(hours: i64, minutes: i64, seconds: i64) -> String {
    format!("{hours} hours {minutes} minutes and {seconds} seconds")
}

/// Finds the clock token of a timestamp, whatever the date layout around it.
pub(crate) fn parse_clock(value: &str) -> Result<NaiveTime, HostError> {
    value
        .split(|c: char| c.is_whitespace() || c == 'T')
        .filter(|token| token.contains(':'))
        .find_map(|token| {
            let token = strip_zone(token);
            CLOCK_FORMATS
                .iter()
                .find_map(|format| NaiveTime::parse_from_str(token, format).ok())
        })
        .ok_or_else(|| timestamp_error(value))
}

/// Drops a trailing `Z` or `±HH:MM`/`±HHMM` offset from a clock token.
fn strip_zone(token: &str) -> &str {
    let token = token.trim_end_matches('Z');
    match token.rfind(['+', '-']) {
        Some(at) if at > 0 && is_offset(&token[at + 1..]) => &token[..at],
        _ => token,
    }
}

fn is_offset(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| *c != ':').collect();
    matches!(digits.len(), 2 | 4) && digits.chars().all(|c| c.is_ascii_digit())
}

pub(crate) fn parse_date_time(value: &str) -> Result<NaiveDateTime, HostError> {
    let trimmed: &str = strip_zone(value.trim());
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| timestamp_error(value))
}

fn timestamp_error(value: &str) -> HostError {
    HostError::TimestampParse {
        value: value.to_string(),
    }
}
