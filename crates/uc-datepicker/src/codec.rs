//! Date text codec: normalization, strict validation, smart parsing.
//!
//! The calendar grid always works with canonical `YYYY-MM-DD` text, while
//! manual entry tolerates partial and shorthand input. This module is the
//! single seam where that looseness is converted to strictness:
//!
//! - [`normalize`] pads a loose `Y-M-D` string into canonical form
//! - [`validate`] accepts canonical text only, with real calendar checking
//! - [`smart_parse`] is the forgiving fallback for shorthand digit input
//! - [`format`] renders a date back to canonical text
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use uc_datepicker::codec;
//!
//! assert_eq!(codec::normalize("2024-1-5"), "2024-01-05");
//!
//! let date = codec::validate("2024-01-05").unwrap();
//! assert_eq!(codec::format(date), "2024-01-05");
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! assert_eq!(codec::smart_parse("240115", today).unwrap(), codec::validate("2024-01-15").unwrap());
//! ```

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Loose `Y-M-D` form: four-digit year, 1-2 digit month and day.
///
/// ASCII digits only: `\d` would also match Unicode digits, which the
/// byte-offset parsing below cannot handle and the calendar does not accept.
static LOOSE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("valid regex")
});

/// Strict canonical form: `YYYY-MM-DD`, zero-padded ASCII digits.
static CANONICAL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid regex"));

/// Errors produced when interpreting date text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDateError {
    /// The text is not in canonical `YYYY-MM-DD` form.
    #[error("'{0}' is not in YYYY-MM-DD format")]
    Format(String),

    /// The components do not name a real calendar date (e.g. day overflow).
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    OutOfRange { year: i32, month: u32, day: u32 },

    /// The digit count of the stripped input matches no known shorthand.
    #[error("cannot interpret '{0}' as a date")]
    Unrecognized(String),
}

impl ParseDateError {
    fn out_of_range(year: i32, month: u32, day: u32) -> Self {
        Self::OutOfRange { year, month, day }
    }
}

/// Rewrite a loosely-formatted `Y-M-D` string into zero-padded canonical form.
///
/// Input that does not match the loose shape is returned unchanged; this
/// function never fails.
pub fn normalize(text: &str) -> String {
    match LOOSE_DATE.captures(text) {
        Some(caps) => {
            // Captures are all-digit groups of bounded width; parsing cannot
            // overflow or fail.
            let year = &caps[1];
            let month: u32 = caps[2].parse().unwrap_or(0);
            let day: u32 = caps[3].parse().unwrap_or(0);
            format!("{year}-{month:02}-{day:02}")
        }
        None => text.to_string(),
    }
}

/// Validate strict canonical `YYYY-MM-DD` text into a date.
///
/// Only zero-padded canonical text is accepted, and the components must name
/// a real calendar date: `2024-02-31` is rejected rather than rolled over.
pub fn validate(text: &str) -> Result<NaiveDate, ParseDateError> {
    if !CANONICAL_DATE.is_match(text) {
        return Err(ParseDateError::Format(text.to_string()));
    }

    let year: i32 = text[0..4]
        .parse()
        .map_err(|_| ParseDateError::Format(text.to_string()))?;
    let month: u32 = text[5..7]
        .parse()
        .map_err(|_| ParseDateError::Format(text.to_string()))?;
    let day: u32 = text[8..10]
        .parse()
        .map_err(|_| ParseDateError::Format(text.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ParseDateError::out_of_range(year, month, day))
}

/// Best-effort interpretation of shorthand digit input.
///
/// All non-digit characters are stripped, then the digit count decides the
/// reading:
///
/// - 8 digits: `YYYYMMDD`
/// - 6 digits: `YYMMDD`, with `YY` mapped to `2000 + YY`
/// - 4 digits: `MMDD` in `today`'s year
/// - 2 digits: day-of-month clamped to `min(value, 31)` and to the length of
///   `today`'s month, in `today`'s year and month
///
/// Any other digit count is rejected. This is only used as a fallback after
/// [`validate`] has failed.
pub fn smart_parse(text: &str, today: NaiveDate) -> Result<NaiveDate, ParseDateError> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

    let (year, month, day) = match digits.len() {
        8 => (
            parse_digits(&digits[0..4], text)?,
            parse_digits(&digits[4..6], text)? as u32,
            parse_digits(&digits[6..8], text)? as u32,
        ),
        6 => (
            2000 + parse_digits(&digits[0..2], text)?,
            parse_digits(&digits[2..4], text)? as u32,
            parse_digits(&digits[4..6], text)? as u32,
        ),
        4 => (
            today.year(),
            parse_digits(&digits[0..2], text)? as u32,
            parse_digits(&digits[2..4], text)? as u32,
        ),
        2 => {
            let day = (parse_digits(&digits, text)? as u32)
                .min(31)
                .min(days_in_month(today.year(), today.month()));
            (today.year(), today.month(), day)
        }
        _ => return Err(ParseDateError::Unrecognized(text.to_string())),
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ParseDateError::out_of_range(year, month, day))
}

/// Format a date as canonical `YYYY-MM-DD` text.
pub fn format(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_digits(digits: &str, original: &str) -> Result<i32, ParseDateError> {
    digits
        .parse()
        .map_err(|_| ParseDateError::Unrecognized(original.to_string()))
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
