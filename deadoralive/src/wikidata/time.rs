//! Parsing of Wikidata `time` values.
//!
//! Timestamps look like `+1955-02-24T00:00:00Z`: a mandatory sign, a year of
//! up to 16 digits, then zero-padded month, day and time and a literal
//! `Z`. Values with year or month precision carry `00` in the fields they do
//! not know (`+1955-00-00T00:00:00Z`); those resolve to the first month or day.
//! Dates recorded in the Julian calendar can name a day the proleptic
//! Gregorian calendar lacks (`+1700-02-29`); the day is clamped to the last
//! day of that month.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{DeadOrAliveError, Result};

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])(\d{1,16})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})Z$")
        .expect("timestamp pattern is valid")
});

/// Parse a Wikidata timestamp into a calendar date.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDate> {
    let invalid =
        || DeadOrAliveError::Validation(format!("Unparseable Wikidata timestamp '{raw}'"));

    let caps = TIMESTAMP.captures(raw.trim()).ok_or_else(invalid)?;

    let magnitude: i32 = caps[2].parse().map_err(|_| invalid())?;
    let year = if &caps[1] == "-" { -magnitude } else { magnitude };
    let month: u32 = caps[3].parse().map_err(|_| invalid())?;
    let day: u32 = caps[4].parse().map_err(|_| invalid())?;

    if month > 12 || day > 31 {
        return Err(invalid());
    }

    let (month, day) = (month.max(1), day.max(1));
    (1..=day)
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
        .ok_or_else(invalid)
}
