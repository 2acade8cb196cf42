//! Fallback grammar for cleaned date strings.
//!
//! By the time a string reaches this module the normalizer has canonicalized
//! month names and made sure a day precedes them, so a short list of
//! `chrono` formats covers what genealogical records contain.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

/// Formats tried in order against the whole string
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%d %B %Y", // 15 February 1943
    "%Y-%m-%d", // ISO: 1943-02-15
    "%m/%d/%Y", // US: 02/15/1943
    "%Y/%m/%d", // 1943/02/15
    "%d.%m.%Y", // 15.02.1943
];

lazy_static! {
    static ref YEAR_ONLY: Regex = Regex::new(r"^(\d{4})$").unwrap();
    static ref YEAR_MONTH: Regex = Regex::new(r"^(\d{4})-(\d{1,2})$").unwrap();
}

/// Parse a date string with multiple format attempts
///
/// Bare years resolve to January 1st and `YYYY-MM` to the first of the month.
#[must_use]
pub fn parse_flexible(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Some(caps) = YEAR_ONLY.captures(s) {
        let year = caps[1].parse::<i32>().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    if let Some(caps) = YEAR_MONTH.captures(s) {
        let year = caps[1].parse::<i32>().ok()?;
        let month = caps[2].parse::<u32>().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    DEFAULT_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}
