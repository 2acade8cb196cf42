//! Normalization of loosely formatted genealogical dates.
//!
//! Records carry dates such as `"Abt. 1800"`, `"21st June 1850"` or
//! `"2005-2007"`. The normalizer validates the year, cleans the string into a
//! small canonical grammar and then hands it to [`parse_flexible`].

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::formats::parse_flexible;
use crate::config::DateNormalizerConfig;
use crate::error::DateError;

/// Full English month names in calendar order
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Digits, word boundaries and range whitespace are ASCII only.
lazy_static! {
    static ref YEAR_TOKEN: Regex = Regex::new(r"(?-u:\b)[0-9]{4}(?-u:\b)").unwrap();
    static ref ORDINAL_SUFFIX: Regex = Regex::new(r"([0-9])(st|nd|rd|th)").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref YEAR_RANGE: Regex = Regex::new(r"[0-9]{4}(?-u:\s)*-(?-u:\s)*[0-9]{4}").unwrap();

    /// Whole-word abbreviation matchers paired with the month they expand to
    static ref MONTH_ABBREVIATIONS: Vec<(Regex, &'static str)> = MONTHS
        .iter()
        .flat_map(|month| {
            let mut patterns = vec![(abbreviation_pattern(&month[..3]), *month)];
            if *month == "September" {
                patterns.push((abbreviation_pattern(&month[..4]), *month));
            }
            patterns
        })
        .collect();

    /// Matches a one or two digit day directly before each month name
    static ref DAY_BEFORE_MONTH: Vec<Regex> = MONTHS
        .iter()
        .map(|month| Regex::new(&format!(r"(?-u:\b)[0-9]{{1,2}} {month}")).unwrap())
        .collect();
}

fn abbreviation_pattern(abbreviation: &str) -> Regex {
    Regex::new(&format!(r"(?i)(?-u:\b){abbreviation}(?-u:\b)")).unwrap()
}

/// Turns raw date strings into calendar dates
#[derive(Debug, Clone, Default)]
pub struct DateNormalizer {
    config: DateNormalizerConfig,
}

impl DateNormalizer {
    /// Create a normalizer with the given year bounds
    #[must_use]
    pub const fn new(config: DateNormalizerConfig) -> Self {
        Self { config }
    }

    /// Year bounds in use
    #[must_use]
    pub const fn config(&self) -> &DateNormalizerConfig {
        &self.config
    }

    /// Check that the first standalone four-digit token is an accepted year
    ///
    /// Returns the year on success.
    pub fn check_valid_year(&self, raw: &str) -> Result<i32, DateError> {
        let token = YEAR_TOKEN
            .find(raw)
            .ok_or_else(|| DateError::NoYearFound(raw.to_string()))?;
        let year = token
            .as_str()
            .parse::<i32>()
            .map_err(|_| DateError::NoYearFound(raw.to_string()))?;

        if year < self.config.min_year || year > self.config.max_year {
            return Err(DateError::YearOutOfRange(raw.to_string()));
        }
        Ok(year)
    }

    /// Normalize a raw date string into a calendar date
    pub fn normalize(&self, raw: &str) -> Result<NaiveDate, DateError> {
        self.check_valid_year(raw)?;

        let cleaned = clean_date(raw);
        let trimmed = strip_leading_noise(&cleaned);

        if YEAR_RANGE.is_match(trimmed) {
            return year_range_midpoint(trimmed);
        }

        let with_day = insert_implicit_day(trimmed);
        parse_flexible(&with_day).ok_or(DateError::Unparseable(with_day))
    }
}

/// Strip ordinal suffixes, collapse whitespace and expand month abbreviations
#[must_use]
pub fn clean_date(raw: &str) -> String {
    let without_ordinals = ORDINAL_SUFFIX.replace_all(raw, "${1}");
    let mut cleaned = WHITESPACE_RUN
        .replace_all(without_ordinals.trim(), " ")
        .into_owned();

    for (pattern, month) in MONTH_ABBREVIATIONS.iter() {
        cleaned = pattern.replace_all(&cleaned, *month).into_owned();
    }
    cleaned
}

/// Drop qualifiers such as "About" or "Abt." in front of the first digit
///
/// Strings that open with a month name are left alone.
fn strip_leading_noise(s: &str) -> &str {
    if MONTHS.iter().any(|month| s.starts_with(month)) {
        return s;
    }
    match s.find(|c: char| c.is_ascii_digit()) {
        Some(index) => &s[index..],
        None => s,
    }
}

/// Midpoint between January 1st of both years of a `YYYY-YYYY` range
fn year_range_midpoint(s: &str) -> Result<NaiveDate, DateError> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let invalid = || DateError::InvalidYearRange(compact.clone());

    let parts: Vec<&str> = compact.split('-').collect();
    let [start, end] = parts.as_slice() else {
        return Err(invalid());
    };
    let start_year = start.parse::<i32>().map_err(|_| invalid())?;
    let end_year = end.parse::<i32>().map_err(|_| invalid())?;

    let new_year = |year: i32| {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(invalid)
    };
    let start = new_year(start_year)?;
    let end = new_year(end_year)?;

    Ok((start + (end - start) / 2).date())
}

/// Put a day of "1" in front of any month name that lacks one
fn insert_implicit_day(s: &str) -> String {
    let mut result = s.to_string();
    for (month, day_before) in MONTHS.iter().zip(DAY_BEFORE_MONTH.iter()) {
        if result.contains(month) && !day_before.is_match(&result) {
            result = result.replace(month, &format!("1 {month}"));
        }
    }
    result
}
