//! Per-ancestor death record
//!
//! One record per ancestor whose birth and death dates could be resolved and
//! whose death year is covered by the reference tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Days in the approximate year used throughout the analysis
pub const DAYS_PER_YEAR: i64 = 365;

/// A day count split into whole years and remaining days
///
/// The remainder is never negative; the sign lives on `years`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearsAndDays {
    /// Whole 365-day years, truncated toward zero
    pub years: i64,
    /// Absolute remainder in days
    pub days: i64,
}

impl YearsAndDays {
    /// Split a day count
    #[must_use]
    pub const fn from_days(total: i64) -> Self {
        Self {
            years: total / DAYS_PER_YEAR,
            days: (total % DAYS_PER_YEAR).abs(),
        }
    }
}

impl fmt::Display for YearsAndDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.sign_plus() {
            write!(f, "{:+} years {} days", self.years, self.days)
        } else {
            write!(f, "{} years {} days", self.years, self.days)
        }
    }
}

/// Age at death of one ancestor compared to the reference statistics for the
/// year they died
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestorDeath {
    /// Cross-reference id of the ancestor
    pub individual_id: String,
    /// Calendar year of death
    pub year: i32,
    /// Generations between the subject and this ancestor (parents are 1)
    pub generations_removed: u32,
    /// Lowercased sex as recorded
    pub gender: String,
    /// Age at death in days
    pub age_at_death_days: i64,
    /// Age at death minus the life expectancy for the year of death
    pub life_expectancy_diff_days: i64,
    /// Age at death minus the median age at death for the year of death
    pub median_age_at_death_diff_days: i64,
    /// Age at death minus the modal age at death for the year of death
    pub modal_age_at_death_diff_days: i64,
    /// Reference life expectancy in days
    pub life_expectancy_days: i64,
    /// Reference median age at death in days
    pub median_age_at_death_days: i64,
    /// Reference modal age at death in days
    pub modal_age_at_death_days: i64,
}

impl AncestorDeath {
    #[must_use]
    pub const fn age_at_death(&self) -> YearsAndDays {
        YearsAndDays::from_days(self.age_at_death_days)
    }

    #[must_use]
    pub const fn life_expectancy_diff(&self) -> YearsAndDays {
        YearsAndDays::from_days(self.life_expectancy_diff_days)
    }

    #[must_use]
    pub const fn median_age_at_death_diff(&self) -> YearsAndDays {
        YearsAndDays::from_days(self.median_age_at_death_diff_days)
    }

    #[must_use]
    pub const fn modal_age_at_death_diff(&self) -> YearsAndDays {
        YearsAndDays::from_days(self.modal_age_at_death_diff_days)
    }
}
