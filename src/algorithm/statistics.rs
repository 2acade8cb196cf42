//! Generation-weighted longevity statistics
//!
//! Closer ancestors carry more weight: an ancestor at the deepest generation
//! present in the records weighs 1, and each generation nearer the subject
//! doubles that weight.

use itertools::Itertools;
use serde::Serialize;

use crate::error::{LongevityError, Result};
use crate::models::{AncestorDeath, YearsAndDays};

/// Weighted mean deviations in days, truncated toward zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightedAverages {
    /// Mean difference from life expectancy
    pub life_expectancy_diff_days: i64,
    /// Mean difference from the median age at death
    pub median_age_at_death_diff_days: i64,
    /// Mean difference from the modal age at death
    pub modal_age_at_death_diff_days: i64,
}

impl WeightedAverages {
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

/// Aggregate figures for one gender group (or everyone)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    /// Number of ancestors in the group
    pub ancestor_count: usize,
    /// Earliest year of death in the group
    pub earliest_death_year: i32,
    /// Latest year of death in the group
    pub latest_death_year: i32,
    /// Ancestors who died older than the median age at death
    pub outlived_median: usize,
    /// Ancestors who died older than the modal age at death
    pub outlived_modal: usize,
    /// Generation-weighted mean deviations
    pub averages: WeightedAverages,
}

/// Summaries for men, women and all ancestors
///
/// A group without resolved ancestors is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongevitySummary {
    pub male: Option<GroupSummary>,
    pub female: Option<GroupSummary>,
    pub overall: Option<GroupSummary>,
}

/// Functions for generation-weighted statistics
pub struct WeightedAverageCalculator;

impl WeightedAverageCalculator {
    /// Deepest generation across all records, regardless of any filter
    #[must_use]
    pub fn max_generation(records: &[AncestorDeath]) -> u32 {
        records
            .iter()
            .map(|record| record.generations_removed)
            .max()
            .unwrap_or(0)
    }

    /// Weighted averages of the three deviations
    ///
    /// `gender` selects records whose lowercased sex equals it exactly; `None`
    /// or an empty string selects all records. The weight exponent is taken
    /// from the deepest generation among *all* records, so filtering does not
    /// shift the weights. A generation spread too wide for 128-bit weights is
    /// [`LongevityError::WeightOverflow`].
    pub fn weighted_averages(
        records: &[AncestorDeath],
        gender: Option<&str>,
    ) -> Result<WeightedAverages> {
        let gender = gender.filter(|g| !g.is_empty());
        let max_generation = Self::max_generation(records);

        let overflow = || LongevityError::WeightOverflow(max_generation);
        let mut life_expectancy_total: i128 = 0;
        let mut median_total: i128 = 0;
        let mut modal_total: i128 = 0;
        let mut weight_sum: i128 = 0;

        for record in records
            .iter()
            .filter(|record| gender.is_none_or(|g| record.gender == g))
        {
            let exponent = max_generation.saturating_sub(record.generations_removed);
            let weight = 2_i128.checked_pow(exponent).ok_or_else(overflow)?;
            let weighted = |value: i64| i128::from(value).checked_mul(weight).ok_or_else(overflow);

            life_expectancy_total = life_expectancy_total
                .checked_add(weighted(record.life_expectancy_diff_days)?)
                .ok_or_else(overflow)?;
            median_total = median_total
                .checked_add(weighted(record.median_age_at_death_diff_days)?)
                .ok_or_else(overflow)?;
            modal_total = modal_total
                .checked_add(weighted(record.modal_age_at_death_diff_days)?)
                .ok_or_else(overflow)?;
            weight_sum = weight_sum.checked_add(weight).ok_or_else(overflow)?;
        }

        if weight_sum == 0 {
            return Err(LongevityError::NoMatchingAncestors(
                gender.unwrap_or_default().to_string(),
            ));
        }

        // A weighted mean never leaves the range of its inputs, so it fits in i64.
        Ok(WeightedAverages {
            life_expectancy_diff_days: (life_expectancy_total / weight_sum) as i64,
            median_age_at_death_diff_days: (median_total / weight_sum) as i64,
            modal_age_at_death_diff_days: (modal_total / weight_sum) as i64,
        })
    }

    /// Summary for one gender group, `None` when it has no records
    #[must_use]
    pub fn group_summary(records: &[AncestorDeath], gender: Option<&str>) -> Option<GroupSummary> {
        let averages = Self::weighted_averages(records, gender).ok()?;
        let gender = gender.filter(|g| !g.is_empty());
        let members = records
            .iter()
            .filter(|record| gender.is_none_or(|g| record.gender == g))
            .collect_vec();

        let (earliest_death_year, latest_death_year) = members
            .iter()
            .map(|record| record.year)
            .minmax()
            .into_option()?;

        Some(GroupSummary {
            ancestor_count: members.len(),
            earliest_death_year,
            latest_death_year,
            outlived_median: members
                .iter()
                .filter(|record| record.median_age_at_death_diff_days > 0)
                .count(),
            outlived_modal: members
                .iter()
                .filter(|record| record.modal_age_at_death_diff_days > 0)
                .count(),
            averages,
        })
    }

    /// Summaries for "m", "f" and everyone
    #[must_use]
    pub fn summarize(records: &[AncestorDeath]) -> LongevitySummary {
        LongevitySummary {
            male: Self::group_summary(records, Some("m")),
            female: Self::group_summary(records, Some("f")),
            overall: Self::group_summary(records, None),
        }
    }
}
