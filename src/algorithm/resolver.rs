//! Ancestor death resolution
//!
//! Turns the ancestor set into [`AncestorDeath`] records: normalizes each
//! ancestor's birth and death dates, measures the age at death and compares it
//! with the reference row for the year of death. Ancestors that cannot be
//! resolved are skipped and logged, never fatal.

use chrono::{Datelike, NaiveDate};

use super::lineage::AncestorSet;
use crate::date::DateNormalizer;
use crate::error::{DateError, Result};
use crate::models::{AncestorDeath, EventTag, Individual, IndividualSource};
use crate::tables::ReferenceTables;
use crate::utils::logging::log_skipped;

/// Why an ancestor was left out of the results
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    /// Referenced as a parent but has no individual record
    #[error("no individual record")]
    NoRecord,
    /// No birth event
    #[error("no birth date")]
    MissingBirth,
    /// No death event
    #[error("no death date")]
    MissingDeath,
    /// A birth date that could not be normalized
    #[error("unusable birth date: {0}")]
    BirthDate(DateError),
    /// A death date that could not be normalized
    #[error("unusable death date: {0}")]
    DeathDate(DateError),
    /// The reference table has no row for the year of death
    #[error("no reference statistics for {0}")]
    NoReferenceRow(i32),
}

/// Outcome of scanning the events of one tag
#[derive(Default)]
struct EventDate {
    date: Option<NaiveDate>,
    error: Option<DateError>,
}

impl EventDate {
    /// Latest successfully normalized date, unless any attempt failed
    fn into_result(self) -> std::result::Result<Option<NaiveDate>, DateError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.date),
        }
    }
}

/// Combines date normalization and the reference tables
#[derive(Debug, Clone, Copy)]
pub struct AncestorDeathResolver<'a> {
    normalizer: &'a DateNormalizer,
    tables: &'a ReferenceTables,
}

impl<'a> AncestorDeathResolver<'a> {
    #[must_use]
    pub const fn new(normalizer: &'a DateNormalizer, tables: &'a ReferenceTables) -> Self {
        Self { normalizer, tables }
    }

    /// Resolve every ancestor in the set, ordered by individual id
    ///
    /// Ancestors that cannot be resolved, including ones `source` has no
    /// record for, are logged and left out.
    pub fn resolve<S>(&self, ancestors: &AncestorSet, source: &S) -> Result<Vec<AncestorDeath>>
    where
        S: IndividualSource + ?Sized,
    {
        let mut deaths = Vec::with_capacity(ancestors.len());

        for (id, generation) in ancestors.sorted() {
            let resolved = source
                .individual(id)
                .ok_or(SkipReason::NoRecord)
                .and_then(|individual| self.resolve_one(individual, generation));

            match resolved {
                Ok(death) => deaths.push(death),
                Err(reason) => log_skipped("ancestor", id.as_str(), &reason),
            }
        }

        log::info!(
            "Resolved {} of {} ancestors against reference statistics",
            deaths.len(),
            ancestors.len()
        );
        Ok(deaths)
    }

    /// Resolve a single ancestor at a known generation distance
    pub fn resolve_one(
        &self,
        individual: &Individual,
        generation: u32,
    ) -> std::result::Result<AncestorDeath, SkipReason> {
        let (birth, death) = self.life_span(individual)?;

        let age_at_death_days = (death - birth).num_days();
        let year = death.year();
        let row = self
            .tables
            .for_individual(individual)
            .lookup_year(year)
            .ok_or(SkipReason::NoReferenceRow(year))?;

        Ok(AncestorDeath {
            individual_id: individual.id.to_string(),
            year,
            generations_removed: generation,
            gender: individual.gender(),
            age_at_death_days,
            life_expectancy_diff_days: age_at_death_days - row.life_expectancy_days,
            median_age_at_death_diff_days: age_at_death_days - row.median_age_at_death_days,
            modal_age_at_death_diff_days: age_at_death_days - row.modal_age_at_death_days,
            life_expectancy_days: row.life_expectancy_days,
            median_age_at_death_days: row.median_age_at_death_days,
            modal_age_at_death_days: row.modal_age_at_death_days,
        })
    }

    /// Normalized birth and death dates
    ///
    /// When a tag occurs more than once the last date wins, but a single
    /// unusable date for a tag disqualifies the individual.
    fn life_span(
        &self,
        individual: &Individual,
    ) -> std::result::Result<(NaiveDate, NaiveDate), SkipReason> {
        let mut birth = EventDate::default();
        let mut death = EventDate::default();

        for event in &individual.events {
            let slot = match event.tag {
                EventTag::Birth => &mut birth,
                EventTag::Death => &mut death,
                EventTag::Other(_) => continue,
            };
            match self.normalizer.normalize(&event.date) {
                Ok(date) => slot.date = Some(date),
                Err(error) => slot.error = Some(error),
            }
        }

        let birth = birth
            .into_result()
            .map_err(SkipReason::BirthDate)?
            .ok_or(SkipReason::MissingBirth)?;
        let death = death
            .into_result()
            .map_err(SkipReason::DeathDate)?
            .ok_or(SkipReason::MissingDeath)?;
        Ok((birth, death))
    }
}
