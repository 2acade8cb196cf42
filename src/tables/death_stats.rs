//! Reference death statistics
//!
//! One table per gender, one row per year. Figures arrive in fractional years
//! and are converted to whole days on load so the resolver works in days only.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::error::{LongevityError, Result};
use crate::models::DAYS_PER_YEAR;
use crate::utils::logging::{log_load_complete, log_load_start};

/// Reference statistics for one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeathStatRow {
    /// Year as written in the source, compared by exact string match
    pub year: String,
    /// Life expectancy in years
    pub life_expectancy: f64,
    /// Life expectancy in days
    pub life_expectancy_days: i64,
    /// Median age at death in years
    pub median_age_at_death: f64,
    /// Median age at death in days
    pub median_age_at_death_days: i64,
    /// Modal age at death in years
    pub modal_age_at_death: f64,
    /// Modal age at death in days
    pub modal_age_at_death_days: i64,
}

/// Convert fractional years to days, truncating
#[must_use]
pub fn years_to_days(years: f64) -> i64 {
    (years * DAYS_PER_YEAR as f64) as i64
}

impl DeathStatRow {
    /// Build a row from fractional-year figures
    pub fn new(
        year: impl Into<String>,
        life_expectancy: f64,
        median_age_at_death: f64,
        modal_age_at_death: f64,
    ) -> Self {
        Self {
            year: year.into(),
            life_expectancy,
            life_expectancy_days: years_to_days(life_expectancy),
            median_age_at_death,
            median_age_at_death_days: years_to_days(median_age_at_death),
            modal_age_at_death,
            modal_age_at_death_days: years_to_days(modal_age_at_death),
        }
    }
}

/// Year-keyed table of reference statistics
#[derive(Debug, Clone, Default)]
pub struct DeathStatTable {
    rows: Vec<DeathStatRow>,
    by_year: FxHashMap<String, usize>,
}

impl DeathStatTable {
    /// Build a table from rows. When a year repeats, the first row wins.
    #[must_use]
    pub fn from_rows(rows: Vec<DeathStatRow>) -> Self {
        let mut by_year = FxHashMap::default();
        for (index, row) in rows.iter().enumerate() {
            by_year.entry(row.year.clone()).or_insert(index);
        }
        Self { rows, by_year }
    }

    /// Read a table from CSV: a header row, then `year, life expectancy,
    /// median age at death, modal age at death` per row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let year = record.get(0).unwrap_or_default().to_string();
            let figure = |index: usize, field: &'static str| {
                let value = record.get(index).unwrap_or_default();
                value.parse::<f64>().map_err(|_| LongevityError::StatParse {
                    year: year.clone(),
                    field,
                    value: value.to_string(),
                })
            };

            let life_expectancy = figure(1, "life expectancy")?;
            let median = figure(2, "median age at death")?;
            let modal = figure(3, "modal age at death")?;
            rows.push(DeathStatRow::new(year, life_expectancy, median, modal));
        }

        Ok(Self::from_rows(rows))
    }

    /// Load a table from a CSV file
    pub fn load(path: &Path) -> Result<Self> {
        log_load_start("death statistics", path);
        let start = Instant::now();

        let file = File::open(path).map_err(|e| LongevityError::io(path, e))?;
        let table = Self::from_reader(file)?;

        log_load_complete("death statistics", path, table.len(), start.elapsed());
        Ok(table)
    }

    /// Row for an exact year string
    #[must_use]
    pub fn lookup(&self, year: &str) -> Option<&DeathStatRow> {
        self.by_year.get(year).map(|&index| &self.rows[index])
    }

    /// Row for a calendar year
    #[must_use]
    pub fn lookup_year(&self, year: i32) -> Option<&DeathStatRow> {
        self.lookup(&year.to_string())
    }

    /// Smallest year in the table, `None` when empty
    pub fn earliest_year(&self) -> Result<Option<i32>> {
        let mut earliest: Option<i32> = None;
        for row in &self.rows {
            let year = row.year.parse::<i32>().map_err(|_| LongevityError::StatParse {
                year: row.year.clone(),
                field: "year",
                value: row.year.clone(),
            })?;
            earliest = Some(earliest.map_or(year, |e| e.min(year)));
        }
        Ok(earliest)
    }

    /// Rows in source order
    #[must_use]
    pub fn rows(&self) -> &[DeathStatRow] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
