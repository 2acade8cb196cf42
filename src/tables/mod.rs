//! Reference life tables used to judge each ancestor's age at death.

pub mod death_stats;

pub use death_stats::{DeathStatRow, DeathStatTable, years_to_days};

use std::path::Path;

use crate::error::Result;
use crate::models::Individual;

/// The male and female reference tables of a run
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    /// Table used when the recorded sex is "m"
    pub male: DeathStatTable,
    /// Table used for every other recorded sex
    pub female: DeathStatTable,
}

impl ReferenceTables {
    /// Pair two loaded tables
    #[must_use]
    pub const fn new(male: DeathStatTable, female: DeathStatTable) -> Self {
        Self { male, female }
    }

    /// Load both tables from CSV files
    pub fn load(male_path: &Path, female_path: &Path) -> Result<Self> {
        Ok(Self::new(
            DeathStatTable::load(male_path)?,
            DeathStatTable::load(female_path)?,
        ))
    }

    /// Table matching an individual's recorded sex
    #[must_use]
    pub fn for_individual(&self, individual: &Individual) -> &DeathStatTable {
        if individual.is_male() {
            &self.male
        } else {
            &self.female
        }
    }
}
