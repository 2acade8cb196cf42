//! Configuration for a longevity analysis run.

use chrono::{Datelike, Utc};
use std::fmt;
use std::path::PathBuf;

/// Earliest year accepted in a genealogical date
pub const DEFAULT_MIN_YEAR: i32 = 1500;

/// Default limit on how many generations the lineage walk may climb
pub const DEFAULT_MAX_GENERATIONS: u32 = 64;

/// Bounds applied when validating the year in a raw date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateNormalizerConfig {
    /// Earliest accepted year (inclusive)
    pub min_year: i32,
    /// Latest accepted year (inclusive)
    pub max_year: i32,
}

impl Default for DateNormalizerConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: Utc::now().year(),
        }
    }
}

/// Configuration for an analysis run
#[derive(Debug, Clone)]
pub struct LongevityConfig {
    /// Year bounds for date normalization
    pub dates: DateNormalizerConfig,
    /// Maximum number of generations to walk above the subject
    pub max_generations: u32,
    /// Reference death statistics for men
    pub male_stats_path: PathBuf,
    /// Reference death statistics for women
    pub female_stats_path: PathBuf,
}

impl Default for LongevityConfig {
    fn default() -> Self {
        Self {
            dates: DateNormalizerConfig::default(),
            max_generations: DEFAULT_MAX_GENERATIONS,
            male_stats_path: PathBuf::from("male_death_stats.csv"),
            female_stats_path: PathBuf::from("female_death_stats.csv"),
        }
    }
}

impl fmt::Display for LongevityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Longevity Configuration:")?;
        writeln!(
            f,
            "  Accepted Years: {}-{}",
            self.dates.min_year, self.dates.max_year
        )?;
        writeln!(f, "  Max Generations: {}", self.max_generations)?;
        writeln!(f, "  Male Stats: {}", self.male_stats_path.display())?;
        write!(f, "  Female Stats: {}", self.female_stats_path.display())
    }
}
