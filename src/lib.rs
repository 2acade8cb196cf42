//! A Rust library for comparing the lifespans of a person's direct ancestors
//! with the actuarial norms of the years they died in.
//!
//! The pipeline is: decode a family tree ([`gedcom`]), walk the subject's
//! lineage ([`algorithm::lineage`]), normalize each ancestor's dates
//! ([`date`]), compare ages at death with reference life tables ([`tables`])
//! and aggregate the deviations with generation weights
//! ([`algorithm::statistics`]).

pub mod algorithm;
pub mod config;
pub mod date;
pub mod error;
pub mod gedcom;
pub mod models;
pub mod report;
pub mod tables;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::{
    AncestorDeathResolver, AncestorSet, LineageTraversal, LongevityAnalysis,
    WeightedAverageCalculator, WeightedAverages,
};
pub use config::{DateNormalizerConfig, LongevityConfig};
pub use date::DateNormalizer;
pub use error::{DateError, LongevityError, Result};
pub use models::{AncestorDeath, Family, FamilyTree, Individual, IndividualId, YearsAndDays};
pub use tables::{DeathStatRow, DeathStatTable, ReferenceTables};
