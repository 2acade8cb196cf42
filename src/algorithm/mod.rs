//! Algorithms for ancestral longevity analysis
//!
//! The lineage walk feeds the death resolver, whose records feed the
//! weighted statistics. [`analysis`] chains the three.

pub mod analysis;
pub mod lineage;
pub mod resolver;
pub mod statistics;

pub use analysis::LongevityAnalysis;
pub use lineage::{AncestorSet, LineageTraversal};
pub use resolver::{AncestorDeathResolver, SkipReason};
pub use statistics::{GroupSummary, LongevitySummary, WeightedAverageCalculator, WeightedAverages};
