//! End-to-end analysis of one subject
//!
//! Runs the lineage walk, resolves every ancestor against the reference tables
//! and summarizes the result. Any failure here aborts the whole run.

use serde::Serialize;
use std::time::Instant;

use super::lineage::LineageTraversal;
use super::resolver::AncestorDeathResolver;
use super::statistics::{LongevitySummary, WeightedAverageCalculator};
use crate::config::LongevityConfig;
use crate::date::DateNormalizer;
use crate::error::{LongevityError, Result};
use crate::models::{AncestorDeath, FamilyTree, IndividualId, IndividualSource};
use crate::tables::ReferenceTables;

/// Results of analysing one subject's ancestors
#[derive(Debug, Clone, Serialize)]
pub struct LongevityAnalysis {
    /// Cross-reference id of the subject
    pub subject_id: String,
    /// Printable subject name
    pub subject_name: String,
    /// Number of ancestors found in the tree
    pub ancestor_count: usize,
    /// Ancestors that could be compared with the reference tables
    pub deaths: Vec<AncestorDeath>,
    /// Weighted summaries per gender
    pub summary: LongevitySummary,
}

impl LongevityAnalysis {
    /// Analyse the ancestors of `subject`
    pub fn run(
        tree: &FamilyTree,
        subject: &IndividualId,
        tables: &ReferenceTables,
        config: &LongevityConfig,
    ) -> Result<Self> {
        let start = Instant::now();
        let subject_record = tree
            .individual(subject)
            .ok_or_else(|| LongevityError::UnknownIndividual(subject.to_string()))?;
        log::info!("Analysing ancestors of {}", subject_record.display_name());

        let ancestors = LineageTraversal::new(config.max_generations).collect(tree, subject)?;
        log::info!(
            "Found {} ancestors across {} generations",
            ancestors.len(),
            ancestors.max_generation()
        );

        let normalizer = DateNormalizer::new(config.dates.clone());
        let deaths = AncestorDeathResolver::new(&normalizer, tables).resolve(&ancestors, tree)?;
        let summary = WeightedAverageCalculator::summarize(&deaths);

        log::info!("Analysis finished in {:?}", start.elapsed());
        Ok(Self {
            subject_id: subject.to_string(),
            subject_name: subject_record.display_name(),
            ancestor_count: ancestors.len(),
            deaths,
            summary,
        })
    }
}
