//! In-memory family tree
//!
//! Individuals keep the order in which they were added, so "the first
//! individual in the file" is well defined. Lookups go through id indexes.

use rustc_hash::FxHashMap;

use super::family::{Family, FamilyId};
use super::individual::{Individual, IndividualId};
use super::traits::{IndividualSource, ParentSource, Parents};
use crate::error::Result;
use crate::utils::logging::log_skipped;

/// A decoded genealogical graph
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    individuals: Vec<Individual>,
    individual_index: FxHashMap<IndividualId, usize>,
    families: FxHashMap<FamilyId, Family>,
}

impl FamilyTree {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an individual, replacing any earlier record with the same id
    pub fn add_individual(&mut self, individual: Individual) {
        match self.individual_index.get(&individual.id) {
            Some(&index) => self.individuals[index] = individual,
            None => {
                self.individual_index
                    .insert(individual.id.clone(), self.individuals.len());
                self.individuals.push(individual);
            }
        }
    }

    /// Add a family, replacing any earlier record with the same id
    pub fn add_family(&mut self, family: Family) {
        self.families.insert(family.id.clone(), family);
    }

    /// Builder form of [`add_individual`](Self::add_individual)
    #[must_use]
    pub fn with_individual(mut self, individual: Individual) -> Self {
        self.add_individual(individual);
        self
    }

    /// Builder form of [`add_family`](Self::add_family)
    #[must_use]
    pub fn with_family(mut self, family: Family) -> Self {
        self.add_family(family);
        self
    }

    /// Get a family by id
    #[must_use]
    pub fn family(&self, id: &FamilyId) -> Option<&Family> {
        self.families.get(id)
    }

    /// The first individual added to the tree
    #[must_use]
    pub fn first_individual(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// All individuals in insertion order
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Number of individuals
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    /// Number of families
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }
}

impl IndividualSource for FamilyTree {
    fn individual(&self, id: &IndividualId) -> Option<&Individual> {
        self.individual_index
            .get(id)
            .map(|&index| &self.individuals[index])
    }
}

impl ParentSource for FamilyTree {
    /// Dangling links are common in trimmed exports: an id without a record
    /// is a leaf, and a missing family contributes no parents.
    fn parents_of(&self, id: &IndividualId) -> Result<Parents> {
        let mut parents = Parents::new();
        let Some(individual) = self.individual(id) else {
            log_skipped("parents of", id.as_str(), &"no individual record");
            return Ok(parents);
        };

        for family_id in &individual.parent_families {
            match self.family(family_id) {
                Some(family) => parents.extend(family.parents().cloned()),
                None => log_skipped("parent family", &family_id.to_string(), &"no family record"),
            }
        }
        Ok(parents)
    }
}
