//! Lineage traversal
//!
//! Walks up from a subject through every parent link and records how many
//! generations separate each ancestor from the subject.
//!
//! The walk is depth-first. At each person all direct parents are recorded
//! before the walk descends into the first of them, and a later write for the
//! same ancestor replaces an earlier one. With pedigree collapse this means an
//! ancestor keeps the distance of the branch that reached it last, not the
//! shortest distance.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::DEFAULT_MAX_GENERATIONS;
use crate::error::{LongevityError, Result};
use crate::models::{IndividualId, ParentSource, Parents};

/// Ancestors of a subject with their generation distance (parents are 1)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorSet {
    generations: FxHashMap<IndividualId, u32>,
}

impl AncestorSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an ancestor, overwriting any earlier distance
    pub fn record(&mut self, id: IndividualId, generation: u32) {
        self.generations.insert(id, generation);
    }

    /// Generation distance of an ancestor
    #[must_use]
    pub fn generation(&self, id: &IndividualId) -> Option<u32> {
        self.generations.get(id).copied()
    }

    /// Whether the individual is an ancestor
    #[must_use]
    pub fn contains(&self, id: &IndividualId) -> bool {
        self.generations.contains_key(id)
    }

    /// Number of ancestors
    #[must_use]
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Whether no ancestors were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Ancestors in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&IndividualId, u32)> {
        self.generations.iter().map(|(id, &generation)| (id, generation))
    }

    /// Ancestors ordered by id
    #[must_use]
    pub fn sorted(&self) -> Vec<(&IndividualId, u32)> {
        let mut ancestors: Vec<_> = self.iter().collect();
        ancestors.sort_by(|a, b| a.0.cmp(b.0));
        ancestors
    }

    /// Deepest generation recorded, 0 when empty
    #[must_use]
    pub fn max_generation(&self) -> u32 {
        self.generations.values().copied().max().unwrap_or(0)
    }
}

/// One person on the current lineage path and the parents still to visit
struct Frame {
    person: IndividualId,
    parents: Parents,
    next: usize,
    generation: u32,
}

/// Depth-first ancestor walk with a depth limit and cycle detection
#[derive(Debug, Clone, Copy)]
pub struct LineageTraversal {
    max_generations: u32,
}

impl Default for LineageTraversal {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GENERATIONS)
    }
}

impl LineageTraversal {
    /// Create a traversal that fails beyond `max_generations`
    #[must_use]
    pub const fn new(max_generations: u32) -> Self {
        Self { max_generations }
    }

    /// Collect every ancestor of `subject`
    ///
    /// Fails if an individual is their own ancestor or if the lineage is
    /// deeper than the configured limit. Ancestors the source has no record
    /// for are kept as leaves.
    pub fn collect<S>(&self, source: &S, subject: &IndividualId) -> Result<AncestorSet>
    where
        S: ParentSource + ?Sized,
    {
        let mut ancestors = AncestorSet::new();
        let mut on_path: FxHashSet<IndividualId> = FxHashSet::default();
        on_path.insert(subject.clone());

        let parents = source.parents_of(subject)?;
        self.record_level(&mut ancestors, &parents, 1)?;
        let mut stack = vec![Frame {
            person: subject.clone(),
            parents,
            next: 0,
            generation: 1,
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.parents.len() {
                if let Some(done) = stack.pop() {
                    on_path.remove(&done.person);
                }
                continue;
            }

            let parent = frame.parents[frame.next].clone();
            frame.next += 1;
            let generation = frame.generation + 1;

            if !on_path.insert(parent.clone()) {
                return Err(LongevityError::LineageCycle(parent.to_string()));
            }

            let grandparents = source.parents_of(&parent)?;
            self.record_level(&mut ancestors, &grandparents, generation)?;
            stack.push(Frame {
                person: parent,
                parents: grandparents,
                next: 0,
                generation,
            });
        }

        debug!(
            "Collected {} ancestors of {} across {} generations",
            ancestors.len(),
            subject,
            ancestors.max_generation()
        );
        Ok(ancestors)
    }

    fn record_level(
        &self,
        ancestors: &mut AncestorSet,
        parents: &Parents,
        generation: u32,
    ) -> Result<()> {
        if parents.is_empty() {
            return Ok(());
        }
        if generation > self.max_generations {
            return Err(LongevityError::LineageTooDeep(self.max_generations));
        }
        for parent in parents {
            ancestors.record(parent.clone(), generation);
        }
        Ok(())
    }
}
