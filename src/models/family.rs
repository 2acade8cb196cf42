//! Family unit representation
//!
//! A family links up to two parents. Children point at their family through
//! [`Individual::parent_families`](super::individual::Individual).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::individual::IndividualId;

/// Cross-reference identifier of a family (e.g. `@F1@`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FamilyId(pub String);

impl FamilyId {
    /// Create an id from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A family with an optional father and an optional mother
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Cross-reference id
    pub id: FamilyId,
    /// Father (GEDCOM `HUSB`)
    pub husband: Option<IndividualId>,
    /// Mother (GEDCOM `WIFE`)
    pub wife: Option<IndividualId>,
}

impl Family {
    /// Create a family with no parents
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: FamilyId::new(id),
            husband: None,
            wife: None,
        }
    }

    /// Set the father for this family
    #[must_use]
    pub fn with_husband(mut self, husband: impl Into<String>) -> Self {
        self.husband = Some(IndividualId::new(husband));
        self
    }

    /// Set the mother for this family
    #[must_use]
    pub fn with_wife(mut self, wife: impl Into<String>) -> Self {
        self.wife = Some(IndividualId::new(wife));
        self
    }

    /// Parents that are present, father first
    pub fn parents(&self) -> impl Iterator<Item = &IndividualId> {
        self.husband.iter().chain(self.wife.iter())
    }
}
