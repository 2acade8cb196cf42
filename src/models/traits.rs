//! Trait definitions for genealogical sources
//!
//! The lineage walk and the death resolver only need these two capabilities,
//! so any decoded graph can feed them.

use smallvec::SmallVec;

use crate::error::Result;
use crate::models::individual::{Individual, IndividualId};

/// Direct parents of an individual, father before mother per family link
pub type Parents = SmallVec<[IndividualId; 2]>;

/// A source that can resolve an individual's parents
pub trait ParentSource {
    /// Fetch every parent named by every parent-family link of `id`
    ///
    /// An individual with no links, or one the source does not know, yields
    /// an empty list.
    fn parents_of(&self, id: &IndividualId) -> Result<Parents>;
}

/// A source that can look up individuals by id
pub trait IndividualSource {
    /// Get an individual, if present
    fn individual(&self, id: &IndividualId) -> Option<&Individual>;
}
