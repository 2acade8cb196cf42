//! Domain models for genealogical records and analysis results

pub mod ancestor_death;
pub mod family;
pub mod individual;
pub mod traits;
pub mod tree;

// Re-export commonly used types
pub use ancestor_death::{AncestorDeath, DAYS_PER_YEAR, YearsAndDays};
pub use family::{Family, FamilyId};
pub use individual::{EventTag, Individual, IndividualId, LifeEvent};
pub use traits::{IndividualSource, ParentSource, Parents};
pub use tree::FamilyTree;
