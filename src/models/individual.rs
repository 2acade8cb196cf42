//! Individual model
//!
//! An individual as decoded from a genealogical file: a stable cross-reference
//! id, a free-text sex, life events with raw dates and links to the families
//! in which the individual is a child.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::family::FamilyId;

/// Stable cross-reference identifier of an individual (e.g. `@I1@`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndividualId(pub String);

impl IndividualId {
    /// Create an id from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a life event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTag {
    /// Birth (`BIRT`)
    Birth,
    /// Death (`DEAT`)
    Death,
    /// Any other event, keeping its tag
    Other(String),
}

impl EventTag {
    /// Map a GEDCOM tag to an event kind
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "BIRT" => Self::Birth,
            "DEAT" => Self::Death,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A life event with its raw, unnormalized date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeEvent {
    /// What happened
    pub tag: EventTag,
    /// Date exactly as recorded, empty when the record has none
    pub date: String,
}

impl LifeEvent {
    /// Create an event
    pub fn new(tag: EventTag, date: impl Into<String>) -> Self {
        Self {
            tag,
            date: date.into(),
        }
    }
}

/// An individual in a family tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Cross-reference id
    pub id: IndividualId,
    /// Name as recorded, surname wrapped in slashes
    pub name: Option<String>,
    /// Sex as recorded ("M", "F", "U", ...)
    pub sex: String,
    /// Life events in record order
    pub events: Vec<LifeEvent>,
    /// Families in which this individual is a child
    pub parent_families: Vec<FamilyId>,
}

impl Individual {
    /// Create an individual with no name, sex, events or parents
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: IndividualId::new(id),
            name: None,
            sex: String::new(),
            events: Vec::new(),
            parent_families: Vec::new(),
        }
    }

    /// Set the name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the sex
    #[must_use]
    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = sex.into();
        self
    }

    /// Add a life event
    #[must_use]
    pub fn with_event(mut self, tag: EventTag, date: impl Into<String>) -> Self {
        self.events.push(LifeEvent::new(tag, date));
        self
    }

    /// Add a link to a family in which this individual is a child
    #[must_use]
    pub fn with_parent_family(mut self, family: impl Into<String>) -> Self {
        self.parent_families.push(FamilyId::new(family));
        self
    }

    /// Lowercased sex, used as the gender key in results
    #[must_use]
    pub fn gender(&self) -> String {
        self.sex.to_lowercase()
    }

    /// Whether the male reference table applies
    #[must_use]
    pub fn is_male(&self) -> bool {
        self.gender() == "m"
    }

    /// Name with the surname slashes removed and whitespace collapsed
    ///
    /// Falls back to the id when no name is recorded.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name
                .replace('/', " ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" "),
            None => self.id.to_string(),
        }
    }
}
