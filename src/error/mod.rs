//! Error handling for ancestral longevity analysis.
//!
//! Date failures are kept in their own type because they are recovered per
//! ancestor, while everything in [`LongevityError`] aborts a run.

use std::io;
use std::path::PathBuf;

/// Errors produced while normalizing a raw genealogical date
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// No standalone four-digit year in the input
    #[error("date '{0}' does not contain a four-digit year")]
    NoYearFound(String),

    /// The year is before the earliest or after the latest accepted year
    #[error("year in date '{0}' is outside valid range")]
    YearOutOfRange(String),

    /// A `YYYY-YYYY` range whose sides are not plain years
    #[error("invalid date range: {0}")]
    InvalidYearRange(String),

    /// Nothing in the fallback grammar accepted the cleaned string
    #[error("failed to parse date {0}")]
    Unparseable(String),
}

/// Errors that abort an analysis run
#[derive(Debug, thiserror::Error)]
pub enum LongevityError {
    /// Error opening or reading a file
    #[error("IO error for {path}: {source}")]
    Io {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Error reading or writing delimited data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field in a death statistics table is not a decimal number
    #[error("invalid {field} '{value}' for year {year} in death statistics")]
    StatParse {
        /// Year of the offending row
        year: String,
        /// Column name
        field: &'static str,
        /// Raw field value
        value: String,
    },

    /// Malformed line in a GEDCOM file
    #[error("GEDCOM error on line {line}: {message}")]
    Gedcom {
        /// One-based line number
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// An individual id that is not present in the tree
    #[error("unknown individual: {0}")]
    UnknownIndividual(String),

    /// An individual turned out to be their own ancestor
    #[error("lineage cycle detected at individual {0}")]
    LineageCycle(String),

    /// The lineage walk went deeper than the configured limit
    #[error("lineage deeper than {0} generations")]
    LineageTooDeep(u32),

    /// A weighted average was requested over an empty selection
    #[error("no ancestors match gender filter '{0}'")]
    NoMatchingAncestors(String),

    /// Generation weights no longer fit in 128 bits
    #[error("cannot weight ancestors across {0} generations")]
    WeightOverflow(u32),

    /// Date error escalated to a run failure
    #[error("Date error: {0}")]
    Date(#[from] DateError),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LongevityError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for longevity operations
pub type Result<T> = std::result::Result<T, LongevityError>;
