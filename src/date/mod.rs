//! Date handling for genealogical records.

pub mod formats;
pub mod normalizer;

pub use formats::parse_flexible;
pub use normalizer::{DateNormalizer, MONTHS, clean_date};
