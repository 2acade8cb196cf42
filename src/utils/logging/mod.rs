//! Logging utilities
//!
//! Consistent log lines for loading inputs and skipping records.

pub mod log;

pub use log::{log_load_complete, log_load_start, log_skipped};
