//! Log lines shared by the input loaders and the death resolver.

use std::fmt::Display;
use std::path::Path;
use std::time::Duration;

/// Announce that an input file is about to be read, e.g. "family tree"
pub fn log_load_start(input: &str, path: &Path) {
    log::info!("Reading {input} from {}", path.display());
}

/// Report how many records an input file produced
pub fn log_load_complete(input: &str, path: &Path, records: usize, elapsed: Duration) {
    log::info!(
        "Read {records} {input} records from {} in {elapsed:?}",
        path.display()
    );
}

/// Log a skipped record with the reason it was left out
pub fn log_skipped(kind: &str, id: &str, reason: &dyn Display) {
    log::debug!("Skipping {kind} {id}: {reason}");
}
