//! Shared helpers

pub mod logging;
