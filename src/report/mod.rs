//! Reporting of analysis results to the console and to files

pub mod console;
pub mod export;

pub use console::{format_table, render_ancestors, render_report, render_summary};
pub use export::{csv_path, export_csv, export_json, write_csv};
