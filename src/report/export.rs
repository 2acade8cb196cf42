//! File export of analysis results

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::algorithm::LongevityAnalysis;
use crate::error::{LongevityError, Result};

/// Append `.csv` unless the path already ends with it
#[must_use]
pub fn csv_path(path: &Path) -> PathBuf {
    if path.to_string_lossy().ends_with(".csv") {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".csv");
        PathBuf::from(name)
    }
}

/// Write one row per ancestor, all figures in days
pub fn write_csv<W: Write>(writer: W, analysis: &LongevityAnalysis) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "Year".to_string(),
        format!("Generations removed from {}", analysis.subject_name),
        "Gender".to_string(),
        "Age at death (days)".to_string(),
        "Median Death Age Diff (days)".to_string(),
        "Modal Death Age Diff (days)".to_string(),
        "Modal Death Age (days)".to_string(),
        "Median Death Age (days)".to_string(),
    ])?;

    for death in &analysis.deaths {
        csv_writer.write_record([
            death.year.to_string(),
            death.generations_removed.to_string(),
            death.gender.clone(),
            death.age_at_death_days.to_string(),
            death.median_age_at_death_diff_days.to_string(),
            death.modal_age_at_death_diff_days.to_string(),
            death.modal_age_at_death_days.to_string(),
            death.median_age_at_death_days.to_string(),
        ])?;
    }
    csv_writer
        .flush()
        .map_err(|e| LongevityError::Csv(csv::Error::from(e)))?;
    Ok(())
}

/// Write the CSV export to a file, returning the path actually written
pub fn export_csv(path: &Path, analysis: &LongevityAnalysis) -> Result<PathBuf> {
    let path = csv_path(path);
    let file = File::create(&path).map_err(|e| LongevityError::io(&path, e))?;
    write_csv(file, analysis)?;
    log::info!(
        "Wrote {} ancestors to {}",
        analysis.deaths.len(),
        path.display()
    );
    Ok(path)
}

/// Write the whole analysis, summaries included, as pretty JSON
pub fn export_json(path: &Path, analysis: &LongevityAnalysis) -> Result<()> {
    let file = File::create(path).map_err(|e| LongevityError::io(path, e))?;
    serde_json::to_writer_pretty(file, analysis)?;
    log::info!("Wrote analysis to {}", path.display());
    Ok(())
}
