use std::path::PathBuf;

use ancestral_longevity::config::{DEFAULT_MAX_GENERATIONS, LongevityConfig};
use ancestral_longevity::report::{export_csv, export_json, render_report};
use ancestral_longevity::{IndividualId, LongevityAnalysis, ReferenceTables, gedcom};
use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info, warn};

/// Compare the lifespans of a person's ancestors with the norms of their time
#[derive(Parser)]
#[command(name = "ancestral-longevity")]
#[command(version)]
#[command(about = "Compare ancestors' ages at death with historical life tables")]
struct Cli {
    /// GEDCOM file holding the family tree
    #[arg(short = 'f', long)]
    tree_file: PathBuf,

    /// Write one row per ancestor to this CSV file
    #[arg(short, long)]
    csv: Option<PathBuf>,

    /// Write the full analysis to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Reference death statistics for men
    #[arg(long, default_value = "male_death_stats.csv")]
    male_stats: PathBuf,

    /// Reference death statistics for women
    #[arg(long, default_value = "female_death_stats.csv")]
    female_stats: PathBuf,

    /// Cross-reference id of the subject, e.g. @I1@ (defaults to the first individual)
    #[arg(short, long)]
    subject: Option<String>,

    /// Stop with an error when the lineage is deeper than this
    #[arg(long, default_value_t = DEFAULT_MAX_GENERATIONS, value_parser = clap::value_parser!(u32).range(1..=96))]
    max_generations: u32,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match cli.verbose {
        0 => {}
        1 => {
            logger.filter_level(LevelFilter::Debug);
        }
        _ => {
            logger.filter_level(LevelFilter::Trace);
        }
    }
    logger.init();

    let config = LongevityConfig {
        max_generations: cli.max_generations,
        male_stats_path: cli.male_stats,
        female_stats_path: cli.female_stats,
        ..LongevityConfig::default()
    };
    info!("{config}");

    let tables = ReferenceTables::load(&config.male_stats_path, &config.female_stats_path)
        .context("Failed to load reference death statistics")?;
    for (label, table) in [("male", &tables.male), ("female", &tables.female)] {
        match table.earliest_year()? {
            Some(year) => info!("Earliest {label} death statistics are from {year}"),
            None => warn!("The {label} death statistics table is empty"),
        }
    }

    let tree = gedcom::load_tree(&cli.tree_file)
        .with_context(|| format!("Failed to read family tree {}", cli.tree_file.display()))?;

    let subject = match cli.subject {
        Some(xref) => IndividualId::new(xref),
        None => tree
            .first_individual()
            .map(|individual| individual.id.clone())
            .context("The family tree contains no individuals")?,
    };

    let analysis = LongevityAnalysis::run(&tree, &subject, &tables, &config)
        .with_context(|| format!("Failed to analyse the ancestors of {subject}"))?;

    println!("{}", render_report(&analysis));

    if let Some(path) = cli.csv {
        let written = export_csv(&path, &analysis)
            .with_context(|| format!("Failed to write CSV export {}", path.display()))?;
        info!("CSV export written to {}", written.display());
    }
    if let Some(path) = cli.json {
        export_json(&path, &analysis)
            .with_context(|| format!("Failed to write JSON export {}", path.display()))?;
    }

    Ok(())
}
