//! Console report
//!
//! Plain-text tables aligned on two-space gutters.

use itertools::Itertools;
use std::cmp::Reverse;

use crate::algorithm::{GroupSummary, LongevityAnalysis, WeightedAverages};
use crate::models::{AncestorDeath, YearsAndDays};

const RULE: &str =
    "===========================================================================================";

/// Lay out rows as columns separated by at least two spaces
#[must_use]
pub fn format_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|column| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                if column + 1 == row.len() {
                    cell.clone()
                } else {
                    format!("{cell:<width$}  ", width = widths[column])
                }
            })
            .join("");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn group_cell(
    group: Option<&GroupSummary>,
    metric: fn(&WeightedAverages) -> YearsAndDays,
) -> String {
    group.map_or_else(|| "n/a".to_string(), |g| metric(&g.averages).to_string())
}

/// Weighted deviation table for men, women and everyone
#[must_use]
pub fn render_summary(analysis: &LongevityAnalysis) -> String {
    let summary = &analysis.summary;
    let groups = [
        summary.male.as_ref(),
        summary.female.as_ref(),
        summary.overall.as_ref(),
    ];
    let metrics: [(&str, fn(&WeightedAverages) -> YearsAndDays); 3] = [
        (
            "Difference from Life Expectancy",
            WeightedAverages::life_expectancy_diff,
        ),
        (
            "Difference from Median Death Age",
            WeightedAverages::median_age_at_death_diff,
        ),
        (
            "Difference from Modal Age at Death",
            WeightedAverages::modal_age_at_death_diff,
        ),
    ];

    let mut rows = vec![vec![
        "Stat".to_string(),
        "Male".to_string(),
        "Female".to_string(),
        "Overall".to_string(),
    ]];
    for (label, metric) in metrics {
        let mut row = vec![label.to_string()];
        row.extend(groups.iter().map(|group| group_cell(*group, metric)));
        rows.push(row);
    }

    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "Longevity statistics for the direct ancestors of {}\n",
        analysis.subject_name
    ));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format_table(&rows));

    for (label, group) in [("male", groups[0]), ("female", groups[1])] {
        if let Some(group) = group {
            out.push_str(&format!(
                "Calculated from {} {label} ancestors who died between {} and {} \
                 ({}/{} outlived the median, {}/{} outlived the mode)\n",
                group.ancestor_count,
                group.earliest_death_year,
                group.latest_death_year,
                group.outlived_median,
                group.ancestor_count,
                group.outlived_modal,
                group.ancestor_count,
            ));
        }
    }
    out
}

/// One row per ancestor, latest death first
#[must_use]
pub fn render_ancestors(deaths: &[AncestorDeath]) -> String {
    let header = [
        "Year",
        "Generations removed from subject",
        "Gender",
        "Age at death",
        "Median Death Age Diff",
        "Modal Death Age Diff",
        "Modal Death Age",
        "Median Death Age",
    ];
    let mut rows = vec![header.iter().map(ToString::to_string).collect_vec()];

    for death in deaths.iter().sorted_by_key(|death| Reverse(death.year)) {
        rows.push(vec![
            death.year.to_string(),
            death.generations_removed.to_string(),
            death.gender.clone(),
            death.age_at_death().to_string(),
            format!("{:+}", death.median_age_at_death_diff()),
            format!("{:+}", death.modal_age_at_death_diff()),
            YearsAndDays::from_days(death.modal_age_at_death_days).to_string(),
            YearsAndDays::from_days(death.median_age_at_death_days).to_string(),
        ]);
    }
    format_table(&rows)
}

/// Full console report
#[must_use]
pub fn render_report(analysis: &LongevityAnalysis) -> String {
    let mut out = render_summary(analysis);
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&render_ancestors(&analysis.deaths));
    out
}
