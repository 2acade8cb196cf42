//! Minimal GEDCOM reader
//!
//! Reads only what the analysis needs from a GEDCOM file: individuals with
//! their name, sex, life event dates and parent-family links, and families
//! with their husband and wife. Every other record and tag is ignored.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{LongevityError, Result};
use crate::models::{EventTag, Family, FamilyId, FamilyTree, Individual, IndividualId, LifeEvent};
use crate::utils::logging::{log_load_complete, log_load_start};

/// Individual-level tags read as life events
const EVENT_TAGS: &[&str] = &["BIRT", "DEAT", "CHR", "BAPM", "BURI", "CREM"];

/// One parsed GEDCOM line
#[derive(Debug, PartialEq, Eq)]
struct Line<'a> {
    level: u32,
    xref: Option<&'a str>,
    tag: &'a str,
    value: &'a str,
}

/// Split off the first space-delimited token
fn split_token(s: &str) -> (&str, &str) {
    s.split_once(' ').unwrap_or((s, ""))
}

fn parse_line(raw: &str, line_number: usize) -> Result<Option<Line<'_>>> {
    let raw = raw.trim_start_matches('\u{feff}').trim_start();
    let raw = raw.trim_end_matches(['\r', '\n']);
    if raw.is_empty() {
        return Ok(None);
    }

    let (level, rest) = split_token(raw);
    let level = level.parse::<u32>().map_err(|_| LongevityError::Gedcom {
        line: line_number,
        message: format!("expected a level number, found '{level}'"),
    })?;

    let rest = rest.trim_start_matches(' ');
    let (first, rest) = split_token(rest);
    let (xref, tag, value) = if first.starts_with('@') {
        let (tag, value) = split_token(rest.trim_start_matches(' '));
        (Some(first), tag, value)
    } else {
        (None, first, rest)
    };

    if tag.is_empty() {
        return Err(LongevityError::Gedcom {
            line: line_number,
            message: "missing tag".to_string(),
        });
    }
    Ok(Some(Line {
        level,
        xref,
        tag,
        value,
    }))
}

/// Record currently being read
enum Current {
    Individual {
        individual: Individual,
        event: Option<usize>,
    },
    Family(Family),
    Skipped,
}

impl Current {
    fn finish(self, tree: &mut FamilyTree) {
        match self {
            Self::Individual { individual, .. } => tree.add_individual(individual),
            Self::Family(family) => tree.add_family(family),
            Self::Skipped => {}
        }
    }
}

/// Parse GEDCOM text into a family tree
pub fn parse_tree(text: &str) -> Result<FamilyTree> {
    let mut tree = FamilyTree::new();
    let mut current = Current::Skipped;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let Some(line) = parse_line(raw, line_number)? else {
            continue;
        };

        if line.level == 0 {
            std::mem::replace(&mut current, Current::Skipped).finish(&mut tree);
            current = match (line.tag, line.xref) {
                ("INDI", Some(xref)) => Current::Individual {
                    individual: Individual::new(xref),
                    event: None,
                },
                ("FAM", Some(xref)) => Current::Family(Family::new(xref)),
                ("INDI" | "FAM", None) => {
                    return Err(LongevityError::Gedcom {
                        line: line_number,
                        message: format!("{} record without a cross-reference id", line.tag),
                    });
                }
                _ => Current::Skipped,
            };
            continue;
        }

        match &mut current {
            Current::Individual { individual, event } => {
                read_individual_line(individual, event, &line);
            }
            Current::Family(family) => read_family_line(family, &line),
            Current::Skipped => {}
        }
    }
    current.finish(&mut tree);

    Ok(tree)
}

fn read_individual_line(individual: &mut Individual, event: &mut Option<usize>, line: &Line<'_>) {
    if line.level == 1 {
        *event = None;
        match line.tag {
            "NAME" if individual.name.is_none() => individual.name = Some(line.value.to_string()),
            "SEX" => individual.sex = line.value.trim().to_string(),
            "FAMC" => {
                individual.parent_families.push(FamilyId::new(line.value.trim()));
            }
            tag if EVENT_TAGS.contains(&tag) => {
                individual
                    .events
                    .push(LifeEvent::new(EventTag::from_tag(tag), ""));
                *event = Some(individual.events.len() - 1);
            }
            _ => {}
        }
    } else if line.level == 2 && line.tag == "DATE" {
        if let Some(index) = *event {
            individual.events[index].date = line.value.to_string();
        }
    }
}

fn read_family_line(family: &mut Family, line: &Line<'_>) {
    if line.level != 1 {
        return;
    }
    let value = line.value.trim();
    match line.tag {
        "HUSB" => family.husband = Some(IndividualId::new(value)),
        "WIFE" => family.wife = Some(IndividualId::new(value)),
        _ => {}
    }
}

/// Load a family tree from a GEDCOM file
pub fn load_tree(path: &Path) -> Result<FamilyTree> {
    log_load_start("family tree", path);
    let start = Instant::now();

    let text = fs::read_to_string(path).map_err(|e| LongevityError::io(path, e))?;
    let tree = parse_tree(&text)?;

    log_load_complete("individual", path, tree.individual_count(), start.elapsed());
    log::debug!("Tree has {} families", tree.family_count());
    Ok(tree)
}
