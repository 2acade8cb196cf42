use ancestral_longevity::models::{Family, FamilyTree, Individual};
use ancestral_longevity::{AncestorDeath, DeathStatTable, ReferenceTables};

/// A small tree: a subject, two parents and four grandparents
///
/// Parents and grandparents alternate male and female, fathers first.
#[must_use]
pub fn three_generation_tree() -> FamilyTree {
    FamilyTree::new()
        .with_individual(Individual::new("@I1@").with_sex("M").with_parent_family("@F1@"))
        .with_individual(Individual::new("@I2@").with_sex("M").with_parent_family("@F2@"))
        .with_individual(Individual::new("@I3@").with_sex("F").with_parent_family("@F3@"))
        .with_individual(Individual::new("@I4@").with_sex("M"))
        .with_individual(Individual::new("@I5@").with_sex("F"))
        .with_individual(Individual::new("@I6@").with_sex("M"))
        .with_individual(Individual::new("@I7@").with_sex("F"))
        .with_family(Family::new("@F1@").with_husband("@I2@").with_wife("@I3@"))
        .with_family(Family::new("@F2@").with_husband("@I4@").with_wife("@I5@"))
        .with_family(Family::new("@F3@").with_husband("@I6@").with_wife("@I7@"))
}

/// A GEDCOM export with two resolvable parents and two grandparents that
/// have to be skipped
pub const SAMPLE_GEDCOM: &str = "\
0 HEAD
1 SOUR test
0 @I1@ INDI
1 NAME John /Smith/
1 SEX M
1 BIRT
2 DATE 3 Mar 1925
1 FAMC @F1@
0 @I2@ INDI
1 NAME William /Smith/
1 SEX M
1 BIRT
2 DATE 1 Jan 1860
1 DEAT
2 DATE 1 Jan 1900
1 FAMC @F2@
1 FAMS @F1@
0 @I3@ INDI
1 NAME Mary /Jones/
1 SEX F
1 BIRT
2 DATE Abt. 1865
1 DEAT
2 DATE 1920
1 FAMS @F1@
0 @I4@ INDI
1 NAME Thomas /Smith/
1 SEX M
1 BIRT
2 DATE 1830
1 DEAT
2 DATE 21st June 1850
1 FAMS @F2@
0 @I5@ INDI
1 NAME Ann /Brown/
1 SEX F
1 BIRT
2 DATE 1835
1 FAMS @F2@
0 @F1@ FAM
1 HUSB @I2@
1 WIFE @I3@
1 CHIL @I1@
0 @F2@ FAM
1 HUSB @I4@
1 WIFE @I5@
1 CHIL @I2@
0 TRLR
";

/// Male reference statistics covering only 1900
pub const MALE_STATS_CSV: &str = "\
year,life_expectancy,median_age_at_death,modal_age_at_death
1900, 40.0, 40.0, 40.0
";

/// Female reference statistics covering only 1920
pub const FEMALE_STATS_CSV: &str = "\
year,life_expectancy,median_age_at_death,modal_age_at_death
1920, 50.0, 50.0, 50.0
";

/// Reference tables built from the in-memory CSV fixtures
#[must_use]
pub fn sample_tables() -> ReferenceTables {
    ReferenceTables::new(
        DeathStatTable::from_reader(MALE_STATS_CSV.as_bytes()).unwrap(),
        DeathStatTable::from_reader(FEMALE_STATS_CSV.as_bytes()).unwrap(),
    )
}

/// A death record with only the fields the weighted averages read
#[must_use]
pub fn death_record(gender: &str, generation: u32, diffs: (i64, i64, i64)) -> AncestorDeath {
    AncestorDeath {
        individual_id: format!("@{gender}{generation}@"),
        year: 1900,
        generations_removed: generation,
        gender: gender.to_string(),
        age_at_death_days: 0,
        life_expectancy_diff_days: diffs.0,
        median_age_at_death_diff_days: diffs.1,
        modal_age_at_death_diff_days: diffs.2,
        life_expectancy_days: 0,
        median_age_at_death_days: 0,
        modal_age_at_death_days: 0,
    }
}
