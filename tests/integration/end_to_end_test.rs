#[cfg(test)]
mod tests {
    use std::fs;

    use ancestral_longevity::config::LongevityConfig;
    use ancestral_longevity::report::{export_csv, render_report, write_csv};
    use ancestral_longevity::{
        DeathStatTable, IndividualId, LongevityAnalysis, LongevityError, YearsAndDays, gedcom,
    };

    use crate::utils::{SAMPLE_GEDCOM, sample_tables};

    fn analyse() -> LongevityAnalysis {
        let tree = gedcom::parse_tree(SAMPLE_GEDCOM).unwrap();
        let subject = tree.first_individual().unwrap().id.clone();
        LongevityAnalysis::run(&tree, &subject, &sample_tables(), &LongevityConfig::default())
            .unwrap()
    }

    #[test]
    fn test_pipeline_resolves_parents_and_skips_grandparents() {
        let analysis = analyse();

        assert_eq!(analysis.subject_id, "@I1@");
        assert_eq!(analysis.subject_name, "John Smith");
        assert_eq!(analysis.ancestor_count, 4);
        assert_eq!(analysis.deaths.len(), 2);

        let father = &analysis.deaths[0];
        assert_eq!(father.individual_id, "@I2@");
        assert_eq!(father.gender, "m");
        assert_eq!(father.generations_removed, 1);
        assert_eq!(father.age_at_death_days, 14_610);
        assert_eq!(father.median_age_at_death_diff_days, 10);

        let mother = &analysis.deaths[1];
        assert_eq!(mother.individual_id, "@I3@");
        assert_eq!(mother.year, 1920);
        assert_eq!(mother.age_at_death_days, 20_087);
        assert_eq!(mother.modal_age_at_death_diff_days, 1_837);
    }

    #[test]
    fn test_pipeline_summary() {
        let summary = analyse().summary;

        let male = summary.male.unwrap();
        assert_eq!(male.ancestor_count, 1);
        assert_eq!(male.outlived_median, 1);
        assert_eq!(male.averages.life_expectancy_diff_days, 10);

        let female = summary.female.unwrap();
        assert_eq!(
            female.averages.median_age_at_death_diff(),
            YearsAndDays { years: 5, days: 12 }
        );

        let overall = summary.overall.unwrap();
        assert_eq!(overall.ancestor_count, 2);
        assert_eq!(overall.earliest_death_year, 1900);
        assert_eq!(overall.latest_death_year, 1920);
        assert_eq!(overall.averages.modal_age_at_death_diff_days, 923);
    }

    #[test]
    fn test_console_report() {
        let report = render_report(&analyse());
        assert!(report.contains("Longevity statistics for the direct ancestors of John Smith"));
        assert!(report.contains("5 years 12 days"));
        assert!(report.contains("+5 years 12 days"));

        let first_row = report.lines().position(|line| line.starts_with("1920"));
        let second_row = report.lines().position(|line| line.starts_with("1900"));
        assert!(first_row < second_row);
    }

    #[test]
    fn test_csv_export() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &analyse()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Year,Generations removed from John Smith,Gender,Age at death (days),\
             Median Death Age Diff (days),Modal Death Age Diff (days),\
             Modal Death Age (days),Median Death Age (days)"
        );
        assert_eq!(lines[1], "1900,1,m,14610,10,10,14600,14600");
        assert_eq!(lines[2], "1920,1,f,20087,1837,1837,18250,18250");
    }

    #[test]
    fn test_files_on_disk() {
        let dir = std::env::temp_dir().join(format!("ancestral-longevity-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let tree_path = dir.join("tree.ged");
        fs::write(&tree_path, SAMPLE_GEDCOM).unwrap();
        let tree = gedcom::load_tree(&tree_path).unwrap();
        assert_eq!(tree.individual_count(), 5);

        let analysis = LongevityAnalysis::run(
            &tree,
            &IndividualId::new("@I2@"),
            &sample_tables(),
            &LongevityConfig::default(),
        )
        .unwrap();
        assert_eq!(analysis.ancestor_count, 2);
        assert!(analysis.deaths.is_empty());
        assert!(analysis.summary.overall.is_none());

        let written = export_csv(&dir.join("results"), &analysis).unwrap();
        assert_eq!(written, dir.join("results.csv"));
        assert!(written.exists());

        let err = DeathStatTable::load(&dir.join("missing.csv")).unwrap_err();
        assert!(matches!(err, LongevityError::Io { .. }));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unknown_subject_aborts() {
        let tree = gedcom::parse_tree(SAMPLE_GEDCOM).unwrap();
        let err = LongevityAnalysis::run(
            &tree,
            &IndividualId::new("@I42@"),
            &sample_tables(),
            &LongevityConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LongevityError::UnknownIndividual(_)));
    }

    #[test]
    fn test_malformed_statistics_are_fatal() {
        let csv = "year,le,median,modal\n1900,forty,40.0,40.0\n";
        let err = DeathStatTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LongevityError::StatParse { ref year, ref value, .. } if year == "1900" && value == "forty"
        ));
    }

    #[test]
    fn test_dangling_parent_keeps_the_rest_of_the_lineage() {
        let gedcom_text = "\
0 @I1@ INDI
1 NAME Jane /Doe/
1 FAMC @F1@
0 @I2@ INDI
1 SEX M
1 BIRT
2 DATE 1 Jan 1860
1 DEAT
2 DATE 1 Jan 1900
0 @F1@ FAM
1 HUSB @I2@
1 WIFE @I9@
";
        let tree = gedcom::parse_tree(gedcom_text).unwrap();
        let analysis = LongevityAnalysis::run(
            &tree,
            &IndividualId::new("@I1@"),
            &sample_tables(),
            &LongevityConfig::default(),
        )
        .unwrap();

        assert_eq!(analysis.ancestor_count, 2);
        assert_eq!(analysis.deaths.len(), 1);
        assert_eq!(analysis.deaths[0].individual_id, "@I2@");
        assert_eq!(analysis.deaths[0].life_expectancy_diff_days, 10);
    }
}
