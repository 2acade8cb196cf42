#[cfg(test)]
mod tests {
    use ancestral_longevity::config::DateNormalizerConfig;
    use ancestral_longevity::{DateError, DateNormalizer};
    use chrono::NaiveDate;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn normalize(raw: &str) -> NaiveDate {
        DateNormalizer::default()
            .normalize(raw)
            .unwrap_or_else(|e| panic!("failed to normalize {raw:?}: {e}"))
    }

    #[test]
    fn test_year_only() {
        assert_eq!(normalize("2009"), ymd(2009, 1, 1));
    }

    #[test]
    fn test_abbreviated_months() {
        assert_eq!(normalize("15 February 1943"), normalize("15 Feb 1943"));
        assert_eq!(normalize("Sep 1984"), ymd(1984, 9, 1));
        assert_eq!(normalize("Sept 1984"), ymd(1984, 9, 1));
        assert_eq!(normalize("2 Sept 1984"), ymd(1984, 9, 2));
    }

    #[test]
    fn test_year_ranges() {
        assert_eq!(normalize("2005-2007"), ymd(2006, 1, 1));
        assert_eq!(normalize("2004 - 2007"), ymd(2005, 7, 2));
    }

    #[test]
    fn test_qualified_years() {
        for raw in ["About 1800", "about 1800", "abt 1800", "abt. 1800"] {
            assert_eq!(normalize(raw), ymd(1800, 1, 1), "input {raw:?}");
        }
    }

    #[test]
    fn test_messy_day_month_year() {
        assert_eq!(normalize("15  March  1900"), ymd(1900, 3, 15));
        assert_eq!(normalize("21st June 1850"), ymd(1850, 6, 21));
    }

    #[test]
    fn test_us_slash_dates() {
        assert_eq!(normalize("05/12/1851"), ymd(1851, 5, 12));
        assert_eq!(normalize("5/12/1851"), ymd(1851, 5, 12));
    }

    #[test]
    fn test_check_valid_year() {
        let normalizer = DateNormalizer::default();
        for year in [1500, 1750, 1899, 2000] {
            assert_eq!(normalizer.check_valid_year(&format!("1 Jan {year}")), Ok(year));
        }
        assert!(matches!(
            normalizer.check_valid_year("1 Jan a year"),
            Err(DateError::NoYearFound(_))
        ));
        assert!(matches!(
            normalizer.check_valid_year("1 Jan 9999"),
            Err(DateError::YearOutOfRange(_))
        ));
        assert!(matches!(
            normalizer.check_valid_year("1 Jan 1499"),
            Err(DateError::YearOutOfRange(_))
        ));
    }

    #[test]
    fn test_unparseable_date_carries_cleaned_string() {
        let err = DateNormalizer::default().normalize("Bef. 1900 or so").unwrap_err();
        assert_eq!(err, DateError::Unparseable("1900 or so".to_string()));
    }

    #[test]
    fn test_canonical_dates_are_stable() {
        let normalizer = DateNormalizer::new(DateNormalizerConfig::default());
        for raw in ["1 January 1800", "29 February 1904", "31 December 1999"] {
            let date = normalizer.normalize(raw).unwrap();
            let again = normalizer
                .normalize(&date.format("%-d %B %Y").to_string())
                .unwrap();
            assert_eq!(date, again);
        }
    }
}
