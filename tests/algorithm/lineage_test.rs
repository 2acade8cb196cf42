#[cfg(test)]
mod tests {
    use ancestral_longevity::models::{Family, FamilyTree, Individual};
    use ancestral_longevity::{IndividualId, LineageTraversal, LongevityError};

    use crate::utils::three_generation_tree;

    fn id(s: &str) -> IndividualId {
        IndividualId::new(s)
    }

    #[test]
    fn test_two_generations_of_ancestors() {
        let ancestors = LineageTraversal::default()
            .collect(&three_generation_tree(), &id("@I1@"))
            .unwrap();

        assert_eq!(ancestors.len(), 6);
        assert!(!ancestors.contains(&id("@I1@")));
        for parent in ["@I2@", "@I3@"] {
            assert_eq!(ancestors.generation(&id(parent)), Some(1));
        }
        for grandparent in ["@I4@", "@I5@", "@I6@", "@I7@"] {
            assert_eq!(ancestors.generation(&id(grandparent)), Some(2));
        }
        assert_eq!(ancestors.max_generation(), 2);
    }

    #[test]
    fn test_sorted_is_ordered_by_id() {
        let ancestors = LineageTraversal::default()
            .collect(&three_generation_tree(), &id("@I1@"))
            .unwrap();
        let ids: Vec<&str> = ancestors
            .sorted()
            .into_iter()
            .map(|(id, _)| id.as_str())
            .collect();
        assert_eq!(ids, ["@I2@", "@I3@", "@I4@", "@I5@", "@I6@", "@I7@"]);
    }

    #[test]
    fn test_walk_starting_from_a_parent() {
        let ancestors = LineageTraversal::default()
            .collect(&three_generation_tree(), &id("@I3@"))
            .unwrap();
        assert_eq!(ancestors.len(), 2);
        assert_eq!(ancestors.generation(&id("@I6@")), Some(1));
    }

    #[test]
    fn test_single_parent_family() {
        let tree = FamilyTree::new()
            .with_individual(Individual::new("@I1@").with_parent_family("@F1@"))
            .with_individual(Individual::new("@I2@"))
            .with_family(Family::new("@F1@").with_wife("@I2@"));

        let ancestors = LineageTraversal::default().collect(&tree, &id("@I1@")).unwrap();
        assert_eq!(ancestors.len(), 1);
        assert_eq!(ancestors.generation(&id("@I2@")), Some(1));
    }

    #[test]
    fn test_missing_family_is_skipped() {
        let tree = FamilyTree::new()
            .with_individual(
                Individual::new("@I1@")
                    .with_parent_family("@F9@")
                    .with_parent_family("@F1@"),
            )
            .with_individual(Individual::new("@I2@"))
            .with_family(Family::new("@F1@").with_husband("@I2@"));

        let ancestors = LineageTraversal::default().collect(&tree, &id("@I1@")).unwrap();
        assert_eq!(ancestors.len(), 1);
        assert_eq!(ancestors.generation(&id("@I2@")), Some(1));
    }

    #[test]
    fn test_self_parent_is_a_cycle() {
        let tree = FamilyTree::new()
            .with_individual(Individual::new("@I1@").with_parent_family("@F1@"))
            .with_family(Family::new("@F1@").with_husband("@I1@"));

        let err = LineageTraversal::default().collect(&tree, &id("@I1@")).unwrap_err();
        assert!(matches!(err, LongevityError::LineageCycle(_)));
    }
}
