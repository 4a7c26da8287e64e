//! The canonical feature schema.
//!
//! Every encoded batch is reindexed to exactly these columns, in this
//! order, whatever the batch contents. Renaming, reordering or resizing the
//! list is a breaking schema change and bumps the version.

/// Version tag of the canonical schema.
pub const FEATURE_SCHEMA_VERSION: &str = "v1";

/// The canonical, ordered feature columns.
pub const FEATURE_SCHEMA_V1: [&str; 47] = [
    "budget",
    "runtime",
    "is_part_of_collection",
    "original_lang_en",
    "original_lang_es",
    "original_lang_fr",
    "original_lang_it",
    "original_lang_ja",
    "original_lang_other",
    "available_lang_de",
    "available_lang_en",
    "available_lang_es",
    "available_lang_fr",
    "available_lang_it",
    "available_lang_ja",
    "available_lang_other",
    "Action",
    "Comédie",
    "Drame",
    "Familial",
    "Fantastique",
    "Horreur",
    "Other",
    "Romance",
    "prod_BE",
    "prod_CA",
    "prod_DE",
    "prod_FR",
    "prod_GB",
    "prod_OTHER",
    "prod_US",
    "vacances_zone_a",
    "vacances_zone_b",
    "vacances_zone_c",
    "jour_ferie",
    "holiday",
    "month",
    "cos_month",
    "actor_1_sales",
    "actor_2_sales",
    "actor_3_sales",
    "mean_sales_actor",
    "max_sales_actor",
    "mean_3_popularity",
    "mean_5_popularity",
    "rolling_sales_collection",
    "nb_movie_collection",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schema_has_no_duplicates() {
        let unique: HashSet<&str> = FEATURE_SCHEMA_V1.iter().copied().collect();
        assert_eq!(unique.len(), FEATURE_SCHEMA_V1.len());
    }

    #[test]
    fn test_baseline_language_column_absent() {
        assert!(!FEATURE_SCHEMA_V1.contains(&"original_lang_de"));
        assert!(FEATURE_SCHEMA_V1.contains(&"available_lang_de"));
    }

    #[test]
    fn test_every_registry_output_is_in_schema() {
        for stage in guichet_features::pipeline_stages() {
            for column in stage.produced_columns {
                assert!(
                    FEATURE_SCHEMA_V1.contains(column),
                    "stage {} produces {column} outside the schema",
                    stage.name
                );
            }
        }
    }
}
