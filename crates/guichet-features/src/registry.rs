//! Stage Registry
//!
//! Central metadata for the pipeline stages, in their canonical execution
//! order. Used by the CLI listing and by tests asserting the ordering.

/// Stage metadata
#[derive(Debug, Clone)]
pub struct StageInfo {
    /// Stage name (unique identifier)
    pub name: &'static str,
    /// Brief description of what the stage computes
    pub description: &'static str,
    /// Required column names in input data
    pub required_columns: &'static [&'static str],
    /// Columns the stage appends (columns it consumes are dropped)
    pub produced_columns: &'static [&'static str],
}

/// All pipeline stages, in canonical execution order
pub fn pipeline_stages() -> Vec<StageInfo> {
    vec![
        StageInfo {
            name: "categorical_reducer",
            description: "Fill budget/runtime and reduce categoricals to pinned vocabularies",
            required_columns: &[
                "budget",
                "runtime",
                "original_language",
                "languages",
                "production_countries",
                "genres",
            ],
            produced_columns: &[],
        },
        StageInfo {
            name: "one_hot_original_language",
            description: "One-hot encode the original language, dropping the pinned baseline",
            required_columns: &["original_language"],
            produced_columns: &[
                "original_lang_en",
                "original_lang_es",
                "original_lang_fr",
                "original_lang_it",
                "original_lang_ja",
                "original_lang_other",
            ],
        },
        StageInfo {
            name: "multi_label_languages",
            description: "Membership indicators over the available languages",
            required_columns: &["languages"],
            produced_columns: &[
                "available_lang_de",
                "available_lang_en",
                "available_lang_es",
                "available_lang_fr",
                "available_lang_it",
                "available_lang_ja",
                "available_lang_other",
            ],
        },
        StageInfo {
            name: "multi_label_production_countries",
            description: "Membership indicators over the production countries",
            required_columns: &["production_countries"],
            produced_columns: &[
                "prod_BE",
                "prod_CA",
                "prod_DE",
                "prod_FR",
                "prod_GB",
                "prod_OTHER",
                "prod_US",
            ],
        },
        StageInfo {
            name: "multi_label_genres",
            description: "Membership indicators over the reduced genres",
            required_columns: &["genres"],
            produced_columns: &[
                "Action",
                "Comédie",
                "Drame",
                "Familial",
                "Fantastique",
                "Horreur",
                "Other",
                "Romance",
            ],
        },
        StageInfo {
            name: "calendar_enricher",
            description: "French school-vacation, public-holiday and month features",
            required_columns: &["release_date"],
            produced_columns: &[
                "vacances_zone_a",
                "vacances_zone_b",
                "vacances_zone_c",
                "jour_ferie",
                "holiday",
                "month",
                "cos_month",
            ],
        },
        StageInfo {
            name: "collection_aggregator",
            description: "Collection member count and trailing mean of earlier members' sales",
            required_columns: &[
                "is_part_of_collection",
                "collection_name",
                "release_date",
                "sales",
            ],
            produced_columns: &["nb_movie_collection", "rolling_sales_collection"],
        },
        StageInfo {
            name: "actor_aggregator",
            description: "Trailing mean of each billed actor's prior sales, plus mean and max",
            required_columns: &["actor_1", "actor_2", "actor_3", "release_date", "sales"],
            produced_columns: &[
                "actor_1_sales",
                "actor_2_sales",
                "actor_3_sales",
                "mean_sales_actor",
                "max_sales_actor",
            ],
        },
        StageInfo {
            name: "popularity_aggregator",
            description: "Mean log-damped popularity over the top billed cast",
            required_columns: &["cast_popularity"],
            produced_columns: &["mean_3_popularity", "mean_5_popularity"],
        },
    ]
}
