//! Categorical reduction and numeric back-filling.
//!
//! Collapses high-cardinality categorical values into the pinned
//! vocabularies, back-fills empty production-country sets from the original
//! language, and replaces zero-or-missing budget/runtime with the batch (or
//! supplied) statistics. Reduced sets are de-duplicated and sorted so the
//! output never depends on input iteration order.

use std::collections::BTreeSet;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::columns::{f64_rows, list_string_rows, string_list_column, string_rows};
use crate::stage::{FeatureError, FeatureStage, ensure_columns};
use crate::vocab::{
    COUNTRIES_TO_KEEP, LANGUAGES_TO_KEEP, OTHER_COUNTRY, OTHER_LANGUAGE, reduce_genre,
};

/// Configuration for the categorical reducer.
///
/// The fill statistics are resolved by the orchestrator: computed from the
/// batch in training mode, supplied from training time in inference mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalReducerConfig {
    /// Replacement for zero-or-missing budgets.
    pub budget_median: f64,
    /// Replacement for zero-or-missing runtimes.
    pub runtime_mean: f64,
}

/// CategoricalReducer collapses raw categorical fields into the pinned vocabularies.
#[derive(Debug)]
pub struct CategoricalReducer {
    config: CategoricalReducerConfig,
}

impl CategoricalReducer {
    /// Create a reducer with resolved fill statistics.
    pub const fn new(config: CategoricalReducerConfig) -> Self {
        Self { config }
    }
}

fn fill_zero_or_missing(values: &[Option<f64>], replacement: f64) -> Vec<f64> {
    values
        .iter()
        .map(|v| match v {
            Some(x) if *x != 0.0 && x.is_finite() => *x,
            _ => replacement,
        })
        .collect()
}

fn reduce_set(values: &[String], keep: &[&str], sentinel: &str) -> Vec<String> {
    let reduced: BTreeSet<String> = values
        .iter()
        .map(|v| {
            if keep.contains(&v.as_str()) {
                v.clone()
            } else {
                sentinel.to_string()
            }
        })
        .collect();
    reduced.into_iter().collect()
}

fn reduce_genres(values: &[String]) -> Vec<String> {
    let reduced: BTreeSet<&'static str> = values.iter().map(|v| reduce_genre(v)).collect();
    reduced.into_iter().map(str::to_string).collect()
}

/// Back-fill an empty production-country set from the original language.
///
/// Policy order matters: French-language movies are assumed French
/// productions, English-language ones American, everything else falls into
/// the sentinel bucket.
fn backfill_countries(countries: Vec<String>, original_language: &str) -> Vec<String> {
    if !countries.is_empty() {
        return countries;
    }
    match original_language {
        "fr" => vec!["FR".to_string()],
        "en" => vec!["US".to_string()],
        _ => vec![OTHER_COUNTRY.to_string()],
    }
}

impl FeatureStage for CategoricalReducer {
    fn name(&self) -> &str {
        "categorical_reducer"
    }

    fn required_columns(&self) -> &[&str] {
        &[
            "budget",
            "runtime",
            "original_language",
            "languages",
            "production_countries",
            "genres",
        ]
    }

    fn apply(&self, data: &DataFrame) -> Result<DataFrame, FeatureError> {
        ensure_columns(self, data)?;

        let budget = fill_zero_or_missing(&f64_rows(data, "budget")?, self.config.budget_median);
        let runtime = fill_zero_or_missing(&f64_rows(data, "runtime")?, self.config.runtime_mean);

        let raw_language = string_rows(data, "original_language")?;
        let original_language: Vec<String> = raw_language
            .iter()
            .map(|v| {
                let code = v.as_deref().unwrap_or("");
                if LANGUAGES_TO_KEEP.contains(&code) {
                    code.to_string()
                } else {
                    OTHER_LANGUAGE.to_string()
                }
            })
            .collect();

        let languages: Vec<Vec<String>> = list_string_rows(data, "languages")?
            .into_iter()
            .map(|row| reduce_set(&row, &LANGUAGES_TO_KEEP, OTHER_LANGUAGE))
            .collect();

        let countries: Vec<Vec<String>> = list_string_rows(data, "production_countries")?
            .into_iter()
            .zip(raw_language.iter())
            .map(|(row, lang)| {
                let backfilled = backfill_countries(row, lang.as_deref().unwrap_or(""));
                reduce_set(&backfilled, &COUNTRIES_TO_KEEP, OTHER_COUNTRY)
            })
            .collect();

        let genres: Vec<Vec<String>> = list_string_rows(data, "genres")?
            .into_iter()
            .map(|row| reduce_genres(&row))
            .collect();

        let mut out = data.clone();
        out.with_column(Column::from(Series::new("budget".into(), budget)))?;
        out.with_column(Column::from(Series::new("runtime".into(), runtime)))?;
        out.with_column(Column::from(Series::new(
            "original_language".into(),
            original_language,
        )))?;
        out.with_column(string_list_column("languages", languages))?;
        out.with_column(string_list_column("production_countries", countries))?;
        out.with_column(string_list_column("genres", genres))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::list_string_rows;

    fn reducer() -> CategoricalReducer {
        CategoricalReducer::new(CategoricalReducerConfig {
            budget_median: 500.0,
            runtime_mean: 90.0,
        })
    }

    fn frame(
        budget: Vec<Option<f64>>,
        language: Vec<&str>,
        countries: Vec<Vec<&str>>,
        genres: Vec<Vec<&str>>,
    ) -> DataFrame {
        let n = budget.len();
        let list_col = |name: &str, rows: &[Vec<&str>]| -> Column {
            let inner: Vec<Series> = rows
                .iter()
                .map(|row| {
                    Series::new(
                        "".into(),
                        row.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                    )
                })
                .collect();
            Series::new(name.into(), inner).into()
        };
        DataFrame::new(vec![
            Series::new("budget".into(), budget).into(),
            Series::new("runtime".into(), vec![Some(0.0); n]).into(),
            Series::new(
                "original_language".into(),
                language.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            )
            .into(),
            list_col("languages", &vec![vec!["fr", "zz"]; n]),
            list_col("production_countries", &countries),
            list_col("genres", &genres),
        ])
        .unwrap()
    }

    #[test]
    fn test_zero_budget_filled_with_median() {
        let df = frame(
            vec![Some(0.0), Some(100.0), None],
            vec!["fr", "fr", "fr"],
            vec![vec!["FR"]; 3],
            vec![vec!["Drame"]; 3],
        );
        let out = reducer().apply(&df).unwrap();
        let budget = f64_rows(&out, "budget").unwrap();
        assert_eq!(budget, vec![Some(500.0), Some(100.0), Some(500.0)]);
        let runtime = f64_rows(&out, "runtime").unwrap();
        assert_eq!(runtime[0], Some(90.0));
    }

    #[test]
    fn test_empty_countries_backfilled_by_language() {
        let df = frame(
            vec![Some(1.0); 3],
            vec!["fr", "en", "ko"],
            vec![vec![], vec![], vec![]],
            vec![vec!["Drame"]; 3],
        );
        let out = reducer().apply(&df).unwrap();
        let countries = list_string_rows(&out, "production_countries").unwrap();
        assert_eq!(countries[0], vec!["FR"]);
        assert_eq!(countries[1], vec!["US"]);
        assert_eq!(countries[2], vec![OTHER_COUNTRY]);
    }

    #[test]
    fn test_reduction_is_order_independent() {
        let df = frame(
            vec![Some(1.0); 2],
            vec!["fr", "fr"],
            vec![vec!["US", "ZZ"], vec!["ZZ", "US"]],
            vec![vec!["Thriller", "Crime"], vec!["Crime", "Thriller"]],
        );
        let out = reducer().apply(&df).unwrap();
        let countries = list_string_rows(&out, "production_countries").unwrap();
        assert_eq!(countries[0], countries[1]);
        assert_eq!(countries[0], vec![OTHER_COUNTRY.to_string(), "US".to_string()]);
        let genres = list_string_rows(&out, "genres").unwrap();
        assert_eq!(genres[0], vec!["Action"]);
        assert_eq!(genres[0], genres[1]);
    }

    #[test]
    fn test_unknown_language_reduces_to_other() {
        let df = frame(
            vec![Some(1.0)],
            vec!["ko"],
            vec![vec!["FR"]],
            vec![vec!["Drame"]],
        );
        let out = reducer().apply(&df).unwrap();
        let language = string_rows(&out, "original_language").unwrap();
        assert_eq!(language[0].as_deref(), Some(OTHER_LANGUAGE));
        let languages = list_string_rows(&out, "languages").unwrap();
        assert_eq!(languages[0], vec!["fr", "other"]);
    }

    #[test]
    fn test_missing_required_column_fails() {
        let df = DataFrame::new(vec![
            Column::from(Series::new("budget".into(), vec![1.0f64])),
        ])
        .unwrap();
        let result = reducer().apply(&df);
        assert!(matches!(
            result,
            Err(FeatureError::MissingColumn { .. })
        ));
    }
}
