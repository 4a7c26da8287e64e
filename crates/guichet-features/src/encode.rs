//! One-hot and multi-label indicator encoders.
//!
//! Both encoders work against a fixed vocabulary: the produced columns are
//! the same for a training batch and for a single inference row, whatever
//! categories the batch happens to contain. Indicator columns are `f64`
//! zeros and ones so the output frame stays homogeneous.

use polars::prelude::*;

use crate::columns::{list_string_rows, string_rows};
use crate::stage::{FeatureError, FeatureStage, ensure_columns};

/// One-hot encode a single-valued string column.
///
/// Produces one `{prefix}{value}` column per vocabulary entry, optionally
/// dropping a pinned baseline column, and removes the source column.
#[derive(Debug)]
pub struct SingleLabelEncoder {
    name: String,
    column: &'static str,
    prefix: &'static str,
    vocabulary: &'static [&'static str],
    baseline: Option<&'static str>,
    required: [&'static str; 1],
}

impl SingleLabelEncoder {
    /// Encoder keeping every vocabulary entry.
    pub fn new(
        column: &'static str,
        prefix: &'static str,
        vocabulary: &'static [&'static str],
    ) -> Self {
        Self {
            name: format!("one_hot_{column}"),
            column,
            prefix,
            vocabulary,
            baseline: None,
            required: [column],
        }
    }

    /// Encoder dropping one pinned vocabulary entry as the regression baseline.
    pub fn with_baseline(
        column: &'static str,
        prefix: &'static str,
        vocabulary: &'static [&'static str],
        baseline: &'static str,
    ) -> Self {
        let mut encoder = Self::new(column, prefix, vocabulary);
        encoder.baseline = Some(baseline);
        encoder
    }

    /// Column names this encoder appends, in vocabulary order.
    pub fn produced_columns(&self) -> Vec<String> {
        self.vocabulary
            .iter()
            .filter(|value| Some(**value) != self.baseline)
            .map(|value| format!("{}{}", self.prefix, value))
            .collect()
    }
}

impl FeatureStage for SingleLabelEncoder {
    fn name(&self) -> &str {
        &self.name
    }

    fn required_columns(&self) -> &[&str] {
        &self.required
    }

    fn apply(&self, data: &DataFrame) -> Result<DataFrame, FeatureError> {
        ensure_columns(self, data)?;
        let rows = string_rows(data, self.column)?;

        let mut out = data.clone();
        for value in self.vocabulary {
            if Some(*value) == self.baseline {
                continue;
            }
            let indicator: Vec<f64> = rows
                .iter()
                .map(|row| f64::from(row.as_deref() == Some(*value)))
                .collect();
            let name = format!("{}{}", self.prefix, value);
            out.with_column(Column::from(Series::new(name.into(), indicator)))?;
        }
        Ok(out.drop(self.column)?)
    }
}

/// Encode a list-of-strings column into membership indicators.
///
/// One `{prefix}{value}` column per vocabulary entry; no baseline is dropped
/// because set membership is not mutually exclusive. The source column is
/// removed.
#[derive(Debug)]
pub struct MultiLabelEncoder {
    name: String,
    column: &'static str,
    prefix: &'static str,
    vocabulary: &'static [&'static str],
    required: [&'static str; 1],
}

impl MultiLabelEncoder {
    /// Encoder over the given list column and fixed vocabulary.
    pub fn new(
        column: &'static str,
        prefix: &'static str,
        vocabulary: &'static [&'static str],
    ) -> Self {
        Self {
            name: format!("multi_label_{column}"),
            column,
            prefix,
            vocabulary,
            required: [column],
        }
    }

    /// Column names this encoder appends, in vocabulary order.
    pub fn produced_columns(&self) -> Vec<String> {
        self.vocabulary
            .iter()
            .map(|value| format!("{}{}", self.prefix, value))
            .collect()
    }
}

impl FeatureStage for MultiLabelEncoder {
    fn name(&self) -> &str {
        &self.name
    }

    fn required_columns(&self) -> &[&str] {
        &self.required
    }

    fn apply(&self, data: &DataFrame) -> Result<DataFrame, FeatureError> {
        ensure_columns(self, data)?;
        let rows = list_string_rows(data, self.column)?;

        let mut out = data.clone();
        for value in self.vocabulary {
            let indicator: Vec<f64> = rows
                .iter()
                .map(|row| f64::from(row.iter().any(|v| v == value)))
                .collect();
            let name = format!("{}{}", self.prefix, value);
            out.with_column(Column::from(Series::new(name.into(), indicator)))?;
        }
        Ok(out.drop(self.column)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{f64_rows, string_list_column};
    use crate::vocab::{GENRE_VOCABULARY, LANGUAGE_VOCABULARY, ORIGINAL_LANGUAGE_BASELINE};

    fn string_frame(values: Vec<&str>) -> DataFrame {
        DataFrame::new(vec![Column::from(Series::new(
            "original_language".into(),
            values.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        ))])
        .unwrap()
    }

    #[test]
    fn test_one_hot_sets_exactly_one_indicator() {
        let df = string_frame(vec!["en", "fr", "other"]);
        let encoder =
            SingleLabelEncoder::new("original_language", "original_lang_", &LANGUAGE_VOCABULARY);
        let out = encoder.apply(&df).unwrap();

        assert!(out.column("original_language").is_err());
        for (i, code) in ["en", "fr", "other"].iter().enumerate() {
            let hits: f64 = LANGUAGE_VOCABULARY
                .iter()
                .map(|v| {
                    f64_rows(&out, &format!("original_lang_{v}")).unwrap()[i].unwrap()
                })
                .sum();
            assert_eq!(hits, 1.0, "row {i} ({code}) should have one hot column");
        }
    }

    #[test]
    fn test_baseline_column_is_dropped() {
        let df = string_frame(vec!["de", "en"]);
        let encoder = SingleLabelEncoder::with_baseline(
            "original_language",
            "original_lang_",
            &LANGUAGE_VOCABULARY,
            ORIGINAL_LANGUAGE_BASELINE,
        );
        let out = encoder.apply(&df).unwrap();

        assert!(out.column("original_lang_de").is_err());
        // A baseline row encodes as all zeros.
        for v in ["en", "es", "fr", "it", "ja", "other"] {
            let column = f64_rows(&out, &format!("original_lang_{v}")).unwrap();
            assert_eq!(column[0], Some(0.0));
        }
        assert_eq!(f64_rows(&out, "original_lang_en").unwrap()[1], Some(1.0));
        assert_eq!(encoder.produced_columns().len(), LANGUAGE_VOCABULARY.len() - 1);
    }

    #[test]
    fn test_multi_label_membership() {
        let rows = vec![
            vec!["Action".to_string(), "Drame".to_string()],
            vec![],
        ];
        let df = DataFrame::new(vec![string_list_column("genres", rows)]).unwrap();
        let encoder = MultiLabelEncoder::new("genres", "", &GENRE_VOCABULARY);
        let out = encoder.apply(&df).unwrap();

        assert!(out.column("genres").is_err());
        assert_eq!(f64_rows(&out, "Action").unwrap()[0], Some(1.0));
        assert_eq!(f64_rows(&out, "Drame").unwrap()[0], Some(1.0));
        assert_eq!(f64_rows(&out, "Romance").unwrap()[0], Some(0.0));
        for genre in GENRE_VOCABULARY {
            assert_eq!(f64_rows(&out, genre).unwrap()[1], Some(0.0));
        }
    }

    #[test]
    fn test_vocabulary_is_closed_under_unknown_values() {
        let rows = vec![vec!["Documentaire".to_string()]];
        let df = DataFrame::new(vec![string_list_column("genres", rows)]).unwrap();
        let out = MultiLabelEncoder::new("genres", "", &GENRE_VOCABULARY)
            .apply(&df)
            .unwrap();
        // Unreduced values outside the vocabulary simply produce no hit.
        assert_eq!(out.width(), GENRE_VOCABULARY.len());
    }
}
