//! The encoded feature matrix.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::error::{PipelineError, Result};
use crate::schema::FEATURE_SCHEMA_V1;

/// An encoded batch: one row per input record, columns exactly the
/// canonical schema, indexed by movie id in input order.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    ids: Vec<i64>,
    features: DataFrame,
}

impl FeatureMatrix {
    /// Build a matrix from an id index and a canonical feature frame.
    ///
    /// The frame must already carry exactly the canonical columns and as
    /// many rows as there are ids.
    pub fn new(ids: Vec<i64>, features: DataFrame) -> Result<Self> {
        if features.height() != ids.len() {
            return Err(PipelineError::LengthMismatch {
                expected: ids.len(),
                actual: features.height(),
            });
        }
        for column in FEATURE_SCHEMA_V1 {
            if features.column(column).is_err() {
                return Err(PipelineError::SchemaMismatch {
                    column: column.to_string(),
                });
            }
        }
        Ok(Self { ids, features })
    }

    /// Movie ids, in input batch order.
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.ids.len()
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Values of one canonical column.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let ca = self.features.column(name)?.as_materialized_series().f64()?;
        Ok(ca.into_iter().map(|v| v.unwrap_or(0.0)).collect())
    }

    /// The feature frame without the id index.
    pub const fn features(&self) -> &DataFrame {
        &self.features
    }

    /// The full frame: `id` followed by the canonical columns.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let mut frame = self.features.clone();
        frame.insert_column(0, Series::new("id".into(), self.ids.clone()))?;
        Ok(frame)
    }

    /// Write the matrix (with its id index) as CSV.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut frame = self.to_frame()?;
        let file = File::create(path).map_err(guichet_data::DataError::from)?;
        CsvWriter::new(file).finish(&mut frame)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_frame(rows: usize) -> DataFrame {
        let columns: Vec<Column> = FEATURE_SCHEMA_V1
            .iter()
            .map(|name| Column::from(Series::new((*name).into(), vec![1.0f64; rows])))
            .collect();
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn test_round_trip_accessors() {
        let matrix = FeatureMatrix::new(vec![7, 8], canonical_frame(2)).unwrap();
        assert_eq!(matrix.ids(), &[7, 8]);
        assert_eq!(matrix.num_rows(), 2);
        assert_eq!(matrix.column("budget").unwrap(), vec![1.0, 1.0]);
        let frame = matrix.to_frame().unwrap();
        assert_eq!(frame.get_column_names()[0], "id");
        assert_eq!(frame.width(), FEATURE_SCHEMA_V1.len() + 1);
    }

    #[test]
    fn test_row_count_mismatch_rejected() {
        let result = FeatureMatrix::new(vec![1], canonical_frame(2));
        assert!(matches!(result, Err(PipelineError::LengthMismatch { .. })));
    }

    #[test]
    fn test_missing_canonical_column_rejected() {
        let frame = canonical_frame(1).drop("budget").unwrap();
        let result = FeatureMatrix::new(vec![1], frame);
        assert!(matches!(
            result,
            Err(PipelineError::SchemaMismatch { column }) if column == "budget"
        ));
    }
}
