//! The stage seam shared by every feature transform.

use polars::prelude::*;
use thiserror::Error;

/// Errors that can occur inside a feature stage.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// The input frame lacks a column the stage needs.
    #[error("stage '{stage}' is missing required column '{column}'")]
    MissingColumn {
        /// Stage that raised the error.
        stage: String,
        /// The absent column.
        column: String,
    },

    /// Polars error during the transform.
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// A pure transform over the batch frame.
///
/// Stages never mutate their input; `apply` returns a new frame carrying
/// the input columns plus (or minus) the stage's own. Row count and the
/// `row_index` order are preserved by every implementation.
pub trait FeatureStage {
    /// Stage name, used in errors and the registry.
    fn name(&self) -> &str;

    /// Columns the input frame must carry.
    fn required_columns(&self) -> &[&str];

    /// Run the transform.
    fn apply(&self, data: &DataFrame) -> Result<DataFrame, FeatureError>;
}

/// Check the stage's required columns up front.
pub(crate) fn ensure_columns(stage: &dyn FeatureStage, df: &DataFrame) -> Result<(), FeatureError> {
    for column in stage.required_columns() {
        if df.column(column).is_err() {
            return Err(FeatureError::MissingColumn {
                stage: stage.name().to_string(),
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}
