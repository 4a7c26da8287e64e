//! Pipeline error types.

use thiserror::Error;

/// Errors raised while orchestrating the feature pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The batch cannot satisfy the canonical schema.
    #[error("schema mismatch: cannot materialize column '{column}'")]
    SchemaMismatch {
        /// Canonical column that could not be produced.
        column: String,
    },

    /// The input batch carried no records.
    #[error("empty batch: at least one record is required")]
    EmptyBatch,

    /// Two inputs that must align row-for-row do not.
    #[error("length mismatch: expected {expected} rows, got {actual}")]
    LengthMismatch {
        /// Rows required.
        expected: usize,
        /// Rows received.
        actual: usize,
    },

    /// Ingestion or validation failure.
    #[error(transparent)]
    Data(#[from] guichet_data::DataError),

    /// Feature stage failure.
    #[error(transparent)]
    Feature(#[from] guichet_features::FeatureError),

    /// Polars error outside any single stage.
    #[error("polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

/// Convenience alias for pipeline results.
pub type Result<T> = std::result::Result<T, PipelineError>;
