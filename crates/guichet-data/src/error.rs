//! Error types for ingestion and record handling.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading, merging or validating movie records.
#[derive(Debug, Error)]
pub enum DataError {
    /// A record is structurally unusable (missing release date, empty genre
    /// set, negative sales, ...). Never silently defaulted.
    #[error("invalid record {id}: {reason}")]
    InvalidRecord {
        /// Movie id of the offending record.
        id: i64,
        /// What made the record invalid.
        reason: String,
    },

    /// The same movie id appeared more than once in a batch.
    #[error("duplicate movie id {id} in batch")]
    DuplicateId {
        /// The duplicated movie id.
        id: i64,
    },

    /// No metadata card matched the requested movie.
    #[error("no metadata found for movie {0}")]
    NotFound(String),

    /// Polars error while building the record frame.
    #[error("polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// JSON deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
