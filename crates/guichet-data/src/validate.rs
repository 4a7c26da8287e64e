//! Ingestion-boundary validation.
//!
//! Structural problems are rejected here, before any feature stage runs, so
//! the stages can assume a closed, typed shape. Category values outside the
//! pinned vocabularies are NOT errors; reduction maps them to the "other"
//! bucket downstream.

use std::collections::HashSet;

use crate::error::{DataError, Result};
use crate::types::MovieRecord;

/// Validate a single record.
///
/// Rejects: empty genre set, negative sales, and an inconsistent
/// collection flag/name pair.
pub fn validate_record(record: &MovieRecord) -> Result<()> {
    if record.genres.is_empty() {
        return Err(DataError::InvalidRecord {
            id: record.id,
            reason: "empty genre set".to_string(),
        });
    }
    if let Some(sales) = record.sales
        && sales < 0.0
    {
        return Err(DataError::InvalidRecord {
            id: record.id,
            reason: format!("negative sales {sales}"),
        });
    }
    if record.is_part_of_collection != record.collection_name.is_some() {
        return Err(DataError::InvalidRecord {
            id: record.id,
            reason: "collection flag inconsistent with collection name".to_string(),
        });
    }
    Ok(())
}

/// Validate a whole batch: per-record checks plus id uniqueness.
///
/// Fails fast on the first offending record; the skip-and-log policy for
/// batches with bad rows belongs to the caller, not here.
pub fn validate_batch(records: &[MovieRecord]) -> Result<()> {
    let mut seen: HashSet<i64> = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(DataError::DuplicateId { id: record.id });
        }
        validate_record(record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: i64) -> MovieRecord {
        MovieRecord {
            id,
            title: "Film".to_string(),
            year: 2018,
            release_date: NaiveDate::from_ymd_opt(2018, 3, 14).unwrap(),
            sales: Some(100.0),
            budget: 1.0,
            runtime: 90.0,
            original_language: "fr".to_string(),
            languages: vec!["fr".to_string()],
            production_countries: vec!["FR".to_string()],
            genres: vec!["Drame".to_string()],
            is_part_of_collection: false,
            collection_name: None,
            cast: vec![],
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(validate_record(&record(1)).is_ok());
    }

    #[test]
    fn test_empty_genres_rejected() {
        let mut r = record(1);
        r.genres.clear();
        assert!(matches!(
            validate_record(&r),
            Err(DataError::InvalidRecord { id: 1, .. })
        ));
    }

    #[test]
    fn test_negative_sales_rejected() {
        let mut r = record(1);
        r.sales = Some(-5.0);
        assert!(validate_record(&r).is_err());
    }

    #[test]
    fn test_collection_flag_must_match_name() {
        let mut r = record(1);
        r.is_part_of_collection = true;
        assert!(validate_record(&r).is_err());
    }

    #[test]
    fn test_batch_rejects_duplicate_ids() {
        let batch = vec![record(1), record(1)];
        assert!(matches!(
            validate_batch(&batch),
            Err(DataError::DuplicateId { id: 1 })
        ));
    }

    #[test]
    fn test_batch_accepts_distinct_ids() {
        let batch = vec![record(1), record(2)];
        assert!(validate_batch(&batch).is_ok());
    }
}
