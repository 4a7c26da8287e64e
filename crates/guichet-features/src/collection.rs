//! Collection (saga) history features.
//!
//! Demotes collections too small to carry a signal, counts surviving
//! members, and computes a trailing mean of earlier members' opening sales.
//! The trailing mean only ever sees strictly earlier release dates:
//! observations are fed in date batches, so two members released the same
//! day never see each other's sales.

use std::collections::HashMap;

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::columns::{date_rows, f64_rows, string_rows};
use crate::stage::{FeatureError, FeatureStage, ensure_columns};
use crate::window::TrailingWindow;

/// Configuration for the collection aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionAggregatorConfig {
    /// Trailing window over earlier members' sales.
    pub window: usize,
    /// Collections below this member count are demoted to stand-alone movies.
    pub min_members: usize,
}

impl Default for CollectionAggregatorConfig {
    fn default() -> Self {
        Self {
            window: 10,
            min_members: 2,
        }
    }
}

/// CollectionAggregator appends `nb_movie_collection` and
/// `rolling_sales_collection`.
#[derive(Debug, Default)]
pub struct CollectionAggregator {
    config: CollectionAggregatorConfig,
}

impl CollectionAggregator {
    /// Create an aggregator with the given configuration.
    pub const fn new(config: CollectionAggregatorConfig) -> Self {
        Self { config }
    }
}

impl FeatureStage for CollectionAggregator {
    fn name(&self) -> &str {
        "collection_aggregator"
    }

    fn required_columns(&self) -> &[&str] {
        &[
            "is_part_of_collection",
            "collection_name",
            "release_date",
            "sales",
        ]
    }

    fn apply(&self, data: &DataFrame) -> Result<DataFrame, FeatureError> {
        ensure_columns(self, data)?;

        let flags = f64_rows(data, "is_part_of_collection")?;
        let names = string_rows(data, "collection_name")?;
        let dates = date_rows(data, "release_date")?;
        let sales = f64_rows(data, "sales")?;
        let n = flags.len();

        // Member counts over the rows that actually claim a collection.
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for i in 0..n {
            if flags[i] == Some(1.0) {
                if let Some(name) = names[i].as_deref() {
                    *counts.entry(name).or_insert(0) += 1;
                }
            }
        }

        // Demote collections below the member threshold.
        let mut out_flags = Vec::with_capacity(n);
        let mut out_names: Vec<Option<String>> = Vec::with_capacity(n);
        let mut nb_members = Vec::with_capacity(n);
        for i in 0..n {
            let count = match (flags[i], names[i].as_deref()) {
                (Some(1.0), Some(name)) => counts.get(name).copied().unwrap_or(0),
                _ => 0,
            };
            if count >= self.config.min_members {
                out_flags.push(1.0);
                out_names.push(names[i].clone());
                nb_members.push(count as f64);
            } else {
                if count == 1 {
                    debug!(collection = ?names[i], "demoting single-member collection");
                }
                out_flags.push(0.0);
                out_names.push(None);
                nb_members.push(0.0);
            }
        }

        // Row indices per surviving collection, sorted by release date.
        let mut members: HashMap<&str, Vec<usize>> = HashMap::new();
        for i in 0..n {
            if let Some(name) = out_names[i].as_deref() {
                members.entry(name).or_default().push(i);
            }
        }

        let mut rolling: Vec<Option<f64>> = vec![Some(0.0); n];
        for rows in members.values() {
            let mut ordered = rows.clone();
            ordered.sort_by_key(|&i| dates[i]);

            let mut window = TrailingWindow::new(self.config.window);
            let mut batch_start = 0;
            while batch_start < ordered.len() {
                let batch_date = dates[ordered[batch_start]];
                let batch_end = ordered[batch_start..]
                    .iter()
                    .take_while(|&&i| dates[i] == batch_date)
                    .count()
                    + batch_start;

                for &i in &ordered[batch_start..batch_end] {
                    rolling[i] = window.mean();
                }
                for &i in &ordered[batch_start..batch_end] {
                    if let Some(value) = sales[i] {
                        window.push(value);
                    }
                }
                batch_start = batch_end;
            }
        }

        let mut out = data.clone();
        out.with_column(Column::from(Series::new(
            "is_part_of_collection".into(),
            out_flags,
        )))?;
        out.with_column(Column::from(Series::new("collection_name".into(), out_names)))?;
        out.with_column(Column::from(Series::new(
            "nb_movie_collection".into(),
            nb_members,
        )))?;
        out.with_column(Column::from(Series::new(
            "rolling_sales_collection".into(),
            rolling,
        )))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn frame(rows: Vec<(Option<&str>, &str, Option<f64>)>) -> DataFrame {
        let flags: Vec<f64> = rows
            .iter()
            .map(|(name, _, _)| f64::from(name.is_some()))
            .collect();
        let names: Vec<Option<String>> = rows
            .iter()
            .map(|(name, _, _)| name.map(str::to_string))
            .collect();
        let days: Vec<i32> = rows
            .iter()
            .map(|(_, date, _)| {
                let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
                (parsed - NaiveDate::default()).num_days() as i32
            })
            .collect();
        let sales: Vec<Option<f64>> = rows.iter().map(|(_, _, s)| *s).collect();
        let df = DataFrame::new(vec![
            Series::new("is_part_of_collection".into(), flags).into(),
            Series::new("collection_name".into(), names).into(),
            Series::new("days".into(), days).into(),
            Series::new("sales".into(), sales).into(),
        ])
        .unwrap();
        df.lazy()
            .with_column(col("days").cast(DataType::Date).alias("release_date"))
            .collect()
            .unwrap()
    }

    fn aggregate(rows: Vec<(Option<&str>, &str, Option<f64>)>) -> DataFrame {
        CollectionAggregator::default().apply(&frame(rows)).unwrap()
    }

    #[test]
    fn test_trailing_mean_over_earlier_members() {
        let out = aggregate(vec![
            (Some("Saga"), "2010-01-01", Some(100.0)),
            (Some("Saga"), "2012-01-01", Some(200.0)),
            (Some("Saga"), "2014-01-01", Some(400.0)),
        ]);
        let rolling = f64_rows(&out, "rolling_sales_collection").unwrap();
        assert_eq!(rolling[0], None);
        assert_relative_eq!(rolling[1].unwrap(), 100.0);
        assert_relative_eq!(rolling[2].unwrap(), 150.0);
        let nb = f64_rows(&out, "nb_movie_collection").unwrap();
        assert_eq!(nb, vec![Some(3.0); 3]);
    }

    #[test]
    fn test_single_member_collection_demoted() {
        let out = aggregate(vec![
            (Some("Solo"), "2015-06-01", Some(50.0)),
            (None, "2015-06-02", Some(60.0)),
        ]);
        let flags = f64_rows(&out, "is_part_of_collection").unwrap();
        assert_eq!(flags, vec![Some(0.0), Some(0.0)]);
        let names = string_rows(&out, "collection_name").unwrap();
        assert_eq!(names, vec![None, None]);
        let nb = f64_rows(&out, "nb_movie_collection").unwrap();
        assert_eq!(nb, vec![Some(0.0), Some(0.0)]);
    }

    #[test]
    fn test_same_day_members_do_not_see_each_other() {
        let out = aggregate(vec![
            (Some("Saga"), "2010-01-01", Some(100.0)),
            (Some("Saga"), "2012-05-05", Some(200.0)),
            (Some("Saga"), "2012-05-05", Some(300.0)),
        ]);
        let rolling = f64_rows(&out, "rolling_sales_collection").unwrap();
        assert_relative_eq!(rolling[1].unwrap(), 100.0);
        assert_relative_eq!(rolling[2].unwrap(), 100.0);
    }

    #[test]
    fn test_missing_sales_skipped_in_window() {
        let out = aggregate(vec![
            (Some("Saga"), "2010-01-01", None),
            (Some("Saga"), "2012-01-01", Some(200.0)),
            (Some("Saga"), "2014-01-01", Some(400.0)),
        ]);
        let rolling = f64_rows(&out, "rolling_sales_collection").unwrap();
        assert_eq!(rolling[0], None);
        assert_eq!(rolling[1], None);
        assert_relative_eq!(rolling[2].unwrap(), 200.0);
    }

    #[test]
    fn test_non_collection_rows_get_zero() {
        let out = aggregate(vec![(None, "2015-06-01", Some(10.0))]);
        let rolling = f64_rows(&out, "rolling_sales_collection").unwrap();
        assert_eq!(rolling[0], Some(0.0));
    }

    #[test]
    fn test_input_row_order_preserved() {
        // Out-of-order input: latest release listed first.
        let out = aggregate(vec![
            (Some("Saga"), "2014-01-01", Some(400.0)),
            (Some("Saga"), "2010-01-01", Some(100.0)),
            (Some("Saga"), "2012-01-01", Some(200.0)),
        ]);
        let rolling = f64_rows(&out, "rolling_sales_collection").unwrap();
        assert_relative_eq!(rolling[0].unwrap(), 150.0);
        assert_eq!(rolling[1], None);
        assert_relative_eq!(rolling[2].unwrap(), 100.0);
    }
}
