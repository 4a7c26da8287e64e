//! Actor track-record features.
//!
//! Replaces the three billed-actor name columns with the trailing mean of
//! each actor's prior opening sales, then derives the per-movie mean and
//! max over the three slots. Each actor's timeline is walked in release-date
//! order with same-day releases batched, so no movie ever sees sales from
//! its own release day or later.

use std::collections::HashMap;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::columns::{date_rows, f64_rows, string_rows};
use crate::stage::{FeatureError, FeatureStage, ensure_columns};
use crate::window::TrailingWindow;

const SLOTS: [&str; 3] = ["actor_1", "actor_2", "actor_3"];

/// Configuration for the actor aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorAggregatorConfig {
    /// Trailing window over each actor's prior non-missing sales.
    pub window: usize,
}

impl Default for ActorAggregatorConfig {
    fn default() -> Self {
        Self { window: 5 }
    }
}

/// ActorAggregator appends `actor_{1,2,3}_sales`, `mean_sales_actor` and
/// `max_sales_actor`, dropping the name columns.
#[derive(Debug, Default)]
pub struct ActorAggregator {
    config: ActorAggregatorConfig,
}

impl ActorAggregator {
    /// Create an aggregator with the given configuration.
    pub const fn new(config: ActorAggregatorConfig) -> Self {
        Self { config }
    }
}

impl FeatureStage for ActorAggregator {
    fn name(&self) -> &str {
        "actor_aggregator"
    }

    fn required_columns(&self) -> &[&str] {
        &["actor_1", "actor_2", "actor_3", "release_date", "sales"]
    }

    fn apply(&self, data: &DataFrame) -> Result<DataFrame, FeatureError> {
        ensure_columns(self, data)?;

        let slots: Vec<Vec<Option<String>>> = SLOTS
            .iter()
            .map(|name| string_rows(data, name))
            .collect::<Result<_, _>>()?;
        let dates = date_rows(data, "release_date")?;
        let sales = f64_rows(data, "sales")?;
        let n = dates.len();

        // Each actor's appearances, deduplicated per row so an actor billed
        // twice on one movie contributes a single observation.
        let mut appearances: HashMap<&str, Vec<usize>> = HashMap::new();
        for i in 0..n {
            for (s, slot) in slots.iter().enumerate() {
                if let Some(name) = slot[i].as_deref() {
                    if slots[..s].iter().any(|prev| prev[i].as_deref() == Some(name)) {
                        continue;
                    }
                    appearances.entry(name).or_default().push(i);
                }
            }
        }

        // Trailing mean per actor per row, 0 for an actor with no history.
        let mut history: HashMap<(&str, usize), f64> = HashMap::new();
        for (name, rows) in &appearances {
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
                    history.insert((*name, i), window.mean().unwrap_or(0.0));
                }
                for &i in &ordered[batch_start..batch_end] {
                    if let Some(value) = sales[i] {
                        window.push(value);
                    }
                }
                batch_start = batch_end;
            }
        }

        let mut slot_sales: Vec<Vec<f64>> = vec![Vec::with_capacity(n); SLOTS.len()];
        let mut mean_sales = Vec::with_capacity(n);
        let mut max_sales = Vec::with_capacity(n);
        for i in 0..n {
            let mut sum = 0.0;
            let mut max = 0.0f64;
            for (s, slot) in slots.iter().enumerate() {
                // Empty slots count as zero toward both aggregates.
                let value = match slot[i].as_deref() {
                    Some(name) => history.get(&(name, i)).copied().unwrap_or(0.0),
                    None => 0.0,
                };
                slot_sales[s].push(value);
                sum += value;
                max = max.max(value);
            }
            mean_sales.push(sum / SLOTS.len() as f64);
            max_sales.push(max);
        }

        let mut out = data.clone();
        for (s, values) in slot_sales.into_iter().enumerate() {
            let name = format!("{}_sales", SLOTS[s]);
            out.with_column(Column::from(Series::new(name.into(), values)))?;
            out = out.drop(SLOTS[s])?;
        }
        out.with_column(Column::from(Series::new("mean_sales_actor".into(), mean_sales)))?;
        out.with_column(Column::from(Series::new("max_sales_actor".into(), max_sales)))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn frame(rows: Vec<(&str, Option<&str>, Option<&str>, Option<f64>)>) -> DataFrame {
        let days: Vec<i32> = rows
            .iter()
            .map(|(date, ..)| {
                let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
                (parsed - NaiveDate::default()).num_days() as i32
            })
            .collect();
        let actor = |pick: for<'a> fn(
            &'a (&'a str, Option<&'a str>, Option<&'a str>, Option<f64>),
        ) -> Option<&'a str>| {
            rows.iter()
                .map(|row| pick(row).map(str::to_string))
                .collect::<Vec<_>>()
        };
        let sales: Vec<Option<f64>> = rows.iter().map(|r| r.3).collect();
        let df = DataFrame::new(vec![
            Series::new("days".into(), days).into(),
            Series::new("actor_1".into(), actor(|r| r.1)).into(),
            Series::new("actor_2".into(), actor(|r| r.2)).into(),
            Series::new("actor_3".into(), vec![None::<String>; rows.len()]).into(),
            Series::new("sales".into(), sales).into(),
        ])
        .unwrap();
        df.lazy()
            .with_column(col("days").cast(DataType::Date).alias("release_date"))
            .collect()
            .unwrap()
    }

    fn aggregate(rows: Vec<(&str, Option<&str>, Option<&str>, Option<f64>)>) -> DataFrame {
        ActorAggregator::default().apply(&frame(rows)).unwrap()
    }

    #[test]
    fn test_window_keeps_last_five_prior_movies() {
        let lead = Some("Lead");
        let out = aggregate(vec![
            ("2010-01-01", lead, None, Some(10.0)),
            ("2011-01-01", lead, None, Some(20.0)),
            ("2012-01-01", lead, None, Some(30.0)),
            ("2013-01-01", lead, None, Some(40.0)),
            ("2014-01-01", lead, None, Some(50.0)),
            ("2015-01-01", lead, None, Some(999.0)),
        ]);
        let values = f64_rows(&out, "actor_1_sales").unwrap();
        assert_eq!(values[0], Some(0.0));
        assert_relative_eq!(values[5].unwrap(), 30.0);
    }

    #[test]
    fn test_unseen_actor_scores_zero() {
        let out = aggregate(vec![("2020-01-01", Some("Newcomer"), None, Some(75.0))]);
        assert_eq!(f64_rows(&out, "actor_1_sales").unwrap()[0], Some(0.0));
        assert_eq!(f64_rows(&out, "mean_sales_actor").unwrap()[0], Some(0.0));
        assert_eq!(f64_rows(&out, "max_sales_actor").unwrap()[0], Some(0.0));
    }

    #[test]
    fn test_mean_counts_empty_slots_as_zero() {
        let out = aggregate(vec![
            ("2010-01-01", Some("A"), Some("B"), Some(60.0)),
            ("2012-01-01", Some("A"), Some("B"), Some(10.0)),
        ]);
        let a1 = f64_rows(&out, "actor_1_sales").unwrap()[1].unwrap();
        let a2 = f64_rows(&out, "actor_2_sales").unwrap()[1].unwrap();
        assert_relative_eq!(a1, 60.0);
        assert_relative_eq!(a2, 60.0);
        // Third slot is empty, divisor stays 3.
        let mean = f64_rows(&out, "mean_sales_actor").unwrap()[1].unwrap();
        assert_relative_eq!(mean, 40.0);
        let max = f64_rows(&out, "max_sales_actor").unwrap()[1].unwrap();
        assert_relative_eq!(max, 60.0);
    }

    #[test]
    fn test_same_day_releases_do_not_leak() {
        let out = aggregate(vec![
            ("2014-06-01", Some("Star"), None, Some(100.0)),
            ("2014-06-01", Some("Star"), None, Some(300.0)),
            ("2015-06-01", Some("Star"), None, Some(999.0)),
        ]);
        let values = f64_rows(&out, "actor_1_sales").unwrap();
        assert_eq!(values[0], Some(0.0));
        assert_eq!(values[1], Some(0.0));
        assert_relative_eq!(values[2].unwrap(), 200.0);
    }

    #[test]
    fn test_name_columns_replaced() {
        let out = aggregate(vec![("2020-01-01", Some("A"), None, Some(1.0))]);
        for name in SLOTS {
            assert!(out.column(name).is_err());
        }
        for name in ["actor_1_sales", "actor_2_sales", "actor_3_sales"] {
            assert!(out.column(name).is_ok());
        }
    }

    #[test]
    fn test_missing_sales_do_not_enter_history() {
        let out = aggregate(vec![
            ("2010-01-01", Some("A"), None, None),
            ("2012-01-01", Some("A"), None, Some(80.0)),
            ("2014-01-01", Some("A"), None, Some(40.0)),
        ]);
        let values = f64_rows(&out, "actor_1_sales").unwrap();
        assert_eq!(values[1], Some(0.0));
        assert_relative_eq!(values[2].unwrap(), 80.0);
    }
}
