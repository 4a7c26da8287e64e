//! Cast-popularity features.
//!
//! Popularity scores come with the movie card itself, so unlike the sales
//! histories they carry no leakage concern. Scores are log-damped before
//! averaging: a member contributes `ln(p)` when that is positive, else 0.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::columns::list_f64_rows;
use crate::stage::{FeatureError, FeatureStage, ensure_columns};

/// Configuration for the popularity aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularityAggregatorConfig {
    /// Number of top-billed cast members averaged.
    pub top_n: usize,
}

impl Default for PopularityAggregatorConfig {
    fn default() -> Self {
        Self { top_n: 3 }
    }
}

/// PopularityAggregator appends `mean_{top_n}_popularity`.
#[derive(Debug, Default)]
pub struct PopularityAggregator {
    config: PopularityAggregatorConfig,
}

impl PopularityAggregator {
    /// Create an aggregator over the top `top_n` billed members.
    pub const fn new(config: PopularityAggregatorConfig) -> Self {
        Self { config }
    }

    /// Name of the column this stage appends.
    pub fn output_column(&self) -> String {
        format!("mean_{}_popularity", self.config.top_n)
    }
}

fn damped(popularity: f64) -> f64 {
    let log = popularity.ln();
    if log > 0.0 { log } else { 0.0 }
}

impl FeatureStage for PopularityAggregator {
    fn name(&self) -> &str {
        "popularity_aggregator"
    }

    fn required_columns(&self) -> &[&str] {
        &["cast_popularity"]
    }

    fn apply(&self, data: &DataFrame) -> Result<DataFrame, FeatureError> {
        ensure_columns(self, data)?;
        let casts = list_f64_rows(data, "cast_popularity")?;

        let means: Vec<f64> = casts
            .iter()
            .map(|scores| {
                let top = &scores[..scores.len().min(self.config.top_n)];
                if top.is_empty() {
                    return 0.0;
                }
                top.iter().copied().map(damped).sum::<f64>() / top.len() as f64
            })
            .collect();

        let mut out = data.clone();
        out.with_column(Column::from(Series::new(self.output_column().into(), means)))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::columns::f64_rows;

    fn frame(casts: Vec<Vec<f64>>) -> DataFrame {
        let inner: Vec<Series> = casts
            .into_iter()
            .map(|scores| Series::new("".into(), scores))
            .collect();
        DataFrame::new(vec![Column::from(Series::new("cast_popularity".into(), inner))]).unwrap()
    }

    fn top(n: usize) -> PopularityAggregator {
        PopularityAggregator::new(PopularityAggregatorConfig { top_n: n })
    }

    #[test]
    fn test_mean_of_log_popularity() {
        let e = std::f64::consts::E;
        let out = top(3).apply(&frame(vec![vec![e, e * e, e * e * e, 999.0]])).unwrap();
        let value = f64_rows(&out, "mean_3_popularity").unwrap()[0].unwrap();
        assert_relative_eq!(value, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_low_popularity_contributes_zero() {
        // ln(p) <= 0 for p <= 1, so these members are floored, not negative.
        let out = top(3).apply(&frame(vec![vec![0.5, 1.0, 0.1]])).unwrap();
        let value = f64_rows(&out, "mean_3_popularity").unwrap()[0].unwrap();
        assert_relative_eq!(value, 0.0);
    }

    #[test]
    fn test_short_cast_averages_available_members() {
        let e = std::f64::consts::E;
        let out = top(5).apply(&frame(vec![vec![e, e]])).unwrap();
        let value = f64_rows(&out, "mean_5_popularity").unwrap()[0].unwrap();
        assert_relative_eq!(value, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_cast_scores_zero() {
        let out = top(3).apply(&frame(vec![vec![]])).unwrap();
        assert_eq!(f64_rows(&out, "mean_3_popularity").unwrap()[0], Some(0.0));
    }
}
