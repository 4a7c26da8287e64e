//! The feature pipeline orchestrator.
//!
//! Runs the feature stages in their canonical order over a validated batch
//! and reindexes the result to the versioned schema. Row count and order
//! always match the input batch.

use guichet_data::{MovieRecord, records_to_frame, validate_batch};
use guichet_features::{
    ActorAggregator, ActorAggregatorConfig, CalendarEnricher, CollectionAggregator,
    CollectionAggregatorConfig, FeatureStage, MultiLabelEncoder, PopularityAggregator,
    PopularityAggregatorConfig, SingleLabelEncoder,
};
use guichet_features::reduce::{CategoricalReducer, CategoricalReducerConfig};
use guichet_features::vocab::{
    COUNTRY_VOCABULARY, GENRE_VOCABULARY, LANGUAGE_VOCABULARY, ORIGINAL_LANGUAGE_BASELINE,
};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PipelineError, Result};
use crate::matrix::FeatureMatrix;
use crate::schema::FEATURE_SCHEMA_V1;

/// Encoding mode knobs.
///
/// With both statistics unset the pipeline is in training mode and computes
/// them from the batch; supplying them reproduces a training run's fills at
/// inference time, down to a single-row batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Fill value for zero-or-missing budgets; computed from the batch when unset.
    pub budget_median: Option<f64>,
    /// Fill value for zero-or-missing runtimes; computed from the batch when unset.
    pub runtime_mean: Option<f64>,
}

/// The batch feature pipeline.
#[derive(Debug, Clone, Default)]
pub struct FeaturePipeline {
    collection: CollectionAggregatorConfig,
    actors: ActorAggregatorConfig,
}

fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn usable(value: f64) -> bool {
    value != 0.0 && value.is_finite()
}

impl FeaturePipeline {
    /// Pipeline with the default stage configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a batch of validated records into the canonical feature matrix.
    pub fn encode_batch(
        &self,
        records: &[MovieRecord],
        options: &EncodeOptions,
    ) -> Result<FeatureMatrix> {
        if records.is_empty() {
            return Err(PipelineError::EmptyBatch);
        }
        validate_batch(records)?;

        let training = options.budget_median.is_none() && options.runtime_mean.is_none();
        if training && records.iter().all(|r| r.sales.is_none()) {
            return Err(PipelineError::SchemaMismatch {
                column: "sales".to_string(),
            });
        }

        let budget_median = options.budget_median.unwrap_or_else(|| {
            median(records.iter().map(|r| r.budget).filter(|v| usable(*v)).collect())
        });
        let runtime_mean = options.runtime_mean.unwrap_or_else(|| {
            let runtimes: Vec<f64> =
                records.iter().map(|r| r.runtime).filter(|v| usable(*v)).collect();
            mean(&runtimes)
        });
        info!(
            rows = records.len(),
            training, budget_median, runtime_mean, "encoding batch"
        );

        let mut frame = records_to_frame(records)?;
        for stage in self.stages(budget_median, runtime_mean) {
            debug!(stage = stage.name(), "running stage");
            frame = stage.apply(&frame)?;
        }

        let matrix = Self::reindex(&frame)?;
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        FeatureMatrix::new(ids, matrix)
    }

    fn stages(&self, budget_median: f64, runtime_mean: f64) -> Vec<Box<dyn FeatureStage>> {
        vec![
            Box::new(CategoricalReducer::new(CategoricalReducerConfig {
                budget_median,
                runtime_mean,
            })),
            Box::new(SingleLabelEncoder::with_baseline(
                "original_language",
                "original_lang_",
                &LANGUAGE_VOCABULARY,
                ORIGINAL_LANGUAGE_BASELINE,
            )),
            Box::new(MultiLabelEncoder::new(
                "languages",
                "available_lang_",
                &LANGUAGE_VOCABULARY,
            )),
            Box::new(MultiLabelEncoder::new(
                "production_countries",
                "prod_",
                &COUNTRY_VOCABULARY,
            )),
            Box::new(MultiLabelEncoder::new("genres", "", &GENRE_VOCABULARY)),
            Box::new(CalendarEnricher::new()),
            Box::new(CollectionAggregator::new(self.collection.clone())),
            Box::new(ActorAggregator::new(self.actors.clone())),
            Box::new(PopularityAggregator::new(PopularityAggregatorConfig { top_n: 3 })),
            Box::new(PopularityAggregator::new(PopularityAggregatorConfig { top_n: 5 })),
        ]
    }

    /// Select the canonical columns, in order, casting to f64 and filling
    /// remaining nulls with zero. Columns the schema lists but no stage
    /// produced come back as all-zero.
    fn reindex(frame: &DataFrame) -> Result<DataFrame> {
        let selection: Vec<Expr> = FEATURE_SCHEMA_V1
            .iter()
            .map(|name| {
                if frame.column(name).is_ok() {
                    col(*name).cast(DataType::Float64).fill_null(lit(0.0))
                } else {
                    lit(0.0).alias(*name)
                }
            })
            .collect();
        Ok(frame.clone().lazy().select(selection).collect()?)
    }
}
