#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/guichet-labs/guichet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod matrix;
pub mod metrics;
pub mod model;
pub mod pipeline;
pub mod schema;
pub mod split;
pub mod target;

pub use error::{PipelineError, Result};
pub use matrix::FeatureMatrix;
pub use metrics::{EvaluationMetrics, evaluate_predictions};
pub use model::{SalesRegressor, predict_sales};
pub use pipeline::{EncodeOptions, FeaturePipeline};
pub use schema::{FEATURE_SCHEMA_V1, FEATURE_SCHEMA_VERSION};
pub use split::{Dataset, DatasetSplit, SplitDates, clean_frame, split_by_date};
pub use target::{inverse_transform_target, transform_target};
