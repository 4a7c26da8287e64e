#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/guichet-labs/guichet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use guichet_data as data;
pub use guichet_features as features;
pub use guichet_pipeline as pipeline;

// Re-export the common entry points
pub use guichet_data::{MovieRecord, merge_sales_and_metadata, validate_batch};
pub use guichet_pipeline::{
    EncodeOptions, FEATURE_SCHEMA_V1, FEATURE_SCHEMA_VERSION, FeatureMatrix, FeaturePipeline,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
