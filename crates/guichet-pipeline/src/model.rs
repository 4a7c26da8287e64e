//! The modelling seam.
//!
//! Training itself lives outside this crate; the pipeline only needs
//! something that scores a feature matrix in log-sales space.

use crate::error::Result;
use crate::matrix::FeatureMatrix;
use crate::target::inverse_transform_target;

/// A fitted regressor over the canonical feature matrix.
///
/// Implementations predict in log-sales space, matching the target
/// transform applied at training time.
pub trait SalesRegressor {
    /// Predict log-sales, one value per matrix row.
    fn predict(&self, matrix: &FeatureMatrix) -> Result<Vec<f64>>;
}

/// Predict opening-week sales, undoing the log target transform.
pub fn predict_sales(model: &dyn SalesRegressor, matrix: &FeatureMatrix) -> Result<Vec<f64>> {
    let log_sales = model.predict(matrix)?;
    Ok(inverse_transform_target(&log_sales))
}
