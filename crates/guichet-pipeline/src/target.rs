//! Log transform of the sales target.
//!
//! Opening-week sales span several orders of magnitude; regressors train on
//! the natural log and predictions come back through the exponential.

/// Forward transform: sales to log-sales.
pub fn transform_target(sales: &[f64]) -> Vec<f64> {
    sales.iter().map(|v| v.ln()).collect()
}

/// Inverse transform: log-sales back to sales.
pub fn inverse_transform_target(log_sales: &[f64]) -> Vec<f64> {
    log_sales.iter().map(|v| v.exp()).collect()
}
