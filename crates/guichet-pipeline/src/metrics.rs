//! Prediction quality metrics.

use std::fmt;

use crate::error::{PipelineError, Result};

/// Error metrics over a prediction run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationMetrics {
    /// Mean absolute percentage error.
    pub mape: f64,
    /// Root mean squared error.
    pub rmse: f64,
    /// Mean absolute error.
    pub mae: f64,
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mape: {:.4}, rmse: {:.2}, mae: {:.2}",
            self.mape, self.rmse, self.mae
        )
    }
}

/// Compute the metrics over aligned actual/predicted slices.
pub fn evaluate_predictions(actual: &[f64], predicted: &[f64]) -> Result<EvaluationMetrics> {
    if actual.is_empty() {
        return Err(PipelineError::EmptyBatch);
    }
    if actual.len() != predicted.len() {
        return Err(PipelineError::LengthMismatch {
            expected: actual.len(),
            actual: predicted.len(),
        });
    }

    let n = actual.len() as f64;
    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    let mut pct_sum = 0.0;
    for (y, y_hat) in actual.iter().zip(predicted) {
        let err = y - y_hat;
        abs_sum += err.abs();
        sq_sum += err * err;
        if *y != 0.0 {
            pct_sum += (err / y).abs();
        }
    }

    Ok(EvaluationMetrics {
        mape: pct_sum / n,
        rmse: (sq_sum / n).sqrt(),
        mae: abs_sum / n,
    })
}
