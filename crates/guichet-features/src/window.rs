//! Trailing, exclusive rolling-mean window.
//!
//! Both history-aware aggregators need the same primitive: the mean of the
//! last `capacity` observations seen *before* the current one. Callers read
//! the mean first, then push the current observation, and feed observations
//! in chronological batches so same-day releases never see each other.

use std::collections::VecDeque;

#[derive(Debug)]
pub(crate) struct TrailingWindow {
    capacity: usize,
    values: VecDeque<f64>,
}

impl TrailingWindow {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            values: VecDeque::with_capacity(capacity),
        }
    }

    /// Mean of the retained prior observations, `None` when there are none.
    pub(crate) fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }

    pub(crate) fn push(&mut self, value: f64) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }
}
