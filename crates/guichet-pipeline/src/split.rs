//! Dataset cleaning and chronological splitting.
//!
//! The split is by release date, never random: the model must be evaluated
//! on movies released after everything it trained on.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::error::Result;

/// Pivot dates for the chronological split. Both are half-open boundaries:
/// a movie released exactly on a pivot date lands in the later set.
#[derive(Debug, Clone, Copy)]
pub struct SplitDates {
    /// First date of the validation window.
    pub validation_start: NaiveDate,
    /// First date of the test window.
    pub test_start: NaiveDate,
}

/// One split member: a frame plus accessors for the modelling target.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// The rows of this split, in release-date order.
    pub frame: DataFrame,
}

impl Dataset {
    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.frame.height()
    }

    /// Split into a feature frame and the sales target.
    ///
    /// The returned frame drops the target and bookkeeping columns; rows
    /// with a missing target were removed by [`clean_frame`] already.
    pub fn features_and_target(&self) -> Result<(DataFrame, Vec<f64>)> {
        let sales = self
            .frame
            .column("sales")?
            .as_materialized_series()
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(0.0))
            .collect();
        let mut features = self.frame.clone();
        for name in ["sales", "id", "release_date"] {
            if features.column(name).is_ok() {
                features = features.drop(name)?;
            }
        }
        Ok((features, sales))
    }
}

/// The three chronological splits.
#[derive(Debug, Clone)]
pub struct DatasetSplit {
    /// Movies released before the validation window.
    pub train: Dataset,
    /// Movies released in `[validation_start, test_start)`.
    pub validation: Dataset,
    /// Movies released on or after `test_start`.
    pub test: Dataset,
}

fn date_literal(date: NaiveDate) -> Expr {
    let days = (date - NaiveDate::default()).num_days() as i32;
    lit(days).cast(DataType::Date)
}

/// Drop rows without a sales target, optionally drop 2020 releases, and
/// sort by release date.
///
/// 2020 is excluded because cinema closures made its opening weeks
/// unrepresentative of anything the model should learn.
pub fn clean_frame(frame: &DataFrame, drop_year_2020: bool) -> Result<DataFrame> {
    let mut lazy = frame
        .clone()
        .lazy()
        .filter(col("sales").is_not_null());
    if drop_year_2020 {
        lazy = lazy.filter(col("release_date").dt().year().neq(lit(2020)));
    }
    Ok(lazy
        .sort(["release_date"], SortMultipleOptions::default())
        .collect()?)
}

/// Split a cleaned frame into train / validation / test by release date.
pub fn split_by_date(frame: &DataFrame, dates: SplitDates) -> Result<DatasetSplit> {
    let release = col("release_date");
    let train = frame
        .clone()
        .lazy()
        .filter(release.clone().lt(date_literal(dates.validation_start)))
        .collect()?;
    let validation = frame
        .clone()
        .lazy()
        .filter(
            release
                .clone()
                .gt_eq(date_literal(dates.validation_start))
                .and(release.clone().lt(date_literal(dates.test_start))),
        )
        .collect()?;
    let test = frame
        .clone()
        .lazy()
        .filter(release.gt_eq(date_literal(dates.test_start)))
        .collect()?;
    Ok(DatasetSplit {
        train: Dataset { frame: train },
        validation: Dataset { frame: validation },
        test: Dataset { frame: test },
    })
}
