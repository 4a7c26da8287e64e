//! Internal column access helpers shared by the stages.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::stage::FeatureError;

pub(crate) fn f64_rows(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, FeatureError> {
    let ca = df.column(name)?.as_materialized_series().f64()?;
    Ok(ca.into_iter().collect())
}

pub(crate) fn string_rows(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, FeatureError> {
    let ca = df.column(name)?.as_materialized_series().str()?;
    Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
}

pub(crate) fn list_string_rows(
    df: &DataFrame,
    name: &str,
) -> Result<Vec<Vec<String>>, FeatureError> {
    let ca = df.column(name)?.as_materialized_series().list()?;
    let mut rows = Vec::with_capacity(ca.len());
    for i in 0..ca.len() {
        match ca.get_as_series(i) {
            Some(inner) => {
                let values = inner.str()?;
                rows.push(values.into_iter().flatten().map(str::to_string).collect());
            }
            None => rows.push(Vec::new()),
        }
    }
    Ok(rows)
}

pub(crate) fn list_f64_rows(df: &DataFrame, name: &str) -> Result<Vec<Vec<f64>>, FeatureError> {
    let ca = df.column(name)?.as_materialized_series().list()?;
    let mut rows = Vec::with_capacity(ca.len());
    for i in 0..ca.len() {
        match ca.get_as_series(i) {
            Some(inner) => {
                let values = inner.f64()?;
                rows.push(values.into_iter().flatten().collect());
            }
            None => rows.push(Vec::new()),
        }
    }
    Ok(rows)
}

pub(crate) fn date_rows(df: &DataFrame, name: &str) -> Result<Vec<Option<NaiveDate>>, FeatureError> {
    let days = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Int32)?;
    let ca = days.i32()?;
    Ok(ca.into_iter().map(|opt| opt.map(days_to_date)).collect())
}

pub(crate) fn days_to_date(days: i32) -> NaiveDate {
    // Polars Date is days since the Unix epoch.
    NaiveDate::default() + chrono::Duration::days(i64::from(days))
}

pub(crate) fn string_list_column(name: &str, rows: Vec<Vec<String>>) -> Column {
    let inner: Vec<Series> = rows
        .into_iter()
        .map(|values| Series::new("".into(), values))
        .collect();
    Series::new(name.into(), inner).into()
}
