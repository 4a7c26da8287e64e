//! Building the batch `DataFrame` from typed records.
//!
//! The frame is the contract with the feature stages: one row per record,
//! multi-label fields as `List(String)` columns, the release date as a
//! `Date` column, and the top-three billing slots plus the cast popularity
//! list extracted from `cast`. A `row_index` column pins the original batch
//! order so stages that sort internally can always restore it.

use polars::prelude::*;

use crate::error::Result;
use crate::types::MovieRecord;

fn date_to_days(date: chrono::NaiveDate) -> i32 {
    // Days since the Unix epoch, the physical representation of a polars Date.
    (date - chrono::NaiveDate::default()).num_days() as i32
}

fn string_list_column(name: &str, rows: impl Iterator<Item = Vec<String>>) -> Column {
    let inner: Vec<Series> = rows.map(|values| Series::new("".into(), values)).collect();
    Series::new(name.into(), inner).into()
}

/// Build the batch frame the feature stages operate on.
///
/// Column order: `row_index`, `id`, `title`, `year`, `sales`, `budget`,
/// `runtime`, `original_language`, `languages`, `production_countries`,
/// `genres`, `is_part_of_collection` (0/1), `collection_name`, `actor_1`,
/// `actor_2`, `actor_3`, `cast_popularity`, `release_date`.
pub fn records_to_frame(records: &[MovieRecord]) -> Result<DataFrame> {
    let row_index: Vec<u32> = (0..records.len() as u32).collect();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    let titles: Vec<String> = records.iter().map(|r| r.title.clone()).collect();
    let years: Vec<i32> = records.iter().map(|r| r.year).collect();
    let release_days: Vec<i32> = records.iter().map(|r| date_to_days(r.release_date)).collect();
    let sales: Vec<Option<f64>> = records.iter().map(|r| r.sales).collect();
    let budgets: Vec<f64> = records.iter().map(|r| r.budget).collect();
    let runtimes: Vec<f64> = records.iter().map(|r| r.runtime).collect();
    let original_languages: Vec<String> =
        records.iter().map(|r| r.original_language.clone()).collect();
    let is_part_of_collection: Vec<f64> = records
        .iter()
        .map(|r| if r.is_part_of_collection { 1.0 } else { 0.0 })
        .collect();
    let collection_names: Vec<Option<String>> =
        records.iter().map(|r| r.collection_name.clone()).collect();

    let actor_slot = |slot: usize| -> Vec<Option<String>> {
        records
            .iter()
            .map(|r| r.cast.get(slot).map(|m| m.name.clone()))
            .collect()
    };
    let cast_popularity: Vec<Series> = records
        .iter()
        .map(|r| {
            let values: Vec<f64> = r.cast.iter().map(|m| m.popularity).collect();
            Series::new("".into(), values)
        })
        .collect();

    let df = DataFrame::new(vec![
        Series::new("row_index".into(), row_index).into(),
        Series::new("id".into(), ids).into(),
        Series::new("title".into(), titles).into(),
        Series::new("year".into(), years).into(),
        Series::new("release_days".into(), release_days).into(),
        Series::new("sales".into(), sales).into(),
        Series::new("budget".into(), budgets).into(),
        Series::new("runtime".into(), runtimes).into(),
        Series::new("original_language".into(), original_languages).into(),
        string_list_column("languages", records.iter().map(|r| r.languages.clone())),
        string_list_column(
            "production_countries",
            records.iter().map(|r| r.production_countries.clone()),
        ),
        string_list_column("genres", records.iter().map(|r| r.genres.clone())),
        Series::new("is_part_of_collection".into(), is_part_of_collection).into(),
        Series::new("collection_name".into(), collection_names).into(),
        Series::new("actor_1".into(), actor_slot(0)).into(),
        Series::new("actor_2".into(), actor_slot(1)).into(),
        Series::new("actor_3".into(), actor_slot(2)).into(),
        Series::new("cast_popularity".into(), cast_popularity).into(),
    ])?;

    let df = df
        .lazy()
        .with_column(col("release_days").cast(DataType::Date).alias("release_date"))
        .collect()?
        .drop("release_days")?;

    Ok(df)
}
