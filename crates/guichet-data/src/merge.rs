//! Merging box-office rows with metadata cards.
//!
//! The two upstream sources share the movie id. The merge is an inner join:
//! a box-office row without a matching card is dropped with a warning left
//! to the caller, and a card without sales only enters through
//! [`movie_record_from_card`] (single-movie inference).

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::error::{DataError, Result};
use crate::types::{CastMember, MovieRecord, RawBoxOfficeRow, RawMovieCard};

fn parse_release_date(id: i64, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DataError::InvalidRecord {
        id,
        reason: format!("unparseable release_date '{raw}'"),
    })
}

fn cast_by_billing(card: &RawMovieCard) -> Vec<CastMember> {
    let mut cast: Vec<_> = card.cast.iter().collect();
    cast.sort_by_key(|m| m.order);
    cast.into_iter()
        .map(|m| CastMember {
            name: m.name.clone(),
            popularity: m.tmdb_popularity,
        })
        .collect()
}

fn build_record(
    card: &RawMovieCard,
    release_date: NaiveDate,
    year: i32,
    sales: Option<f64>,
) -> MovieRecord {
    MovieRecord {
        id: card.id,
        title: card.title.clone(),
        year,
        release_date,
        sales,
        budget: card.budget,
        runtime: card.runtime,
        original_language: card.original_language.clone(),
        languages: card.languages.iter().map(|l| l.iso_code.clone()).collect(),
        production_countries: card
            .production_countries
            .iter()
            .map(|c| c.iso_code.clone())
            .collect(),
        genres: card.genres.iter().map(|g| g.name.clone()).collect(),
        is_part_of_collection: card.belongs_to_collection.is_some(),
        collection_name: card.belongs_to_collection.as_ref().map(|c| c.name.clone()),
        cast: cast_by_billing(card),
    }
}

/// Join the crawled box-office rows with the metadata cards on movie id.
///
/// Returns one [`MovieRecord`] per box-office row that has a matching card,
/// in box-office row order. Duplicate ids on either side are rejected.
pub fn merge_sales_and_metadata(
    sales: &[RawBoxOfficeRow],
    cards: &[RawMovieCard],
) -> Result<Vec<MovieRecord>> {
    let mut by_id: HashMap<i64, &RawMovieCard> = HashMap::with_capacity(cards.len());
    for card in cards {
        if by_id.insert(card.id, card).is_some() {
            return Err(DataError::DuplicateId { id: card.id });
        }
    }

    let mut records = Vec::with_capacity(sales.len());
    let mut seen: HashMap<i64, ()> = HashMap::with_capacity(sales.len());
    for row in sales {
        if seen.insert(row.id, ()).is_some() {
            return Err(DataError::DuplicateId { id: row.id });
        }
        let Some(card) = by_id.get(&row.id) else {
            continue;
        };
        let release_date = parse_release_date(row.id, &row.release_date)?;
        records.push(build_record(card, release_date, row.year, row.first_week_sales));
    }
    Ok(records)
}

/// Build a single record from a metadata card alone (inference path).
///
/// Sales are unknown by construction; the year is derived from the card's
/// release date.
pub fn movie_record_from_card(card: &RawMovieCard) -> Result<MovieRecord> {
    let release_date = parse_release_date(card.id, &card.release_date)?;
    Ok(build_record(card, release_date, release_date.year(), None))
}
