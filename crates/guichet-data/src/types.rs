//! Typed movie records and the raw JSON shapes they are built from.
//!
//! The raw types mirror the two files the upstream collaborators produce:
//! the metadata API dump (one card per movie) and the crawled weekly
//! box-office chart. The merged, validated shape the pipeline consumes is
//! [`MovieRecord`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cast member, in billing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    /// Actor name, as billed.
    pub name: String,
    /// Upstream popularity score (strictly positive for known actors).
    pub popularity: f64,
}

/// A fully merged and typed movie record, one per movie.
///
/// `id` is unique within a batch. `release_date` is always present; rows
/// without one are rejected at validation. `sales` is the first-week
/// box-office figure and is `None` for not-yet-released movies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Unique movie identifier (shared by both upstream sources).
    pub id: i64,
    /// Title, in French.
    pub title: String,
    /// Release year.
    pub year: i32,
    /// Theatrical release date.
    pub release_date: NaiveDate,
    /// First-week sales, missing for unreleased movies.
    pub sales: Option<f64>,
    /// Production budget; 0 means unknown upstream.
    pub budget: f64,
    /// Runtime in minutes; 0 means unknown upstream.
    pub runtime: f64,
    /// Single original-language code (ISO 639-1).
    pub original_language: String,
    /// Available audio languages (ISO 639-1), possibly empty.
    pub languages: Vec<String>,
    /// Production countries (ISO 3166-1 alpha-2), possibly empty.
    pub production_countries: Vec<String>,
    /// Genre names; never empty for a valid record.
    pub genres: Vec<String>,
    /// Whether the movie belongs to a recurring franchise.
    pub is_part_of_collection: bool,
    /// Franchise name, present iff `is_part_of_collection`.
    pub collection_name: Option<String>,
    /// Cast ordered by billing position (position 1 first).
    pub cast: Vec<CastMember>,
}

/// Raw franchise reference on a metadata card.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCollection {
    /// Upstream collection id.
    pub id: i64,
    /// Collection name.
    pub name: String,
}

/// Raw named entity (genres).
#[derive(Debug, Clone, Deserialize)]
pub struct RawNamed {
    /// Display name.
    pub name: String,
}

/// Raw ISO-coded entity (languages, production countries).
#[derive(Debug, Clone, Deserialize)]
pub struct RawIsoCode {
    /// ISO code.
    pub iso_code: String,
}

/// Raw cast entry with upstream billing order.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCastMember {
    /// Actor name.
    pub name: String,
    /// Upstream popularity score.
    pub tmdb_popularity: f64,
    /// Billing order, lower is more prominent.
    pub order: i32,
}

/// One movie card as dumped by the metadata API collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMovieCard {
    /// Movie id.
    pub id: i64,
    /// Title, in French.
    pub title: String,
    /// Franchise reference, if any.
    #[serde(default)]
    pub belongs_to_collection: Option<RawCollection>,
    /// Production budget; 0 when unknown.
    #[serde(default)]
    pub budget: f64,
    /// Genre list.
    #[serde(default)]
    pub genres: Vec<RawNamed>,
    /// Original-language code.
    pub original_language: String,
    /// Available languages.
    #[serde(default)]
    pub languages: Vec<RawIsoCode>,
    /// Production countries.
    #[serde(default)]
    pub production_countries: Vec<RawIsoCode>,
    /// Runtime in minutes; 0 or absent when unknown.
    #[serde(default)]
    pub runtime: f64,
    /// Release date as `YYYY-MM-DD`.
    pub release_date: String,
    /// Cast list, unordered in the dump (carries explicit `order`).
    #[serde(default)]
    pub cast: Vec<RawCastMember>,
}

/// One row of the crawled weekly box-office chart.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBoxOfficeRow {
    /// Movie id (join key against the metadata dump).
    pub id: i64,
    /// Title, as charted.
    pub title: String,
    /// Chart year.
    pub year: i32,
    /// First-week sales; missing for upcoming releases.
    #[serde(default)]
    pub first_week_sales: Option<f64>,
    /// Release date as `YYYY-MM-DD`.
    pub release_date: String,
}
