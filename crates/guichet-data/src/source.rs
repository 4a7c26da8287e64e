//! Collaborator seams for raw record acquisition.
//!
//! Crawling and the metadata API live outside this repository; what we
//! consume is the JSON they dump. [`MetadataSource`] is the lookup seam the
//! serving layer uses (`fetch_movie_record`), and [`JsonFileSource`] backs
//! it with a local dump file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{DataError, Result};
use crate::types::{RawBoxOfficeRow, RawMovieCard};

/// How a movie is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieQuery {
    /// By upstream id.
    Id(i64),
    /// By exact title match.
    Title(String),
}

/// Supplies one raw metadata card per movie.
pub trait MetadataSource {
    /// Fetch the raw card for a movie, or `None` when the source does not
    /// know it.
    fn fetch_movie_record(&self, query: &MovieQuery) -> Result<Option<RawMovieCard>>;

    /// Fetch the raw card, failing with [`DataError::NotFound`] when the
    /// source does not know the movie.
    fn require_movie_record(&self, query: &MovieQuery) -> Result<RawMovieCard> {
        self.fetch_movie_record(query)?.ok_or_else(|| {
            DataError::NotFound(match query {
                MovieQuery::Id(id) => id.to_string(),
                MovieQuery::Title(title) => title.clone(),
            })
        })
    }
}

/// Load a metadata dump (JSON array of movie cards).
pub fn load_movie_cards(path: impl AsRef<Path>) -> Result<Vec<RawMovieCard>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Load a crawled box-office chart (JSON array of weekly rows).
pub fn load_box_office_rows(path: impl AsRef<Path>) -> Result<Vec<RawBoxOfficeRow>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// A [`MetadataSource`] backed by a local JSON dump.
#[derive(Debug)]
pub struct JsonFileSource {
    cards: Vec<RawMovieCard>,
}

impl JsonFileSource {
    /// Open a dump file and index it in memory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            cards: load_movie_cards(path)?,
        })
    }

    /// Build a source from already-loaded cards.
    pub fn from_cards(cards: Vec<RawMovieCard>) -> Self {
        Self { cards }
    }

    /// Number of cards in the dump.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the dump is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl MetadataSource for JsonFileSource {
    fn fetch_movie_record(&self, query: &MovieQuery) -> Result<Option<RawMovieCard>> {
        let found = self.cards.iter().find(|card| match query {
            MovieQuery::Id(id) => card.id == *id,
            MovieQuery::Title(title) => card.title == *title,
        });
        Ok(found.cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<RawMovieCard> {
        serde_json::from_str(
            r#"[
                {"id": 1, "title": "Un", "original_language": "fr", "release_date": "2019-01-02"},
                {"id": 2, "title": "Deux", "original_language": "en", "release_date": "2019-05-22"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_fetch_by_id() {
        let source = JsonFileSource::from_cards(cards());
        let card = source.fetch_movie_record(&MovieQuery::Id(2)).unwrap();
        assert_eq!(card.unwrap().title, "Deux");
    }

    #[test]
    fn test_fetch_by_title() {
        let source = JsonFileSource::from_cards(cards());
        let card = source
            .fetch_movie_record(&MovieQuery::Title("Un".to_string()))
            .unwrap();
        assert_eq!(card.unwrap().id, 1);
    }

    #[test]
    fn test_fetch_unknown_is_none() {
        let source = JsonFileSource::from_cards(cards());
        let card = source.fetch_movie_record(&MovieQuery::Id(99)).unwrap();
        assert!(card.is_none());
    }

    #[test]
    fn test_require_unknown_is_not_found() {
        let source = JsonFileSource::from_cards(cards());
        let result = source.require_movie_record(&MovieQuery::Id(99));
        assert!(matches!(result, Err(crate::error::DataError::NotFound(_))));
    }
}
