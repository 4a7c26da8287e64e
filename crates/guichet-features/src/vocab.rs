//! Pinned categorical vocabularies.
//!
//! The encoders never infer a vocabulary from the batch: every category set
//! below is fixed, so training and single-row inference produce identical
//! columns, and the one-hot baseline dropped for the original language is
//! pinned rather than left to iteration order.

/// Sentinel for languages outside the kept list.
pub const OTHER_LANGUAGE: &str = "other";

/// Sentinel for production countries outside the kept list.
pub const OTHER_COUNTRY: &str = "OTHER";

/// Sentinel genre bucket.
pub const OTHER_GENRE: &str = "Other";

/// Language codes kept as-is; everything else reduces to [`OTHER_LANGUAGE`].
pub const LANGUAGES_TO_KEEP: [&str; 6] = ["en", "fr", "es", "it", "ja", "de"];

/// Country codes kept as-is; everything else reduces to [`OTHER_COUNTRY`].
pub const COUNTRIES_TO_KEEP: [&str; 6] = ["FR", "US", "GB", "DE", "BE", "CA"];

/// The one-hot column dropped from the `original_lang_*` group to avoid
/// perfect multicollinearity. Pinned to the alphabetically first kept code.
pub const ORIGINAL_LANGUAGE_BASELINE: &str = "de";

/// Reduce a raw genre name through the many-to-few synonym table.
///
/// Unknown genres fall into the [`OTHER_GENRE`] bucket; this is the designed
/// fallback, never an error.
pub fn reduce_genre(name: &str) -> &'static str {
    match name {
        "Drame" => "Drame",
        "Comédie" => "Comédie",
        "Romance" => "Romance",
        "Action" | "Thriller" | "Aventure" | "Crime" | "Guerre" | "Western" => "Action",
        "Familial" | "Animation" => "Familial",
        "Fantastique" | "Science-Fiction" => "Fantastique",
        "Horreur" => "Horreur",
        _ => OTHER_GENRE,
    }
}

/// Encoded language vocabulary, sorted: kept codes plus the sentinel.
pub const LANGUAGE_VOCABULARY: [&str; 7] = ["de", "en", "es", "fr", "it", "ja", "other"];

/// Encoded country vocabulary, sorted: kept codes plus the sentinel.
pub const COUNTRY_VOCABULARY: [&str; 7] = ["BE", "CA", "DE", "FR", "GB", "OTHER", "US"];

/// Reduced genre vocabulary, sorted.
pub const GENRE_VOCABULARY: [&str; 8] = [
    "Action",
    "Comédie",
    "Drame",
    "Familial",
    "Fantastique",
    "Horreur",
    "Other",
    "Romance",
];
