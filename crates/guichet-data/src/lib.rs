#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/guichet-labs/guichet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod frame;
pub mod merge;
pub mod source;
pub mod types;
pub mod validate;

pub use error::{DataError, Result};
pub use frame::records_to_frame;
pub use merge::{merge_sales_and_metadata, movie_record_from_card};
pub use source::{JsonFileSource, MetadataSource, MovieQuery};
pub use types::{CastMember, MovieRecord, RawBoxOfficeRow, RawMovieCard};
pub use validate::{validate_batch, validate_record};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
