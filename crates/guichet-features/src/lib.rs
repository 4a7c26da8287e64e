#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/guichet-labs/guichet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod actors;
pub mod calendar;
pub mod collection;
pub mod encode;
pub mod popularity;
pub mod reduce;
pub mod registry;
pub mod stage;
pub mod vocab;

mod columns;
mod window;

pub use actors::{ActorAggregator, ActorAggregatorConfig};
pub use calendar::{CalendarEnricher, HolidayCalendar, Zone};
pub use collection::{CollectionAggregator, CollectionAggregatorConfig};
pub use encode::{MultiLabelEncoder, SingleLabelEncoder};
pub use popularity::{PopularityAggregator, PopularityAggregatorConfig};
pub use reduce::{CategoricalReducer, CategoricalReducerConfig};
pub use registry::{StageInfo, pipeline_stages};
pub use stage::{FeatureError, FeatureStage};
