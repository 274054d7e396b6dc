pub mod aggregator;
pub mod etl;
pub mod loader;
pub mod pipeline;
pub mod reporter;

pub use crate::domain::model::{Dataset, Listing, MarketReport, RunArtifacts};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
