pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::AnalysisEngine, pipeline::MarketPipeline};
pub use domain::model::{Dataset, Listing, MarketReport, RunArtifacts};
pub use utils::error::{EtlError, Result};
