pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "estate-etl")]
#[command(about = "Batch analyzer for real-estate listing CSV files")]
pub struct CliConfig {
    #[arg(long, default_value = "input", help = "Folder holding the listing CSV files")]
    pub input_path: String,

    #[arg(long, default_value = ".", help = "Folder the charts and report are written to")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory stats per pipeline stage")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
