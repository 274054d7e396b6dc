use crate::core::{aggregator, loader, reporter};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{Dataset, MarketReport, RunArtifacts};
use crate::utils::error::{EtlError, Result};
use std::path::Path;

/// The one concrete pipeline: listings from a local folder in, two charts and
/// a markdown report out.
pub struct MarketPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MarketPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for MarketPipeline<S, C> {
    fn load(&self) -> Result<Dataset> {
        loader::load_dir(&self.storage, Path::new(self.config.input_path()))
    }

    fn aggregate(&self, dataset: Dataset) -> Result<(Dataset, MarketReport)> {
        aggregator::aggregate(dataset)
    }

    fn render(&self, dataset: &Dataset, report: &MarketReport) -> Result<RunArtifacts> {
        let out_dir = Path::new(self.config.output_path());
        let (scatter_path, histogram_path) = reporter::render_charts(dataset, out_dir)?;

        let text = reporter::render_report(report);
        let report_path = out_dir.join(reporter::REPORT_FILE);
        self.storage
            .write_file(&report_path, text.as_bytes())
            .map_err(|e| EtlError::Render {
                artifact: reporter::REPORT_FILE.to_string(),
                message: e.to_string(),
            })?;

        Ok(RunArtifacts {
            scatter_path,
            histogram_path,
            report_path,
        })
    }
}
