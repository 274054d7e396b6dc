use crate::domain::model::{Dataset, MarketReport, RunArtifacts};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// Lists regular files with the given extension in `dir`, non-recursive,
    /// sorted by file name so discovery order is deterministic.
    fn list_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>>;
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// The three pipeline stages. Strictly sequential; each stage consumes the
/// previous stage's output and never runs twice in one pass.
pub trait Pipeline {
    fn load(&self) -> Result<Dataset>;
    fn aggregate(&self, dataset: Dataset) -> Result<(Dataset, MarketReport)>;
    fn render(&self, dataset: &Dataset, report: &MarketReport) -> Result<RunArtifacts>;
}
