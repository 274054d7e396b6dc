use crate::core::Pipeline;
use crate::domain::model::RunArtifacts;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives one load → aggregate → render pass. One engine instance owns one
/// run; concurrent runs need separate instances.
pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::default(),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<RunArtifacts> {
        println!("Loading listings...");
        let dataset = self.pipeline.load()?;
        println!("Loaded {} clean listings", dataset.len());
        self.monitor.log_stats("Load");

        println!("Aggregating market statistics...");
        let (dataset, report) = self.pipeline.aggregate(dataset)?;
        println!("Aggregated {} listings", report.property_count);
        self.monitor.log_stats("Aggregate");

        println!("Rendering charts and report...");
        let artifacts = self.pipeline.render(&dataset, &report)?;
        println!("Report saved to: {}", artifacts.report_path.display());
        self.monitor.log_stats("Render");

        self.monitor.log_final_stats();
        Ok(artifacts)
    }
}
