use clap::Parser;
use estate_etl::utils::{logger, validation::Validate};
use estate_etl::{AnalysisEngine, CliConfig, LocalStorage, MarketPipeline};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting estate-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = MarketPipeline::new(LocalStorage::new(), config);
    let engine = AnalysisEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(artifacts) => {
            tracing::info!("✅ Market analysis completed");
            println!("✅ Market analysis completed!");
            println!("📁 Report: {}", artifacts.report_path.display());
            println!(
                "📈 Charts: {}, {}",
                artifacts.scatter_path.display(),
                artifacts.histogram_path.display()
            );
        }
        Err(e) => {
            // sole error boundary; each failure kind has its own exit code
            tracing::error!("❌ Pipeline failed: {} (exit code {})", e, e.exit_code());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
