use clap::Parser;
use shopbop_normalizer::app::run_pipeline;
use shopbop_normalizer::utils::logger;
use shopbop_normalizer::{CliConfig, PipelineKind};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting Shopbop clothing cleanup");

    match cli.resolve(PipelineKind::Apparel).and_then(|s| run_pipeline(&s)) {
        Ok(summary) => {
            println!(
                "✅ Cleaned {} products → '{}'",
                summary.records_written,
                summary.output_path.display()
            );
        }
        Err(e) => {
            tracing::error!("❌ Clothing cleanup failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
