use clap::Parser;
use perf_report::utils::{logger, validation::Validate};
use perf_report::{CliConfig, CsvPipeline, LocalStorage, ReportEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting perf-report CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 創建存儲和管道
    let storage = LocalStorage;
    let pipeline = CsvPipeline::new(storage, config);

    // 創建報告引擎並運行
    let engine = ReportEngine::new(pipeline);

    match engine.run() {
        Ok(output) => {
            tracing::info!("✅ Report completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
