use anyhow::Context;
use clap::Parser;
use person_directory::utils::error::ErrorSeverity;
use person_directory::utils::{logger, validation::Validate};
use person_directory::{build_repository, CliConfig, QueryEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting person-directory CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let repository = build_repository(&config).with_context(|| {
        format!(
            "failed to build the person directory (seed file: {})",
            config.seed_file.as_deref().unwrap_or("<built-in>")
        )
    })?;
    let engine = QueryEngine::new(repository);

    match engine.run(&config.query()).await {
        Ok(report) => {
            let rendered = report
                .render(config.format)
                .context("failed to render query report")?;
            println!("{}", rendered);
        }
        Err(e) => {
            tracing::error!(
                "Query failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Hint: {}", e.recovery_suggestion());

            // 依嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
