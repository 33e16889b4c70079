use clap::Parser;
use email_extractor::core::report;
use email_extractor::utils::{logger, validation::Validate};
use email_extractor::{CliConfig, EmailExtractor, EmailPipeline, EtlEngine, EtlError, LocalStorage};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting email-extractor");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let quiet = config.quiet;
    let monitor_enabled = config.monitor;

    // 建立抽取器、存儲和管道
    let extractor = match EmailExtractor::new() {
        Ok(extractor) => extractor,
        Err(e) => exit_with(&e),
    };
    let pipeline = EmailPipeline::new(LocalStorage::default(), config, extractor);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(outcome) => {
            if !quiet {
                let mut stdout = std::io::stdout().lock();
                report::write_summary(&outcome.report, &mut stdout)?;
                writeln!(
                    stdout,
                    "  ✔   Done! Open '{}' to see the full results.",
                    outcome.output_path
                )?;
            }
            tracing::info!("📁 Output saved to: {}", outcome.output_path);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &EtlError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Email extraction failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code())
}
