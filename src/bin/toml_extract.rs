use clap::Parser;
use email_extractor::config::cli::input_exists;
use email_extractor::core::{report, ConfigProvider};
use email_extractor::utils::{logger, validation::Validate};
use email_extractor::{EmailExtractor, EmailPipeline, EtlEngine, EtlError, LocalStorage, TomlConfig};
use std::path::Path;

#[derive(Parser)]
#[command(name = "toml-extract")]
#[command(about = "Email extractor driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "email-extractor.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be processed without writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let verbose = args.verbose || config.log_level() == Some("debug");
    logger::init_cli_logger(verbose);

    tracing::info!("🚀 Starting TOML-based email extractor");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&config);
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    let extractor = match EmailExtractor::new() {
        Ok(extractor) => extractor,
        Err(e) => exit_with(&e),
    };
    let pipeline = EmailPipeline::new(LocalStorage::default(), config, extractor);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(outcome) => {
            report::write_summary(&outcome.report, &mut std::io::stdout().lock())?;
            println!("📁 Output saved to: {}", outcome.output_path);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Input: {}", config.input_path());
    println!("  Output: {}", config.output_path());
    println!("  Format: {}", config.report_format());
    println!("  Monitoring: {}", config.monitoring_enabled());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");

    if input_exists(Path::new(""), config.input_path()) {
        println!("  ✅ Input file found: {}", config.input_path());
    } else {
        println!("  ❌ Input file not found: {}", config.input_path());
    }

    if Path::new(config.output_path()).exists() {
        println!("  ⚠️ Output file exists and would be overwritten: {}", config.output_path());
    } else {
        println!("  Output file would be created: {}", config.output_path());
    }

    println!();
    println!("✅ Dry run analysis complete.");
}

fn exit_with(e: &EtlError) -> ! {
    tracing::error!(
        "❌ Email extraction failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code())
}
