use cardgrid::config::toml_config::TomlConfig;
use cardgrid::core::ConfigProvider;
use cardgrid::domain::services::COLUMN_COUNT;
use cardgrid::utils::error::ErrorSeverity;
use cardgrid::utils::{logger, validation::Validate};
use cardgrid::{BlockPipeline, LocalStorage, RenderEngine};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml_render")]
#[command(about = "Block renderer driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "cardgrid.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be rendered without writing output
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based block renderer");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No output will be written");
        perform_dry_run(&config).await?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    let storage = LocalStorage::new(".".to_string());
    let pipeline = BlockPipeline::new(storage, config);
    let engine = RenderEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Block decorated successfully!");
            println!("📁 Grid markup saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Decoration failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    tracing::info!(
        "📋 Pipeline: {} v{}",
        config.pipeline.name,
        config.pipeline.version
    );
    tracing::info!("📄 Source: {} ({})", config.input_path(), config.source.r#type);
    tracing::info!("🎯 Block selector: {}", config.block_selector());
    tracing::info!(
        "📁 Output: {}/{}",
        config.output_path(),
        config.output_file()
    );
    if args.dry_run {
        tracing::info!("🔍 Mode: dry run");
    }
}

async fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let document = tokio::fs::read_to_string(config.input_path()).await?;
    let cards = cardgrid::parser::extract_cards(&document, config.block_selector())?;

    tracing::info!(
        "🔍 Would decorate {} rows into a {}-column grid",
        cards.len(),
        COLUMN_COUNT
    );
    for (i, card) in cards.iter().enumerate() {
        tracing::info!(
            "  • card {} → column {}: '{}' ({} links)",
            i,
            i % COLUMN_COUNT,
            card.title,
            card.links.len()
        );
    }

    Ok(())
}
