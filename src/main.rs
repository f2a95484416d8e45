use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tendencia::commands;
use tendencia::config::Config;

#[derive(Parser)]
#[command(
    name = "tendencia",
    version,
    about = "Keyword-interest trend analyzer for Google Trends CSV exports",
    long_about = None
)]
struct Cli {
    /// Path to the input CSV file
    #[arg(short, long)]
    file: PathBuf,

    /// Comma-separated keywords to compare and plot (e.g. Python,Java)
    #[arg(short, long)]
    compare: Option<String>,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, default_value = "text")]
    log_format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    setup_tracing(&cli.log_format, cli.verbose)?;

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate()?;

    tracing::info!(file = %cli.file.display(), "tendencia starting");

    commands::analyze::run(&cli.file, cli.compare.as_deref(), &config)?;

    tracing::info!("tendencia completed successfully");
    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("tendencia=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("tendencia=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
