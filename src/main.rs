//! Quote collection CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::context::AppContext;
use cli::{Cli, Commands};
use quotes_config::load_config;
use quotes_monitor::setup_logging;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Reports its own errors, so it runs before the config is required
    if let Commands::ValidateConfig = cli.command {
        return cli::commands::validate::run(&cli.config).await;
    }

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    // Setup logging
    let log_level = match cli.log_level {
        Some(level) => level.as_str().to_string(),
        None => config.logging.level.clone(),
    };
    let json_logs = cli.json_logs || config.logging.format == "json";
    let log_file = config.logging.file.as_deref().map(Path::new);
    let _log_guard = setup_logging(&log_level, json_logs, log_file);

    let ctx = AppContext::build(config)?;

    // Execute command
    match cli.command {
        Commands::Show(args) => cli::commands::show::run(args, &ctx).await,
        Commands::Add(args) => cli::commands::add::run(args, &ctx).await,
        Commands::Sync => cli::commands::sync::run(&ctx).await,
        Commands::Watch(args) => cli::commands::watch::run(args, &ctx).await,
        Commands::Categories => cli::commands::categories::run(&ctx).await,
        Commands::Export(args) => cli::commands::export::run(args, &ctx).await,
        Commands::Import(args) => cli::commands::import::run(args, &ctx).await,
        Commands::ValidateConfig => Ok(()),
    }
}
