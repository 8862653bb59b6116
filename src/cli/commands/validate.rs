//! Validate configuration command.

use anyhow::Result;
use quotes_config::{load_config, to_toml};
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Quotes file: {}", config.storage.quotes_path().display());
            println!("Remote endpoint: {}", config.remote.endpoint);
            println!("Remote timeout: {}ms", config.remote.timeout_ms);
            println!("Sync interval: {}s", config.sync.interval_secs);
            println!();
            println!("Effective configuration:");
            println!("{}", to_toml(&config)?);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
