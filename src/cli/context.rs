//! Wiring shared by the commands.

use anyhow::{Context, Result};
use quotes_config::AppConfig;
use quotes_remote::{HttpRemoteConfig, HttpRemoteSource};
use quotes_store::{FileSlot, LastViewed, QuoteStore, SharedStore};
use quotes_sync::{SyncConfig, SyncEngine};
use std::sync::Arc;

pub struct AppContext {
    pub config: AppConfig,
    pub engine: Arc<SyncEngine>,
    pub last_viewed: LastViewed,
}

impl AppContext {
    pub fn build(config: AppConfig) -> Result<Self> {
        let slot = FileSlot::new(config.storage.quotes_path());
        let store = QuoteStore::open(Box::new(slot)).shared();

        let remote = HttpRemoteSource::new(
            HttpRemoteConfig::new(&config.remote.endpoint)
                .with_timeout(config.remote.timeout())
                .with_max_items(config.remote.max_items)
                .with_origin_category(&config.remote.origin_category),
        )
        .context("Failed to create HTTP client")?;

        let engine = SyncEngine::new(
            store,
            Arc::new(remote),
            SyncConfig {
                remote_timeout: config.remote.timeout(),
            },
        );

        let last_viewed =
            LastViewed::new(Box::new(FileSlot::new(config.storage.last_viewed_path())));

        Ok(Self {
            config,
            engine: Arc::new(engine),
            last_viewed,
        })
    }

    pub fn store(&self) -> &SharedStore {
        self.engine.store()
    }
}
