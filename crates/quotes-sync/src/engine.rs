//! Reconciliation engine.

use chrono::{DateTime, Utc};
use quotes_core::error::{QuoteResult, TransportError, TransportErrorKind};
use quotes_core::traits::RemoteSource;
use quotes_core::types::Quote;
use quotes_store::SharedStore;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::merge::reconcile;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Upper bound on every remote call
    pub remote_timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            remote_timeout: Duration::from_secs(5),
        }
    }
}

/// Why a pass failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncErrorKind {
    /// The remote read failed; nothing was merged
    Transport(TransportErrorKind),
    /// Admitted quotes could not be persisted; the collection is unchanged
    Storage,
}

impl std::fmt::Display for SyncErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncErrorKind::Transport(kind) => write!(f, "transport: {}", kind),
            SyncErrorKind::Storage => write!(f, "storage"),
        }
    }
}

/// Report of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncOutcome {
    pub admitted_count: usize,
    pub failed: bool,
    pub error_kind: Option<SyncErrorKind>,
    pub completed_at: DateTime<Utc>,
}

impl SyncOutcome {
    fn admitted(count: usize) -> Self {
        Self {
            admitted_count: count,
            failed: false,
            error_kind: None,
            completed_at: Utc::now(),
        }
    }

    fn failure(kind: SyncErrorKind) -> Self {
        Self {
            admitted_count: 0,
            failed: true,
            error_kind: Some(kind),
            completed_at: Utc::now(),
        }
    }

    /// Transient notification text, when the pass brought in anything.
    pub fn notification(&self) -> Option<String> {
        match self.admitted_count {
            0 => None,
            1 => Some("1 new quote synced from server".to_string()),
            n => Some(format!("{} new quotes synced from server", n)),
        }
    }
}

/// Result of adding a quote locally.
#[derive(Debug)]
pub struct AddOutcome {
    /// The quote as stored
    pub quote: Quote,
    /// Set when the best-effort remote submission failed
    pub submit_error: Option<TransportError>,
}

/// Runs reconciliation passes and the add-quote flow.
pub struct SyncEngine {
    store: SharedStore,
    remote: Arc<dyn RemoteSource>,
    config: SyncConfig,
}

impl SyncEngine {
    /// Create a new engine.
    pub fn new(store: SharedStore, remote: Arc<dyn RemoteSource>, config: SyncConfig) -> Self {
        Self {
            store,
            remote,
            config,
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Run one reconciliation pass.
    ///
    /// The store lock is held for the whole pass, so passes never interleave
    /// with each other or with other writers. A failed remote read returns
    /// before anything is merged. A pass that admits nothing does not write.
    pub async fn run_once(&self) -> SyncOutcome {
        let mut store = self.store.lock().await;
        debug!(
            "Starting reconciliation pass against {} ({} local quotes)",
            self.remote.name(),
            store.len()
        );

        let candidates = match self.bounded(self.remote.list_remote()).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("Remote read failed, skipping pass: {}", e);
                return SyncOutcome::failure(SyncErrorKind::Transport(e.kind()));
            }
        };

        let merge = reconcile(store.quotes(), &candidates);
        if !merge.changed {
            debug!("No new quotes among {} remote candidates", candidates.len());
            return SyncOutcome::admitted(0);
        }

        match store.append(merge.admitted) {
            Ok(count) => {
                info!("Reconciliation admitted {} new quotes", count);
                SyncOutcome::admitted(count)
            }
            Err(e) => {
                error!("Failed to persist admitted quotes: {}", e);
                SyncOutcome::failure(SyncErrorKind::Storage)
            }
        }
    }

    /// Add a quote locally, then submit it to the remote.
    ///
    /// The local append is persisted before the submission starts. A failed
    /// submission is reported in the outcome, never retried, and never undoes
    /// the append.
    pub async fn add_quote(&self, quote: Quote) -> QuoteResult<AddOutcome> {
        quote.validate()?;

        self.store.lock().await.append(vec![quote.clone()])?;
        info!("Added quote in category '{}'", quote.category);

        let submit_error = self.bounded(self.remote.submit_one(&quote)).await.err();
        if let Some(e) = &submit_error {
            warn!("Quote kept locally but remote submission failed: {}", e);
        }

        Ok(AddOutcome {
            quote,
            submit_error,
        })
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, TransportError>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        match tokio::time::timeout(self.config.remote_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout {
                timeout_ms: self.config.remote_timeout.as_millis() as u64,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{quote, MockRemote};
    use quotes_core::error::{QuoteError, ValidationError};
    use quotes_store::{MemorySlot, QuoteStore};

    fn engine_with(slot: MemorySlot, remote: Arc<MockRemote>) -> SyncEngine {
        let store = QuoteStore::open(Box::new(slot)).shared();
        SyncEngine::new(store, remote, SyncConfig::default())
    }

    #[tokio::test]
    async fn test_pass_admits_new_quotes_and_persists() {
        let slot = MemorySlot::with_contents(r#"[{"text": "A", "category": "X"}]"#);
        let remote = Arc::new(MockRemote::returning(vec![
            quote("A", "Server"),
            quote("B", "Server"),
        ]));
        let engine = engine_with(slot.clone(), remote);

        let outcome = engine.run_once().await;
        assert_eq!(outcome.admitted_count, 1);
        assert!(!outcome.failed);
        assert_eq!(outcome.error_kind, None);
        assert_eq!(
            QuoteStore::load(&slot),
            vec![quote("A", "X"), quote("B", "Server")]
        );
    }

    #[tokio::test]
    async fn test_failed_read_is_non_destructive() {
        let slot = MemorySlot::with_contents(r#"[{"text": "A", "category": "X"}]"#);
        let engine = engine_with(slot.clone(), Arc::new(MockRemote::failing()));
        let before = engine.store().lock().await.snapshot();

        let outcome = engine.run_once().await;
        assert!(outcome.failed);
        assert_eq!(
            outcome.error_kind,
            Some(SyncErrorKind::Transport(TransportErrorKind::Connection))
        );
        assert_eq!(engine.store().lock().await.snapshot(), before);
        assert_eq!(QuoteStore::load(&slot), before);
    }

    #[tokio::test]
    async fn test_unchanged_pass_does_not_write() {
        // Absent slot: the store holds the seed set in memory only
        let slot = MemorySlot::new();
        let seed = quotes_store::seed_quotes();
        let engine = engine_with(slot.clone(), Arc::new(MockRemote::returning(seed)));

        let outcome = engine.run_once().await;
        assert_eq!(outcome.admitted_count, 0);
        assert!(!outcome.failed);
        assert!(slot.contents().is_none());
    }

    #[tokio::test]
    async fn test_persist_failure_reported() {
        let slot = MemorySlot::with_contents("[]").failing_writes();
        let engine = engine_with(slot, Arc::new(MockRemote::returning(vec![quote("A", "Server")])));

        let outcome = engine.run_once().await;
        assert!(outcome.failed);
        assert_eq!(outcome.error_kind, Some(SyncErrorKind::Storage));
        assert!(engine.store().lock().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_remote_times_out() {
        let slot = MemorySlot::with_contents("[]");
        let engine = engine_with(slot, Arc::new(MockRemote::hanging()));

        let outcome = engine.run_once().await;
        assert_eq!(
            outcome.error_kind,
            Some(SyncErrorKind::Transport(TransportErrorKind::Timeout))
        );
    }

    #[tokio::test]
    async fn test_add_quote_submits_after_persisting() {
        let slot = MemorySlot::with_contents("[]");
        let remote = Arc::new(MockRemote::returning(Vec::new()));
        let engine = engine_with(slot.clone(), remote.clone());

        let outcome = engine.add_quote(quote("New", "Life")).await.unwrap();
        assert!(outcome.submit_error.is_none());
        assert_eq!(remote.submitted(), vec![quote("New", "Life")]);
        assert_eq!(QuoteStore::load(&slot), vec![quote("New", "Life")]);
    }

    #[tokio::test]
    async fn test_add_quote_survives_submit_failure() {
        let slot = MemorySlot::with_contents("[]");
        let engine = engine_with(slot.clone(), Arc::new(MockRemote::failing()));

        let outcome = engine.add_quote(quote("New", "Life")).await.unwrap();
        assert!(outcome.submit_error.is_some());
        assert_eq!(QuoteStore::load(&slot), vec![quote("New", "Life")]);
    }

    #[tokio::test]
    async fn test_add_quote_rejects_invalid() {
        let slot = MemorySlot::with_contents("[]");
        let remote = Arc::new(MockRemote::returning(Vec::new()));
        let engine = engine_with(slot.clone(), remote.clone());

        let invalid = Quote {
            text: "Text".to_string(),
            category: " ".to_string(),
        };
        let err = engine.add_quote(invalid).await.unwrap_err();
        assert!(matches!(err, QuoteError::Validation(ValidationError::EmptyCategory)));
        assert!(remote.submitted().is_empty());
        assert_eq!(slot.contents().as_deref(), Some("[]"));
    }

    #[test]
    fn test_notification_text() {
        assert_eq!(SyncOutcome::admitted(0).notification(), None);
        assert_eq!(
            SyncOutcome::admitted(1).notification().as_deref(),
            Some("1 new quote synced from server")
        );
        assert_eq!(
            SyncOutcome::admitted(3).notification().as_deref(),
            Some("3 new quotes synced from server")
        );
        assert_eq!(SyncOutcome::failure(SyncErrorKind::Storage).notification(), None);
    }
}
