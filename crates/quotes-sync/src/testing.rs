//! In-memory remote source for tests.

use async_trait::async_trait;
use quotes_core::error::TransportError;
use quotes_core::traits::RemoteSource;
use quotes_core::types::Quote;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::Notify;

pub(crate) fn quote(text: &str, category: &str) -> Quote {
    Quote::new(text, category).unwrap()
}

/// Blocks `list_remote` until released, announcing when it has been entered.
#[derive(Default)]
pub(crate) struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

pub(crate) struct MockRemote {
    quotes: Vec<Quote>,
    fail: bool,
    delay: Option<Duration>,
    pub gate: Option<Gate>,
    calls: AtomicUsize,
    submitted: Mutex<Vec<Quote>>,
}

impl MockRemote {
    pub fn returning(quotes: Vec<Quote>) -> Self {
        Self {
            quotes,
            fail: false,
            delay: None,
            gate: None,
            calls: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::returning(Vec::new())
        }
    }

    pub fn hanging() -> Self {
        Self::returning(Vec::new()).with_delay(Duration::from_secs(24 * 60 * 60))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Gate::default());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> Vec<Quote> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteSource for MockRemote {
    async fn list_remote(&self) -> Result<Vec<Quote>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(TransportError::Connection("mock remote offline".into()));
        }
        Ok(self.quotes.clone())
    }

    async fn submit_one(&self, quote: &Quote) -> Result<(), TransportError> {
        if self.fail {
            return Err(TransportError::Connection("mock remote offline".into()));
        }
        self.submitted.lock().unwrap().push(quote.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
